use super::*;
use crate::{
    foundation::error::TrophicError,
    network::config::NetworkConfig,
    network::model::{Level, Network},
    scene::assemble::assemble_network,
};

fn scene() -> Scene {
    let network = Network::new(vec![
        Level::new(vec![0.5, 0.5]).with_labels(["a", "b"]),
        Level::new(vec![1.0]).with_occupation(vec![vec![0.4, 0.6]]),
    ]);
    assemble_network(&network, &NetworkConfig::default()).unwrap()
}

#[derive(Default)]
struct MockSink {
    calls: Vec<String>,
    fail_on_text: bool,
}

impl SceneSink for MockSink {
    fn begin(&mut self, width: f64, height: f64, font: &LabelFont) -> TrophicResult<()> {
        self.calls
            .push(format!("begin {width}x{height} {}", font.family));
        Ok(())
    }

    fn fill_polygon(&mut self, _path: &BezPath, color: &ColorToken) -> TrophicResult<()> {
        self.calls.push(format!("polygon {color}"));
        Ok(())
    }

    fn fill_rect(&mut self, _rect: Rect, color: &ColorToken) -> TrophicResult<()> {
        self.calls.push(format!("rect {color}"));
        Ok(())
    }

    fn text(&mut self, text: &str, _anchor: Point, _color: &ColorToken) -> TrophicResult<()> {
        if self.fail_on_text {
            return Err(TrophicError::Other(anyhow::anyhow!("surface closed")));
        }
        self.calls.push(format!("text {text}"));
        Ok(())
    }

    fn finish(&mut self) -> TrophicResult<()> {
        self.calls.push("finish".to_string());
        Ok(())
    }
}

#[test]
fn ops_are_in_painter_order() {
    let ops = compile_ops(&scene());
    assert_eq!(ops.len(), 2 + 3 + 3);
    assert!(matches!(ops[0], DrawOp::FillPolygon { .. }));
    assert!(matches!(ops[1], DrawOp::FillPolygon { .. }));
    assert!(ops[2..5].iter().all(|op| matches!(op, DrawOp::FillRect { .. })));
    assert!(ops[5..].iter().all(|op| matches!(op, DrawOp::Text { .. })));
}

#[test]
fn draw_scene_replays_every_op_sequentially() {
    let mut sink = MockSink::default();
    draw_scene(&mut sink, &scene()).unwrap();
    assert_eq!(
        sink.calls,
        vec![
            "begin 500x210 sans-serif",
            "polygon black",
            "polygon black",
            "rect black",
            "rect black",
            "rect black",
            "text a",
            "text b",
            "text 3",
            "finish",
        ]
    );
}

#[test]
fn sink_errors_stop_the_replay() {
    let mut sink = MockSink {
        fail_on_text: true,
        ..MockSink::default()
    };
    let err = draw_scene(&mut sink, &scene()).unwrap_err();
    assert!(err.to_string().contains("surface closed"));
    assert!(!sink.calls.iter().any(|c| c == "finish"));
}

#[test]
fn display_is_one_line_per_op() {
    for op in compile_ops(&scene()) {
        let line = op.to_string();
        assert!(!line.contains('\n'));
    }
    let ops = compile_ops(&scene());
    assert_eq!(ops[2].to_string(), "rect black x=0.00 y=0.00 w=250.00 h=30.00");
    assert_eq!(ops[5].to_string(), "text white (125.00, 15.00) \"a\"");
}
