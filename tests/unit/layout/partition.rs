use super::*;

const EPS: f64 = 1e-9;

fn strip(total_width: f64, separator_width: f64) -> Strip {
    Strip {
        top: 10.0,
        height: 30.0,
        total_width,
        separator_width,
    }
}

#[test]
fn single_species_spans_the_full_width() {
    let rects = partition(&[1.0], strip(500.0, 5.0));
    assert_eq!(rects.len(), 1);
    assert_eq!(rects[0].left(), 0.0);
    assert_eq!(rects[0].width, 500.0);
    assert_eq!(rects[0].top(), 10.0);
    assert_eq!(rects[0].bottom(), 40.0);
}

#[test]
fn later_bands_are_indented_by_one_separator() {
    let rects = partition(&[0.6, 0.4], strip(500.0, 5.0));
    assert_eq!(rects[0].left(), 0.0);
    assert!((rects[0].width - 300.0).abs() < EPS);
    assert!((rects[1].left() - 305.0).abs() < EPS);
    assert!((rects[1].width - 195.0).abs() < EPS);
    assert!((rects[1].right() - 500.0).abs() < EPS);
}

#[test]
fn widths_plus_separators_reconstruct_the_canvas() {
    let pops = [0.1, 0.25, 0.05, 0.35, 0.25];
    let rects = partition(&pops, strip(640.0, 3.0));
    let total: f64 = rects.iter().map(|r| r.width).sum::<f64>() + 3.0 * (pops.len() - 1) as f64;
    assert!((total - 640.0).abs() < EPS);

    for (i, (r, p)) in rects.iter().zip(pops).enumerate() {
        let sep = if i == 0 { 0.0 } else { 3.0 };
        assert!(((r.width + sep) / 640.0 - p).abs() < EPS);
    }
    for pair in rects.windows(2) {
        assert!((pair[1].left() - pair[0].right() - 3.0).abs() < EPS);
    }
}

#[test]
fn tiny_population_yields_degenerate_band() {
    let rects = partition(&[0.99, 0.01], strip(100.0, 5.0));
    assert!(rects[1].is_degenerate());
    assert!((rects[1].width - (-4.0)).abs() < EPS);
    assert_eq!(rects[1].to_rect().width(), 0.0);
}

#[test]
fn partition_is_pure() {
    let pops = [0.2, 0.3, 0.5];
    assert_eq!(partition(&pops, strip(500.0, 5.0)), partition(&pops, strip(500.0, 5.0)));
}

#[test]
fn edge_midpoints_and_center() {
    let rects = partition(&[0.5, 0.5], strip(200.0, 0.0));
    let r = rects[1];
    assert_eq!(r.edge_midpoint(Edge::Top), Point::new(150.0, 10.0));
    assert_eq!(r.edge_midpoint(Edge::Bottom), Point::new(150.0, 40.0));
    assert_eq!(r.center(), Point::new(150.0, 25.0));
    assert_eq!(r.height(), 30.0);
    assert_eq!(r.to_rect(), Rect::new(100.0, 10.0, 200.0, 40.0));
}
