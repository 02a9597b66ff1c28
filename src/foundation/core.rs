use serde::{Deserialize, Serialize};

pub use kurbo::{BezPath, Point, Rect};

/// Opaque color token (`"#ff3366"`, `"steelblue"`, ...). Never parsed, only passed through.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorToken(pub String);

impl ColorToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColorToken {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl std::fmt::Display for ColorToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fill color of a species band plus the color its label is drawn with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ColorPair {
    pub fill: ColorToken,
    pub text: ColorToken,
}

impl ColorPair {
    pub fn new(fill: impl Into<ColorToken>, text: impl Into<ColorToken>) -> Self {
        Self {
            fill: fill.into(),
            text: text.into(),
        }
    }
}

impl<'de> Deserialize<'de> for ColorPair {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Obj { fill: ColorToken, text: ColorToken },
            Arr(Vec<ColorToken>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Obj { fill, text } => Ok(Self { fill, text }),
            Repr::Arr(mut v) => {
                if v.len() != 2 {
                    return Err(serde::de::Error::custom(
                        "color pair array must have len 2 ([fill, text])",
                    ));
                }
                let text = v.pop();
                let fill = v.pop();
                match (fill, text) {
                    (Some(fill), Some(text)) => Ok(Self { fill, text }),
                    _ => Err(serde::de::Error::custom("color pair array is incomplete")),
                }
            }
        }
    }
}

/// Font used for species labels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelFont {
    pub family: String,
    pub size: f64,
}

impl Default for LabelFont {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_owned(),
            size: 15.0,
        }
    }
}

/// Extent of the drawing surface a scene occupies.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
