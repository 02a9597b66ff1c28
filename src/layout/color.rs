use crate::foundation::core::ColorPair;

/// Colors for species `index` of a level. Indices wrap around the list, so a level with more
/// species than colors still renders deterministically. An empty list yields `default`.
pub fn resolve_colors<'a>(
    colors: &'a [ColorPair],
    index: usize,
    default: &'a ColorPair,
) -> &'a ColorPair {
    if colors.is_empty() {
        return default;
    }
    &colors[index % colors.len()]
}

/// A level's color list bound to the fallback pair.
#[derive(Clone, Copy, Debug)]
pub struct Palette<'a> {
    colors: &'a [ColorPair],
    default: &'a ColorPair,
}

impl<'a> Palette<'a> {
    pub fn new(colors: &'a [ColorPair], default: &'a ColorPair) -> Self {
        Self { colors, default }
    }

    pub fn resolve(&self, index: usize) -> &'a ColorPair {
        resolve_colors(self.colors, index, self.default)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/color.rs"]
mod tests;
