use crate::color::Rgba;
use crate::palette::Palette;

/// Palette resolved against one entry's block names, indexed by block id.
#[derive(Clone, Debug)]
pub struct EntryPalette {
    colors: Vec<Rgba>,
}

impl EntryPalette {
    pub fn new<S: AsRef<str>>(palette: &Palette, block_names: &[S]) -> Self {
        let mut missing: Vec<&str> = Vec::new();
        let colors = block_names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                palette.get(name).unwrap_or_else(|| {
                    missing.push(name);
                    Rgba::MISSING
                })
            })
            .collect();
        if !missing.is_empty() {
            log::warn!(
                "palette has no color for {} block name(s): {}",
                missing.len(),
                missing.join(", ")
            );
        }
        Self { colors }
    }

    /// Color for `id`; ids past the name table fall back to the sentinel.
    #[inline]
    pub fn color_for(&self, id: u32) -> Rgba {
        self.colors
            .get(id as usize)
            .copied()
            .unwrap_or(Rgba::MISSING)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
