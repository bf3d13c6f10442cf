use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::color::Rgba;
use crate::config::{ColorEntry, PaletteConfig};

#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    #[error("invalid hex color '{0}', expected #RRGGBB or #RRGGBBAA")]
    BadHex(String),
}

/// Immutable block-name to color mapping.
///
/// Lookups never fail: a name with no mapping resolves to [`Rgba::MISSING`].
#[derive(Default, Clone, Debug)]
pub struct Palette {
    colors: HashMap<String, Rgba>,
}

impl Palette {
    pub fn new() -> Self {
        Self {
            colors: HashMap::new(),
        }
    }

    pub fn from_pairs<S: Into<String>>(pairs: impl IntoIterator<Item = (S, Rgba)>) -> Self {
        Self {
            colors: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    #[inline]
    pub fn color(&self, name: &str) -> Rgba {
        self.colors.get(name).copied().unwrap_or(Rgba::MISSING)
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<Rgba> {
        self.colors.get(name).copied()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.colors.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.colors.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: PaletteConfig = toml::from_str(toml_str)?;
        let mut colors = HashMap::with_capacity(cfg.colors.len());
        for (name, entry) in cfg.colors {
            let rgba = match entry {
                ColorEntry::Rgba(v) => Rgba::from(v),
                ColorEntry::Rgb(v) => Rgba::from(v),
                ColorEntry::Hex(s) => s.parse::<Rgba>()?,
            };
            colors.insert(name, rgba);
        }
        Ok(Self { colors })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}
