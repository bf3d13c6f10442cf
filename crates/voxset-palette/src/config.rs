use std::collections::HashMap;

use serde::Deserialize;

// --- Config ---

#[derive(Deserialize)]
pub struct PaletteConfig {
    #[serde(default)]
    pub colors: HashMap<String, ColorEntry>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ColorEntry {
    // glass = [178, 178, 178, 128]
    Rgba([u8; 4]),
    // stone = [128, 128, 128]
    Rgb([u8; 3]),
    // water = "#3060C0A0"
    Hex(String),
}
