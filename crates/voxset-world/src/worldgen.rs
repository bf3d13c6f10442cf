use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TerrainGenConfig {
    #[serde(default)]
    pub terrain: Terrain,
    #[serde(default)]
    pub ponds: Ponds,
    #[serde(default)]
    pub caves: Caves,
    #[serde(default)]
    pub trees: Trees,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Terrain {
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
    #[serde(default = "default_min_soil_ratio")]
    pub min_soil_ratio: f64,
    #[serde(default = "default_max_soil_ratio")]
    pub max_soil_ratio: f64,
    #[serde(default = "default_stone_drop")]
    pub stone_drop: f64,
    #[serde(default = "default_soil_depth")]
    pub soil_depth: f64,
    #[serde(default = "default_frequencies")]
    pub frequencies: Frequencies,
}
#[derive(Clone, Debug, Deserialize)]
pub struct Frequencies {
    pub low: f64,
    pub high: f64,
    pub mid: f64,
}
fn default_width() -> usize {
    64
}
fn default_height() -> usize {
    64
}
fn default_min_soil_ratio() -> f64 {
    0.2
}
fn default_max_soil_ratio() -> f64 {
    0.8
}
fn default_stone_drop() -> f64 {
    5.0
}
fn default_soil_depth() -> f64 {
    5.0
}
fn default_frequencies() -> Frequencies {
    Frequencies {
        low: 0.05,
        high: 0.10,
        mid: 0.075,
    }
}
impl Default for Terrain {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            min_soil_ratio: default_min_soil_ratio(),
            max_soil_ratio: default_max_soil_ratio(),
            stone_drop: default_stone_drop(),
            soil_depth: default_soil_depth(),
            frequencies: default_frequencies(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Ponds {
    #[serde(default = "default_pond_chance")]
    pub chance: f64,
    #[serde(default = "default_pond_volume_factor")]
    pub volume_factor: f64,
    #[serde(default = "default_pond_volume_mult")]
    pub volume_mult: [u32; 2],
}
fn default_pond_chance() -> f64 {
    0.6
}
fn default_pond_volume_factor() -> f64 {
    0.25
}
fn default_pond_volume_mult() -> [u32; 2] {
    [3, 6]
}
impl Default for Ponds {
    fn default() -> Self {
        Self {
            chance: default_pond_chance(),
            volume_factor: default_pond_volume_factor(),
            volume_mult: default_pond_volume_mult(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Caves {
    #[serde(default = "default_cave_chance")]
    pub chance: f64,
    #[serde(default = "default_cave_frequency")]
    pub frequency: f64,
    #[serde(default = "default_cave_octaves")]
    pub octaves: u32,
    #[serde(default = "default_cave_persistence")]
    pub persistence: f64,
    #[serde(default = "default_cave_lacunarity")]
    pub lacunarity: f64,
    #[serde(default = "default_cave_threshold")]
    pub threshold: f64,
}
fn default_cave_chance() -> f64 {
    0.7
}
fn default_cave_frequency() -> f64 {
    0.1
}
fn default_cave_octaves() -> u32 {
    4
}
fn default_cave_persistence() -> f64 {
    0.6
}
fn default_cave_lacunarity() -> f64 {
    0.7
}
fn default_cave_threshold() -> f64 {
    0.92
}
impl Default for Caves {
    fn default() -> Self {
        Self {
            chance: default_cave_chance(),
            frequency: default_cave_frequency(),
            octaves: default_cave_octaves(),
            persistence: default_cave_persistence(),
            lacunarity: default_cave_lacunarity(),
            threshold: default_cave_threshold(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Trees {
    #[serde(default = "default_tree_chance")]
    pub chance: f64,
    #[serde(default = "default_trunk_min")]
    pub trunk_min: i32,
    #[serde(default = "default_trunk_max")]
    pub trunk_max: i32,
}
fn default_tree_chance() -> f64 {
    0.7
}
fn default_trunk_min() -> i32 {
    2
}
fn default_trunk_max() -> i32 {
    12
}
impl Default for Trees {
    fn default() -> Self {
        Self {
            chance: default_tree_chance(),
            trunk_min: default_trunk_min(),
            trunk_max: default_trunk_max(),
        }
    }
}

/// Flat view of [`TerrainGenConfig`] consumed by the generation stages.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainGenParams {
    pub width: usize,
    pub height: usize,
    pub min_soil_ratio: f64,
    pub max_soil_ratio: f64,
    pub stone_drop: f64,
    pub soil_depth: f64,
    pub freq_low: f64,
    pub freq_high: f64,
    pub freq_mid: f64,
    pub pond_chance: f64,
    pub pond_volume_factor: f64,
    pub pond_volume_mult_min: u32,
    pub pond_volume_mult_max: u32,
    pub cave_chance: f64,
    pub cave_frequency: f64,
    pub cave_octaves: u32,
    pub cave_persistence: f64,
    pub cave_lacunarity: f64,
    pub cave_threshold: f64,
    pub tree_chance: f64,
    pub trunk_min: i32,
    pub trunk_max: i32,
}

impl TerrainGenParams {
    pub fn from_config(cfg: &TerrainGenConfig) -> Self {
        Self {
            width: cfg.terrain.width,
            height: cfg.terrain.height,
            min_soil_ratio: cfg.terrain.min_soil_ratio,
            max_soil_ratio: cfg.terrain.max_soil_ratio,
            stone_drop: cfg.terrain.stone_drop,
            soil_depth: cfg.terrain.soil_depth,
            freq_low: cfg.terrain.frequencies.low,
            freq_high: cfg.terrain.frequencies.high,
            freq_mid: cfg.terrain.frequencies.mid,
            pond_chance: cfg.ponds.chance.clamp(0.0, 1.0),
            pond_volume_factor: cfg.ponds.volume_factor,
            pond_volume_mult_min: cfg.ponds.volume_mult[0],
            pond_volume_mult_max: cfg.ponds.volume_mult[1],
            cave_chance: cfg.caves.chance.clamp(0.0, 1.0),
            cave_frequency: cfg.caves.frequency,
            cave_octaves: cfg.caves.octaves,
            cave_persistence: cfg.caves.persistence,
            cave_lacunarity: cfg.caves.lacunarity,
            cave_threshold: cfg.caves.threshold,
            tree_chance: cfg.trees.chance.clamp(0.0, 1.0),
            trunk_min: cfg.trees.trunk_min,
            trunk_max: cfg.trees.trunk_max,
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: TerrainGenConfig = toml::from_str(s)?;
        Ok(Self::from_config(&cfg))
    }
}

impl Default for TerrainGenParams {
    fn default() -> Self {
        Self::from_config(&TerrainGenConfig::default())
    }
}

pub fn load_params_from_path(path: &Path) -> Result<TerrainGenParams, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    TerrainGenParams::from_toml_str(&s)
}
