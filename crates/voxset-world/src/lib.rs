//! Procedural entry generators.
#![forbid(unsafe_code)]

pub mod block_types;
pub mod generation;
pub mod generator;
pub mod noise;
pub mod worldgen;

pub use block_types::{BlockType, block_names};
pub use generation::{StageTimings, TerrainBuilder};
pub use generator::{
    EmptyGenerator3D, GenError, Generator, PropertyDescriptor, PropertyKind, PropertyValue,
    TerrainGenerator, draw_seed, generate_batch,
};
pub use worldgen::{TerrainGenConfig, TerrainGenParams, load_params_from_path};

use voxset_grid::Entry;

/// One terrain entry of `size` cells with default parameters.
pub fn generate_terrain(size: (i64, i64), seed: Option<u64>) -> Result<Entry, GenError> {
    let (w, h) = size;
    if w < 1 || h < 1 {
        return Err(GenError::InvalidSize(vec![w, h]));
    }
    TerrainGenerator::with_size(w as usize, h as usize).generate(seed)
}
