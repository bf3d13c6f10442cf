//! Sequential 2D terrain pipeline: soil and stone, ponds, caves, grass, trees.
mod caves;
mod grass;
mod ponds;
mod soil;
mod trees;

use std::time::Instant;

use fastnoise_lite::FastNoiseLite;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use voxset_grid::{BlockId, Grid2};

use crate::block_types::BlockType;
use crate::noise::{fbm, make_noise, to01};
use crate::worldgen::TerrainGenParams;

use self::caves::apply_caves;
use self::grass::grow_grass;
use self::ponds::spawn_ponds;
use self::soil::apply_soil_and_stone;
use self::trees::plant_trees;

/// Per-stage wall time of one terrain build.
#[derive(Clone, Copy, Debug, Default)]
pub struct StageTimings {
    pub soil_ms: u32,
    pub ponds_ms: u32,
    pub caves_ms: u32,
    pub grass_ms: u32,
    pub trees_ms: u32,
}

/// Mutable state of one terrain build. Owns its RNG, noise and buffer.
pub struct TerrainBuilder<'p> {
    pub(crate) grid: Grid2,
    pub(crate) tags: Vec<String>,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) noise: FastNoiseLite,
    pub(crate) params: &'p TerrainGenParams,
    pub(crate) offset: (f64, f64),
    pub(crate) frequency: f64,
}

impl<'p> TerrainBuilder<'p> {
    pub fn new(width: usize, height: usize, seed: u64, params: &'p TerrainGenParams) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let noise = make_noise(rng.r#gen::<i32>());
        let offset = (rng.r#gen::<f64>() * 100.0, rng.r#gen::<f64>() * 100.0);
        let mut tags = Vec::new();
        let frequency = match rng.gen_range(0..3) {
            0 => {
                tags.push("terrain-freq-low".to_string());
                params.freq_low
            }
            1 => {
                tags.push("terrain-freq-high".to_string());
                params.freq_high
            }
            _ => {
                tags.push("terrain-freq-mid".to_string());
                params.freq_mid
            }
        };
        Self {
            grid: Grid2::empty(width, height),
            tags,
            rng,
            noise,
            params,
            offset,
            frequency,
        }
    }

    /// Runs every stage in order and hands back the buffer and tags.
    pub fn build(mut self) -> (Grid2, Vec<String>, StageTimings) {
        let mut t = StageTimings::default();

        let start = Instant::now();
        apply_soil_and_stone(&mut self);
        t.soil_ms = start.elapsed().as_millis() as u32;

        let start = Instant::now();
        if self.roll(self.params.pond_chance) {
            spawn_ponds(&mut self);
        }
        t.ponds_ms = start.elapsed().as_millis() as u32;

        let start = Instant::now();
        if self.roll(self.params.cave_chance) {
            self.tags.push("caves".to_string());
            apply_caves(&mut self);
        }
        t.caves_ms = start.elapsed().as_millis() as u32;

        let start = Instant::now();
        grow_grass(&mut self);
        t.grass_ms = start.elapsed().as_millis() as u32;

        let start = Instant::now();
        if self.roll(self.params.tree_chance) {
            plant_trees(&mut self);
        }
        t.trees_ms = start.elapsed().as_millis() as u32;

        (self.grid, self.tags, t)
    }

    #[inline]
    pub(crate) fn width(&self) -> i32 {
        self.grid.sx as i32
    }

    #[inline]
    pub(crate) fn height(&self) -> i32 {
        self.grid.sy as i32
    }

    #[inline]
    pub(crate) fn get(&self, x: i32, y: i32) -> Option<BlockId> {
        self.grid.block_or_nothing(x, y)
    }

    #[inline]
    pub(crate) fn is(&self, x: i32, y: i32, block: BlockType) -> bool {
        self.get(x, y) == Some(block.id())
    }

    /// Writes `block` at `(x, y)` if inside the grid (and, when asked, only
    /// into an empty cell). Returns whether the write happened.
    pub(crate) fn update_or_ignore(
        &mut self,
        block: BlockType,
        x: i32,
        y: i32,
        only_if_empty: bool,
    ) -> bool {
        let Some(current) = self.get(x, y) else {
            return false;
        };
        if only_if_empty && current != BlockType::Empty.id() {
            return false;
        }
        self.grid.set(x as usize, y as usize, block.id());
        true
    }

    /// Uniform draw from `[lo, hi)`; an empty range yields `lo`.
    #[inline]
    pub(crate) fn range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..hi)
    }

    #[inline]
    fn roll(&mut self, chance: f64) -> bool {
        self.rng.r#gen::<f64>() < chance
    }

    fn min_soil(&self) -> f64 {
        self.grid.sy as f64 * self.params.min_soil_ratio
    }

    fn max_soil(&self) -> f64 {
        self.grid.sy as f64 * self.params.max_soil_ratio
    }

    pub(crate) fn soil_height(&self, x: i32) -> f64 {
        let (lo, hi) = (self.min_soil(), self.max_soil());
        let v = fbm(
            &self.noise,
            f64::from(x) + self.offset.0,
            0.0,
            self.frequency,
            4,
            0.5,
            0.5,
        );
        to01(v) * (hi - lo) + lo
    }

    pub(crate) fn stone_height(&self, x: i32) -> f64 {
        let (lo, hi) = (self.min_soil(), self.max_soil());
        let v = fbm(
            &self.noise,
            f64::from(x) + self.offset.0,
            0.0,
            self.frequency,
            7,
            0.5,
            0.6,
        );
        to01(v) * (hi - lo) + lo - self.params.stone_drop
    }
}
