use std::fmt;
use std::time::Instant;

use rayon::prelude::*;
use voxset_grid::{Entry, Grid, Grid3, GridError};

use crate::block_types::block_names;
use crate::generation::TerrainBuilder;
use crate::worldgen::TerrainGenParams;

#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("invalid size {0:?}: no dimension may be less than 1")]
    InvalidSize(Vec<i64>),
    #[error("invalid value for property '{name}': {reason}")]
    InvalidProperty { name: String, reason: String },
    #[error("unknown property '{0}'")]
    UnknownProperty(String),
    #[error(transparent)]
    Grid(#[from] GridError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyKind {
    Int,
    Float,
    Size2,
    Size3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PropertyValue {
    Int(i64),
    Float(f64),
    Size2(i64, i64),
    Size3(i64, i64, i64),
}

impl PropertyValue {
    pub fn kind(&self) -> PropertyKind {
        match self {
            PropertyValue::Int(_) => PropertyKind::Int,
            PropertyValue::Float(_) => PropertyKind::Float,
            PropertyValue::Size2(..) => PropertyKind::Size2,
            PropertyValue::Size3(..) => PropertyKind::Size3,
        }
    }

    /// Parses `text` as a value of `kind`; sizes are written `64x64` or `8x8x8`.
    pub fn parse(kind: PropertyKind, text: &str) -> Option<PropertyValue> {
        let text = text.trim();
        let dims = || -> Option<Vec<i64>> {
            text.split(['x', 'X', ','])
                .map(|p| p.trim().parse::<i64>().ok())
                .collect()
        };
        match kind {
            PropertyKind::Int => text.parse().ok().map(PropertyValue::Int),
            PropertyKind::Float => text.parse().ok().map(PropertyValue::Float),
            PropertyKind::Size2 => match dims()?.as_slice() {
                [x, y] => Some(PropertyValue::Size2(*x, *y)),
                _ => None,
            },
            PropertyKind::Size3 => match dims()?.as_slice() {
                [x, y, z] => Some(PropertyValue::Size3(*x, *y, *z)),
                _ => None,
            },
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Int(v) => write!(f, "{v}"),
            PropertyValue::Float(v) => write!(f, "{v}"),
            PropertyValue::Size2(x, y) => write!(f, "{x}x{y}"),
            PropertyValue::Size3(x, y, z) => write!(f, "{x}x{y}x{z}"),
        }
    }
}

/// Editable generator property: accessors plus the validator every set goes through.
pub struct PropertyDescriptor<G> {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: PropertyKind,
    pub get: fn(&G) -> PropertyValue,
    pub set: fn(&mut G, PropertyValue),
    pub validate: fn(&PropertyValue) -> Result<(), String>,
}

pub trait Generator: Send + Sync {
    fn name(&self) -> &'static str;

    fn properties(&self) -> Vec<PropertyDescriptor<Self>>
    where
        Self: Sized;

    /// One entry. `None` draws a fresh seed.
    fn generate(&self, seed: Option<u64>) -> Result<Entry, GenError>;

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<(), GenError>
    where
        Self: Sized,
    {
        let props = self.properties();
        let Some(prop) = props.iter().find(|p| p.name == name) else {
            return Err(GenError::UnknownProperty(name.to_string()));
        };
        if value.kind() != prop.kind {
            return Err(GenError::InvalidProperty {
                name: name.to_string(),
                reason: format!("expected {:?}, got {:?}", prop.kind, value.kind()),
            });
        }
        (prop.validate)(&value).map_err(|reason| GenError::InvalidProperty {
            name: name.to_string(),
            reason,
        })?;
        (prop.set)(self, value);
        Ok(())
    }

    fn property_values(&self) -> Vec<(&'static str, PropertyValue)>
    where
        Self: Sized,
    {
        self.properties()
            .iter()
            .map(|p| (p.name, (p.get)(self)))
            .collect()
    }
}

fn validate_size(v: &PropertyValue) -> Result<(), String> {
    let ok = match *v {
        PropertyValue::Size2(x, y) => x >= 1 && y >= 1,
        PropertyValue::Size3(x, y, z) => x >= 1 && y >= 1 && z >= 1,
        _ => false,
    };
    if ok {
        Ok(())
    } else {
        Err("no dimension should be less than 1".to_string())
    }
}

fn validate_chance(v: &PropertyValue) -> Result<(), String> {
    match *v {
        PropertyValue::Float(p) if (0.0..=1.0).contains(&p) => Ok(()),
        _ => Err("chance must be within [0, 1]".to_string()),
    }
}

fn float_of(v: PropertyValue) -> f64 {
    match v {
        PropertyValue::Float(f) => f,
        PropertyValue::Int(i) => i as f64,
        _ => 0.0,
    }
}

/// `seed`, or a fresh one from OS entropy (logged so the run can be repeated).
pub fn draw_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        let s = rand::random::<u64>();
        log::info!("no seed given, drew seed={}", s);
        s
    })
}

/// Layered 2D side-view terrain.
#[derive(Clone, Debug, Default)]
pub struct TerrainGenerator {
    pub params: TerrainGenParams,
}

impl TerrainGenerator {
    pub fn new(params: TerrainGenParams) -> Self {
        Self { params }
    }

    pub fn with_size(width: usize, height: usize) -> Self {
        let mut params = TerrainGenParams::default();
        params.width = width;
        params.height = height;
        Self { params }
    }

    pub fn generate_seeded(&self, seed: u64) -> Result<Entry, GenError> {
        let (w, h) = (self.params.width, self.params.height);
        if w < 1 || h < 1 {
            return Err(GenError::InvalidSize(vec![w as i64, h as i64]));
        }
        let t0 = Instant::now();
        let (grid, tags, t) = TerrainBuilder::new(w, h, seed, &self.params).build();
        let entry = Entry::new("2D Terrain", tags, block_names(), Grid::D2(grid))?;
        log::info!(
            target: "perf",
            "ms soil={} ponds={} caves={} grass={} trees={} total={} terrain_gen w={} h={} seed={}",
            t.soil_ms,
            t.ponds_ms,
            t.caves_ms,
            t.grass_ms,
            t.trees_ms,
            t0.elapsed().as_millis(),
            w,
            h,
            seed
        );
        log::info!("generated terrain {}x{} seed={} tags=[{}]", w, h, seed, entry.tags.join(", "));
        Ok(entry)
    }
}

impl Generator for TerrainGenerator {
    fn name(&self) -> &'static str {
        "Simple 2D Terrain Generator"
    }

    fn properties(&self) -> Vec<PropertyDescriptor<Self>> {
        vec![
            PropertyDescriptor {
                name: "size",
                label: "Entry Size",
                kind: PropertyKind::Size2,
                get: |g| PropertyValue::Size2(g.params.width as i64, g.params.height as i64),
                set: |g, v| {
                    if let PropertyValue::Size2(x, y) = v {
                        g.params.width = x.max(0) as usize;
                        g.params.height = y.max(0) as usize;
                    }
                },
                validate: validate_size,
            },
            PropertyDescriptor {
                name: "pond_chance",
                label: "Pond Chance",
                kind: PropertyKind::Float,
                get: |g| PropertyValue::Float(g.params.pond_chance),
                set: |g, v| g.params.pond_chance = float_of(v),
                validate: validate_chance,
            },
            PropertyDescriptor {
                name: "cave_chance",
                label: "Cave Chance",
                kind: PropertyKind::Float,
                get: |g| PropertyValue::Float(g.params.cave_chance),
                set: |g, v| g.params.cave_chance = float_of(v),
                validate: validate_chance,
            },
            PropertyDescriptor {
                name: "tree_chance",
                label: "Tree Chance",
                kind: PropertyKind::Float,
                get: |g| PropertyValue::Float(g.params.tree_chance),
                set: |g, v| g.params.tree_chance = float_of(v),
                validate: validate_chance,
            },
        ]
    }

    fn generate(&self, seed: Option<u64>) -> Result<Entry, GenError> {
        self.generate_seeded(draw_seed(seed))
    }
}

/// All-empty 3D entry.
#[derive(Clone, Debug)]
pub struct EmptyGenerator3D {
    pub size: (usize, usize, usize),
}

impl Default for EmptyGenerator3D {
    fn default() -> Self {
        Self { size: (16, 16, 16) }
    }
}

impl Generator for EmptyGenerator3D {
    fn name(&self) -> &'static str {
        "Empty Terrain Generator"
    }

    fn properties(&self) -> Vec<PropertyDescriptor<Self>> {
        vec![PropertyDescriptor {
            name: "size",
            label: "Entry Size",
            kind: PropertyKind::Size3,
            get: |g| PropertyValue::Size3(g.size.0 as i64, g.size.1 as i64, g.size.2 as i64),
            set: |g, v| {
                if let PropertyValue::Size3(x, y, z) = v {
                    g.size = (x.max(0) as usize, y.max(0) as usize, z.max(0) as usize);
                }
            },
            validate: validate_size,
        }]
    }

    fn generate(&self, _seed: Option<u64>) -> Result<Entry, GenError> {
        let (x, y, z) = self.size;
        if x < 1 || y < 1 || z < 1 {
            return Err(GenError::InvalidSize(vec![x as i64, y as i64, z as i64]));
        }
        let entry = Entry::new(
            "EmptyTerrain",
            vec!["empty-terrain".to_string()],
            block_names(),
            Grid::D3(Grid3::empty(x, y, z)),
        )?;
        Ok(entry)
    }
}

/// Runs `count` generations in parallel. Generation `i` is seeded with
/// `base_seed + i`; results come back in index order.
pub fn generate_batch<G: Generator>(
    generator: &G,
    count: usize,
    base_seed: u64,
) -> Result<Vec<Entry>, GenError> {
    let t0 = Instant::now();
    let out: Result<Vec<Entry>, GenError> = (0..count)
        .into_par_iter()
        .map(|i| generator.generate(Some(base_seed.wrapping_add(i as u64))))
        .collect();
    log::info!(
        target: "perf",
        "ms={} generate_batch generator=\"{}\" count={} base_seed={}",
        t0.elapsed().as_millis(),
        generator.name(),
        count,
        base_seed
    );
    out
}
