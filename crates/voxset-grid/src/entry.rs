use crate::dto::EntryDto;
use crate::grid::{BlockId, Grid, Grid2, Grid3, GridError};
use crate::validate::{ValidationError, validate};

/// A named, tagged grid with its block-name table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub friendly_name: String,
    pub tags: Vec<String>,
    pub block_names: Vec<String>,
    pub grid: Grid,
}

impl Entry {
    /// Builds an entry, rejecting block ids outside the name table.
    pub fn new(
        friendly_name: impl Into<String>,
        tags: Vec<String>,
        block_names: Vec<String>,
        grid: Grid,
    ) -> Result<Self, GridError> {
        let names = block_names.len();
        if let Some((index, &id)) = grid
            .blocks()
            .iter()
            .enumerate()
            .find(|(_, id)| **id as usize >= names)
        {
            return Err(GridError::Invalid(ValidationError::BlockIdOutOfRange {
                index,
                id: i64::from(id),
                names,
            }));
        }
        Ok(Self {
            friendly_name: friendly_name.into(),
            tags,
            block_names,
            grid,
        })
    }

    pub fn from_dto(dto: &EntryDto) -> Result<Self, GridError> {
        if let Err(e) = validate(&dto.dimensions, &dto.blocks, &dto.block_names).into_result() {
            log::warn!("rejected entry '{}': {}", dto.friendly_name, e);
            return Err(e.into());
        }
        // Validated: every id is in 0..names and every dimension is >= 1.
        let blocks: Vec<BlockId> = dto.blocks.iter().map(|&b| b as BlockId).collect();
        let dims: Vec<usize> = dto.dimensions.iter().map(|&d| d as usize).collect();
        let grid = match dims.as_slice() {
            [sx, sy] => Grid::D2(Grid2::from_blocks(*sx, *sy, blocks)?),
            [sx, sy, sz] => Grid::D3(Grid3::from_blocks(*sx, *sy, *sz, blocks)?),
            other => return Err(ValidationError::DimensionCount(other.len()).into()),
        };
        Ok(Self {
            friendly_name: dto.friendly_name.clone(),
            tags: dto.tags.clone(),
            block_names: dto.block_names.clone(),
            grid,
        })
    }

    pub fn to_dto(&self) -> EntryDto {
        EntryDto {
            friendly_name: self.friendly_name.clone(),
            tags: self.tags.clone(),
            dimensions: self.grid.dimensions().iter().map(|&d| d as i64).collect(),
            block_names: self.block_names.clone(),
            blocks: self.grid.blocks().iter().map(|&b| i64::from(b)).collect(),
        }
    }

    /// Index of `name` in the block table.
    pub fn block_id(&self, name: &str) -> Option<BlockId> {
        self.block_names
            .iter()
            .position(|n| n == name)
            .map(|i| i as BlockId)
    }
}
