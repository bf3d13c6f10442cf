use crate::validate::ValidationError;

pub type BlockId = u32;

#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("expected a {expected}D grid, found a {found}D grid")]
    WrongVariant { expected: usize, found: usize },
    #[error("block buffer holds {actual} cells but the size implies {expected}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("invalid entry: {0}")]
    Invalid(#[from] ValidationError),
}

/// Dense 2D block grid, row-major with `y` fastest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid2 {
    pub sx: usize,
    pub sy: usize,
    pub blocks: Vec<BlockId>,
}

impl Grid2 {
    /// All cells set to block 0.
    pub fn empty(sx: usize, sy: usize) -> Self {
        Self {
            sx,
            sy,
            blocks: vec![0; sx * sy],
        }
    }

    pub fn from_blocks(sx: usize, sy: usize, blocks: Vec<BlockId>) -> Result<Self, GridError> {
        let expected = sx * sy;
        if blocks.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                actual: blocks.len(),
            });
        }
        Ok(Self { sx, sy, blocks })
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        x * self.sy + y
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.sx && (y as usize) < self.sy
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> BlockId {
        self.blocks[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, id: BlockId) {
        let i = self.idx(x, y);
        self.blocks[i] = id;
    }

    #[inline]
    pub fn block_or_nothing(&self, x: i32, y: i32) -> Option<BlockId> {
        if !self.contains(x, y) {
            return None;
        }
        Some(self.get(x as usize, y as usize))
    }
}

/// Dense 3D block grid, row-major with `z` fastest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid3 {
    pub sx: usize,
    pub sy: usize,
    pub sz: usize,
    pub blocks: Vec<BlockId>,
}

impl Grid3 {
    pub fn empty(sx: usize, sy: usize, sz: usize) -> Self {
        Self {
            sx,
            sy,
            sz,
            blocks: vec![0; sx * sy * sz],
        }
    }

    pub fn from_blocks(
        sx: usize,
        sy: usize,
        sz: usize,
        blocks: Vec<BlockId>,
    ) -> Result<Self, GridError> {
        let expected = sx * sy * sz;
        if blocks.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                actual: blocks.len(),
            });
        }
        Ok(Self { sx, sy, sz, blocks })
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        (x * self.sy + y) * self.sz + z
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as usize) < self.sx
            && (y as usize) < self.sy
            && (z as usize) < self.sz
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> BlockId {
        self.blocks[self.idx(x, y, z)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, id: BlockId) {
        let i = self.idx(x, y, z);
        self.blocks[i] = id;
    }

    #[inline]
    pub fn block_or_nothing(&self, x: i32, y: i32, z: i32) -> Option<BlockId> {
        if !self.contains(x, y, z) {
            return None;
        }
        Some(self.get(x as usize, y as usize, z as usize))
    }
}

/// A 2D or 3D grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Grid {
    D2(Grid2),
    D3(Grid3),
}

impl Grid {
    #[inline]
    pub fn rank(&self) -> usize {
        match self {
            Grid::D2(_) => 2,
            Grid::D3(_) => 3,
        }
    }

    pub fn dimensions(&self) -> Vec<usize> {
        match self {
            Grid::D2(g) => vec![g.sx, g.sy],
            Grid::D3(g) => vec![g.sx, g.sy, g.sz],
        }
    }

    #[inline]
    pub fn blocks(&self) -> &[BlockId] {
        match self {
            Grid::D2(g) => &g.blocks,
            Grid::D3(g) => &g.blocks,
        }
    }

    #[inline]
    pub fn is_2d(&self) -> bool {
        matches!(self, Grid::D2(_))
    }

    #[inline]
    pub fn is_3d(&self) -> bool {
        matches!(self, Grid::D3(_))
    }

    pub fn as_2d(&self) -> Result<&Grid2, GridError> {
        match self {
            Grid::D2(g) => Ok(g),
            other => Err(GridError::WrongVariant {
                expected: 2,
                found: other.rank(),
            }),
        }
    }

    pub fn as_3d(&self) -> Result<&Grid3, GridError> {
        match self {
            Grid::D3(g) => Ok(g),
            other => Err(GridError::WrongVariant {
                expected: 3,
                found: other.rank(),
            }),
        }
    }
}

impl From<Grid2> for Grid {
    fn from(g: Grid2) -> Self {
        Grid::D2(g)
    }
}

impl From<Grid3> for Grid {
    fn from(g: Grid3) -> Self {
        Grid::D3(g)
    }
}
