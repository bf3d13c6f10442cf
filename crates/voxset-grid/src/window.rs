use crate::grid::Grid3;

/// Half-open integer box limiting which cells of a 3D grid are meshed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VisualizationWindow {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
    pub min_z: i32,
    pub max_z: i32,
}

impl VisualizationWindow {
    pub fn new(min: (i32, i32, i32), max: (i32, i32, i32)) -> Self {
        Self {
            min_x: min.0,
            max_x: max.0,
            min_y: min.1,
            max_y: max.1,
            min_z: min.2,
            max_z: max.2,
        }
    }

    pub fn full(grid: &Grid3) -> Self {
        Self::with_extent(grid.sx, grid.sy, grid.sz)
    }

    pub fn with_extent(sx: usize, sy: usize, sz: usize) -> Self {
        Self::new((0, 0, 0), (clamp_len(sx), clamp_len(sy), clamp_len(sz)))
    }

    /// Every bound pulled into `[0, size]` on its axis.
    pub fn clamped_to(&self, sx: usize, sy: usize, sz: usize) -> Self {
        let (sx, sy, sz) = (clamp_len(sx), clamp_len(sy), clamp_len(sz));
        Self {
            min_x: self.min_x.clamp(0, sx),
            max_x: self.max_x.clamp(0, sx),
            min_y: self.min_y.clamp(0, sy),
            max_y: self.max_y.clamp(0, sy),
            min_z: self.min_z.clamp(0, sz),
            max_z: self.max_z.clamp(0, sz),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min_x >= self.max_x || self.min_y >= self.max_y || self.min_z >= self.max_z
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= self.min_x
            && x < self.max_x
            && y >= self.min_y
            && y < self.max_y
            && z >= self.min_z
            && z < self.max_z
    }

    pub fn volume(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.max_x - self.min_x) as usize
            * (self.max_y - self.min_y) as usize
            * (self.max_z - self.min_z) as usize
    }

    /// Window to use when `current` is shown after `previous`: the old window,
    /// clamped, when the grid is the same one; otherwise the full extent.
    pub fn reset_for(
        previous: Option<&GridIdentity>,
        current: &GridIdentity,
        window: Option<VisualizationWindow>,
    ) -> Self {
        let (sx, sy, sz) = current.size;
        match (previous, window) {
            (Some(prev), Some(w)) if prev == current => w.clamped_to(sx, sy, sz),
            _ => Self::with_extent(sx, sy, sz),
        }
    }
}

#[inline]
fn clamp_len(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

/// What makes two shown grids "the same" for window retention.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridIdentity {
    pub key: String,
    pub size: (usize, usize, usize),
}

impl GridIdentity {
    pub fn new(key: impl Into<String>, grid: &Grid3) -> Self {
        Self {
            key: key.into(),
            size: (grid.sx, grid.sy, grid.sz),
        }
    }
}
