//! CPU meshing crate: per-direction sweep mesher for 3D grids and a pixel
//! mesher for 2D grids.
#![forbid(unsafe_code)]

pub mod face;
pub mod mesh_build;
pub mod pixels;
pub mod sweep;

use std::time::Instant;

use rayon::prelude::*;
use voxset_grid::{Entry, Grid, Grid3, VisualizationWindow};
use voxset_palette::{EntryPalette, Palette};

pub use face::{Axis, Face};
pub use mesh_build::FaceBuffer;
pub use pixels::mesh_pixels;
pub use sweep::{FaceClass, classify, sweep_face};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    #[error("sweep addressed cell ({x}, {y}, {z}) outside the grid")]
    CellOutOfRange { x: i32, y: i32, z: i32 },
}

/// Solid and transparent buckets. 3D grids have one bucket per [`Face`] in
/// [`Face::ALL`] order; 2D grids have a single bucket each.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridMesh {
    pub solid: Vec<FaceBuffer>,
    pub transparent: Vec<FaceBuffer>,
}

impl GridMesh {
    fn empty_3d() -> Self {
        Self {
            solid: vec![FaceBuffer::default(); 6],
            transparent: vec![FaceBuffer::default(); 6],
        }
    }

    pub fn solid_face_count(&self) -> usize {
        self.solid.iter().map(FaceBuffer::face_count).sum()
    }

    pub fn transparent_face_count(&self) -> usize {
        self.transparent.iter().map(FaceBuffer::face_count).sum()
    }

    /// Buckets for `face`; `None` for 2D meshes.
    pub fn bucket(&self, face: Face) -> Option<(&FaceBuffer, &FaceBuffer)> {
        if self.solid.len() != Face::ALL.len() {
            return None;
        }
        Some((&self.solid[face.index()], &self.transparent[face.index()]))
    }
}

pub fn mesh_grid(
    entry: &Entry,
    palette: &Palette,
    window: Option<VisualizationWindow>,
) -> Result<GridMesh, MeshError> {
    let resolved = EntryPalette::new(palette, &entry.block_names);
    mesh_grid_with(&entry.grid, &resolved, window)
}

/// Same as [`mesh_grid`] with an already resolved palette. The window only
/// applies to 3D grids.
pub fn mesh_grid_with(
    grid: &Grid,
    palette: &EntryPalette,
    window: Option<VisualizationWindow>,
) -> Result<GridMesh, MeshError> {
    let t0 = Instant::now();
    let mesh = match grid {
        Grid::D2(g) => {
            let (solid, transparent) = mesh_pixels(g, palette);
            GridMesh {
                solid: vec![solid],
                transparent: vec![transparent],
            }
        }
        Grid::D3(g) => mesh_voxels(g, palette, window)?,
    };
    log::info!(
        target: "perf",
        "ms={} mesh_grid dims={:?} solid_faces={} transparent_faces={}",
        t0.elapsed().as_millis(),
        grid.dimensions(),
        mesh.solid_face_count(),
        mesh.transparent_face_count()
    );
    Ok(mesh)
}

fn mesh_voxels(
    grid: &Grid3,
    palette: &EntryPalette,
    window: Option<VisualizationWindow>,
) -> Result<GridMesh, MeshError> {
    let window = window
        .unwrap_or_else(|| VisualizationWindow::full(grid))
        .clamped_to(grid.sx, grid.sy, grid.sz);
    if window.is_empty() {
        return Ok(GridMesh::empty_3d());
    }
    let per_face: Vec<(FaceBuffer, FaceBuffer)> = Face::ALL
        .par_iter()
        .map(|&face| sweep_face(grid, palette, &window, face))
        .collect::<Result<_, _>>()?;
    let (solid, transparent) = per_face.into_iter().unzip();
    Ok(GridMesh { solid, transparent })
}
