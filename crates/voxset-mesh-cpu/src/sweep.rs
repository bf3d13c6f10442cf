use std::ops::Range;

use voxset_grid::{BlockId, Grid3, VisualizationWindow};
use voxset_palette::EntryPalette;

use crate::MeshError;
use crate::face::{Axis, Face};
use crate::mesh_build::FaceBuffer;

/// Which buffer, if any, a cell contributes a face to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FaceClass {
    Solid,
    Transparent,
}

/// Face rule shared by both passes: drawn toward an absent neighbor, or toward
/// a different block whose color is not opaque.
#[inline]
fn exposed(here: BlockId, neighbor: Option<BlockId>, palette: &EntryPalette) -> bool {
    match neighbor {
        None => true,
        Some(n) if n == here => false,
        Some(n) => !palette.color_for(n).is_opaque(),
    }
}

#[inline]
pub fn classify(
    here: BlockId,
    neighbor: Option<BlockId>,
    palette: &EntryPalette,
) -> Option<FaceClass> {
    let color = palette.color_for(here);
    if color.is_invisible() || !exposed(here, neighbor, palette) {
        return None;
    }
    if color.is_opaque() {
        Some(FaceClass::Solid)
    } else {
        Some(FaceClass::Transparent)
    }
}

/// Cells of the window in sweep order: slab by slab along the face axis,
/// front-most slab last.
fn sweep_order(
    window: &VisualizationWindow,
    face: Face,
) -> impl Iterator<Item = (i32, i32, i32)> {
    let xr = window.min_x..window.max_x;
    let yr = window.min_y..window.max_y;
    let zr = window.min_z..window.max_z;
    let (along, u, v): (Range<i32>, Range<i32>, Range<i32>) = match face.axis() {
        Axis::X => (xr, yr, zr),
        Axis::Y => (yr, xr, zr),
        Axis::Z => (zr, xr, yr),
    };
    let slabs: Vec<i32> = if face.is_positive() {
        along.collect()
    } else {
        along.rev().collect()
    };
    let axis = face.axis();
    slabs.into_iter().flat_map(move |a| {
        let v = v.clone();
        u.clone().flat_map(move |b| {
            v.clone().map(move |c| match axis {
                Axis::X => (a, b, c),
                Axis::Y => (b, a, c),
                Axis::Z => (b, c, a),
            })
        })
    })
}

/// Cells in one slab of `window` across the axis of `face`: the quad count of
/// the window's outer surface on that side.
fn slab_area(window: &VisualizationWindow, face: Face) -> usize {
    let span = |lo: i32, hi: i32| (hi - lo).max(0) as usize;
    let (x, y, z) = (
        span(window.min_x, window.max_x),
        span(window.min_y, window.max_y),
        span(window.min_z, window.max_z),
    );
    match face.axis() {
        Axis::X => y * z,
        Axis::Y => x * z,
        Axis::Z => x * y,
    }
}

/// Meshes one face direction over `window`. The window must already be
/// clamped to the grid; a cell it names that the grid lacks is an error.
pub fn sweep_face(
    grid: &Grid3,
    palette: &EntryPalette,
    window: &VisualizationWindow,
    face: Face,
) -> Result<(FaceBuffer, FaceBuffer), MeshError> {
    let mut solid = FaceBuffer::default();
    let mut transparent = FaceBuffer::default();
    if window.is_empty() {
        return Ok((solid, transparent));
    }
    solid.reserve_quads(slab_area(window, face));
    let (dx, dy, dz) = face.delta();
    let n = face.normal();
    let neighbor = |x: i32, y: i32, z: i32| {
        if !window.contains(x, y, z) {
            return None;
        }
        grid.block_or_nothing(x, y, z)
    };

    for (x, y, z) in sweep_order(window, face) {
        let Some(here) = grid.block_or_nothing(x, y, z) else {
            log::error!(
                "sweep {:?} reached cell ({}, {}, {}) outside grid {}x{}x{}",
                face,
                x,
                y,
                z,
                grid.sx,
                grid.sy,
                grid.sz
            );
            return Err(MeshError::CellOutOfRange { x, y, z });
        };
        let out = match classify(here, neighbor(x + dx, y + dy, z + dz), palette) {
            Some(FaceClass::Solid) => &mut solid,
            Some(FaceClass::Transparent) => &mut transparent,
            None => continue,
        };
        out.add_quad(face.corners(x, y, z), n, palette.color_for(here));
    }
    Ok((solid, transparent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxset_palette::{Palette, Rgba};

    fn palette() -> EntryPalette {
        let p = Palette::from_pairs([
            ("air", Rgba::CLEAR),
            ("stone", Rgba::opaque(120, 120, 120)),
            ("glass", Rgba::new(178, 178, 178, 128)),
        ]);
        EntryPalette::new(&p, &["air", "stone", "glass"])
    }

    #[test]
    fn classify_follows_alpha_and_neighbor() {
        let p = palette();
        assert_eq!(classify(0, None, &p), None);
        assert_eq!(classify(1, None, &p), Some(FaceClass::Solid));
        assert_eq!(classify(1, Some(1), &p), None);
        assert_eq!(classify(1, Some(0), &p), Some(FaceClass::Solid));
        assert_eq!(classify(1, Some(2), &p), Some(FaceClass::Solid));
        assert_eq!(classify(2, Some(1), &p), None);
        assert_eq!(classify(2, Some(2), &p), None);
        assert_eq!(classify(2, Some(0), &p), Some(FaceClass::Transparent));
    }

    #[test]
    fn sweep_visits_each_cell_once_advancing_along_axis() {
        let w = VisualizationWindow::new((0, 1, 2), (2, 3, 5));
        for face in Face::ALL {
            let cells: Vec<_> = sweep_order(&w, face).collect();
            assert_eq!(cells.len(), w.volume());
            let mut sorted = cells.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), cells.len());
            let key = |c: &(i32, i32, i32)| match face.axis() {
                Axis::X => c.0,
                Axis::Y => c.1,
                Axis::Z => c.2,
            };
            for pair in cells.windows(2) {
                let (a, b) = (key(&pair[0]), key(&pair[1]));
                if face.is_positive() {
                    assert!(a <= b);
                } else {
                    assert!(a >= b);
                }
            }
        }
    }

    #[test]
    fn slab_area_spans_the_other_two_axes() {
        let w = VisualizationWindow::new((0, 1, 2), (2, 4, 7));
        assert_eq!(slab_area(&w, Face::PosX), 15);
        assert_eq!(slab_area(&w, Face::NegY), 10);
        assert_eq!(slab_area(&w, Face::PosZ), 6);
        let empty = VisualizationWindow::new((3, 0, 0), (1, 2, 2));
        assert_eq!(slab_area(&empty, Face::PosY), 0);
    }

    #[test]
    fn solid_bucket_is_sized_for_the_outer_surface() {
        let grid = Grid3::from_blocks(3, 2, 2, vec![1; 12]).unwrap();
        let w = VisualizationWindow::full(&grid);
        let (solid, transparent) = sweep_face(&grid, &palette(), &w, Face::PosX).unwrap();
        assert_eq!(solid.face_count(), 4);
        assert!(solid.positions.capacity() >= 16);
        assert!(transparent.is_empty());
    }

    #[test]
    fn unclamped_window_is_an_internal_error() {
        let grid = Grid3::from_blocks(2, 2, 2, vec![1; 8]).unwrap();
        let w = VisualizationWindow::new((0, 0, 0), (3, 2, 2));
        let err = sweep_face(&grid, &palette(), &w, Face::PosX).unwrap_err();
        assert!(matches!(err, MeshError::CellOutOfRange { x: 2, .. }));
    }
}
