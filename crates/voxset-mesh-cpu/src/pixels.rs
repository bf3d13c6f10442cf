use voxset_grid::Grid2;
use voxset_palette::EntryPalette;

use crate::face::Face;
use crate::mesh_build::FaceBuffer;

/// One quad per visible pixel on the `z = 0` plane, facing `-Z`.
/// Pixels are never culled against each other.
pub fn mesh_pixels(grid: &Grid2, palette: &EntryPalette) -> (FaceBuffer, FaceBuffer) {
    let mut solid = FaceBuffer::default();
    let mut transparent = FaceBuffer::default();
    let n = Face::NegZ.normal();
    for x in 0..grid.sx {
        for y in 0..grid.sy {
            let color = palette.color_for(grid.get(x, y));
            if color.is_invisible() {
                continue;
            }
            let out = if color.is_opaque() {
                &mut solid
            } else {
                &mut transparent
            };
            out.add_quad(Face::NegZ.corners(x as i32, y as i32, 0), n, color);
        }
    }
    (solid, transparent)
}
