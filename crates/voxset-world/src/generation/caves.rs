use crate::block_types::BlockType;
use crate::noise::{fbm, to01};

use super::TerrainBuilder;

/// Carves ridged-noise tunnels below the soil line, fading them out near the
/// surface. Pond water and its sand bed are left in place.
pub(super) fn apply_caves(b: &mut TerrainBuilder<'_>) {
    let p = b.params;
    let h = b.height();
    let (ox, oy) = b.offset;
    for x in 0..b.width() {
        let soil = b.soil_height(x);
        if soil <= 0.0 {
            continue;
        }
        let max_y = (soil.ceil() as i32).min(h);
        for y in 0..max_y {
            if b.is(x, y, BlockType::Water) || b.is(x, y, BlockType::Sand) {
                continue;
            }
            let v = to01(fbm(
                &b.noise,
                f64::from(x) + oy,
                f64::from(y) + ox,
                p.cave_frequency,
                p.cave_octaves,
                p.cave_persistence,
                p.cave_lacunarity,
            ));
            let ridge = 1.0 - (v - 0.5).abs() * 2.0;
            let depth = ((soil - f64::from(y)) / soil).min(0.5) * 2.0;
            if ridge * depth > p.cave_threshold {
                b.update_or_ignore(BlockType::Empty, x, y, false);
            }
        }
    }
}
