use crate::block_types::BlockType;

use super::TerrainBuilder;

/// Fills each column with stone up to the taller of the two height curves,
/// turning the upper band into soil.
pub(super) fn apply_soil_and_stone(b: &mut TerrainBuilder<'_>) {
    let h = b.height();
    let soil_depth = b.params.soil_depth;
    for x in 0..b.width() {
        let soil = b.soil_height(x);
        let stone = b.stone_height(x);
        let top = (soil.max(stone).ceil() as i32).min(h);
        for y in 0..top {
            let fy = f64::from(y);
            let block = if fy > stone || fy > soil - soil_depth {
                BlockType::Soil
            } else {
                BlockType::Stone
            };
            b.update_or_ignore(block, x, y, false);
        }
    }
}
