use crate::block_types::BlockType;

use super::TerrainBuilder;

pub(super) fn grow_grass(b: &mut TerrainBuilder<'_>) {
    for x in 0..b.width() {
        // First non-empty cell from the top; grass only if it is soil.
        let top = (1..b.height()).rev().find(|&y| !b.is(x, y, BlockType::Empty));
        if let Some(y) = top {
            if b.is(x, y, BlockType::Soil) {
                b.update_or_ignore(BlockType::Grass, x, y, false);
            }
        }
    }
}
