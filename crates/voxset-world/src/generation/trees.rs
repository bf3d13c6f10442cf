use crate::block_types::BlockType;
use crate::noise::{fbm, to01};

use super::TerrainBuilder;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Species {
    Pine,
    Leafy,
}

pub(super) fn plant_trees(b: &mut TerrainBuilder<'_>) {
    let w = b.width();
    let sqrt_w = f64::from(w).sqrt() as i32;
    let tree_count = b.range(1, sqrt_w);

    let mut planted_pine = false;
    let mut planted_leafy = false;
    for _ in 0..tree_count {
        let mut target = None;
        for _ in 0..sqrt_w {
            let x = b.range(0, w);
            if let Some(y) = first_grass(b, x) {
                target = Some((x, y));
                break;
            }
        }
        let Some((x, y)) = target else {
            continue;
        };
        let species = if b.range(0, 2) == 0 {
            Species::Pine
        } else {
            Species::Leafy
        };
        match species {
            Species::Pine => {
                pine(b, x, y + 1);
                planted_pine = true;
            }
            Species::Leafy => {
                leafy(b, x, y + 1);
                planted_leafy = true;
            }
        }
    }

    if planted_pine || planted_leafy {
        b.tags.push("trees".to_string());
    }
    if planted_pine {
        b.tags.push("pine-trees".to_string());
    }
    if planted_leafy {
        b.tags.push("leafy-trees".to_string());
    }
}

/// Height of the top-most non-empty cell of column `x` when that cell is grass.
fn first_grass(b: &TerrainBuilder<'_>, x: i32) -> Option<i32> {
    let y = (1..b.height())
        .rev()
        .find(|&y| !b.is(x, y, BlockType::Empty))?;
    b.is(x, y, BlockType::Grass).then_some(y)
}

fn trunk(b: &mut TerrainBuilder<'_>, x: i32, y: i32, block: BlockType) -> i32 {
    let height = b.range(b.params.trunk_min, b.params.trunk_max);
    for h in 0..height {
        b.update_or_ignore(block, x, y + h, true);
    }
    height
}

/// Dark trunk with stacked leaf rows narrowing toward the top.
fn pine(b: &mut TerrainBuilder<'_>, x: i32, y: i32) {
    let height = trunk(b, x, y, BlockType::WoodDark);
    let width = b.range(2, (height / 2).max(3));
    let leaf_offset = b.range(0, 2);
    let start = b.range(0, 2);
    for h in start..=height + 1 {
        let mut leaf_w = f64::from(height - h) / 2.0 + 1.0;
        if leaf_w > 2.0 {
            leaf_w -= f64::from((h + leaf_offset) % 2);
        }
        for dx in -width..=width {
            if f64::from(dx.abs()) < leaf_w {
                b.update_or_ignore(BlockType::Leaves, x + dx, y + h + 1, true);
            }
        }
    }
}

/// Light trunk under an elliptical crown with a noisy edge.
fn leafy(b: &mut TerrainBuilder<'_>, x: i32, y: i32) {
    let height = trunk(b, x, y, BlockType::WoodLight);
    let lwidth = b.range(3, (height / 2).max(3));
    let lheight = b.range(3, ((f64::from(height) / 1.5) as i32).max(3));
    let hoffset = b.range(0, 2);
    let (lw2, lh2) = (f64::from(lwidth * lwidth), f64::from(lheight * lheight));
    for dx in -lwidth..=lwidth {
        for dy in -lheight..=lheight {
            let (fx, fy) = (f64::from(dx), f64::from(dy));
            let len = (fx * fx + fy * fy).sqrt();
            let (nx, ny) = if len > 0.0 { (fx / len, fy / len) } else { (0.0, 0.0) };
            let r = fx * fx / lw2 + fy * fy / lh2;
            let edge = to01(fbm(
                &b.noise,
                nx + f64::from(x),
                ny + f64::from(y),
                0.2,
                2,
                0.5,
                0.5,
            )) * 0.3
                + 0.5;
            if r < edge {
                b.update_or_ignore(BlockType::Leaves, x + dx, y + dy + height - hoffset, true);
            }
        }
    }
}
