use rand::seq::SliceRandom;

use crate::block_types::BlockType;

use super::TerrainBuilder;

/// Floods the lowest soil surface with water, one layer at a time, lining the
/// pond with sand. Gives up on a layer that would hang over empty space.
pub(super) fn spawn_ponds(b: &mut TerrainBuilder<'_>) {
    let (w, h) = (b.width(), b.height());
    let Some((lowest_x, lowest_y)) = lowest_surface(b) else {
        return;
    };

    let base = ((f64::from(w) * f64::from(h)).sqrt() * b.params.pond_volume_factor).floor() as i64;
    let mult = b.range(
        b.params.pond_volume_mult_min as i32,
        b.params.pond_volume_mult_max as i32,
    );
    let max_water = base * i64::from(mult);
    let max_water_on_level = (2.0 * f64::from(w)).sqrt();

    let mut added: i64 = 0;
    let mut added_any = false;
    let mut cy = lowest_y;
    while cy < h && b.is(lowest_x, cy, BlockType::Empty) {
        let (mut left, mut right) = (lowest_x, lowest_x);
        let mut overhang = false;

        while left > 0 && b.is(left - 1, cy, BlockType::Empty) {
            if b.is(left - 1, cy - 1, BlockType::Empty) {
                overhang = true;
                break;
            }
            left -= 1;
        }
        while !overhang && right < w - 1 && b.is(right + 1, cy, BlockType::Empty) {
            if b.is(right + 1, cy - 1, BlockType::Empty) {
                overhang = true;
                break;
            }
            right += 1;
        }
        if overhang {
            break;
        }

        let span = i64::from(right - left);
        if added + span > max_water || span as f64 > max_water_on_level {
            break;
        }

        for i in left..=right {
            b.update_or_ignore(BlockType::Water, i, cy, false);
            for d in 1..=2 {
                if !b.is(i, cy - d, BlockType::Water) {
                    b.update_or_ignore(BlockType::Sand, i, cy - d, false);
                }
            }
        }
        for (sx, sy) in [
            (left - 1, cy),
            (left - 1, cy - 1),
            (right + 1, cy),
            (right + 1, cy - 1),
        ] {
            b.update_or_ignore(BlockType::Sand, sx, sy, false);
        }

        added += span;
        added_any = true;
        cy += 1;
        if added >= max_water {
            break;
        }
    }

    if added_any {
        b.tags.push("pond".to_string());
    }
}

/// Cell just above the lowest top-most soil cell, scanning columns in random order.
fn lowest_surface(b: &mut TerrainBuilder<'_>) -> Option<(i32, i32)> {
    let (w, h) = (b.width(), b.height());
    let mut columns: Vec<i32> = (0..w).collect();
    columns.shuffle(&mut b.rng);

    let mut best: Option<(i32, i32)> = None;
    for x in columns {
        let Some(y) = (1..h).rev().find(|&y| b.is(x, y, BlockType::Soil)) else {
            continue;
        };
        if best.is_none_or(|(_, by)| y + 1 < by) {
            best = Some((x, y + 1));
        }
    }
    best
}
