use proptest::prelude::*;
use voxset_grid::Grid;
use voxset_world::{
    BlockType, EmptyGenerator3D, GenError, Generator, PropertyValue, TerrainGenParams,
    TerrainGenerator, generate_batch, generate_terrain,
};

#[test]
fn same_seed_same_entry() {
    let a = generate_terrain((48, 32), Some(42)).unwrap();
    let b = generate_terrain((48, 32), Some(42)).unwrap();
    assert_eq!(a, b);
    let c = generate_terrain((48, 32), Some(43)).unwrap();
    assert_ne!(a.grid, c.grid);
}

#[test]
fn entry_has_expected_shape_and_names() {
    let e = generate_terrain((40, 30), Some(7)).unwrap();
    assert_eq!(e.friendly_name, "2D Terrain");
    assert_eq!(e.grid.dimensions(), vec![40, 30]);
    assert_eq!(e.block_names.len(), BlockType::ALL.len());
    assert_eq!(e.block_id("water"), Some(BlockType::Water.id()));
    assert!(e.tags[0].starts_with("terrain-freq-"));
    assert!(e.to_dto().validate().is_ok());
}

#[test]
fn invalid_size_is_rejected_before_work() {
    assert!(matches!(
        generate_terrain((0, 10), Some(1)),
        Err(GenError::InvalidSize(_))
    ));
    assert!(matches!(
        generate_terrain((10, -3), None),
        Err(GenError::InvalidSize(_))
    ));
}

#[test]
fn disabled_features_leave_plain_ground() {
    let mut params = TerrainGenParams::default();
    params.width = 32;
    params.height = 32;
    params.pond_chance = 0.0;
    params.cave_chance = 0.0;
    params.tree_chance = 0.0;
    let e = TerrainGenerator::new(params).generate(Some(3)).unwrap();
    assert_eq!(e.tags.len(), 1);
    let g = e.grid.as_2d().unwrap();
    for &id in &g.blocks {
        assert!(
            [BlockType::Empty, BlockType::Stone, BlockType::Soil, BlockType::Grass]
                .iter()
                .any(|b| b.id() == id)
        );
    }
    // Every column ends in grass.
    for x in 0..g.sx {
        let top = (0..g.sy).rev().find(|&y| g.get(x, y) != BlockType::Empty.id());
        assert_eq!(top.map(|y| g.get(x, y)), Some(BlockType::Grass.id()));
    }
}

#[test]
fn water_rests_on_ground_after_every_stage() {
    let mut params = TerrainGenParams::default();
    params.pond_chance = 1.0;
    params.cave_chance = 1.0;
    for (w, h) in [(48, 48), (16, 10), (24, 8)] {
        params.width = w;
        params.height = h;
        let g = TerrainGenerator::new(params.clone());
        for seed in 0..30 {
            let e = g.generate(Some(seed)).unwrap();
            let grid = e.grid.as_2d().unwrap();
            for x in 0..grid.sx {
                for y in 0..grid.sy {
                    if grid.get(x, y) == BlockType::Water.id() {
                        assert!(y > 0 && grid.get(x, y - 1) != BlockType::Empty.id());
                    }
                }
            }
        }
    }
}

#[test]
fn tiny_grids_generate() {
    for (w, h) in [(1, 1), (1, 8), (8, 1), (2, 3)] {
        let e = generate_terrain((w, h), Some(11)).unwrap();
        assert!(e.to_dto().validate().is_ok());
    }
}

#[test]
fn batch_is_ordered_and_reproducible() {
    let g = TerrainGenerator::with_size(24, 24);
    let batch = generate_batch(&g, 6, 100).unwrap();
    assert_eq!(batch.len(), 6);
    for (i, e) in batch.iter().enumerate() {
        assert_eq!(e, &g.generate(Some(100 + i as u64)).unwrap());
    }
    assert_eq!(batch, generate_batch(&g, 6, 100).unwrap());
}

#[test]
fn empty_generator_makes_3d_zeroes() {
    let g = EmptyGenerator3D { size: (2, 3, 4) };
    let e = g.generate(None).unwrap();
    assert_eq!(e.tags, vec!["empty-terrain".to_string()]);
    let grid = e.grid.as_3d().unwrap();
    assert_eq!(grid.blocks.len(), 24);
    assert!(grid.blocks.iter().all(|&b| b == 0));
    assert!(matches!(e.grid, Grid::D3(_)));
}

#[test]
fn property_setters_validate() {
    let mut g = TerrainGenerator::default();
    assert!(g.set_property("size", PropertyValue::Size2(10, 12)).is_ok());
    assert_eq!((g.params.width, g.params.height), (10, 12));
    assert!(matches!(
        g.set_property("size", PropertyValue::Size2(0, 12)),
        Err(GenError::InvalidProperty { .. })
    ));
    assert_eq!(g.params.width, 10);
    assert!(g.set_property("pond_chance", PropertyValue::Float(1.5)).is_err());
    assert!(g.set_property("pond_chance", PropertyValue::Int(1)).is_err());
    assert!(matches!(
        g.set_property("nope", PropertyValue::Int(1)),
        Err(GenError::UnknownProperty(_))
    ));

    let mut e = EmptyGenerator3D::default();
    assert!(e.set_property("size", PropertyValue::Size3(1, 0, 1)).is_err());
    assert!(e.set_property("size", PropertyValue::Size3(1, 2, 1)).is_ok());
    assert_eq!(
        e.property_values(),
        vec![("size", PropertyValue::Size3(1, 2, 1))]
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    // Generator output always passes the same validation as loaded data.
    #[test]
    fn generated_entries_validate(w in 1i64..48, h in 1i64..48, seed in any::<u64>()) {
        let e = generate_terrain((w, h), Some(seed)).unwrap();
        prop_assert!(e.to_dto().validate().is_ok());
        prop_assert_eq!(e.grid.dimensions(), vec![w as usize, h as usize]);
    }
}
