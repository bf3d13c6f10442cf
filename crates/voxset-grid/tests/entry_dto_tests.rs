use proptest::prelude::*;
use voxset_grid::{
    Entry, EntryCollectionDto, EntryDto, Grid, Grid2, Grid3, GridError, ValidationError,
};

fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("block-{i}")).collect()
}

#[test]
fn from_dto_builds_3d_grid_in_row_major_order() {
    let dto = EntryDto {
        friendly_name: "cube".into(),
        tags: vec!["t".into()],
        dimensions: vec![1, 2, 2],
        block_names: names(4),
        blocks: vec![0, 1, 2, 3],
    };
    let entry = Entry::from_dto(&dto).unwrap();
    let g = entry.grid.as_3d().unwrap();
    assert_eq!(g.get(0, 0, 1), 1);
    assert_eq!(g.get(0, 1, 0), 2);
    assert_eq!(entry.to_dto(), dto);
}

#[test]
fn from_dto_rejects_invalid_input() {
    let dto = EntryDto {
        dimensions: vec![2, 2],
        block_names: names(1),
        blocks: vec![0, 0, 0, 1],
        ..EntryDto::default()
    };
    match Entry::from_dto(&dto) {
        Err(GridError::Invalid(ValidationError::BlockIdOutOfRange { index, id, .. })) => {
            assert_eq!((index, id), (3, 1));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn entry_new_checks_name_table() {
    let grid = Grid::from(Grid2::from_blocks(1, 2, vec![0, 2]).unwrap());
    assert!(Entry::new("x", vec![], names(2), grid.clone()).is_err());
    assert!(Entry::new("x", vec![], names(3), grid).is_ok());
}

#[test]
fn dto_json_is_camel_case_and_accepts_pascal_case() {
    let entry = Entry::new(
        "flat",
        vec!["empty-terrain".into()],
        names(1),
        Grid::from(Grid3::empty(1, 1, 1)),
    )
    .unwrap();
    let json = serde_json::to_string(&entry.to_dto()).unwrap();
    assert!(json.contains("\"friendlyName\":\"flat\""));
    assert!(json.contains("\"blockNames\""));

    let pascal = r#"{
        "FriendlyName": "p",
        "Tags": [],
        "Dimensions": [2, 1],
        "BlockNames": ["a", "b"],
        "Blocks": [1, 0]
    }"#;
    let dto: EntryDto = serde_json::from_str(pascal).unwrap();
    assert!(dto.validate().is_ok());
    assert_eq!(dto.friendly_name, "p");
}

#[test]
fn collection_round_trips_through_json() {
    let c = EntryCollectionDto {
        name: Some("set".into()),
        entries: vec![EntryDto {
            dimensions: vec![1, 1],
            block_names: names(1),
            blocks: vec![0],
            ..EntryDto::default()
        }],
    };
    let json = serde_json::to_string(&c).unwrap();
    let back: EntryCollectionDto = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
}

proptest! {
    // Any grid with ids inside the name table survives the transfer form.
    #[test]
    fn valid_grids_pass_validation(
        sx in 1usize..5, sy in 1usize..5, sz in 1usize..5,
        n in 1usize..6,
        seed in any::<u64>(),
    ) {
        let len = sx * sy * sz;
        let blocks: Vec<u32> = (0..len)
            .map(|i| ((seed.wrapping_mul(i as u64 + 1) >> 7) % n as u64) as u32)
            .collect();
        let grid = Grid::from(Grid3::from_blocks(sx, sy, sz, blocks).unwrap());
        let entry = Entry::new("p", vec![], names(n), grid).unwrap();
        let dto = entry.to_dto();
        prop_assert!(dto.validate().is_ok());
        prop_assert_eq!(Entry::from_dto(&dto).unwrap(), entry);
    }

    // Adding or removing one block always breaks the count rule.
    #[test]
    fn wrong_block_count_is_rejected(sx in 1i64..6, sy in 1i64..6, extra in prop_oneof![Just(-1i64), Just(1i64)]) {
        let len = (sx * sy + extra) as usize;
        let v = voxset_grid::validate(&[sx, sy], &vec![0i64; len], &names(1));
        let is_count_mismatch = matches!(
            v.error(),
            Some(ValidationError::BlockCountMismatch { .. })
        );
        prop_assert!(is_count_mismatch);
    }
}
