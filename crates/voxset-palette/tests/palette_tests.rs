use proptest::prelude::*;
use voxset_palette::{EntryPalette, Palette, Rgba};

#[test]
fn unmapped_name_is_magenta() {
    let palette = Palette::from_pairs([("stone", Rgba::opaque(128, 128, 128))]);
    assert_eq!(palette.color("stone"), Rgba::opaque(128, 128, 128));
    assert_eq!(palette.color("lava"), Rgba::MISSING);
    assert!(palette.color("lava").is_opaque());
}

#[test]
fn palette_from_toml_accepts_all_color_forms() {
    let palette = Palette::from_toml_str(
        r##"
        [colors]
        glass = [178, 178, 178, 128]
        stone = [128, 128, 128]
        water = "#3060C0A0"
        empty = "#00000000"
    "##,
    )
    .unwrap();
    assert_eq!(palette.len(), 4);
    assert_eq!(palette.color("glass"), Rgba::new(178, 178, 178, 128));
    assert_eq!(palette.color("stone"), Rgba::opaque(128, 128, 128));
    assert_eq!(palette.color("water"), Rgba::new(0x30, 0x60, 0xC0, 0xA0));
    assert!(palette.color("empty").is_invisible());
    assert_eq!(palette.names(), vec!["empty", "glass", "stone", "water"]);
}

#[test]
fn palette_from_toml_rejects_bad_hex() {
    let err = Palette::from_toml_str(
        r##"
        [colors]
        broken = "#12345"
    "##,
    );
    assert!(err.is_err());
}

#[test]
fn entry_palette_resolves_by_index() {
    let palette = Palette::from_pairs([
        ("nothing", Rgba::CLEAR),
        ("something", Rgba::opaque(10, 20, 30)),
    ]);
    let names = vec!["nothing".to_string(), "something".to_string(), "unknown".to_string()];
    let ep = EntryPalette::new(&palette, &names);
    assert_eq!(ep.len(), 3);
    assert_eq!(ep.color_for(0), Rgba::CLEAR);
    assert_eq!(ep.color_for(1), Rgba::opaque(10, 20, 30));
    assert_eq!(ep.color_for(2), Rgba::MISSING);
    assert_eq!(ep.color_for(99), Rgba::MISSING);
}

proptest! {
    // Every resolved id agrees with a direct name lookup.
    #[test]
    fn entry_palette_matches_palette(
        names in proptest::collection::vec("[a-e]{1,3}", 0..12),
        alpha in any::<u8>(),
    ) {
        let palette = Palette::from_pairs(
            names.iter().filter(|n| n.len() > 1).map(|n| (n.clone(), Rgba::new(1, 2, 3, alpha))),
        );
        let ep = EntryPalette::new(&palette, &names);
        for (i, n) in names.iter().enumerate() {
            prop_assert_eq!(ep.color_for(i as u32), palette.color(n));
        }
    }
}
