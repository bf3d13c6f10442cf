use voxset_grid::BlockId;

/// Block table shared by every terrain entry. Discriminants are block ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum BlockType {
    Empty = 0,
    Stone = 1,
    Soil = 2,
    Grass = 3,
    Water = 4,
    Sand = 5,
    WoodDark = 6,
    WoodLight = 7,
    Leaves = 8,
}

impl BlockType {
    pub const ALL: [BlockType; 9] = [
        BlockType::Empty,
        BlockType::Stone,
        BlockType::Soil,
        BlockType::Grass,
        BlockType::Water,
        BlockType::Sand,
        BlockType::WoodDark,
        BlockType::WoodLight,
        BlockType::Leaves,
    ];

    #[inline]
    pub const fn id(self) -> BlockId {
        self as BlockId
    }

    pub const fn name(self) -> &'static str {
        match self {
            BlockType::Empty => "empty",
            BlockType::Stone => "stone",
            BlockType::Soil => "soil",
            BlockType::Grass => "grass",
            BlockType::Water => "water",
            BlockType::Sand => "sand",
            BlockType::WoodDark => "wood-dark",
            BlockType::WoodLight => "wood-light",
            BlockType::Leaves => "leaves",
        }
    }

    pub fn from_id(id: BlockId) -> Option<BlockType> {
        Self::ALL.get(id as usize).copied()
    }
}

/// Names in id order, ready for `Entry::block_names`.
pub fn block_names() -> Vec<String> {
    BlockType::ALL.iter().map(|b| b.name().to_string()).collect()
}
