use serde::{Deserialize, Serialize};

use crate::validate::{Validation, validate};

/// Flat, serializable form of an entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDto {
    #[serde(default, alias = "FriendlyName")]
    pub friendly_name: String,
    #[serde(default, alias = "Tags")]
    pub tags: Vec<String>,
    #[serde(default, alias = "Dimensions")]
    pub dimensions: Vec<i64>,
    #[serde(default, alias = "BlockNames")]
    pub block_names: Vec<String>,
    #[serde(default, alias = "Blocks")]
    pub blocks: Vec<i64>,
}

impl EntryDto {
    pub fn validate(&self) -> Validation {
        validate(&self.dimensions, &self.blocks, &self.block_names)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryCollectionDto {
    #[serde(default, alias = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, alias = "Entries")]
    pub entries: Vec<EntryDto>,
}
