//! Block grids, entries, their transfer form, and the validation gate.
#![forbid(unsafe_code)]

pub mod dto;
pub mod entry;
pub mod grid;
pub mod validate;
pub mod window;

pub use dto::{EntryCollectionDto, EntryDto};
pub use entry::Entry;
pub use grid::{BlockId, Grid, Grid2, Grid3, GridError};
pub use validate::{Validation, ValidationError, validate};
pub use window::{GridIdentity, VisualizationWindow};
