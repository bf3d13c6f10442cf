//! Block-name to color palettes and their per-entry resolved form.
#![forbid(unsafe_code)]

pub mod color;
pub mod config;
pub mod entry_palette;
pub mod palette;

pub use color::Rgba;
pub use entry_palette::EntryPalette;
pub use palette::{Palette, PaletteError};
