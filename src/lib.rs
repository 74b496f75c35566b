#![warn(clippy::all)]

mod engine;
mod lattice;
mod render;
mod utils;

pub mod patterns;

pub use engine::{iterate, Generation};
pub use lattice::{BoundingBox, Cell};
pub use render::{print_cell, print_cells, ALIVE_GLYPH, DEAD_GLYPH};
pub use utils::parse_rle;
