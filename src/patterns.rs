//! Named seed patterns and random soups.
//!
//! The catalog is an immutable table; callers receive a fresh
//! [`Generation`] per lookup and the engine treats it as an opaque seed.

use crate::engine::Generation;
use crate::lattice::Cell;
use anyhow::{ensure, Result};

const RPENTOMINO: [Cell; 5] = [
    Cell::new(3, 2),
    Cell::new(2, 3),
    Cell::new(3, 3),
    Cell::new(3, 4),
    Cell::new(4, 4),
];

// A still block in the third quadrant and a glider heading away from it.
const GLIDER: [Cell; 9] = [
    Cell::new(-2, -2),
    Cell::new(-1, -2),
    Cell::new(-2, -1),
    Cell::new(-1, -1),
    Cell::new(1, 1),
    Cell::new(2, 1),
    Cell::new(3, 1),
    Cell::new(3, 2),
    Cell::new(2, 3),
];

const SQUARE: [Cell; 4] = [
    Cell::new(1, 1),
    Cell::new(2, 1),
    Cell::new(1, 2),
    Cell::new(2, 2),
];

pub const NAMES: [&str; 3] = ["glider", "rpentomino", "square"];

/// Looks up a named seed; `None` for an unrecognized name.
pub fn lookup(name: &str) -> Option<Generation> {
    let cells: &[Cell] = match name {
        "glider" => &GLIDER,
        "rpentomino" => &RPENTOMINO,
        "square" => &SQUARE,
        _ => return None,
    };
    Some(Generation::from_cells(cells.iter().copied()))
}

/// Fills a `width` x `height` rectangle anchored at the origin with random
/// live cells.
///
/// `fill_rate` is the probability of a cell being alive; `seed` makes the
/// soup reproducible (a random seed is generated when `None`).
pub fn random_soup(
    width: i64,
    height: i64,
    fill_rate: f64,
    seed: Option<u64>,
) -> Result<Generation> {
    use rand::{Rng, SeedableRng};

    ensure!(width > 0 && height > 0, "soup dimensions must be positive");
    ensure!(
        (0.0..=1.0).contains(&fill_rate),
        "fill rate must be within [0, 1]"
    );

    let mut rng = if let Some(x) = seed {
        rand_chacha::ChaCha8Rng::seed_from_u64(x)
    } else {
        rand_chacha::ChaCha8Rng::from_entropy()
    };
    let mut cells = Vec::new();
    for y in 0..height {
        for x in 0..width {
            if rng.gen_bool(fill_rate) {
                cells.push(Cell::new(x, y));
            }
        }
    }
    Ok(Generation::from_cells(cells))
}
