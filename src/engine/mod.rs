mod tests;

use crate::lattice::{BoundingBox, Cell};
use ahash::AHashSet;

/// The set of live cells at one instant of the simulation.
///
/// A generation is a genuine set: duplicate cells in a seed collapse on
/// construction, membership is O(1), and values are never mutated after
/// creation. `step` always returns a fresh generation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Generation {
    cells: AHashSet<Cell>,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    /// True iff `cell` is live in this generation.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    /// Iterates over the live cells in no particular order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Bounding box of the live cells; both corners are (0, 0) when the
    /// generation is empty.
    pub fn corners(&self) -> BoundingBox {
        BoundingBox::of(self.cells())
    }

    /// The live cells among the 8 neighbors of `cell`, in neighbor order.
    pub fn living_neighbors(&self, cell: Cell) -> Vec<Cell> {
        cell.neighbors()
            .into_iter()
            .filter(|&n| self.contains(n))
            .collect()
    }

    fn living_neighbor_count(&self, cell: Cell) -> usize {
        cell.neighbors()
            .into_iter()
            .filter(|&n| self.contains(n))
            .count()
    }

    /// B3/S23 transition for a single coordinate: born with exactly 3 live
    /// neighbors, survives with 2 only if currently live.
    pub fn will_be_alive(&self, cell: Cell) -> bool {
        let living = self.living_neighbor_count(cell);
        living == 3 || (living == 2 && self.contains(cell))
    }

    /// Computes the next generation.
    ///
    /// Scans the bounding box grown by 1 in every direction, the minimal
    /// region that can hold a birth, from the top row down and left to
    /// right within each row.
    pub fn step(&self) -> Generation {
        let scan = self.corners().grown(1);
        let mut cells = AHashSet::new();
        for y in (scan.bottom_left.y..=scan.top_right.y).rev() {
            for x in scan.bottom_left.x..=scan.top_right.x {
                let cell = Cell::new(x, y);
                if self.will_be_alive(cell) {
                    cells.insert(cell);
                }
            }
        }
        Generation { cells }
    }

    /// The generation shifted by `(dx, dy)`.
    pub fn translated(&self, dx: i64, dy: i64) -> Generation {
        Self::from_cells(self.cells().map(|c| c.translated(dx, dy)))
    }
}

impl FromIterator<Cell> for Generation {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self::from_cells(iter)
    }
}

/// Runs `iterations` steps from `seed`, returning all `iterations + 1`
/// generations with the seed at index 0.
pub fn iterate(seed: Generation, iterations: u32) -> Vec<Generation> {
    let mut result = Vec::with_capacity(iterations as usize + 1);
    result.push(seed);
    for gen in 1..=iterations {
        let next = result[result.len() - 1].step();
        log::debug!("generation {}: population {}", gen, next.population());
        result.push(next);
    }
    result
}
