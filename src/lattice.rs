/// A position on the infinite 2D integer lattice.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The 8 positions at Chebyshev distance 1: north row first, then the
    /// middle row without the center, then the south row, increasing x
    /// within each row.
    pub fn neighbors(self) -> [Cell; 8] {
        let Cell { x, y } = self;
        [
            Cell::new(x - 1, y + 1),
            Cell::new(x, y + 1),
            Cell::new(x + 1, y + 1),
            Cell::new(x - 1, y),
            Cell::new(x + 1, y),
            Cell::new(x - 1, y - 1),
            Cell::new(x, y - 1),
            Cell::new(x + 1, y - 1),
        ]
    }

    pub const fn translated(self, dx: i64, dy: i64) -> Cell {
        Cell::new(self.x + dx, self.y + dy)
    }
}

/// The minimal axis-aligned rectangle containing a set of cells.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BoundingBox {
    pub bottom_left: Cell,
    pub top_right: Cell,
}

impl BoundingBox {
    /// Computes the min/max of x and y over `cells`.
    ///
    /// An empty input yields the degenerate box with both corners at the
    /// origin, so the expanded scan region of an empty generation is the
    /// 3x3 square around (0, 0).
    pub fn of(cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut iter = cells.into_iter();
        let Some(first) = iter.next() else {
            return Self {
                bottom_left: Cell::new(0, 0),
                top_right: Cell::new(0, 0),
            };
        };
        let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
        for cell in iter {
            min_x = min_x.min(cell.x);
            max_x = max_x.max(cell.x);
            min_y = min_y.min(cell.y);
            max_y = max_y.max(cell.y);
        }
        Self {
            bottom_left: Cell::new(min_x, min_y),
            top_right: Cell::new(max_x, max_y),
        }
    }

    /// The box expanded by `margin` in every direction.
    pub const fn grown(self, margin: i64) -> Self {
        Self {
            bottom_left: Cell::new(self.bottom_left.x - margin, self.bottom_left.y - margin),
            top_right: Cell::new(self.top_right.x + margin, self.top_right.y + margin),
        }
    }
}
