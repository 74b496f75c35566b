use crate::engine::Generation;
use crate::lattice::Cell;

pub const ALIVE_GLYPH: char = '\u{25A3}';
pub const DEAD_GLYPH: char = '\u{25A2}';

pub fn print_cell(cell: Cell, generation: &Generation) -> char {
    if generation.contains(cell) {
        ALIVE_GLYPH
    } else {
        DEAD_GLYPH
    }
}

/// Renders the generation's bounding box as a character grid: rows from
/// max y down to min y, columns from min x to max x, each glyph followed
/// by a space and each row terminated by a newline.
pub fn print_cells(generation: &Generation) -> String {
    let bbox = generation.corners();
    let mut accumulator = String::new();
    for y in (bbox.bottom_left.y..=bbox.top_right.y).rev() {
        for x in bbox.bottom_left.x..=bbox.top_right.x {
            accumulator.push(print_cell(Cell::new(x, y), generation));
            accumulator.push(' ');
        }
        accumulator.push('\n');
    }
    accumulator
}
