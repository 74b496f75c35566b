use crate::engine::Generation;
use crate::lattice::Cell;
use anyhow::{bail, ensure, Result};

/// Parses a run-length encoded Life pattern into a sparse generation.
///
/// Accepts the usual `.rle` layout: `#` comment lines, an `x = w, y = h`
/// header (a trailing rule specification is ignored) and a body of `b`,
/// `o`, `$` and `!` tags. The first pattern row lands at y = 0 with rows
/// descending, so rendering keeps the orientation of the source file.
/// Malformed input fails with a specific error instead of producing a
/// partial generation.
pub fn parse_rle(data: &[u8]) -> Result<Generation> {
    let parse_next_number = |i: &mut usize| -> Result<i64> {
        while *i < data.len() && !data[*i].is_ascii_digit() {
            *i += 1;
        }
        let j = {
            let mut j = *i;
            while j < data.len() && data[j].is_ascii_digit() {
                j += 1;
            }
            j
        };
        ensure!(*i < j, "expected a number in RLE data");
        let ans = std::str::from_utf8(&data[*i..j])?.parse::<i64>()?;
        *i = j;
        Ok(ans)
    };

    let mut i = 0;
    // comment lines
    while i < data.len() && data[i] == b'#' {
        while i < data.len() && data[i] != b'\n' {
            i += 1;
        }
        i += 1;
    }
    // header line must start with 'x'; the sizes only bound-check the body
    ensure!(
        i < data.len() && data[i] == b'x',
        "missing RLE header line"
    );
    let width = parse_next_number(&mut i)?;
    let height = parse_next_number(&mut i)?;
    ensure!(width > 0 && height > 0, "RLE header declares an empty pattern");
    while i < data.len() && data[i] != b'\n' {
        i += 1;
    }
    i += 1;

    // run-length encoded pattern data
    let mut cells = Vec::new();
    let (mut x, mut y, mut cnt) = (0i64, 0i64, 1i64);
    while i < data.len() {
        match data[i] {
            b'\n' | b'\r' | b' ' => i += 1,
            b'0'..=b'9' => cnt = parse_next_number(&mut i)?,
            b'o' => {
                for _ in 0..cnt {
                    cells.push(Cell::new(x, -y));
                    x += 1;
                }
                ensure!(x <= width, "RLE row overflows the declared width");
                (i, cnt) = (i + 1, 1);
            }
            b'b' => {
                (x, i, cnt) = (x + cnt, i + 1, 1);
                ensure!(x <= width, "RLE row overflows the declared width");
            }
            b'$' => {
                (x, y, i, cnt) = (0, y + cnt, i + 1, 1);
                ensure!(y <= height, "RLE pattern overflows the declared height");
            }
            b'!' => break,
            c => bail!("unexpected symbol {:?} in RLE data", c as char),
        }
    }
    Ok(Generation::from_cells(cells))
}
