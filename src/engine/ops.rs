//! Line traversal, slide/merge and grid queries over a flat exponent buffer.
//!
//! Every direction is handled by the same code: a direction picks an axis
//! (rows or columns) and a sign (toward the low or the high index), and
//! `line_index` maps "position `pos` of line `line` in slide order" to a flat
//! row-major index. Position 0 is always the cell tiles slide toward.

use log::trace;
use rand::Rng;

use super::state::{Axis, Move};

/// Flat index of the `pos`-th cell of `line`, counted in slide order for `dir`.
#[inline]
pub(crate) fn line_index(size: usize, dir: Move, line: usize, pos: usize) -> usize {
    let offset = if dir.is_reversed() {
        size - 1 - pos
    } else {
        pos
    };
    match dir.axis() {
        Axis::Horizontal => line * size + offset,
        Axis::Vertical => offset * size + line,
    }
}

/// Compact and merge one line given in slide order.
///
/// `out` is overwritten with exactly `line.len()` cells. A tile produced by a
/// merge is never merged again in the same pass, so `[1, 1, 1]` becomes
/// `[2, 1, 0]` and `[1, 1, 1, 1]` becomes `[2, 2, 0, 0]`.
pub(crate) fn slide_line(line: &[u8], out: &mut Vec<u8>) {
    out.clear();
    let mut tiles = line.iter().copied().filter(|&v| v != 0).peekable();
    while let Some(tile) = tiles.next() {
        if tiles.peek() == Some(&tile) {
            tiles.next();
            out.push(tile.saturating_add(1));
        } else {
            out.push(tile);
        }
    }
    out.resize(line.len(), 0);
}

/// Slide every line of `cells` toward `dir` in place. Returns true if any cell changed.
///
/// Lines that do not change are never written back.
pub(crate) fn shift_grid(cells: &mut [u8], size: usize, dir: Move) -> bool {
    debug_assert_eq!(cells.len(), size * size);
    let mut line = Vec::with_capacity(size);
    let mut slid = Vec::with_capacity(size);
    let mut changed = false;
    for l in 0..size {
        line.clear();
        line.extend((0..size).map(|pos| cells[line_index(size, dir, l, pos)]));
        slide_line(&line, &mut slid);
        if slid != line {
            trace!("{:?} line {}: {:?} -> {:?}", dir, l, line, slid);
            for (pos, &v) in slid.iter().enumerate() {
                cells[line_index(size, dir, l, pos)] = v;
            }
            changed = true;
        }
    }
    changed
}

/// True if sliding toward `dir` would change at least one cell.
///
/// A line can slide iff some tile sits right after an empty cell or right
/// after an equal tile (in slide order).
pub(crate) fn can_shift(cells: &[u8], size: usize, dir: Move) -> bool {
    (0..size).any(|l| {
        (1..size).any(|pos| {
            let prev = cells[line_index(size, dir, l, pos - 1)];
            let cur = cells[line_index(size, dir, l, pos)];
            cur != 0 && (prev == 0 || prev == cur)
        })
    })
}

pub(crate) fn count_empty(cells: &[u8]) -> usize {
    cells.iter().filter(|&&c| c == 0).count()
}

/// Index of the `nth` empty cell in row-major order.
pub(crate) fn nth_empty(cells: &[u8], nth: usize) -> Option<usize> {
    cells
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c == 0)
        .nth(nth)
        .map(|(i, _)| i)
}

/// Displayed value of a tile exponent (0 for an empty cell), saturating at `u64::MAX`.
#[inline]
pub fn tile_value(exponent: u8) -> u64 {
    match exponent {
        0 => 0,
        k => 1u64.checked_shl(u32::from(k)).unwrap_or(u64::MAX),
    }
}

/// Sum of the displayed values of all tiles.
pub(crate) fn score(cells: &[u8]) -> u64 {
    cells.iter().fold(0u64, |acc, &c| acc.saturating_add(tile_value(c)))
}

/// Exponent 1 (a 2) or, with probability `four_probability`, exponent 2 (a 4).
pub(crate) fn random_exponent<R: Rng + ?Sized>(rng: &mut R, four_probability: f64) -> u8 {
    if rng.gen_bool(four_probability) {
        2
    } else {
        1
    }
}

pub(crate) fn format_val(exponent: u8) -> String {
    match exponent {
        0 => String::new(),
        k if k < 64 => tile_value(k).to_string(),
        k => format!("2^{}", k),
    }
}
