//! Number formatting for the fixed-column grammar.

use crate::domain::value_objects::StationElevation;

/// Station/elevation pairs per coordinate line.
pub(crate) const PAIRS_PER_LINE: usize = 5;

/// Right-aligned, fixed precision: `fixed(2000.0, 8, 1)` is `"  2000.0"`.
pub(crate) fn fixed(value: f64, width: usize, precision: usize) -> String {
    format!("{value:>width$.precision$}")
}

/// Shortest decimal that round-trips, always with a fractional part:
/// `150.0`, `0.001`.
pub(crate) fn shortest(value: f64) -> String {
    format!("{value:?}")
}

/// Integral values without a fractional part: `100`, `100.5`.
pub(crate) fn plain(value: f64) -> String {
    format!("{value}")
}

/// Coordinate table: `%8.0f%8.2f` per pair, [`PAIRS_PER_LINE`] pairs per
/// line, every line newline-terminated and the last one only as long as it
/// needs to be.
pub(crate) fn coordinate_lines(points: &[StationElevation]) -> String {
    let mut out = String::with_capacity(points.len() * 16 + points.len() / PAIRS_PER_LINE + 1);
    for line in points.chunks(PAIRS_PER_LINE) {
        for p in line {
            out.push_str(&fixed(p.station, 8, 0));
            out.push_str(&fixed(p.elevation, 8, 2));
        }
        out.push('\n');
    }
    out
}
