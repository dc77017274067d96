//! Mirror routing: direction redirection glyphs.
//!
//! Each mirror is a fixed four-entry table (direction-in to direction-out,
//! indexed N/W/S/E), not branching logic. The reflectors `\` and `/` swap
//! axes; the funnels `>`, `v`, `<`, `^` redirect the flows not aligned
//! with their axis onto their forward direction and pass the opposing
//! flow straight through. The corner glyphs are conditional funnels: they
//! apply their table only when the active stack's top cell is zero.

use crate::grid::Direction;

/// The four conditional mirror glyphs.
pub const CONDITIONALS: [char; 4] = ['⌞', '⌜', '⌟', '⌝'];

/// True for every mirror glyph, conditional or not.
pub fn is_mirror(glyph: char) -> bool {
    table(glyph).is_some()
}

/// True only for the conditional variants.
pub fn is_conditional(glyph: char) -> bool {
    CONDITIONALS.contains(&glyph)
}

/// Compute the outgoing direction for a mirror glyph. Conditional mirrors
/// redirect only when the active stack's top is zero; `top_is_zero` is
/// that peek, supplied by the machine. Non-mirror glyphs pass the
/// incoming direction through unchanged.
pub fn route(glyph: char, incoming: Direction, top_is_zero: bool) -> Direction {
    if is_conditional(glyph) && !top_is_zero {
        return incoming;
    }
    match table(glyph) {
        Some(outgoing) => outgoing[incoming.table_index()],
        None => incoming,
    }
}

/// Routing table for a glyph, indexed by [`Direction::table_index`] (N, W, S, E).
fn table(glyph: char) -> Option<[Direction; 4]> {
    use Direction::{East, North, South, West};
    Some(match glyph {
        '\\' => [West, North, East, South],
        '/' => [East, South, West, North],
        '>' => [East, West, East, East],
        'v' => [North, South, South, South],
        '<' => [West, West, West, East],
        '^' => [North, North, South, North],
        '⌞' => [East, North, East, North],
        '⌜' => [East, South, East, South],
        '⌟' => [West, North, West, North],
        '⌝' => [West, South, West, South],
        _ => return None,
    })
}
