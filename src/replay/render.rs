//! Plain glyph rendering of the board.

use crate::game::{Board, Coord, PlayerId};

/// Display glyph for a cell owner.
///
/// Unclaimed cells are blank, player 1 is `X`, player 2 is `O`.
#[must_use]
pub const fn glyph(owner: PlayerId) -> char {
    match owner {
        0 => ' ',
        1 => 'X',
        2 => 'O',
        _ => '?',
    }
}

/// Single-character size indicator: digits up to 9, `+` above.
#[must_use]
pub fn size_char(size: i32) -> char {
    u32::try_from(size)
        .ok()
        .and_then(|size| char::from_digit(size, 10))
        .unwrap_or(if size < 0 { '-' } else { '+' })
}

/// Render the board with one line per x and one glyph per y.
///
/// Output for the default layout:
/// ```text
///      X
///
///
///
///
///
///
///
///
///      O
/// ```
#[must_use]
pub fn render_ascii(board: &Board) -> String {
    let size = board.size();
    let mut output = String::with_capacity(usize::from(size) * (usize::from(size) + 1));

    for x in 0..size {
        for y in 0..size {
            let owner = board.get(Coord::new(x, y)).map_or(0, |cell| cell.owner);
            output.push(glyph(owner));
        }
        output.push('\n');
    }

    output
}
