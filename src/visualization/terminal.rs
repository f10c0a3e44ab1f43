use std::fmt;
use std::io::{self, Write};

use crate::BoardDisplay;
use crate::game_state::{FILES, Position, RANKS, Square};
use crate::pieces::PieceKind;

/// Placeholder for an empty square.
const EMPTY_CELL: char = '-';

/// How pieces are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// Chess glyphs (♖ ♞ ...)
    #[default]
    Unicode,
    /// Piece letters, uppercase for white (R n ...)
    Ascii,
}

impl RenderStyle {
    fn cell(self, kind: Option<PieceKind>) -> char {
        match (kind, self) {
            (Some(kind), RenderStyle::Unicode) => kind.unicode(),
            (Some(kind), RenderStyle::Ascii) => kind.letter(),
            (None, _) => EMPTY_CELL,
        }
    }
}

/// Text grid of a position: a file header, then ranks 8 down to 1.
///
/// ```text
///  A B C D E F G H
/// 8♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜
/// 7♟ ♟ ♟ ♟ ♟ ♟ ♟ ♟
/// 6- - - - - - - -
/// ...
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    position: &'a Position,
    style: RenderStyle,
}

impl<'a> BoardView<'a> {
    pub fn new(position: &'a Position, style: RenderStyle) -> Self {
        Self { position, style }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for file in 0..FILES {
            write!(f, " {}", (b'A' + file) as char)?;
        }
        writeln!(f)?;

        for rank in (0..RANKS).rev() {
            write!(f, "{}", rank + 1)?;
            for file in 0..FILES {
                if file > 0 {
                    f.write_str(" ")?;
                }
                let kind = Square::from_coords(file, rank)
                    .ok()
                    .and_then(|square| self.position.square_at(square));
                write!(f, "{}", self.style.cell(kind))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&BoardView::new(self, RenderStyle::Unicode), f)
    }
}

/// Error type for terminal display operations.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),
}

/// Prints positions to stdout.
#[derive(Debug, Default)]
pub struct TerminalDisplay {
    style: RenderStyle,
}

impl TerminalDisplay {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }
}

impl BoardDisplay for TerminalDisplay {
    type Error = DisplayError;

    fn show(&mut self, position: &Position) -> Result<(), Self::Error> {
        render_position(&mut io::stdout().lock(), position, self.style)
    }
}

/// Render a position to any writer.
pub fn render_position(
    w: &mut impl Write,
    position: &Position,
    style: RenderStyle,
) -> Result<(), DisplayError> {
    write!(w, "{}", BoardView::new(position, style))?;
    w.flush()?;
    Ok(())
}
