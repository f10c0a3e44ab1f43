mod terminal;

pub use terminal::{BoardView, DisplayError, RenderStyle, TerminalDisplay, render_position};
