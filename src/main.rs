use bitboard_position::BoardDisplay;
use bitboard_position::game_state::Position;
use bitboard_position::pieces::PieceKind;
use bitboard_position::visualization::{DisplayError, RenderStyle, TerminalDisplay};

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error(transparent)]
    Display(#[from] DisplayError),
    #[error(transparent)]
    Coordinate(#[from] bitboard_position::game_state::CoordinateError),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), DemoError> {
    let mut display = TerminalDisplay::new(RenderStyle::Unicode);
    let mut position = Position::new();

    display.show(&position)?;
    println!();
    println!("White to move... e4");
    position.move_algebraic(PieceKind::WhitePawn, "e2", "e4")?;
    println!();
    display.show(&position)?;
    Ok(())
}
