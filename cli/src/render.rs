use std::io::{self, Write};

use floodit_core::*;

const RESET: &str = "\x1b[0m";

/// ANSI background and a letter for each palette color, so the board also reads without color support.
fn swatch(color: Color) -> (&'static str, char) {
    use Color::*;
    match color {
        Red => ("\x1b[41;97m", 'R'),
        Green => ("\x1b[42;30m", 'G'),
        Blue => ("\x1b[44;97m", 'B'),
        Yellow => ("\x1b[43;30m", 'Y'),
        Orange => ("\x1b[48;5;208;30m", 'O'),
        Pink => ("\x1b[48;5;218;30m", 'P'),
        Cyan => ("\x1b[46;30m", 'C'),
        Magenta => ("\x1b[45;97m", 'M'),
    }
}

pub fn draw(out: &mut impl Write, snapshot: &Snapshot) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Flood-It  size {}  colors {}  attempts {}/{}",
        snapshot.size,
        snapshot.palette.len(),
        snapshot.attempts,
        snapshot.max_attempts
    )?;

    write!(out, "    ")?;
    for col in 0..snapshot.size {
        write!(out, " {} ", char::from(b'a' + col))?;
    }
    writeln!(out)?;

    for row in 0..snapshot.size {
        write!(out, "{:>3} ", row + 1)?;
        for col in 0..snapshot.size {
            let (style, letter) = swatch(snapshot.color_at((row, col)));
            write!(out, "{style} {letter} {RESET}")?;
        }
        writeln!(out)?;
    }

    match snapshot.status {
        GameStatus::Playing => {
            let (style, letter) = swatch(snapshot.target);
            writeln!(out, "Flooding with {style} {letter} {RESET}")
        }
        GameStatus::Won => writeln!(
            out,
            "You win, congratulations! You used {} of {} attempts.",
            snapshot.attempts, snapshot.max_attempts
        ),
        GameStatus::Lost => writeln!(out, "Sorry, you lose! You ran out of attempts."),
    }
}
