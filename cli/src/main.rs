use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use floodit_core::*;

mod render;

/// Flood the board with a single color before running out of attempts.
///
/// Pick a cell by typing its column letter and row number (`c4`), `r` starts a new board, `q` quits.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Cells per side, 2 to 26
    #[arg(short, long)]
    size: Option<Coord>,

    /// Colors in play, 3 to 8
    #[arg(short, long)]
    colors: Option<u8>,

    /// Seed for board generation, random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file providing `size` and `colors`, overridden by the flags above
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(flatten)]
    verbose: Verbosity,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
            }
            None => GameConfig::default(),
        };

        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(colors) = self.colors {
            config.colors = colors;
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Command {
    Select(Coord2),
    Reset,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim().to_ascii_lowercase();
        match line.as_str() {
            "q" | "quit" => return Some(Self::Quit),
            "r" | "reset" => return Some(Self::Reset),
            _ => {}
        }

        let mut chars = line.chars();
        let column = chars.next().filter(char::is_ascii_lowercase)?;
        let row: Coord = chars.as_str().trim().parse().ok()?;
        let col = column as u8 - b'a';
        Some(Self::Select((row.checked_sub(1)?, col)))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    let config = cli.game_config()?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("Starting {:?} with seed {}", config, seed);

    let mut game = Game::new(config, RandomBoardGenerator::from_seed(seed))?;
    game.settle();

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut lines = stdin.lock().lines();

    loop {
        render::draw(&mut stdout, &Snapshot::from_game(&game))?;
        write!(stdout, "> ")?;
        stdout.flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };

        match Command::parse(&line) {
            Some(Command::Quit) => break,
            Some(Command::Reset) => {
                game.reset()?;
                game.settle();
            }
            Some(Command::Select(coords)) => {
                if game.select(coords).has_update() {
                    let outcome = game.settle();
                    log::debug!("Selection at {:?} ended with {:?}", coords, outcome);
                } else {
                    writeln!(stdout, "Nothing to flood there")?;
                }
            }
            None => writeln!(stdout, "Type a cell like `b3`, `r` to reset or `q` to quit")?,
        }
    }

    Ok(())
}
