use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{WrapErr, eyre};
use cubie_core::{Algorithm, Color, Cube, Net};
use env_logger::TimestampPrecision;
use itertools::Itertools;
use log::{LevelFilter, debug};
use owo_colors::OwoColorize;
use trainer::{Trainer, TrainerConfig, parity_answer};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// A trainer configuration file in TOML format. The built in letter
    /// scheme is used if this is left out.
    #[arg(long, short = 'c', value_name = "TRAINER_CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    log_level: u8,

    /// Print nets as plain letters
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a move sequence to a solved cube and print its net.
    Apply {
        /// The moves, e.g. "R U' F2".
        #[arg(required = true, allow_hyphen_values = true)]
        moves: Vec<String>,
    },
    /// Print the moves that undo a move sequence.
    Invert {
        #[arg(required = true, allow_hyphen_values = true)]
        moves: Vec<String>,
    },
    /// Print the setup and cleanup moves for a letter.
    Setup { piece: Piece, letter: char },
    /// Scramble, then solve blindfolded one letter at a time.
    Train,
}

#[derive(Clone, Copy, ValueEnum)]
enum Piece {
    Edge,
    Corner,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.log_level {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = match &cli.config {
        Some(path) => TrainerConfig::load(path)
            .wrap_err_with(|| format!("Could not load {}", path.display()))?,
        None => TrainerConfig::default(),
    };
    debug!("Using {config:?}");

    let painter = Painter {
        colored: !cli.no_color,
    };

    match cli.command {
        Commands::Apply { moves } => {
            let mut cube = Cube::solved();
            cube.apply_moves(&moves.iter().join(" "))?;
            println!("{}", painter.net(&cube));
        }
        Commands::Invert { moves } => {
            let algorithm = moves.iter().join(" ").parse::<Algorithm>()?;
            println!("{}", algorithm.inverse());
        }
        Commands::Setup { piece, letter } => {
            let trainer = Trainer::new(&config)?;
            let table = match piece {
                Piece::Edge => trainer.edges(),
                Piece::Corner => trainer.corners(),
            };
            let (setup, cleanup) = table.setup_algorithms(letter.to_ascii_uppercase())?;
            if setup.is_empty() {
                println!("`{letter}` is the target, no setup needed");
            } else {
                println!("Setup:   {setup}");
                println!("Cleanup: {cleanup}");
            }
        }
        Commands::Train => train(Trainer::new(&config)?, painter)?,
    }

    Ok(())
}

#[derive(Clone, Copy)]
struct Painter {
    colored: bool,
}

impl Painter {
    fn net(self, cube: &Cube) -> String {
        let net = Net::of(cube);
        if !self.colored {
            return net.to_string();
        }
        net.render_with(|color| {
            let letter = color.letter();
            match color {
                Color::White => letter.bright_white().to_string(),
                Color::Yellow => letter.bright_yellow().to_string(),
                Color::Green => letter.bright_green().to_string(),
                Color::Blue => letter.bright_blue().to_string(),
                Color::Red => letter.bright_red().to_string(),
                Color::Orange => letter.truecolor(255, 140, 0).to_string(),
            }
        })
    }
}

fn prompt(message: &str) -> io::Result<String> {
    println!("{message}");
    print!("> ");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof));
    }
    Ok(line.trim().to_owned())
}

/// Keep asking until `accept` takes the answer.
fn prompt_until<T, E: std::fmt::Display>(
    message: &str,
    mut accept: impl FnMut(&str) -> Result<T, E>,
) -> color_eyre::Result<T> {
    loop {
        let answer = prompt(message).wrap_err("No more input")?;
        match accept(&answer) {
            Ok(v) => break Ok(v),
            Err(e) => println!("{}", e.red()),
        }
    }
}

fn train(mut trainer: Trainer, painter: Painter) -> color_eyre::Result<()> {
    prompt_until("Enter your scramble:", |moves| trainer.scramble(moves))?;
    println!("\nYour cube looks like:\n{}\n", painter.net(trainer.cube()));

    let edges = prompt_until("Edges?", |letters| {
        let letters = letters.to_ascii_uppercase();
        trainer.check_edges(&letters).map(|()| letters)
    })?;
    let parity = prompt_until("Parity? [y/n]", parity_answer)?;
    let corners = prompt_until("Corners?", |letters| {
        let letters = letters.to_ascii_uppercase();
        trainer.check_corners(&letters).map(|()| letters)
    })?;

    trainer.do_edges(&edges)?;
    println!("\nAfter edges:\n{}", painter.net(trainer.cube()));

    if parity {
        trainer.do_parity();
        println!("\nAfter parity:\n{}", painter.net(trainer.cube()));
    }

    trainer.do_corners(&corners)?;
    println!("\nAfter corners:\n{}", painter.net(trainer.cube()));

    if trainer.is_solved() {
        println!("\n{}", "Solved!".green());
        Ok(())
    } else {
        Err(eyre!("The cube is not solved"))
    }
}
