//! A blindfold solving trainer. Each letter of a memorized sequence names a
//! sticker; the trainer sets that sticker up at the swap target, swaps it
//! with the buffer and undoes the setup, so a correct memo solves the cube.

#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod config;
pub mod setup;

use cubie_core::{Algorithm, Cube, NotationSyntaxError};
use log::info;
use thiserror::Error;

pub use config::{ConfigError, SetupMove, TrainerConfig};
pub use setup::SetupTable;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrainerError {
    #[error("`{0}` has no setup in the letter scheme")]
    UnknownLetter(char),
    #[error("The setups starting from `{0}` never reach the target")]
    SetupCycle(char),
    #[error(transparent)]
    Notation(#[from] NotationSyntaxError),
    #[error("Unknown parity answer `{0}`, expected y or n")]
    UnknownParity(String),
}

/// Interpret an answer to "is there parity?".
pub fn parity_answer(answer: &str) -> Result<bool, TrainerError> {
    match answer.trim() {
        "y" | "Y" | "1" => Ok(true),
        "n" | "N" | "0" => Ok(false),
        other => Err(TrainerError::UnknownParity(other.to_owned())),
    }
}

#[derive(Debug, Clone)]
pub struct Trainer {
    cube: Cube,
    edge_swap: Algorithm,
    parity: Algorithm,
    corner_swap: Algorithm,
    edges: SetupTable,
    corners: SetupTable,
}

fn parse_algorithm(what: &str, moves: &str) -> Result<Algorithm, ConfigError> {
    moves
        .parse()
        .map_err(|source| ConfigError::Notation {
            what: what.to_owned(),
            source,
        })
}

impl Trainer {
    /// A trainer holding a solved cube.
    pub fn new(config: &TrainerConfig) -> Result<Trainer, ConfigError> {
        Ok(Trainer {
            cube: Cube::solved(),
            edge_swap: parse_algorithm("edge swap", &config.edge_swap)?,
            parity: parse_algorithm("parity", &config.parity)?,
            corner_swap: parse_algorithm("corner swap", &config.corner_swap)?,
            edges: SetupTable::compile("edge", &config.edge_setups)?,
            corners: SetupTable::compile("corner", &config.corner_setups)?,
        })
    }

    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    pub fn is_solved(&self) -> bool {
        self.cube.is_solved()
    }

    pub fn edges(&self) -> &SetupTable {
        &self.edges
    }

    pub fn corners(&self) -> &SetupTable {
        &self.corners
    }

    /// Apply `moves` to the cube as it is. Nothing happens if they don't
    /// parse.
    pub fn scramble(&mut self, moves: &str) -> Result<(), TrainerError> {
        self.cube.apply_moves(moves)?;
        info!(target: "trainer", "Scrambled with {moves}\n{}", self.cube);
        Ok(())
    }

    pub fn do_edge(&mut self, letter: char) -> Result<(), TrainerError> {
        self.do_edges(&letter.to_string())
    }

    /// Solve the edges named by `letters` in order, ignoring whitespace. No
    /// letter is done unless all of them have setups.
    pub fn do_edges(&mut self, letters: &str) -> Result<(), TrainerError> {
        let plan = plan(&self.edges, letters)?;
        let swap = self.edge_swap.clone();
        self.execute("Edge", &plan, &swap);
        Ok(())
    }

    pub fn check_edges(&self, letters: &str) -> Result<(), TrainerError> {
        plan(&self.edges, letters).map(drop)
    }

    pub fn do_parity(&mut self) {
        self.cube.apply(&self.parity);
        info!(target: "trainer", "Parity\n{}", self.cube);
    }

    pub fn do_corner(&mut self, letter: char) -> Result<(), TrainerError> {
        self.do_corners(&letter.to_string())
    }

    /// Solve the corners named by `letters` in order, ignoring whitespace.
    /// No letter is done unless all of them have setups.
    pub fn do_corners(&mut self, letters: &str) -> Result<(), TrainerError> {
        let plan = plan(&self.corners, letters)?;
        let swap = self.corner_swap.clone();
        self.execute("Corner", &plan, &swap);
        Ok(())
    }

    pub fn check_corners(&self, letters: &str) -> Result<(), TrainerError> {
        plan(&self.corners, letters).map(drop)
    }

    fn execute(&mut self, piece: &str, plan: &[Swap], swap: &Algorithm) {
        for Swap {
            letter,
            setup,
            cleanup,
        } in plan
        {
            self.cube.apply(setup);
            self.cube.apply(swap);
            self.cube.apply(cleanup);
            info!(target: "trainer", "{piece}: {letter}\n{}", self.cube);
        }
    }
}

struct Swap {
    letter: char,
    setup: Algorithm,
    cleanup: Algorithm,
}

fn plan(table: &SetupTable, letters: &str) -> Result<Vec<Swap>, TrainerError> {
    letters
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|letter| {
            let (setup, cleanup) = table.setup_algorithms(letter)?;
            Ok(Swap {
                letter,
                setup,
                cleanup,
            })
        })
        .collect()
}
