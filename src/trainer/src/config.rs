use std::{collections::BTreeMap, fs, path::Path};

use cubie_core::NotationSyntaxError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::TrainerError;

/// Swaps the buffer edge with the edge target.
pub const EDGE_SWAP: &str = "R U R' U' R' F R2 U' R' U' R U R' F'";
/// Fixes the odd edge permutation left by an odd number of edge swaps.
pub const PARITY: &str = "(R U' R' U') (R U R D) (R' U' R D') (R' U2' R') U'";
/// Swaps the buffer corner with the corner target.
pub const CORNER_SWAP: &str = "R U' R' U' R U R' F' R U R' U' R' F R";

/// One step of a setup chain: doing `setup` brings the sticker to where
/// `next` is, or the sticker is already the swap target if there is no
/// `next`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SetupMove {
    #[serde(default)]
    pub next: Option<char>,
    #[serde(default)]
    pub setup: String,
}

impl SetupMove {
    fn new(next: Option<char>, setup: &str) -> SetupMove {
        SetupMove {
            next,
            setup: setup.to_owned(),
        }
    }
}

/// Trainer configuration, read from TOML. Anything left out keeps its
/// built in value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainerConfig {
    pub edge_swap: String,
    pub parity: String,
    pub corner_swap: String,
    pub edge_setups: BTreeMap<char, SetupMove>,
    pub corner_setups: BTreeMap<char, SetupMove>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read the trainer configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse the trainer configuration: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid {what}: {source}")]
    Notation {
        what: String,
        source: NotationSyntaxError,
    },
    #[error("The {table} setup for `{letter}` leads to `{next}`, which has no setup")]
    DanglingLetter {
        table: &'static str,
        letter: char,
        next: char,
    },
    #[error("Invalid {table} setups: {source}")]
    Setup {
        table: &'static str,
        source: TrainerError,
    },
}

impl TrainerConfig {
    /// # Errors
    ///
    /// If the file can't be read or isn't a valid configuration. The
    /// algorithms themselves are checked by [`crate::Trainer::new`].
    pub fn load(path: &Path) -> Result<TrainerConfig, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}

impl Default for TrainerConfig {
    fn default() -> Self {
        TrainerConfig {
            edge_swap: EDGE_SWAP.to_owned(),
            parity: PARITY.to_owned(),
            corner_swap: CORNER_SWAP.to_owned(),
            edge_setups: default_edge_setups(),
            corner_setups: default_corner_setups(),
        }
    }
}

// Lettering and setups follow https://jperm.net/bld

fn default_edge_setups() -> BTreeMap<char, SetupMove> {
    // B and M are the buffer and have no setup.
    [
        // Target
        ('D', None, ""),
        // Around the L slice
        ('R', Some('D'), "L"),
        ('X', Some('D'), "L2"),
        ('L', Some('D'), "L'"),
        // Bottom layer, one D turn from X
        ('W', Some('X'), "D"),
        ('V', Some('X'), "D2"),
        ('U', Some('X'), "D'"),
        // E slice, one Dw turn from the sides of the L face
        ('N', Some('R'), "Dw"),
        ('J', Some('R'), "Dw2"),
        ('F', Some('R'), "Dw'"),
        ('H', Some('L'), "Dw"),
        ('T', Some('L'), "Dw2"),
        ('P', Some('L'), "Dw'"),
        // M slice, one Lw turn from the bottom face
        ('K', Some('W'), "Lw"),
        ('C', Some('W'), "Lw2"),
        ('Q', Some('W'), "Lw'"),
        ('I', Some('U'), "Lw"),
        ('A', Some('U'), "Lw2"),
        ('S', Some('U'), "Lw'"),
        // Into the E slice with an L turn
        ('E', Some('F'), "L"),
        ('G', Some('H'), "L"),
        // The only one that needs four moves
        ('O', Some('S'), "D"),
    ]
    .into_iter()
    .map(|(letter, next, setup)| (letter, SetupMove::new(next, setup)))
    .collect()
}

fn default_corner_setups() -> BTreeMap<char, SetupMove> {
    // E, A and R are the buffer.
    [
        // Target
        ('V', None, ""),
        // D turn
        ('U', Some('V'), "D"),
        ('X', Some('V'), "D2"),
        ('W', Some('V'), "D'"),
        // R turn
        ('T', Some('V'), "R"),
        ('B', Some('V'), "R2"),
        ('J', Some('V'), "R'"),
        ('Q', Some('W'), "R"),
        ('C', Some('W'), "R2"),
        ('K', Some('W'), "R'"),
        // F turn
        ('M', Some('V'), "F"),
        ('D', Some('V'), "F2"),
        ('G', Some('V'), "F'"),
        ('P', Some('U'), "F"),
        ('F', Some('U'), "F'"),
        // D turn down to the other layer
        ('S', Some('G'), "D"),
        ('O', Some('G'), "D2"),
        ('H', Some('T'), "D'"),
        ('L', Some('T'), "D2"),
        // FR and RF
        ('I', Some('J'), "F"),
        ('N', Some('M'), "R'"),
    ]
    .into_iter()
    .map(|(letter, next, setup)| (letter, SetupMove::new(next, setup)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffers_have_no_setup() {
        let config = TrainerConfig::default();
        for buffer in ['B', 'M'] {
            assert!(!config.edge_setups.contains_key(&buffer));
        }
        for buffer in ['E', 'A', 'R'] {
            assert!(!config.corner_setups.contains_key(&buffer));
        }
        assert_eq!(config.edge_setups.len(), 22);
        assert_eq!(config.corner_setups.len(), 21);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: TrainerConfig = toml::from_str(
            r#"
            parity = "R2"

            [edge_setups]
            D = {}
            A = { next = "D", setup = "M2" }
            "#,
        )
        .unwrap();

        assert_eq!(config.parity, "R2");
        assert_eq!(config.edge_swap, EDGE_SWAP);
        assert_eq!(config.corner_setups, default_corner_setups());
        assert_eq!(
            config.edge_setups,
            BTreeMap::from([
                ('D', SetupMove::new(None, "")),
                ('A', SetupMove::new(Some('D'), "M2")),
            ])
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(toml::from_str::<TrainerConfig>("edge_sawp = \"R\"").is_err());
    }
}
