use std::collections::BTreeMap;

use cubie_core::Algorithm;

use crate::{
    TrainerError,
    config::{ConfigError, SetupMove},
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
    next: Option<char>,
    setup: Algorithm,
}

/// A letter scheme whose setup moves have been parsed and checked. Every
/// letter in the table reaches the swap target by following `next`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupTable {
    steps: BTreeMap<char, Step>,
}

impl SetupTable {
    /// # Errors
    ///
    /// If a setup doesn't parse, a `next` letter is missing from the table, or
    /// following `next` from some letter never ends.
    pub fn compile(
        table: &'static str,
        setups: &BTreeMap<char, SetupMove>,
    ) -> Result<SetupTable, ConfigError> {
        let mut steps = BTreeMap::new();
        for (&letter, setup_move) in setups {
            if let Some(next) = setup_move.next
                && !setups.contains_key(&next)
            {
                return Err(ConfigError::DanglingLetter {
                    table,
                    letter,
                    next,
                });
            }
            let setup = setup_move
                .setup
                .parse::<Algorithm>()
                .map_err(|source| ConfigError::Notation {
                    what: format!("{table} setup for `{letter}`"),
                    source,
                })?;
            steps.insert(
                letter,
                Step {
                    next: setup_move.next,
                    setup,
                },
            );
        }

        let compiled = SetupTable { steps };
        for &letter in compiled.steps.keys() {
            compiled
                .setup_algorithms(letter)
                .map_err(|source| ConfigError::Setup { table, source })?;
        }
        Ok(compiled)
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.steps.keys().copied()
    }

    /// The moves that bring `letter` to the swap target, and the moves that
    /// put it back. The setups along the chain are concatenated in order and
    /// the cleanup is their inverse.
    ///
    /// # Errors
    ///
    /// If `letter` isn't in the table or its chain loops.
    pub fn setup_algorithms(&self, letter: char) -> Result<(Algorithm, Algorithm), TrainerError> {
        let mut setup = Algorithm::default();
        let mut current = letter;
        // A chain that doesn't loop visits each letter at most once.
        for _ in 0..=self.steps.len() {
            let step = self
                .steps
                .get(&current)
                .ok_or(TrainerError::UnknownLetter(current))?;
            let Some(next) = step.next else {
                let cleanup = setup.inverse();
                return Ok((setup, cleanup));
            };
            setup.extend(&step.setup);
            current = next;
        }
        Err(TrainerError::SetupCycle(letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(char, Option<char>, &str)]) -> BTreeMap<char, SetupMove> {
        entries
            .iter()
            .map(|&(letter, next, setup)| {
                (
                    letter,
                    SetupMove {
                        next,
                        setup: setup.to_owned(),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn chains_concatenate() {
        let compiled = SetupTable::compile(
            "edge",
            &table(&[
                ('D', None, ""),
                ('X', Some('D'), "L2"),
                ('U', Some('X'), "D'"),
                ('S', Some('U'), "Lw'"),
                ('O', Some('S'), "D"),
            ]),
        )
        .unwrap();

        let (setup, cleanup) = compiled.setup_algorithms('O').unwrap();
        assert_eq!(setup.to_string(), "D Lw' D' L2");
        assert_eq!(cleanup.to_string(), "L2' D Lw D'");

        let (setup, cleanup) = compiled.setup_algorithms('D').unwrap();
        assert!(setup.is_empty());
        assert!(cleanup.is_empty());

        assert_eq!(compiled.letters().collect::<String>(), "DOSUX");
    }

    #[test]
    fn unknown_letter() {
        let compiled = SetupTable::compile("edge", &table(&[('D', None, "")])).unwrap();
        assert_eq!(
            compiled.setup_algorithms('B'),
            Err(TrainerError::UnknownLetter('B'))
        );
    }

    #[test]
    fn dangling_letter() {
        let err = SetupTable::compile("corner", &table(&[('A', Some('Z'), "R")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DanglingLetter {
                table: "corner",
                letter: 'A',
                next: 'Z'
            }
        ));
    }

    #[test]
    fn cycle() {
        let err = SetupTable::compile(
            "edge",
            &table(&[('A', Some('B'), "R"), ('B', Some('A'), "U")]),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Setup {
                source: TrainerError::SetupCycle('A'),
                ..
            }
        ));
    }

    #[test]
    fn bad_setup() {
        let err = SetupTable::compile("edge", &table(&[('A', None, "R Q")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid edge setup for `A`: `Q` is not a move: `Q` does not name a face, a rotation or a slice"
        );
    }
}
