//! Standard cube notation.
//!
//! An algorithm is a list of tokens separated by whitespace or parentheses;
//! parentheses only group moves for the reader and need not balance. Each
//! token is a base letter followed by an optional `2` and an optional `'`:
//!
//! - `R L U D F B` turn a face, and a following `w` (or writing the letter in
//!   lowercase) turns the middle layer behind it too;
//! - `x y z` rotate the whole cube like `R U F`;
//! - `M E S` turn a middle slice like `L D F`.

use std::{fmt, str::FromStr};

use itertools::Itertools;
use thiserror::Error;

use crate::{Cube, Face};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationSyntaxError {
    #[error("Expected a move but found nothing")]
    Empty,
    #[error("`{token}` is not a move: `{letter}` does not name a face, a rotation or a slice")]
    UnknownMove { token: String, letter: char },
    #[error("`{token}` is not a move: unexpected `{rest}` at the end")]
    TrailingCharacters { token: String, rest: String },
}

impl NotationSyntaxError {
    /// The token that failed to parse.
    pub fn token(&self) -> Option<&str> {
        match self {
            NotationSyntaxError::Empty => None,
            NotationSyntaxError::UnknownMove { token, .. }
            | NotationSyntaxError::TrailingCharacters { token, .. } => Some(token),
        }
    }
}

/// A whole cube rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    X,
    Y,
    Z,
}

impl Rotation {
    /// The face whose clockwise turn this rotation follows.
    pub const fn face(self) -> Face {
        match self {
            Rotation::X => Face::R,
            Rotation::Y => Face::U,
            Rotation::Z => Face::F,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Rotation::X => 'x',
            Rotation::Y => 'y',
            Rotation::Z => 'z',
        }
    }
}

/// A middle slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slice {
    M,
    E,
    S,
}

impl Slice {
    /// The face whose clockwise turn this slice follows. Note that M and E
    /// turn against x and y, while S turns with z.
    pub const fn face(self) -> Face {
        match self {
            Slice::M => Face::L,
            Slice::E => Face::D,
            Slice::S => Face::F,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Slice::M => 'M',
            Slice::E => 'E',
            Slice::S => 'S',
        }
    }
}

/// What a move turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// The outer layer on `face`, together with the middle layer behind it
    /// if `wide`.
    Face { face: Face, wide: bool },
    Rotation(Rotation),
    Slice(Slice),
}

/// A single parsed move: what to turn and by how many clockwise quarter
/// turns, one of -2, -1, 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    kind: MoveKind,
    turns: i32,
}

impl Move {
    pub fn kind(self) -> MoveKind {
        self.kind
    }

    pub fn turns(self) -> i32 {
        self.turns
    }

    #[must_use]
    pub fn inverse(self) -> Move {
        Move {
            kind: self.kind,
            turns: -self.turns,
        }
    }

    /// Perform this move on `cube` with the two cube primitives.
    pub fn apply_to(self, cube: &mut Cube) {
        let turns = self.turns;
        match self.kind {
            MoveKind::Face { face, wide: false } => cube.rotate_face(face, turns),
            // Rw = x L
            MoveKind::Face { face, wide: true } => {
                cube.rotate_whole_cube(face, turns);
                cube.rotate_face(face.opposite(), turns);
            }
            MoveKind::Rotation(rotation) => cube.rotate_whole_cube(rotation.face(), turns),
            // M = Lw L'
            MoveKind::Slice(slice) => {
                let face = slice.face();
                cube.rotate_whole_cube(face, turns);
                cube.rotate_face(face.opposite(), turns);
                cube.rotate_face(face, -turns);
            }
        }
    }
}

impl FromStr for Move {
    type Err = NotationSyntaxError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let letter = chars.next().ok_or(NotationSyntaxError::Empty)?;
        let mut rest = chars.as_str();

        let kind = match letter {
            'x' => MoveKind::Rotation(Rotation::X),
            'y' => MoveKind::Rotation(Rotation::Y),
            'z' => MoveKind::Rotation(Rotation::Z),
            'M' => MoveKind::Slice(Slice::M),
            'E' => MoveKind::Slice(Slice::E),
            'S' => MoveKind::Slice(Slice::S),
            _ => match (
                Face::from_letter(letter),
                Face::from_letter(letter.to_ascii_uppercase()),
            ) {
                (Some(face), _) => {
                    let wide = match rest.strip_prefix('w') {
                        Some(after) => {
                            rest = after;
                            true
                        }
                        None => false,
                    };
                    MoveKind::Face { face, wide }
                }
                (None, Some(face)) => MoveKind::Face { face, wide: true },
                (None, None) => {
                    return Err(NotationSyntaxError::UnknownMove {
                        token: token.to_owned(),
                        letter,
                    });
                }
            },
        };

        let mut turns = 1;
        if let Some(after) = rest.strip_prefix('2') {
            rest = after;
            turns = 2;
        }
        if let Some(after) = rest.strip_prefix('\'') {
            rest = after;
            turns = -turns;
        }

        if !rest.is_empty() {
            return Err(NotationSyntaxError::TrailingCharacters {
                token: token.to_owned(),
                rest: rest.to_owned(),
            });
        }

        Ok(Move { kind, turns })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MoveKind::Face { face, wide } => {
                write!(f, "{face}")?;
                if wide {
                    write!(f, "w")?;
                }
            }
            MoveKind::Rotation(rotation) => write!(f, "{}", rotation.letter())?,
            MoveKind::Slice(slice) => write!(f, "{}", slice.letter())?,
        }

        match self.turns {
            1 => Ok(()),
            -1 => write!(f, "'"),
            2 => write!(f, "2"),
            _ => write!(f, "2'"),
        }
    }
}

/// Split an algorithm into its move tokens.
pub fn tokens(algorithm: &str) -> impl Iterator<Item = &str> {
    algorithm
        .split(|c: char| c.is_whitespace() || c == '(' || c == ')')
        .filter(|token| !token.is_empty())
}

/// A fully parsed sequence of moves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Algorithm {
    moves: Vec<Move>,
}

impl Algorithm {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The algorithm that undoes this one.
    #[must_use]
    pub fn inverse(&self) -> Algorithm {
        self.moves.iter().rev().map(|move_| move_.inverse()).collect()
    }
}

impl FromStr for Algorithm {
    type Err = NotationSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        tokens(s).map(str::parse::<Move>).collect()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.moves.iter().join(" "))
    }
}

impl FromIterator<Move> for Algorithm {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        Algorithm {
            moves: iter.into_iter().collect(),
        }
    }
}

impl Extend<Move> for Algorithm {
    fn extend<T: IntoIterator<Item = Move>>(&mut self, iter: T) {
        self.moves.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Algorithm {
    type Item = Move;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Move>>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter().copied()
    }
}
