//! The six sticker colors. Each color is identified with the unit vector it
//! points along when the cube is solved and held white up, green in front, so
//! that the colors themselves carry enough geometry to derive a cubie's third
//! face from the other two.

use std::fmt;
use thiserror::Error;

/// A signed unit vector over the front, down and right axes, in that order.
pub type Vector = [i8; 3];

/// A sticker color.
///
/// The discriminant is the packed form of the color's vector: two bits per
/// axis starting from the least significant (front, down, right), with each
/// coordinate taken mod 3 so that -1 is stored as 2. Every color therefore
/// packs to a distinct power of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Color {
    /// ( 1,  0,  0)
    Green = 0b00_00_01,
    /// (-1,  0,  0)
    Blue = 0b00_00_10,
    /// ( 0,  1,  0)
    Yellow = 0b00_01_00,
    /// ( 0, -1,  0)
    White = 0b00_10_00,
    /// ( 0,  0,  1)
    Red = 0b01_00_00,
    /// ( 0,  0, -1)
    Orange = 0b10_00_00,
}

/// Two axis colors of a cubie that are equal or opposite, leaving the third
/// axis undefined.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{front:?} and {down:?} are not perpendicular, so they cannot be two faces of one cubie")]
pub struct InvalidCubieError {
    pub front: Color,
    pub down: Color,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::White,
        Color::Red,
        Color::Orange,
    ];

    /// The packed six bit form of this color.
    pub const fn packed(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Color::packed`]. Returns `None` for any byte that is not
    /// the packed form of a color.
    pub const fn unpack(bits: u8) -> Option<Color> {
        match bits {
            0b00_00_01 => Some(Color::Green),
            0b00_00_10 => Some(Color::Blue),
            0b00_01_00 => Some(Color::Yellow),
            0b00_10_00 => Some(Color::White),
            0b01_00_00 => Some(Color::Red),
            0b10_00_00 => Some(Color::Orange),
            _ => None,
        }
    }

    /// The unit vector this color points along on a solved cube.
    pub fn vector(self) -> Vector {
        let bits = self.packed();
        std::array::from_fn(|axis| match (bits >> (2 * axis)) & 0b11 {
            1 => 1,
            2 => -1,
            _ => 0,
        })
    }

    /// Inverse of [`Color::vector`]. Returns `None` unless `vector` is one of
    /// the six signed unit vectors.
    pub fn from_vector(vector: Vector) -> Option<Color> {
        let mut bits = 0;
        for (axis, coord) in vector.into_iter().enumerate() {
            let digit: u8 = match coord {
                0 => 0,
                1 => 1,
                -1 => 2,
                _ => return None,
            };
            bits |= digit << (2 * axis);
        }
        Color::unpack(bits)
    }

    /// The color on the other side of the cube, i.e. the negated vector.
    #[must_use]
    pub const fn opposite(self) -> Color {
        match self {
            Color::Green => Color::Blue,
            Color::Blue => Color::Green,
            Color::Yellow => Color::White,
            Color::White => Color::Yellow,
            Color::Red => Color::Orange,
            Color::Orange => Color::Red,
        }
    }

    /// The cross product `self × other`. For a cubie with `self` in front and
    /// `other` below this is the color on its right.
    ///
    /// # Errors
    ///
    /// If the two colors are equal or opposite the cross product is the zero
    /// vector, which is not a color.
    pub fn derive_third_axis(self, other: Color) -> Result<Color, InvalidCubieError> {
        let [a0, a1, a2] = self.vector();
        let [b0, b1, b2] = other.vector();

        Color::from_vector([a1 * b2 - a2 * b1, a2 * b0 - a0 * b2, a0 * b1 - a1 * b0]).ok_or(
            InvalidCubieError {
                front: self,
                down: other,
            },
        )
    }

    pub const fn letter(self) -> char {
        match self {
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
            Color::White => 'W',
            Color::Red => 'R',
            Color::Orange => 'O',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for color in Color::ALL {
            assert_eq!(color.opposite().opposite(), color);
            assert_ne!(color.opposite(), color);
        }
    }

    #[test]
    fn opposite_negates_the_vector() {
        for color in Color::ALL {
            let negated = color.vector().map(|coord| -coord);
            assert_eq!(Color::from_vector(negated), Some(color.opposite()));
        }
    }

    #[test]
    fn three_opposite_pairs() {
        let mut pairs = Color::ALL
            .iter()
            .map(|&color| {
                let other = color.opposite();
                if color < other {
                    (color, other)
                } else {
                    (other, color)
                }
            })
            .collect::<Vec<_>>();
        pairs.sort();
        pairs.dedup();

        assert_eq!(
            pairs,
            vec![
                (Color::Green, Color::Blue),
                (Color::Yellow, Color::White),
                (Color::Red, Color::Orange),
            ]
        );
    }

    #[test]
    fn packing_round_trips() {
        for color in Color::ALL {
            assert_eq!(Color::unpack(color.packed()), Some(color));
            assert_eq!(Color::from_vector(color.vector()), Some(color));
            assert_eq!(color.packed().count_ones(), 1);
        }
        assert_eq!(Color::unpack(0), None);
        assert_eq!(Color::unpack(0b11), None);
        assert_eq!(Color::from_vector([0, 0, 0]), None);
        assert_eq!(Color::from_vector([1, 1, 0]), None);
    }

    #[test]
    fn third_axis() {
        assert_eq!(Color::Red.derive_third_axis(Color::White), Ok(Color::Green));
        assert_eq!(Color::Yellow.derive_third_axis(Color::Red), Ok(Color::Green));
        assert_eq!(Color::Orange.derive_third_axis(Color::Blue), Ok(Color::Yellow));
        assert_eq!(Color::Green.derive_third_axis(Color::Yellow), Ok(Color::Red));
    }

    #[test]
    fn third_axis_is_antisymmetric() {
        for a in Color::ALL {
            for b in Color::ALL {
                if let Ok(ab) = a.derive_third_axis(b) {
                    assert_eq!(b.derive_third_axis(a), Ok(ab.opposite()));
                }
            }
        }
    }

    #[test]
    fn degenerate_third_axis() {
        for color in Color::ALL {
            assert_eq!(
                color.derive_third_axis(color.opposite()),
                Err(InvalidCubieError {
                    front: color,
                    down: color.opposite()
                })
            );
            assert!(color.derive_third_axis(color).is_err());
        }
    }
}
