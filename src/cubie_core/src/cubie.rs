use std::fmt;

use crate::{Color, Face, InvalidCubieError};

/// The orientation of one of the 27 small cubes.
///
/// Only the colors facing front and down are stored; the color facing right
/// is always their cross product, so the three can never disagree. Every
/// cubie of a solved cube has the same value, [`Cubie::SOLVED`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cubie {
    front: Color,
    down: Color,
}

impl Cubie {
    /// Green in front and yellow below, which puts red on the right and white
    /// on top.
    pub const SOLVED: Cubie = Cubie {
        front: Color::Green,
        down: Color::Yellow,
    };

    /// # Errors
    ///
    /// If `front` and `down` are equal or opposite.
    pub fn new(front: Color, down: Color) -> Result<Cubie, InvalidCubieError> {
        front.derive_third_axis(down)?;
        Ok(Cubie { front, down })
    }

    pub fn front(self) -> Color {
        self.front
    }

    pub fn down(self) -> Color {
        self.down
    }

    pub fn right(self) -> Color {
        match self.front.derive_third_axis(self.down) {
            Ok(right) => right,
            Err(e) => unreachable!("{e}"),
        }
    }

    /// The colors along the three positive axes: front, down, right.
    pub fn axis_colors(self) -> [Color; 3] {
        [self.front, self.down, self.right()]
    }

    /// The colors on all six sides, in U L F R B D order.
    pub fn face_colors(self) -> [Color; 6] {
        let [front, down, right] = self.axis_colors();
        [
            down.opposite(),
            right.opposite(),
            front,
            right,
            front.opposite(),
            down,
        ]
    }

    pub fn face_color(self, face: Face) -> Color {
        self.face_colors()[face as usize]
    }

    /// The orientation after turning this cubie `turns` clockwise quarter
    /// turns about `face`.
    #[must_use]
    pub fn rotated(self, face: Face, turns: i32) -> Cubie {
        let axes = face.clockwise_axes();
        let [front, down, right] = axes.turn_by(self.axis_colors(), turns, Color::opposite);

        let rotated = Cubie { front, down };
        debug_assert_eq!(
            rotated.right(),
            right,
            "{self:?} turned about {face} into a reflection"
        );
        rotated
    }
}

impl fmt::Debug for Cubie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in self.axis_colors() {
            write!(f, "{color}")?;
        }
        Ok(())
    }
}
