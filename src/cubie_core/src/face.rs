//! Faces, grid axes and the clockwise quarter turn about each face.

use std::{fmt, str::FromStr};

/// One of the three positive axes shared by the cubie grid and the cubie
/// orientations. Grid indices along each axis run from back to front, up to
/// down and left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Front = 0,
    Down = 1,
    Right = 2,
}

/// A clockwise quarter turn, described by the axis whose positive direction
/// is carried onto the positive direction of the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisPair {
    pub src: Axis,
    pub dst: Axis,
}

impl AxisPair {
    const fn new(src: Axis, dst: Axis) -> AxisPair {
        AxisPair { src, dst }
    }

    /// Apply one quarter turn to a three component value. Whatever lay along
    /// `src` now lies along `dst`, and whatever lay along `dst` now lies along
    /// the negation of `src`. The third component is untouched.
    ///
    /// Cubie positions and cubie colors both turn through this function, with
    /// `negate` being numeric negation and [`Color::opposite`] respectively.
    ///
    /// [`Color::opposite`]: crate::Color::opposite
    pub fn turn<T: Copy>(self, v: [T; 3], negate: impl Fn(T) -> T) -> [T; 3] {
        let mut out = v;
        out[self.dst as usize] = v[self.src as usize];
        out[self.src as usize] = negate(v[self.dst as usize]);
        out
    }

    /// Apply `turns` quarter turns, reduced mod 4 so negative counts turn
    /// counterclockwise.
    pub fn turn_by<T: Copy>(self, mut v: [T; 3], turns: i32, negate: impl Fn(T) -> T) -> [T; 3] {
        for _ in 0..turns.rem_euclid(4) {
            v = self.turn(v, &negate);
        }
        v
    }
}

/// A face of the cube. The declaration order is the order faces are listed in
/// throughout the crate: U L F R B D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    U,
    L,
    F,
    R,
    B,
    D,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [U, L, F, R, B, D];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    #[must_use]
    pub const fn opposite(self) -> Face {
        match self {
            Face::U => Face::D,
            Face::L => Face::R,
            Face::F => Face::B,
            Face::R => Face::L,
            Face::B => Face::F,
            Face::D => Face::U,
        }
    }

    /// The quarter turn that rotates this face clockwise when looking at it
    /// from outside the cube.
    pub const fn clockwise_axes(self) -> AxisPair {
        match self {
            Face::R => AxisPair::new(Axis::Down, Axis::Front),
            Face::L => AxisPair::new(Axis::Front, Axis::Down),
            Face::U => AxisPair::new(Axis::Right, Axis::Front),
            Face::D => AxisPair::new(Axis::Front, Axis::Right),
            Face::F => AxisPair::new(Axis::Right, Axis::Down),
            Face::B => AxisPair::new(Axis::Down, Axis::Right),
        }
    }

    /// The whole cube rotation `(about, quarter_turns)` that brings this face
    /// to the front. B goes around the U/D axis so that it comes out upright
    /// in the net.
    pub const fn to_front(self) -> (Face, i32) {
        match self {
            Face::F => (Face::U, 0),
            Face::R => (Face::U, 1),
            Face::B => (Face::U, 2),
            Face::L => (Face::U, 3),
            Face::D => (Face::R, 1),
            Face::U => (Face::R, 3),
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::L => 'L',
            Face::F => 'F',
            Face::R => 'R',
            Face::B => 'B',
            Face::D => 'D',
        }
    }

    /// The face named by an uppercase letter.
    pub const fn from_letter(letter: char) -> Option<Face> {
        match letter {
            'U' => Some(Face::U),
            'L' => Some(Face::L),
            'F' => Some(Face::F),
            'R' => Some(Face::R),
            'B' => Some(Face::B),
            'D' => Some(Face::D),
            _ => None,
        }
    }
}

impl FromStr for Face {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Face::from_letter(letter).ok_or(()),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neg(x: i8) -> i8 {
        -x
    }

    #[test]
    fn opposite_faces_share_an_axis_with_reversed_sense() {
        for face in Face::ALL {
            assert_eq!(face.opposite().opposite(), face);
            assert_ne!(face.opposite(), face);

            let AxisPair { src, dst } = face.clockwise_axes();
            let opposite = face.opposite().clockwise_axes();
            assert_eq!((opposite.src, opposite.dst), (dst, src));
        }
    }

    #[test]
    fn quarter_turn_has_order_four() {
        for face in Face::ALL {
            let axes = face.clockwise_axes();
            let v = [1, 2, 3];
            assert_ne!(axes.turn(v, neg), v);
            assert_eq!(axes.turn_by(v, 4, neg), v);
            assert_eq!(axes.turn_by(v, -1, neg), axes.turn_by(v, 3, neg));
            assert_eq!(axes.turn_by(axes.turn(v, neg), -1, neg), v);
        }
    }

    #[test]
    fn each_face_stays_put_under_its_own_turn() {
        // The centre of each face lies on the rotation axis.
        let centres = [
            (Face::U, [0, -1, 0]),
            (Face::L, [0, 0, -1]),
            (Face::F, [1, 0, 0]),
            (Face::R, [0, 0, 1]),
            (Face::B, [-1, 0, 0]),
            (Face::D, [0, 1, 0]),
        ];
        for (face, centre) in centres {
            assert_eq!(face.clockwise_axes().turn(centre, neg), centre);
        }
    }

    #[test]
    fn to_front_brings_the_face_to_the_front() {
        let centres = [
            (Face::U, [0, -1, 0]),
            (Face::L, [0, 0, -1]),
            (Face::F, [1, 0, 0]),
            (Face::R, [0, 0, 1]),
            (Face::B, [-1, 0, 0]),
            (Face::D, [0, 1, 0]),
        ];
        for (face, centre) in centres {
            let (about, turns) = face.to_front();
            assert_eq!(about.clockwise_axes().turn_by(centre, turns, neg), [1, 0, 0]);
        }
    }

    #[test]
    fn letters() {
        for face in Face::ALL {
            assert_eq!(Face::from_letter(face.letter()), Some(face));
            assert_eq!(face.to_string().parse(), Ok(face));
        }
        assert_eq!("x".parse::<Face>(), Err(()));
        assert_eq!("RU".parse::<Face>(), Err(()));
    }
}
