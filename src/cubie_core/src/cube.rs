//! The 3×3×3 grid of cubies and the two primitive rotations that every move
//! is built from.

use std::fmt;

use itertools::{Itertools, iproduct};
use log::{debug, trace};

use crate::{
    Color, Cubie, Face, Net,
    face::AxisPair,
    notation::{Algorithm, NotationSyntaxError},
};

/// Grid coordinates `[front, down, right]`. Index 0 is the back, top and left
/// layer along each axis respectively, index 2 the front, bottom and right.
pub type Position = [usize; 3];

type Grid = [[[Cubie; 3]; 3]; 3];

const FRONT_LAYER: usize = 2;

/// Turn a grid position about the centre of the cube. Reflecting an index
/// through the middle layer (`2 - i`) is negation of the centred coordinate,
/// so positions turn by the same law as cubie colors.
fn turn_position(axes: AxisPair, position: Position, turns: i32) -> Position {
    axes.turn_by(position, turns, |i| 2 - i)
}

/// The state of a cube: a cubie orientation for every cell of the grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cube {
    cubies: Grid,
}

impl Default for Cube {
    fn default() -> Self {
        Cube::solved()
    }
}

impl Cube {
    /// A solved cube held white up, green in front.
    pub fn solved() -> Cube {
        Cube {
            cubies: [[[Cubie::SOLVED; 3]; 3]; 3],
        }
    }

    pub fn cubie(&self, [front, down, right]: Position) -> Cubie {
        self.cubies[front][down][right]
    }

    /// Whether every face shows a single color, however the cube is held.
    pub fn is_solved(&self) -> bool {
        Net::of(self).is_uniform()
    }

    /// The grid that rotating the whole cube would produce, leaving `self`
    /// untouched.
    fn rotated_grid(&self, about: Face, turns: i32) -> Grid {
        let axes = about.clockwise_axes();
        let mut grid = self.cubies;
        for (front, down, right) in iproduct!(0..3, 0..3, 0..3) {
            let [to_front, to_down, to_right] =
                turn_position(axes, [front, down, right], turns);
            grid[to_front][to_down][to_right] =
                self.cubies[front][down][right].rotated(about, turns);
        }
        grid
    }

    /// Rotate the entire cube `turns` quarter turns clockwise about `about`.
    /// Every cubie moves to its new cell and is reoriented by the same turn.
    pub fn rotate_whole_cube(&mut self, about: Face, turns: i32) {
        trace!(target: "cube", "rotate_whole_cube({about}, {turns})");
        self.cubies = self.rotated_grid(about, turns);
        trace!(target: "cube", "=> after rotate_whole_cube\n{self:?}");
    }

    /// Turn the outer layer on `face` by `turns` clockwise quarter turns.
    ///
    /// The cube is first rotated so that `face` is in front, the front layer
    /// is turned, and the first rotation is undone. Cubies outside the layer
    /// pass through the two whole cube rotations and land back where they
    /// started.
    pub fn rotate_face(&mut self, face: Face, turns: i32) {
        trace!(target: "cube", "rotate_face({face}, {turns})");

        let (about, to_front) = face.to_front();
        self.rotate_whole_cube(about, to_front);
        self.rotate_front_layer(turns);
        self.rotate_whole_cube(about, -to_front);
    }

    fn rotate_front_layer(&mut self, turns: i32) {
        let axes = Face::F.clockwise_axes();
        let layer = self.cubies[FRONT_LAYER];
        for (down, right) in iproduct!(0..3, 0..3) {
            let [front, to_down, to_right] =
                turn_position(axes, [FRONT_LAYER, down, right], turns);
            debug_assert_eq!(front, FRONT_LAYER);
            self.cubies[front][to_down][to_right] = layer[down][right].rotated(Face::F, turns);
        }
        trace!(target: "cube", "=> after rotating the front layer\n{self:?}");
    }

    /// The colors showing on `face`, in the orientation the face has in the
    /// net.
    pub fn face_grid(&self, face: Face) -> [[Color; 3]; 3] {
        let (about, turns) = face.to_front();
        self.rotated_grid(about, turns)[FRONT_LAYER].map(|row| row.map(Cubie::front))
    }

    pub fn apply(&mut self, algorithm: &Algorithm) {
        debug!(target: "cube", "Applying {algorithm}");
        for move_ in algorithm {
            move_.apply_to(self);
        }
    }

    /// Parse `moves` and apply them. Nothing is applied unless the whole
    /// string parses.
    ///
    /// # Errors
    ///
    /// If any token of `moves` is not a valid move.
    pub fn apply_moves(&mut self, moves: &str) -> Result<(), NotationSyntaxError> {
        let algorithm = moves.parse::<Algorithm>()?;
        self.apply(&algorithm);
        Ok(())
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Net::of(self), f)
    }
}

impl fmt::Debug for Cube {
    /// The raw grid, one page per front-ness layer from back to front, with
    /// each cubie written as its front, down and right colors.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pages = self
            .cubies
            .iter()
            .map(|page| {
                page.iter()
                    .map(|row| row.iter().map(|cubie| format!("{cubie:?}")).join(" "))
                    .join("\n")
            })
            .join("\n\n");
        f.write_str(&pages)
    }
}
