//! The unfolded net of a cube:
//!
//! ```text
//!         W W W
//!         W W W
//!         W W W
//!
//! O O O   G G G   R R R   B B B
//! O O O   G G G   R R R   B B B
//! O O O   G G G   R R R   B B B
//!
//!         Y Y Y
//!         Y Y Y
//!         Y Y Y
//! ```

use std::fmt;

use itertools::Itertools;

use crate::{Color, Cube, Face};

/// The visible colors of one face, row by row.
pub type FaceGrid = [[Color; 3]; 3];

/// Space standing in for a face in the top and bottom bands.
const BLANK_FACE: &str = "     ";
const FACE_GAP: &str = "   ";

/// A snapshot of the colors on all six faces of a cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Net {
    faces: [FaceGrid; 6],
}

impl Net {
    pub fn of(cube: &Cube) -> Net {
        Net {
            faces: Face::ALL.map(|face| cube.face_grid(face)),
        }
    }

    pub fn face(&self, face: Face) -> &FaceGrid {
        &self.faces[face as usize]
    }

    /// Whether every face is a single color.
    pub fn is_uniform(&self) -> bool {
        self.faces
            .iter()
            .all(|grid| grid.iter().flatten().all_equal())
    }

    /// Lay out the net, writing each sticker with `paint`. Every painted
    /// sticker should occupy one column on screen.
    pub fn render_with(&self, paint: impl Fn(Color) -> String) -> String {
        let rows = Face::ALL.map(|face| {
            self.face(face)
                .map(|row| row.iter().map(|&color| paint(color)).join(" "))
        });

        let band = |faces: &[Option<Face>]| {
            (0..3)
                .map(|row| {
                    faces
                        .iter()
                        .map(|face| match face {
                            Some(face) => rows[*face as usize][row].as_str(),
                            None => BLANK_FACE,
                        })
                        .join(FACE_GAP)
                })
                .join("\n")
        };

        [
            band(&[None, Some(Face::U)]),
            band(&[Some(Face::L), Some(Face::F), Some(Face::R), Some(Face::B)]),
            band(&[None, Some(Face::D)]),
        ]
        .join("\n\n")
    }
}

impl fmt::Display for Net {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(|color| color.letter().to_string()))
    }
}
