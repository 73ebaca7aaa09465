//! A model of the 3×3×3 cube that stores each small cube as an orientation
//! and turns it with a single rotation law, plus a parser for standard move
//! notation and a text renderer for the cube's net.

#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

pub mod color;
pub mod cube;
pub mod cubie;
pub mod face;
pub mod net;
pub mod notation;

pub use color::{Color, InvalidCubieError};
pub use cube::Cube;
pub use cubie::Cubie;
pub use face::Face;
pub use net::Net;
pub use notation::{Algorithm, Move, NotationSyntaxError};
