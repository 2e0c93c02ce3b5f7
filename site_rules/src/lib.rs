//! # Site Rules
//!
//! The data side of the game: the two worlds ("sites"), their level-indexed
//! node matrices, node metadata and the progress rules that decide which nodes
//! the player can see. This crate holds no scene or input logic.

pub mod error;
pub mod nodes;
pub mod progress;
pub mod site;

pub use error::*;
pub use nodes::*;
pub use progress::*;
pub use site::*;
