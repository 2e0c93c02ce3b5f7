//! # Scene Core
//!
//! The input state machine of the site scene. Given a snapshot of the scene
//! context and one logical input it decides the next transition and describes
//! it as a [`GameEvent`]. Rendering, animation timing, audio and persistence
//! stay outside; they consume the events.
//!
//! ## Core Components
//!
//! - **machine**: dispatch over the prompt modal and the `site`,
//!   `level_selection`, `pause` and `media` subscenes
//! - **events**: the closed event vocabulary and its template constructors
//! - **save_state**: per-site snapshots swapped when the player changes worlds
//! - **input**: logical input tokens, key mapping and the input cooldown gate
//! - **context**: the scene snapshot plus a reference reducer
//! - **session**: glue that threads one context through keys, machine and reducer

pub mod context;
pub mod error;
pub mod events;
pub mod input;
pub mod machine;
pub mod save_state;
pub mod session;

mod reducer;

#[cfg(test)]
pub(crate) mod test_support;

pub use context::*;
pub use error::*;
pub use events::*;
pub use input::*;
pub use machine::*;
pub use save_state::*;
pub use session::*;
