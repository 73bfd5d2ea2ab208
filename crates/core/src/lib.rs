//! Core game logic. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod events;
pub mod rng;
pub mod run;
pub mod snapshot;

pub use cards::*;
pub use config::*;
pub use deck::*;
pub use engine::*;
pub use events::*;
pub use rng::*;
pub use run::*;
pub use snapshot::*;
