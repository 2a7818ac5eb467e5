//! Note scheduling and oscillator lifecycle engine for tonegrid.
//!
//! Everything here is platform independent; the web front end supplies an
//! [`AudioBackend`] and drives [`Sequencer::advance`] from its frame loop.

pub mod activation;
pub mod clock;
pub mod composer;
pub mod constants;
pub mod error;
pub mod grid;
pub mod note;
pub mod persist;
pub mod pitch;
pub mod reconcile;
pub mod render_model;
pub mod sequencer;

pub use activation::*;
pub use clock::*;
pub use composer::*;
pub use constants::*;
pub use error::*;
pub use grid::*;
pub use note::*;
pub use pitch::*;
pub use reconcile::*;
pub use render_model::*;
pub use sequencer::*;
