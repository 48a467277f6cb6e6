//! Core plumbing shared by every system: errors, logging, randomness.

pub mod error;
pub mod logging;
pub mod random;

pub use error::SimError;
pub use random::SimRng;
