//! Domain models for the prescribing core.

mod alert;
mod allergy;

pub use alert::*;
pub use allergy::*;
