//! Services layer around the prescribing core.
//!
//! This crate provides the collaborators the prescribing UI talks to: the demo
//! patient directory, the medication catalog, RxNorm response parsing and the
//! [`PrescribingService`] that turns core results into JSON response shapes.

pub mod catalog;
pub mod patients;
pub mod rxnorm;
pub mod service;

pub use catalog::*;
pub use patients::*;
pub use service::*;

use thiserror::Error;

/// Service errors.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Patient not found: {0}")]
    PatientNotFound(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Malformed RxNorm response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
