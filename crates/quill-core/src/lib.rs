//! # Quill Core
//!
//! The domain layer of the Quill blog API.
//! This crate contains the post model and the repository port, with no infrastructure dependencies beyond the BSON identifier type.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
