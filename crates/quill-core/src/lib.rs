//! # Quill Core
//!
//! The domain layer of the Quill post service.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ids;
pub mod ports;
pub mod service;

pub use error::{PostError, StoreError};
pub use service::PostService;
