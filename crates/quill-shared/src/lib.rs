//! # Quill Shared
//!
//! Request-boundary types shared between the post service and its hosts.
//! The actual transport is an external collaborator; these are the payload
//! and envelope shapes it carries.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
