//! # noticeboard-core
//!
//! Core crate for Noticeboard. Contains the host-facing traits, typed
//! identifiers, the notice domain entities, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Noticeboard crates.

pub mod error;
pub mod notice;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
