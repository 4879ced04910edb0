//! Core type definitions used across the Noticeboard workspace.

pub mod id;

pub use id::{NoticeId, UserId};
