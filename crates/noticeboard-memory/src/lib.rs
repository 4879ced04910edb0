//! # noticeboard-memory
//!
//! In-process [`NoticeStateStore`](noticeboard_core::traits::NoticeStateStore)
//! implementation backed by [dashmap](https://crates.io/crates/dashmap).
//!
//! The reference store for embedding hosts without an external backend,
//! and the store the engine test suites run against.

pub mod store;

pub use store::MemoryNoticeStore;
