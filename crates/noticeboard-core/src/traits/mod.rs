//! Core traits defined in `noticeboard-core` and implemented by the host
//! application (or by `noticeboard-memory` for in-process use).

pub mod host;
pub mod store;

pub use host::{Clock, SystemClock, UserDirectory};
pub use store::NoticeStateStore;
