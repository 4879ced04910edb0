//! # noticeboard
//!
//! Chained, dismissible admin notices for multi-user web applications.
//!
//! Declare an ordered list of [`NoticeDefinition`]s (optionally chained,
//! so dismissing one arms the countdown of the next), load them into a
//! [`NoticeRegistry`], and let the [`SchedulingEngine`] decide what each
//! user should see. Persistence is delegated to the host through the
//! [`NoticeStateStore`] trait; [`MemoryNoticeStore`] is the bundled
//! in-process implementation.
//!
//! This umbrella crate re-exports the public surface of the workspace
//! member crates.

pub use noticeboard_core::error::{AppError, ErrorKind};
pub use noticeboard_core::notice::{
    NoticeDefinition, NoticeKind, OkAction, Trigger, UserNoticeState, FAR_FUTURE_SECONDS,
    SECONDS_PER_DAY,
};
pub use noticeboard_core::result::AppResult;
pub use noticeboard_core::traits::{Clock, NoticeStateStore, SystemClock, UserDirectory};
pub use noticeboard_core::types::{NoticeId, UserId};
pub use noticeboard_engine::{
    DismissalProcessor, DismissalSignal, NoticeRegistry, ResetCoordinator, ResetFailure,
    ResetReport, SchedulingEngine, UserContext,
};
pub use noticeboard_memory::MemoryNoticeStore;
