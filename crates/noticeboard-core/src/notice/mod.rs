//! Notice domain entities.

pub mod definition;
pub mod kind;
pub mod state;
pub mod trigger;

pub use definition::{NoticeDefinition, OkAction, FAR_FUTURE_SECONDS, SECONDS_PER_DAY};
pub use kind::NoticeKind;
pub use state::UserNoticeState;
pub use trigger::Trigger;
