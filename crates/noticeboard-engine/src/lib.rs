//! # noticeboard-engine
//!
//! The notice scheduling engine: decides which registered notices a user
//! should see right now, processes dismissals (arming chained successors),
//! and sweeps all per-user state on a global reset.
//!
//! The engine owns no persistence and renders nothing. It reads and
//! writes state through the host-implemented
//! [`NoticeStateStore`](noticeboard_core::traits::NoticeStateStore) and
//! hands eligible [`NoticeDefinition`](noticeboard_core::notice::NoticeDefinition)s
//! back to the host for rendering.

pub mod context;
pub mod dismissal;
pub mod registry;
pub mod reset;
pub mod scheduling;
pub mod signal;

pub use context::UserContext;
pub use dismissal::DismissalProcessor;
pub use registry::NoticeRegistry;
pub use reset::{ResetCoordinator, ResetFailure, ResetReport};
pub use scheduling::SchedulingEngine;
pub use signal::DismissalSignal;
