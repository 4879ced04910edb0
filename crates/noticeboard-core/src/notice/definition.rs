//! Notice definition entity.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::types::NoticeId;

use super::kind::NoticeKind;
use super::trigger::Trigger;

/// Seconds in one day; day-based delays multiply into this.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Default initial delay for notices without `display_after_days`.
///
/// One 365-day year. Such notices are effectively never shown on their
/// own; they become due only when a parent's dismissal overwrites their
/// eligibility timestamp.
pub const FAR_FUTURE_SECONDS: i64 = 365 * SECONDS_PER_DAY;

/// Navigational target offered on a notice ("OK" button).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OkAction {
    /// External or internal URL the action navigates to.
    pub url: String,
    /// Button label.
    pub label: String,
}

/// An author-supplied, immutable notice definition.
///
/// Definitions are declared once at startup and loaded into a registry.
/// Everything the engine needs to schedule a notice lives here; the
/// display strings are opaque and passed through to the host renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoticeDefinition {
    /// Unique identifier within the registry.
    pub id: NoticeId,
    /// Display category (cosmetic only).
    pub kind: NoticeKind,
    /// Notice title.
    pub title: String,
    /// Notice body text.
    pub description: String,
    /// Optional navigational action.
    pub ok_action: Option<OkAction>,
    /// Optional label for the dismiss action.
    pub dismiss_label: Option<String>,
    /// Days to wait before the notice becomes eligible, counted from the
    /// first time a user is evaluated against it. Absent means the
    /// far-future default.
    pub display_after_days: Option<u32>,
    /// Id of the chain successor, if any.
    pub next_id: Option<NoticeId>,
    /// Days to wait before the successor becomes eligible, counted from
    /// the moment this notice is dismissed.
    pub display_after_days_next: Option<u32>,
    /// Optional predicate bypassing the time gate. Not serialized; hosts
    /// re-attach triggers when loading definitions from data.
    #[serde(skip)]
    pub trigger: Option<Trigger>,
    /// Render in reduced density.
    pub slim: bool,
}

impl NoticeDefinition {
    /// Create a definition with the required fields; optional fields are
    /// filled in with the `with_*` builder methods.
    pub fn new(
        id: impl Into<NoticeId>,
        kind: NoticeKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            description: description.into(),
            ok_action: None,
            dismiss_label: None,
            display_after_days: None,
            next_id: None,
            display_after_days_next: None,
            trigger: None,
            slim: false,
        }
    }

    /// Attach a navigational action.
    pub fn with_ok_action(mut self, url: impl Into<String>, label: impl Into<String>) -> Self {
        self.ok_action = Some(OkAction {
            url: url.into(),
            label: label.into(),
        });
        self
    }

    /// Set the dismiss action label.
    pub fn with_dismiss_label(mut self, label: impl Into<String>) -> Self {
        self.dismiss_label = Some(label.into());
        self
    }

    /// Set the initial delay in days.
    pub fn with_display_after_days(mut self, days: u32) -> Self {
        self.display_after_days = Some(days);
        self
    }

    /// Chain a successor notice, armed `days` days after this notice is
    /// dismissed.
    pub fn with_next(mut self, next_id: impl Into<NoticeId>, days: u32) -> Self {
        self.next_id = Some(next_id.into());
        self.display_after_days_next = Some(days);
        self
    }

    /// Attach a trigger predicate.
    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// Render in reduced density.
    pub fn with_slim(mut self) -> Self {
        self.slim = true;
        self
    }

    /// Delay from first observation until this notice is time-eligible.
    pub fn initial_delay(&self) -> Duration {
        match self.display_after_days {
            Some(days) => Duration::seconds(i64::from(days) * SECONDS_PER_DAY),
            None => Duration::seconds(FAR_FUTURE_SECONDS),
        }
    }

    /// Delay applied to the successor's countdown on dismissal, when both
    /// a successor and a successor delay are configured.
    pub fn successor_delay(&self) -> Option<(&NoticeId, Duration)> {
        match (&self.next_id, self.display_after_days_next) {
            (Some(next), Some(days)) => Some((
                next,
                Duration::seconds(i64::from(days) * SECONDS_PER_DAY),
            )),
            _ => None,
        }
    }
}
