//! Inbound dismissal signal parsing.
//!
//! Hosts deliver dismissal clicks however they like (query parameter,
//! POST body, API call). This module offers a ready-made mapping for the
//! query-parameter shape `"{notice_id}_dismiss=0"`; anything that does
//! not match exactly is silently ignored, never an error — stale and
//! forged requests are expected at this boundary.

use noticeboard_core::types::NoticeId;

use crate::registry::NoticeRegistry;

/// Query-parameter suffix marking a dismissal flag.
pub const DISMISS_FLAG_SUFFIX: &str = "_dismiss";

/// A validated "user requested dismissal of notice X" signal.
///
/// The host supplies the acting user and timestamp itself when it feeds
/// the signal into a [`DismissalProcessor`](crate::DismissalProcessor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DismissalSignal {
    /// The notice the user asked to dismiss.
    pub notice_id: NoticeId,
}

impl DismissalSignal {
    /// Extract a dismissal signal from request query pairs.
    ///
    /// Accepts the first pair whose key is `"{id}_dismiss"` for a
    /// registered notice id with the exact value `"0"`. Returns `None`
    /// for everything else.
    pub fn from_query_pairs<'a, I>(pairs: I, registry: &NoticeRegistry) -> Option<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (key, value) in pairs {
            if value != "0" {
                continue;
            }
            let Some(id) = key.strip_suffix(DISMISS_FLAG_SUFFIX) else {
                continue;
            };
            let notice_id = NoticeId::new(id);
            if registry.contains(&notice_id) {
                return Some(Self { notice_id });
            }
        }
        None
    }
}
