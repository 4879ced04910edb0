//! Validated, ordered collection of notice definitions.

use std::collections::{HashMap, HashSet};

use noticeboard_core::notice::NoticeDefinition;
use noticeboard_core::types::NoticeId;
use noticeboard_core::{AppError, AppResult};

/// Holds the notice definitions in declaration order and indexes them by
/// id.
///
/// Loading fails closed: a duplicate id, a `next_id` that does not
/// resolve within the set, or a cycle in the `next_id` links rejects the
/// whole definition set. Bad notice configuration is an author error and
/// should surface at startup, not silently skip entries.
#[derive(Debug, Clone, Default)]
pub struct NoticeRegistry {
    definitions: Vec<NoticeDefinition>,
    index: HashMap<NoticeId, usize>,
}

impl NoticeRegistry {
    /// Validate and load a set of definitions.
    pub fn load(definitions: Vec<NoticeDefinition>) -> AppResult<Self> {
        let mut index = HashMap::with_capacity(definitions.len());
        for (position, def) in definitions.iter().enumerate() {
            if index.insert(def.id.clone(), position).is_some() {
                return Err(AppError::configuration(format!(
                    "duplicate notice id '{}'",
                    def.id
                )));
            }
        }

        for def in &definitions {
            if let Some(next) = &def.next_id {
                if !index.contains_key(next) {
                    return Err(AppError::configuration(format!(
                        "notice '{}' chains to unknown notice '{}'",
                        def.id, next
                    )));
                }
            }
        }

        // Walk every chain; revisiting an id from the same start is a cycle.
        for def in &definitions {
            let mut visited = HashSet::new();
            let mut current = def;
            while let Some(next) = &current.next_id {
                if !visited.insert(&current.id) {
                    return Err(AppError::configuration(format!(
                        "notice chain starting at '{}' contains a cycle",
                        def.id
                    )));
                }
                current = &definitions[index[next]];
            }
        }

        Ok(Self { definitions, index })
    }

    /// Look up a definition by id.
    pub fn get(&self, id: &NoticeId) -> Option<&NoticeDefinition> {
        self.index.get(id).map(|&position| &self.definitions[position])
    }

    /// Whether a definition with this id is registered.
    pub fn contains(&self, id: &NoticeId) -> bool {
        self.index.contains_key(id)
    }

    /// All definitions in declaration order. Display iterates this order
    /// and shows every currently-eligible notice.
    pub fn all(&self) -> &[NoticeDefinition] {
        &self.definitions
    }

    /// Number of registered definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
