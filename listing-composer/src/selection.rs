//! Per-level selection state for the brand/model/variant cascade

use serde::{Deserialize, Serialize};

/// Selection state of one cascade level
///
/// Replaces the original form's stringly-typed `"" | <id> | "add-new"`
/// plus side-channel free-text fields: the inline name of a newly
/// defined entity lives inside the variant, so clearing a selection can
/// never leave a stale name behind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Selection {
    /// Nothing picked yet
    #[default]
    Unselected,
    /// An existing catalog entity, by server id
    Existing(i64),
    /// The "add new" escape hatch, carrying the free-text name
    NewlyNamed(String),
}

impl Selection {
    /// Concrete server id, if an existing entity is selected
    pub fn existing_id(&self) -> Option<i64> {
        match self {
            Selection::Existing(id) => Some(*id),
            _ => None,
        }
    }

    /// Whether the "add new" branch is active
    pub fn is_add_new(&self) -> bool {
        matches!(self, Selection::NewlyNamed(_))
    }

    /// Whether nothing is selected
    pub fn is_unselected(&self) -> bool {
        matches!(self, Selection::Unselected)
    }

    /// Trimmed inline name, if the "add new" branch is active and the
    /// name is non-empty
    pub fn new_name(&self) -> Option<&str> {
        match self {
            Selection::NewlyNamed(name) => {
                let trimmed = name.trim();
                (!trimmed.is_empty()).then_some(trimmed)
            }
            _ => None,
        }
    }
}

/// The three cascade levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionLevel {
    Brand,
    Model,
    Variant,
}
