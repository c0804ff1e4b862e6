//! Brand Model

use serde::{Deserialize, Serialize};

/// Brand entity
///
/// Fetched once at form mount; immutable within a form session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: i64,
    pub name: String,
}
