use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Derived schedule status of a todo item
///
/// Assigned by the service at creation time by comparing the due date
/// against the current moment. Callers never set it themselves; anything
/// they supply is overwritten before persistence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TodoStatus {
    /// Due date is at or before the current moment
    Late,
    /// Due date is strictly in the future
    Pending,
}

/// Todo entity - one task with a description and a due date
///
/// A `Todo` may be built with any subset of fields; the rest default to
/// empty (`id` is the empty string until the creation path assigns one,
/// `when` and `status` are `None`). No validation happens here - that is
/// the service's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Free-form description
    #[serde(default)]
    pub text: String,
    /// Due date, absent when the caller supplied none
    #[serde(default)]
    pub when: Option<DateTime<Utc>>,
    /// Derived status, unset until the service evaluates the item
    #[serde(default)]
    pub status: Option<TodoStatus>,
    /// Identifier, empty until assigned during creation
    #[serde(default)]
    pub id: String,
}

impl Todo {
    /// Build an unsaved item from the two caller-supplied fields
    pub fn new(text: impl Into<String>, when: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            when: Some(when),
            ..Self::default()
        }
    }

    /// An item is storable only when both `text` and `when` are present
    pub fn is_valid(&self) -> bool {
        !self.text.is_empty() && self.when.is_some()
    }
}
