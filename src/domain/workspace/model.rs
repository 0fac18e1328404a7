// Notes, contexts and assignments

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A subject that groups notes and assignments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub id: String,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub context_id: String,
    pub content: String,
    pub last_modified: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: String,
    pub title: String,
    pub context_id: String,
    pub due_date: DateTime<Utc>,
    pub description: String,
    pub completed: bool,
    pub priority: Priority,
}

/// Input for a new assignment; the due date is a calendar day
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssignmentDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub context_id: String,
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,
    pub priority: Option<Priority>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        let p: Priority = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(p, Priority::Low);
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn test_assignment_draft_parses_calendar_day() {
        let draft: AssignmentDraft = serde_json::from_str(
            r#"{"title":"Essay","context_id":"s1","due_date":"2026-10-20"}"#,
        )
        .unwrap();
        assert_eq!(draft.due_date, NaiveDate::from_ymd_opt(2026, 10, 20));
        assert!(draft.priority.is_none());
        assert!(draft.description.is_empty());
    }
}
