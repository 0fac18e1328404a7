// YAML shapes for the embedded workspace seed

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::workspace::{Assignment, Context, Note, Priority, Workspace};

const DEFAULT_WORKSPACE_FILE: &str = include_str!("../../workspace.yml");

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct YmlWorkspace {
    #[serde(default)]
    pub contexts: Vec<YmlContext>,
    #[serde(default)]
    pub notes: Vec<YmlNote>,
    #[serde(default)]
    pub assignments: Vec<YmlAssignment>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct YmlContext {
    pub id: String,
    pub name: String,
    pub color: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct YmlNote {
    pub id: String,
    pub title: String,
    pub context: String,
    #[serde(default)]
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment: Option<String>,
}

/// Due dates are offsets so the seed stays relevant whenever it is loaded
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct YmlAssignment {
    pub id: String,
    pub title: String,
    pub context: String,
    pub due_in_days: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl YmlWorkspace {
    pub fn embedded() -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(DEFAULT_WORKSPACE_FILE)?)
    }

    pub fn into_workspace(self, now: DateTime<Utc>) -> Workspace {
        let contexts = self
            .contexts
            .into_iter()
            .map(|c| Context {
                id: c.id,
                name: c.name,
                color: c.color,
            })
            .collect();

        let notes = self
            .notes
            .into_iter()
            .map(|n| Note {
                id: n.id,
                title: n.title,
                context_id: n.context,
                content: n.content,
                last_modified: now,
                assignment_id: n.assignment,
            })
            .collect();

        let assignments = self
            .assignments
            .into_iter()
            .map(|a| Assignment {
                id: a.id,
                title: a.title,
                context_id: a.context,
                due_date: now + Duration::days(a.due_in_days),
                description: a.description,
                completed: false,
                priority: a.priority.unwrap_or_default(),
            })
            .collect();

        Workspace::new(contexts, notes, assignments)
    }
}
