use serde::{Deserialize, Serialize};

/// A person on the roster. Loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: i32,
    pub name: String,
    /// Team code, e.g. "DO". Must match an entry in the configured team table.
    pub team: String,
    /// Display color used by the rendering layer.
    pub color: String,
}

impl Member {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        team: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            team: team.into(),
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub code: String,
    pub name: String,
    pub color: String,
}

impl Team {
    pub fn new(code: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            color: color.into(),
        }
    }
}
