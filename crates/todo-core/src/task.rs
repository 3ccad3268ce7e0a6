use serde::{Deserialize, Serialize};

pub type TaskId = u64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,

    pub text: String,

    #[serde(default)]
    pub complete: bool,
}

impl Task {
    pub fn new_active(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            complete: false,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.complete
    }

    /// Same task with only the text replaced.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }

    /// Same task with only the completion flag replaced.
    pub fn with_complete(&self, complete: bool) -> Self {
        Self {
            complete,
            ..self.clone()
        }
    }
}
