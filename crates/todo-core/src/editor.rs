use tracing::debug;

use crate::state::Action;
use crate::task::Task;

/// Per-item inline editing state.
#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
)]
pub enum ItemEditor {
  #[default]
  Viewing,
  Editing {
    buffer: String
  }
}

impl ItemEditor {
  pub fn is_editing(&self) -> bool {
    matches!(
      self,
      ItemEditor::Editing { .. }
    )
  }

  pub fn buffer(&self) -> Option<&str> {
    match self {
      | ItemEditor::Viewing => None,
      | ItemEditor::Editing {
        buffer
      } => Some(buffer.as_str()),
    }
  }

  /// Seeds the buffer with the task's
  /// current text.
  pub fn begin(&mut self, task: &Task) {
    *self = ItemEditor::Editing {
      buffer: task.text.clone()
    };
  }

  pub fn set_buffer(
    &mut self,
    text: impl Into<String>
  ) {
    if let ItemEditor::Editing {
      buffer
    } = self
    {
      *buffer = text.into();
    }
  }

  /// Leaves editing. A non-empty buffer
  /// becomes an update carrying the
  /// buffer text as is, completion flag
  /// untouched; an empty one deletes
  /// the task.
  /// Confirming while viewing does
  /// nothing.
  pub fn confirm(
    &mut self,
    task: &Task
  ) -> Option<Action> {
    let ItemEditor::Editing { buffer } =
      std::mem::take(self)
    else {
      return None;
    };

    let action = if buffer.is_empty() {
      Action::DestroyOne(task.id)
    } else {
      Action::UpdateOne(
        task.with_text(buffer)
      )
    };

    debug!(id = task.id, ?action, "edit confirmed");
    Some(action)
  }

  /// Drops the buffer without telling
  /// anyone.
  pub fn cancel(&mut self) {
    *self = ItemEditor::Viewing;
  }

  /// Keyboard policy for the edit
  /// input: Enter confirms, any
  /// `Esc*` key cancels.
  pub fn handle_key(
    &mut self,
    key: &str,
    task: &Task
  ) -> Option<Action> {
    if key == "Enter" {
      self.confirm(task)
    } else if key.starts_with("Esc") {
      self.cancel();
      None
    } else {
      None
    }
  }

  /// Completion toggle from the
  /// viewing row. Bypasses editing.
  pub fn toggle(task: &Task) -> Action {
    Action::UpdateOne(
      task.with_complete(!task.complete)
    )
  }
}
