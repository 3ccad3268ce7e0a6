use tracing::debug;

use crate::task::{
  Task,
  TaskId
};

/// The creation control's not yet
/// submitted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
  task: Task
}

impl Draft {
  pub fn new(next_id: TaskId) -> Self {
    Self {
      task: Task::new_active(
        next_id,
        String::new()
      )
    }
  }

  pub fn text(&self) -> &str {
    &self.task.text
  }

  /// Text changes touch only the text;
  /// the id stays put.
  pub fn set_text(
    &mut self,
    text: impl Into<String>
  ) {
    self.task.text = text.into();
  }

  /// Returns the task to hand upstream
  /// and resets to an empty draft with
  /// the following id. Empty drafts are
  /// never submitted; the text is sent
  /// as typed.
  pub fn commit(
    &mut self
  ) -> Option<Task> {
    if self.task.text.is_empty() {
      return None;
    }

    let next = Task::new_active(
      self.task.id.saturating_add(1),
      String::new()
    );
    let submitted =
      std::mem::replace(&mut self.task, next);

    debug!(
      id = submitted.id,
      next_id = self.task.id,
      "draft committed"
    );
    Some(submitted)
  }
}

#[cfg(test)]
mod tests {
  use super::Draft;
  use crate::task::Task;

  #[test]
  fn commit_submits_and_resets_with_next_id()
   {
    let mut draft = Draft::new(3);
    draft.set_text("buy milk");

    let task = draft.commit();
    assert_eq!(
      task,
      Some(Task::new_active(3, "buy milk"))
    );
    assert_eq!(draft.text(), "");

    draft.set_text("walk the dog");
    assert_eq!(
      draft.commit().map(|t| t.id),
      Some(4)
    );
  }

  #[test]
  fn empty_draft_is_never_submitted() {
    let mut draft = Draft::new(3);
    assert_eq!(draft.commit(), None);

    // the failed commit keeps the id
    draft.set_text("x");
    assert_eq!(
      draft.commit().map(|t| t.id),
      Some(3)
    );
  }

  #[test]
  fn submitted_text_is_sent_as_typed() {
    let mut draft = Draft::new(1);
    draft.set_text(" ");
    assert_eq!(
      draft.commit(),
      Some(Task::new_active(1, " "))
    );

    draft.set_text("  walk the dog ");
    assert_eq!(
      draft.commit(),
      Some(Task::new_active(
        2,
        "  walk the dog "
      ))
    );
  }

  #[test]
  fn consecutive_commits_use_consecutive_ids()
   {
    let mut draft = Draft::new(10);
    let mut ids = vec![];
    for text in ["a", "b", "c"] {
      draft.set_text(text);
      if let Some(task) = draft.commit() {
        ids.push(task.id);
      }
    }
    assert_eq!(ids, vec![10, 11, 12]);
  }
}
