use tracing::{
  debug,
  trace,
  warn
};

use crate::counts::Counts;
use crate::filter::Filter;
use crate::task::{
  Task,
  TaskId
};

/// Everything a child control can ask
/// the root controller to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
  Create(Task),
  ToggleAll(bool),
  UpdateOne(Task),
  DestroyOne(TaskId),
  ClearCompleted,
  SetFilter(Filter)
}

/// The authoritative task list and the
/// current filter. Every transition
/// produces a new state; nothing is
/// mutated in place from outside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoState {
  tasks:   Vec<Task>,
  filter:  Filter,
  next_id: TaskId
}

impl Default for TodoState {
  fn default() -> Self {
    Self::new(vec![], Filter::All)
  }
}

impl TodoState {
  /// Builds a state from already
  /// validated tasks. `next_id` starts
  /// one past the largest id present.
  pub fn new(
    tasks: Vec<Task>,
    filter: Filter
  ) -> Self {
    let next_id = tasks
      .iter()
      .map(|task| task.id)
      .max()
      .map_or(1, |id| {
        id.saturating_add(1)
      });

    Self {
      tasks,
      filter,
      next_id
    }
  }

  pub fn tasks(&self) -> &[Task] {
    &self.tasks
  }

  pub fn filter(&self) -> Filter {
    self.filter
  }

  /// Id the creation control should
  /// start its draft from. Never
  /// decreases, so deleted ids are
  /// not handed out again.
  pub fn next_id(&self) -> TaskId {
    self.next_id
  }

  pub fn is_empty(&self) -> bool {
    self.tasks.is_empty()
  }

  pub fn counts(&self) -> Counts {
    Counts::of(&self.tasks)
  }

  #[tracing::instrument(skip(self))]
  pub fn reduce(
    &self,
    action: Action
  ) -> Self {
    let mut next = self.clone();

    match action {
      | Action::Create(task) => {
        if next
          .tasks
          .iter()
          .any(|t| t.id == task.id)
        {
          warn!(
            id = task.id,
            "rejecting create with an \
             id already in the list"
          );
          return next;
        }
        next.next_id = next
          .next_id
          .max(task.id.saturating_add(1));
        next.tasks.push(task);
      }
      | Action::ToggleAll(complete) => {
        for task in &mut next.tasks {
          task.complete = complete;
        }
      }
      | Action::UpdateOne(task) => {
        match next
          .tasks
          .iter_mut()
          .find(|t| t.id == task.id)
        {
          | Some(slot) => *slot = task,
          | None => {
            trace!(
              id = task.id,
              "update for unknown id \
               ignored"
            );
          }
        }
      }
      | Action::DestroyOne(id) => {
        let before = next.tasks.len();
        next
          .tasks
          .retain(|task| task.id != id);
        if next.tasks.len() == before {
          trace!(
            id,
            "destroy for unknown id \
             ignored"
          );
        }
      }
      | Action::ClearCompleted => {
        next
          .tasks
          .retain(|task| !task.complete);
      }
      | Action::SetFilter(filter) => {
        next.filter = filter;
      }
    }

    debug!(
      tasks = next.tasks.len(),
      filter = ?next.filter,
      next_id = next.next_id,
      "applied action"
    );
    next
  }
}

#[cfg(test)]
mod tests {
  use super::{
    Action,
    TodoState
  };
  use crate::filter::Filter;
  use crate::task::Task;

  fn state() -> TodoState {
    TodoState::new(
      vec![
        Task::new_active(1, "one"),
        Task::new_active(2, "two")
          .with_complete(true),
        Task::new_active(3, "three"),
        Task::new_active(4, "four")
          .with_complete(true),
      ],
      Filter::All
    )
  }

  #[test]
  fn next_id_starts_past_largest_id() {
    assert_eq!(state().next_id(), 5);
    assert_eq!(
      TodoState::default().next_id(),
      1
    );
  }

  #[test]
  fn create_appends_and_advances_next_id()
   {
    let next = state().reduce(
      Action::Create(Task::new_active(
        9, "nine"
      ))
    );

    assert_eq!(next.tasks().len(), 5);
    assert_eq!(next.tasks()[4].id, 9);
    assert_eq!(next.next_id(), 10);
  }

  #[test]
  fn create_with_duplicate_id_is_rejected()
   {
    let before = state();
    let after = before.reduce(
      Action::Create(Task::new_active(
        2, "imposter"
      ))
    );
    assert_eq!(after, before);
  }

  #[test]
  fn next_id_never_moves_backwards() {
    let next = state()
      .reduce(Action::DestroyOne(4))
      .reduce(Action::DestroyOne(3));
    assert_eq!(next.next_id(), 5);
  }

  #[test]
  fn destroy_unknown_id_is_a_no_op() {
    let before = state();
    let after =
      before.reduce(Action::DestroyOne(42));
    assert_eq!(after, before);
  }

  #[test]
  fn update_unknown_id_is_a_no_op() {
    let before = state();
    let after = before.reduce(
      Action::UpdateOne(Task::new_active(
        42, "ghost"
      ))
    );
    assert_eq!(after, before);
  }

  #[test]
  fn update_replaces_only_the_matching_task()
   {
    let before = state();
    let after = before.reduce(
      Action::UpdateOne(
        before.tasks()[2]
          .with_text("THREE")
          .with_complete(true)
      )
    );

    assert_eq!(
      after.tasks().len(),
      before.tasks().len()
    );
    for (old, new) in before
      .tasks()
      .iter()
      .zip(after.tasks())
    {
      assert_eq!(old.id, new.id);
      if old.id == 3 {
        assert_eq!(new.text, "THREE");
        assert!(new.complete);
      } else {
        assert_eq!(old, new);
      }
    }
  }

  #[test]
  fn toggle_all_round_trip_keeps_text() {
    let before = state();
    let after = before
      .reduce(Action::ToggleAll(true))
      .reduce(Action::ToggleAll(false));

    assert_eq!(after.counts().complete, 0);
    for (old, new) in before
      .tasks()
      .iter()
      .zip(after.tasks())
    {
      assert_eq!(old.id, new.id);
      assert_eq!(old.text, new.text);
      assert!(!new.complete);
    }
  }

  #[test]
  fn clear_completed_is_idempotent() {
    let once =
      state().reduce(Action::ClearCompleted);
    let twice =
      once.reduce(Action::ClearCompleted);

    let ids: Vec<u64> = once
      .tasks()
      .iter()
      .map(|task| task.id)
      .collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(once, twice);
  }

  #[test]
  fn set_filter_only_changes_the_view() {
    let before = state();
    let after = before.reduce(
      Action::SetFilter(Filter::Active)
    );

    assert_eq!(after.tasks(), before.tasks());
    assert_eq!(after.filter(), Filter::Active);
    assert_eq!(
      after
        .filter()
        .visible(after.tasks())
        .len(),
      2
    );
  }
}
