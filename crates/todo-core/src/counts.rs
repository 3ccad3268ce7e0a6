use crate::task::Task;

/// Derived from the full task list on
/// every render, never stored.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub struct Counts {
  pub active:   usize,
  pub complete: usize
}

impl Counts {
  pub fn of(tasks: &[Task]) -> Self {
    let complete = tasks
      .iter()
      .filter(|task| task.complete)
      .count();

    Self {
      active: tasks.len() - complete,
      complete
    }
  }

}
