use std::str::FromStr;

use anyhow::anyhow;
use serde::{
  Deserialize,
  Serialize
};
use tracing::trace;

use crate::task::Task;

/// Visibility rule for the task list.
///
/// `All` is the "no filter" selection: every task is visible.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
  #[default]
  #[serde(alias = "", alias = "none")]
  All,
  Active,
  Completed
}

impl Filter {
  /// Footer link order.
  pub const VARIANTS: [Filter; 3] = [
    Filter::All,
    Filter::Active,
    Filter::Completed
  ];

  pub fn label(self) -> &'static str {
    match self {
      | Filter::All => "All",
      | Filter::Active => "Active",
      | Filter::Completed => {
        "Completed"
      }
    }
  }

  pub fn matches(
    self,
    task: &Task
  ) -> bool {
    let ok = match self {
      | Filter::All => true,
      | Filter::Active => {
        task.is_active()
      }
      | Filter::Completed => {
        task.complete
      }
    };

    trace!(filter = ?self, id = task.id, ok, "filter evaluation");
    ok
  }

  /// Stable projection: keeps the
  /// original relative order.
  pub fn apply<'a>(
    self,
    tasks: &'a [Task]
  ) -> impl Iterator<Item = &'a Task> + 'a
  {
    tasks
      .iter()
      .filter(move |task| {
        self.matches(task)
      })
  }

  pub fn visible(
    self,
    tasks: &[Task]
  ) -> Vec<Task> {
    self
      .apply(tasks)
      .cloned()
      .collect()
  }
}

impl FromStr for Filter {
  type Err = anyhow::Error;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    match s
      .trim()
      .to_ascii_lowercase()
      .as_str()
    {
      | "" | "all" | "none" => {
        Ok(Filter::All)
      }
      | "active" => Ok(Filter::Active),
      | "completed" => {
        Ok(Filter::Completed)
      }
      | other => Err(anyhow!(
        "unknown filter: {other:?} \
         (expected all, active or \
         completed)"
      ))
    }
  }
}

#[cfg(test)]
mod tests {
  use std::collections::BTreeSet;

  use super::Filter;
  use crate::task::Task;

  fn sample() -> Vec<Task> {
    vec![
      Task::new_active(1, "a"),
      Task::new_active(2, "b")
        .with_complete(true),
      Task::new_active(3, "c"),
      Task::new_active(4, "d")
        .with_complete(true),
      Task::new_active(5, "e"),
    ]
  }

  fn ids(tasks: &[Task]) -> Vec<u64> {
    tasks
      .iter()
      .map(|task| task.id)
      .collect()
  }

  #[test]
  fn projection_keeps_relative_order()
  {
    let tasks = sample();

    assert_eq!(
      ids(&Filter::All.visible(&tasks)),
      vec![1, 2, 3, 4, 5]
    );
    assert_eq!(
      ids(
        &Filter::Active.visible(&tasks)
      ),
      vec![1, 3, 5]
    );
    assert_eq!(
      ids(
        &Filter::Completed
          .visible(&tasks)
      ),
      vec![2, 4]
    );
  }

  #[test]
  fn active_and_completed_partition_the_list()
   {
    let tasks = sample();
    let active =
      Filter::Active.visible(&tasks);
    let completed =
      Filter::Completed.visible(&tasks);

    let union: BTreeSet<u64> = active
      .iter()
      .chain(completed.iter())
      .map(|task| task.id)
      .collect();

    assert_eq!(
      active.len() + completed.len(),
      tasks.len()
    );
    assert_eq!(
      union,
      ids(&tasks).into_iter().collect()
    );
  }

  #[test]
  fn parses_route_keywords() {
    assert_eq!(
      "".parse::<Filter>().unwrap(),
      Filter::All
    );
    assert_eq!(
      "All".parse::<Filter>().unwrap(),
      Filter::All
    );
    assert_eq!(
      " active "
        .parse::<Filter>()
        .unwrap(),
      Filter::Active
    );
    assert_eq!(
      "completed"
        .parse::<Filter>()
        .unwrap(),
      Filter::Completed
    );

    let err = "done"
      .parse::<Filter>()
      .unwrap_err();
    assert!(
      err
        .to_string()
        .contains("unknown filter")
    );
  }

  #[test]
  fn label_parses_back_to_same_filter()
  {
    for filter in Filter::VARIANTS {
      assert_eq!(
        filter
          .label()
          .parse::<Filter>()
          .unwrap(),
        filter
      );
    }
  }

  #[test]
  fn serializes_as_lowercase_names() {
    assert_eq!(
      serde_json::to_string(
        &Filter::Completed
      )
      .unwrap(),
      "\"completed\""
    );
    let parsed: Filter =
      serde_json::from_str("\"\"")
        .unwrap();
    assert_eq!(parsed, Filter::All);
  }
}
