//! Pure view-models for the list and
//! footer controls. The UI layer only
//! turns these into markup.

use crate::counts::Counts;
use crate::filter::Filter;
use crate::task::Task;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
  pub visible:      Vec<Task>,
  /// State of the "toggle all"
  /// checkbox. Reflects the list, it is
  /// not a flag of its own.
  pub all_complete: bool
}

impl ListView {
  pub fn project(
    tasks: &[Task],
    filter: Filter,
    active_count: usize
  ) -> Self {
    Self {
      visible:      filter
        .visible(tasks),
      all_complete: active_count == 0
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
)]
pub struct FilterLink {
  pub filter:   Filter,
  pub selected: bool
}

impl FilterLink {
  pub fn label(&self) -> &'static str {
    self.filter.label()
  }

  pub fn class(&self) -> &'static str {
    if self.selected {
      "selected"
    } else {
      ""
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterView {
  pub active_count:         usize,
  pub links:                [FilterLink; 3],
  pub show_clear_completed: bool
}

impl FooterView {
  pub fn new(
    counts: Counts,
    filter: Filter
  ) -> Self {
    Self {
      active_count:         counts
        .active,
      links:                Filter::VARIANTS
        .map(|candidate| FilterLink {
          filter:   candidate,
          selected: candidate == filter
        }),
      show_clear_completed: counts
        .complete
        > 0
    }
  }

  /// Text after the bolded count, e.g.
  /// `" items left"`.
  pub fn remaining_suffix(
    &self
  ) -> String {
    format!(
      " {} left",
      item_noun(self.active_count)
    )
  }
}

pub fn item_noun(
  count: usize
) -> &'static str {
  if count == 1 {
    "item"
  } else {
    "items"
  }
}
