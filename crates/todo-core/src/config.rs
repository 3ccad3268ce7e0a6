use std::collections::BTreeSet;

use anyhow::{
  Context,
  anyhow
};
use serde::Deserialize;
use tracing::{
  debug,
  info
};

use crate::filter::Filter;
use crate::state::TodoState;
use crate::task::Task;

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Deserialize,
)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
  pub initial_filter: Filter,
  #[serde(rename = "seed")]
  pub seeds:          Vec<Task>
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      initial_filter: Filter::All,
      seeds:          default_seeds()
    }
  }
}

/// The two records every fresh page
/// starts with.
pub fn default_seeds() -> Vec<Task> {
  vec![
    Task::new_active(1, "active"),
    Task::new_active(2, "complete")
      .with_complete(true),
  ]
}

impl AppConfig {
  #[tracing::instrument(skip(text))]
  pub fn from_toml_str(
    text: &str
  ) -> anyhow::Result<Self> {
    let cfg: AppConfig =
      toml::from_str(text).context(
        "failed to parse todo config"
      )?;
    cfg.validate().context(
      "invalid todo config"
    )?;

    info!(
      seeds = cfg.seeds.len(),
      initial_filter = ?cfg.initial_filter,
      "loaded todo config"
    );
    Ok(cfg)
  }

  /// Seed ids must be unique and seed
  /// text non-empty, the same rules the
  /// creation control enforces.
  pub fn validate(
    &self
  ) -> anyhow::Result<()> {
    let mut seen = BTreeSet::new();

    for task in &self.seeds {
      if !seen.insert(task.id) {
        return Err(anyhow!(
          "duplicate seed id {}",
          task.id
        ));
      }
      if task.text.is_empty() {
        return Err(anyhow!(
          "seed {} has empty text",
          task.id
        ));
      }
    }

    debug!(
      seeds = self.seeds.len(),
      "seed tasks validated"
    );
    Ok(())
  }

  pub fn initial_state(
    &self
  ) -> TodoState {
    TodoState::new(
      self.seeds.clone(),
      self.initial_filter
    )
  }
}
