use std::rc::Rc;

use todo_core::{
  Action,
  AppConfig,
  TodoState
};
use yew::Reducible;

const CONFIG_TOML: &str =
  include_str!("../../todo.toml");

/// `use_reducer` adapter around the
/// core state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState(TodoState);

impl AppState {
  pub fn load() -> Self {
    let cfg =
      match AppConfig::from_toml_str(
        CONFIG_TOML
      ) {
        | Ok(cfg) => cfg,
        | Err(err) => {
          tracing::error!(
            error = %format!("{err:#}"),
            "embedded config rejected; \
             using defaults"
          );
          AppConfig::default()
        }
      };

    Self(cfg.initial_state())
  }

  pub fn todos(&self) -> &TodoState {
    &self.0
  }
}

impl Reducible for AppState {
  type Action = Action;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    Rc::new(Self(self.0.reduce(action)))
  }
}
