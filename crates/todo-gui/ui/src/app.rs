mod state;

use gloo::console::log;
use todo_core::Action;
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_reducer
};

use self::state::AppState;
use crate::components::{
  TodoCreate,
  TodoFooter,
  TodoList
};

#[function_component(App)]
pub fn app() -> Html {
  let state =
    use_reducer(AppState::load);

  let on_action = {
    let state = state.clone();
    Callback::from(
      move |action: Action| {
        ui_debug(
          "dispatch",
          &format!("{action:?}")
        );
        state.dispatch(action);
      }
    )
  };

  let todos = state.todos();
  let counts = todos.counts();

  html! {
      <>
          <TodoCreate
              initial_id={todos.next_id()}
              on_action={on_action.clone()}
          />
          if !todos.is_empty() {
              <TodoList
                  tasks={todos.tasks().to_vec()}
                  filter={todos.filter()}
                  active_count={counts.active}
                  on_action={on_action.clone()}
              />
              <TodoFooter
                  counts={counts}
                  filter={todos.filter()}
                  on_action={on_action}
              />
          }
      </>
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
