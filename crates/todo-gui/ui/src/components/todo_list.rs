use todo_core::{
  Action,
  Filter,
  ListView,
  Task
};
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Event,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

use super::TodoItem;

#[derive(Properties, PartialEq)]
pub struct TodoListProps {
  pub tasks:        Vec<Task>,
  pub filter:       Filter,
  pub active_count: usize,
  pub on_action:    Callback<Action>
}

#[function_component(TodoList)]
pub fn todo_list(
  props: &TodoListProps
) -> Html {
  let view = ListView::project(
    &props.tasks,
    props.filter,
    props.active_count
  );

  let on_toggle_all = {
    let on_action =
      props.on_action.clone();
    Callback::from(move |e: Event| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      on_action.emit(Action::ToggleAll(
        input.checked()
      ));
    })
  };

  html! {
      <section class="main">
          <input
              id="toggle-all"
              class="toggle-all"
              type="checkbox"
              checked={view.all_complete}
              onchange={on_toggle_all}
          />
          <label for="toggle-all">{ "Mark all as complete" }</label>
          <ul class="todo-list">
              {
                  for view.visible.into_iter().map(|task| {
                      let id = task.id;
                      html! {
                          <TodoItem
                              key={id}
                              task={task}
                              on_action={props.on_action.clone()}
                          />
                      }
                  })
              }
          </ul>
      </section>
  }
}
