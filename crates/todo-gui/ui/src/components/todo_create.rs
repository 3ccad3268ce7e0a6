use todo_core::{
  Action,
  Draft,
  TaskId
};
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  InputEvent,
  KeyboardEvent,
  Properties,
  TargetCast,
  function_component,
  html,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct TodoCreateProps {
  /// Read once, when the control
  /// mounts.
  pub initial_id: TaskId,
  pub on_action:  Callback<Action>
}

#[function_component(TodoCreate)]
pub fn todo_create(
  props: &TodoCreateProps
) -> Html {
  let initial_id = props.initial_id;
  let draft = use_state(move || {
    Draft::new(initial_id)
  });

  let oninput = {
    let draft = draft.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        let mut next = (*draft).clone();
        next.set_text(input.value());
        draft.set(next);
      }
    )
  };

  let onkeyup = {
    let draft = draft.clone();
    let on_action =
      props.on_action.clone();
    Callback::from(
      move |e: KeyboardEvent| {
        if e.key() != "Enter" {
          return;
        }

        let input: HtmlInputElement =
          e.target_unchecked_into();
        let mut next = (*draft).clone();
        next.set_text(input.value());
        if let Some(task) = next.commit()
        {
          on_action
            .emit(Action::Create(task));
        }
        draft.set(next);
      }
    )
  };

  html! {
      <header class="header">
          <h1>{ "todos" }</h1>
          <input
              class="new-todo"
              placeholder="What needs to be done?"
              autofocus=true
              value={draft.text().to_string()}
              {oninput}
              {onkeyup}
          />
      </header>
  }
}
