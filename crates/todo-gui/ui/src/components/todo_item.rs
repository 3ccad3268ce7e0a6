use todo_core::{
  Action,
  ItemEditor,
  Task
};
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Event,
  FocusEvent,
  Html,
  InputEvent,
  KeyboardEvent,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  html,
  use_effect_with,
  use_node_ref,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct TodoItemProps {
  pub task:      Task,
  pub on_action: Callback<Action>
}

#[function_component(TodoItem)]
pub fn todo_item(
  props: &TodoItemProps
) -> Html {
  let editor =
    use_state(ItemEditor::default);
  let edit_ref = use_node_ref();

  {
    // caret goes after the existing
    // text so typing appends
    let edit_ref = edit_ref.clone();
    use_effect_with(
      editor.is_editing(),
      move |editing| {
        if *editing
          && let Some(input) = edit_ref
            .cast::<HtmlInputElement>()
        {
          let _ = input.focus();
          let end = input
            .value()
            .encode_utf16()
            .count()
            as u32;
          let _ = input
            .set_selection_range(
              end, end
            );
        }
      }
    );
  }

  let on_begin = {
    let editor = editor.clone();
    let task = props.task.clone();
    Callback::from(
      move |_: MouseEvent| {
        let mut next =
          (*editor).clone();
        next.begin(&task);
        editor.set(next);
      }
    )
  };

  let on_input = {
    let editor = editor.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        let mut next =
          (*editor).clone();
        next.set_buffer(input.value());
        editor.set(next);
      }
    )
  };

  let on_keyup = {
    let editor = editor.clone();
    let task = props.task.clone();
    let on_action =
      props.on_action.clone();
    Callback::from(
      move |e: KeyboardEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        let mut next =
          (*editor).clone();
        next.set_buffer(input.value());
        let action =
          next.handle_key(&e.key(), &task);
        editor.set(next);
        if let Some(action) = action {
          on_action.emit(action);
        }
      }
    )
  };

  // A blur that races an Enter commit
  // re-sends the same update or a
  // destroy for a gone id; both are
  // no-ops upstream.
  let on_blur = {
    let editor = editor.clone();
    let task = props.task.clone();
    let on_action =
      props.on_action.clone();
    Callback::from(
      move |e: FocusEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        let mut next =
          (*editor).clone();
        next.set_buffer(input.value());
        let action = next.confirm(&task);
        editor.set(next);
        if let Some(action) = action {
          on_action.emit(action);
        }
      }
    )
  };

  let on_toggle = {
    let task = props.task.clone();
    let on_action =
      props.on_action.clone();
    Callback::from(move |_: Event| {
      on_action
        .emit(ItemEditor::toggle(&task));
    })
  };

  let on_destroy = {
    let id = props.task.id;
    let on_action =
      props.on_action.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_action
          .emit(Action::DestroyOne(id));
      }
    )
  };

  if let Some(buffer) = editor.buffer() {
    return html! {
        <li class="editing">
            <input
                class="edit"
                ref={edit_ref}
                value={buffer.to_string()}
                oninput={on_input}
                onkeyup={on_keyup}
                onblur={on_blur}
            />
        </li>
    };
  }

  let task = &props.task;
  html! {
      <li class={if task.complete { "completed" } else { "" }}>
          <input
              class="toggle"
              type="checkbox"
              checked={task.complete}
              onchange={on_toggle}
          />
          <label ondblclick={on_begin}>{ task.text.clone() }</label>
          <button class="destroy" onclick={on_destroy}></button>
      </li>
  }
}
