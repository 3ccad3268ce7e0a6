use todo_core::{
  Action,
  Counts,
  Filter,
  FooterView
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TodoFooterProps {
  pub counts:    Counts,
  pub filter:    Filter,
  pub on_action: Callback<Action>
}

#[function_component(TodoFooter)]
pub fn todo_footer(
  props: &TodoFooterProps
) -> Html {
  let view = FooterView::new(
    props.counts,
    props.filter
  );

  let on_clear_completed = {
    let on_action =
      props.on_action.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_action
          .emit(Action::ClearCompleted);
      }
    )
  };

  html! {
      <footer class="footer">
          <span class="todo-count">
              <strong>{ view.active_count }</strong>
              { view.remaining_suffix() }
          </span>
          <ul class="filters">
              {
                  for view.links.iter().map(|link| {
                      let filter = link.filter;
                      let on_action = props.on_action.clone();
                      let onclick = Callback::from(move |e: MouseEvent| {
                          e.prevent_default();
                          on_action.emit(Action::SetFilter(filter));
                      });
                      html! {
                          <li>
                              <a href="" class={link.class()} {onclick}>{ link.label() }</a>
                          </li>
                      }
                  })
              }
          </ul>
          if view.show_clear_completed {
              <button class="clear-completed" onclick={on_clear_completed}>
                  { "Clear completed" }
              </button>
          }
      </footer>
  }
}
