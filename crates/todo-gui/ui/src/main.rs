mod app;
mod components;

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  tracing::info!(
    "starting todos frontend"
  );

  let mount = web_sys::window()
    .and_then(|window| {
      window.document()
    })
    .and_then(|document| {
      document
        .query_selector(".todoapp")
        .ok()
        .flatten()
    })
    .expect(
      "missing .todoapp mount element"
    );

  yew::Renderer::<app::App>::with_root(
    mount
  )
  .render();
}
