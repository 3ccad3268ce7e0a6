pub mod config;
pub mod counts;
pub mod draft;
pub mod editor;
pub mod filter;
pub mod state;
pub mod task;
pub mod view;

pub use config::AppConfig;
pub use counts::Counts;
pub use draft::Draft;
pub use editor::ItemEditor;
pub use filter::Filter;
pub use state::{
  Action,
  TodoState
};
pub use task::{
  Task,
  TaskId
};
pub use view::{
  FilterLink,
  FooterView,
  ListView
};
