mod todo_create;
mod todo_footer;
mod todo_item;
mod todo_list;

pub use todo_create::TodoCreate;
pub use todo_footer::TodoFooter;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
