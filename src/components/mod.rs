//! UI Components
//!
//! Leptos views for the login, list and logout routes.

mod error_banner;
mod login_form;
mod logout_view;
mod new_item_form;
mod session_keeper;
mod todo_item;
mod todo_list;

pub use error_banner::ErrorBanner;
pub use login_form::LoginForm;
pub use logout_view::LogoutView;
pub use new_item_form::NewItemForm;
pub use session_keeper::SessionKeeper;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
