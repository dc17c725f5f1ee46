//! UI Components
//!
//! Reusable Leptos components.

mod create_todo_modal;
mod header;
mod home_page;
mod login_page;
mod register_page;
mod todo_card;
mod todo_grid;
mod todos_page;

pub use create_todo_modal::CreateTodoModal;
pub use header::Header;
pub use home_page::HomePage;
pub use login_page::LoginPage;
pub use register_page::RegisterPage;
pub use todo_card::TodoCard;
pub use todo_grid::TodoGrid;
pub use todos_page::TodosPage;
