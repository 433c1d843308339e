mod auth;
mod categories;
mod dashboard;
mod reports;
mod set_budget;
mod shopping_list;

pub use auth::AuthScreen;
pub use categories::CategoriesPage;
pub use dashboard::DashboardPage;
pub use reports::ReportsPage;
pub use set_budget::SetBudgetPage;
pub use shopping_list::ShoppingListPage;
