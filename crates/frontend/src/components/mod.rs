pub mod auth_page;
pub mod dashboard;
pub mod nav;
pub mod spinner;
pub mod tax;
pub mod transactions;

pub use auth_page::AuthPage;
pub use dashboard::Dashboard;
pub use nav::Nav;
pub use spinner::LoadingSpinner;
pub use tax::TaxPage;
pub use transactions::TransactionsPage;
