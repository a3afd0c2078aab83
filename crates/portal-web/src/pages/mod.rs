//! Page Components

mod dashboard;
mod reset;
mod tariffs;

pub use dashboard::DashboardPage;
pub use reset::ResetPasswordPage;
pub use tariffs::TariffsPage;
