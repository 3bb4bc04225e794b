pub mod auth_viewmodel;
pub mod dashboard_viewmodel;
pub mod route_guard;

pub use auth_viewmodel::AuthViewModel;
pub use dashboard_viewmodel::DashboardViewModel;
pub use route_guard::{GuardDecision, RouteGuard};
