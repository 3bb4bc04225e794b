pub mod app;
pub mod dashboard;
pub mod login;
pub mod profile;
pub mod signup;

pub use app::render_app;
pub use dashboard::render_dashboard;
pub use login::render_login;
pub use profile::render_profile;
pub use signup::render_signup;
