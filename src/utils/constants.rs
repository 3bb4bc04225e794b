/// Storage key holding the session token.
/// Configurable at compile time (see build.rs / .env):
/// - Default: ticketapp_session
pub const SESSION_KEY: &str = match option_env!("SESSION_KEY") {
    Some(key) => key,
    None => "ticketapp_session",
};

/// Storage key holding the serialized ticket list.
pub const TICKET_STORAGE_KEY: &str = match option_env!("TICKET_STORAGE_KEY") {
    Some(key) => key,
    None => "app_tickets",
};

/// The one accepted demo credential pair.
pub const LOGIN_USER: &str = match option_env!("LOGIN_USER") {
    Some(user) => user,
    None => "test",
};

pub const LOGIN_PASS: &str = match option_env!("LOGIN_PASS") {
    Some(pass) => pass,
    None => "password",
};

/// How long a toast stays on screen before auto-dismissing.
pub const TOAST_DISMISS_MS: u32 = 3_000;

/// Redraw interval for the profile-card millisecond clock.
pub const CLOCK_TICK_MS: u32 = 1_000;

/// How long the contact form stays hidden after a successful submission.
pub const CONTACT_SUCCESS_MS: u32 = 5_000;
