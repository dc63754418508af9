//! HTML template rendering handlers.

mod home;
mod login;

pub use home::home_handler;
pub use login::login_handler;
