pub mod auth;
pub mod default;
pub mod global_404;
pub mod ping;

pub use auth::send_otp::send_otp_handler;
pub use auth::verify_otp::verify_otp_handler;

pub use default::default_route_handler;

pub use global_404::global_404_handler;

pub use ping::ping_handler;
