pub mod helper;
pub mod mailer;

pub use helper::build_post_request;
pub use helper::failing_state;
pub use helper::recording_state;

pub use mailer::FailingMailer;
pub use mailer::RecordingMailer;
