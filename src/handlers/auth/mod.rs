pub mod send_otp;
pub mod verify_otp;
