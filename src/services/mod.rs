pub mod clock;
pub mod question;
