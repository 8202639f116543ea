pub mod alert;
pub mod user;

pub use alert::{Alert, NewAlert};
pub use user::User;
