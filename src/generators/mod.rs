pub mod password;
pub mod snippets;

pub use password::PasswordGenerator;
