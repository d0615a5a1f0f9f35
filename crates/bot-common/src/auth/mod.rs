//! Authentication utilities

mod jwt;
mod password;

pub use jwt::{Claims, JwtService};
pub use password::{hash_password, verify_dummy, verify_password, PasswordService};
