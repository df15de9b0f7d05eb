//! Authentication building blocks: JWT issuance/validation, password
//! hashing, and bounded role resolution.

pub mod jwt;
pub mod password;
pub mod resolver;
