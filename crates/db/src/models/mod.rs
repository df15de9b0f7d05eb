//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - Create/update DTOs used by the repositories
//! - Response projections safe for API output where the row is not

pub mod claim;
pub mod comment;
pub mod notification;
pub mod password_reset;
pub mod permit;
pub mod profile;
pub mod project;
pub mod session;
pub mod site_log;
pub mod user;
