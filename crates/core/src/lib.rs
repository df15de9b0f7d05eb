//! Domain core for the Gantry construction-management platform.
//!
//! Pure, database-free building blocks shared by the `db` and `api` crates:
//! the role model and its static permission table, navigation filtering,
//! the route-guard/landing policy, and claim/permit lifecycle rules.

pub mod claims;
pub mod error;
pub mod nav;
pub mod permissions;
pub mod permits;
pub mod projects;
pub mod roles;
pub mod routing;
pub mod types;
