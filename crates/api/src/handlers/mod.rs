pub mod admin;
pub mod auth;
pub mod claim;
pub mod dashboard;
pub mod notification;
pub mod permit;
pub mod project;
pub mod session;
pub mod site_log;
pub mod storage;
