//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod claim_repo;
pub mod comment_repo;
pub mod notification_repo;
pub mod password_reset_repo;
pub mod permit_repo;
pub mod profile_repo;
pub mod project_repo;
pub mod session_repo;
pub mod site_log_repo;
pub mod user_repo;

pub use claim_repo::ClaimRepo;
pub use comment_repo::CommentRepo;
pub use notification_repo::NotificationRepo;
pub use password_reset_repo::PasswordResetRepo;
pub use permit_repo::PermitRepo;
pub use profile_repo::ProfileRepo;
pub use project_repo::ProjectRepo;
pub use session_repo::SessionRepo;
pub use site_log_repo::SiteLogRepo;
pub use user_repo::UserRepo;
