//! Bounded role resolution.
//!
//! A user's role lives in `user_profiles`, not in the identity row, so every
//! token issuance needs a profile lookup. That lookup is raced against a
//! fixed deadline: if it does not complete in time the session is still
//! issued, but with no role -- and a roleless session fails every permission
//! check until a later refresh resolves it. Sessions never hang on a slow
//! profile query, and they never silently escalate.

use std::future::Future;
use std::time::Duration;

use gantry_core::roles::Role;
use gantry_db::repositories::ProfileRepo;
use gantry_db::DbPool;
use tracing::warn;

/// Maximum time to wait for the profile role lookup before issuing a
/// roleless session.
pub const ROLE_LOOKUP_TIMEOUT: Duration = Duration::from_secs(3);

/// Resolve the role for `user_id`, bounded by [`ROLE_LOOKUP_TIMEOUT`].
///
/// Returns `None` when the lookup times out, fails, or the user has no
/// profile row. All three collapse to the same outcome: no role, no
/// permissions.
pub async fn resolve_role(pool: &DbPool, user_id: gantry_core::types::DbId) -> Option<Role> {
    resolve_role_with(user_id, ProfileRepo::find_role(pool, user_id)).await
}

/// Race an arbitrary role-lookup future against the deadline.
///
/// Split out from [`resolve_role`] so the timeout behavior is testable
/// without a database.
pub async fn resolve_role_with<F, E>(
    user_id: gantry_core::types::DbId,
    lookup: F,
) -> Option<Role>
where
    F: Future<Output = Result<Option<Role>, E>>,
    E: std::fmt::Display,
{
    match tokio::time::timeout(ROLE_LOOKUP_TIMEOUT, lookup).await {
        Ok(Ok(role)) => role,
        Ok(Err(e)) => {
            warn!(user_id, error = %e, "role lookup failed; issuing roleless session");
            None
        }
        Err(_) => {
            warn!(
                user_id,
                timeout_secs = ROLE_LOOKUP_TIMEOUT.as_secs(),
                "role lookup timed out; issuing roleless session"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolved_role_passes_through() {
        let role =
            resolve_role_with(1, async { Ok::<_, std::convert::Infallible>(Some(Role::Client)) })
                .await;
        assert_eq!(role, Some(Role::Client));
    }

    #[tokio::test]
    async fn test_missing_profile_yields_none() {
        let role =
            resolve_role_with(2, async { Ok::<_, std::convert::Infallible>(None) }).await;
        assert_eq!(role, None);
    }

    #[tokio::test]
    async fn test_lookup_error_yields_none() {
        let role = resolve_role_with(3, async {
            Err::<Option<Role>, _>("connection reset".to_string())
        })
        .await;
        assert_eq!(role, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_lookup_timeout_yields_none() {
        // A lookup that never completes must not hang the caller past the
        // deadline. With the clock paused, tokio auto-advances time when all
        // tasks are idle, so this resolves immediately in test wall time.
        let role = resolve_role_with(
            4,
            std::future::pending::<Result<Option<Role>, std::convert::Infallible>>(),
        )
        .await;
        assert_eq!(role, None);
    }
}
