//! Financial claim lifecycle.

use serde::{Deserialize, Serialize};

/// Claim status. Stored as the PostgreSQL `claim_status` enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "claim_status", rename_all = "lowercase")]
pub enum ClaimStatus {
    Pending,
    Approved,
    Paid,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "pending",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Paid => "paid",
        }
    }
}

impl std::fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a claim may move from `from` to `to`.
///
/// The lifecycle is strictly forward: pending -> approved -> paid.
/// Anything else (including no-op updates) is rejected so a stale client
/// cannot re-approve or un-pay a claim.
pub fn can_transition(from: ClaimStatus, to: ClaimStatus) -> bool {
    matches!(
        (from, to),
        (ClaimStatus::Pending, ClaimStatus::Approved) | (ClaimStatus::Approved, ClaimStatus::Paid)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_transitions_allowed() {
        assert!(can_transition(ClaimStatus::Pending, ClaimStatus::Approved));
        assert!(can_transition(ClaimStatus::Approved, ClaimStatus::Paid));
    }

    #[test]
    fn test_everything_else_rejected() {
        assert!(!can_transition(ClaimStatus::Pending, ClaimStatus::Paid), "no skipping approval");
        assert!(!can_transition(ClaimStatus::Approved, ClaimStatus::Pending));
        assert!(!can_transition(ClaimStatus::Paid, ClaimStatus::Approved));
        assert!(!can_transition(ClaimStatus::Paid, ClaimStatus::Pending));
        // No-op updates are not transitions.
        assert!(!can_transition(ClaimStatus::Pending, ClaimStatus::Pending));
        assert!(!can_transition(ClaimStatus::Paid, ClaimStatus::Paid));
    }
}
