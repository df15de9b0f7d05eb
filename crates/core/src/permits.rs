//! Permit expiry risk classification.

use chrono::NaiveDate;
use serde::Serialize;

/// Permits expiring within this many days count as "expiring".
pub const EXPIRY_WARNING_DAYS: i64 = 30;

/// Default window (in days) for the admin high-risk permit listing.
pub const HIGH_RISK_WINDOW_DAYS: i64 = 14;

/// Risk bucket for a permit's expiry date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PermitRisk {
    Expired,
    Expiring,
    Valid,
}

/// Classify a permit by expiry date relative to `today`.
///
/// Day granularity: a permit expiring today is still valid-for-today and
/// counts as `Expiring`, not `Expired`.
pub fn permit_risk(expiry: NaiveDate, today: NaiveDate) -> PermitRisk {
    let days_left = (expiry - today).num_days();
    if days_left < 0 {
        PermitRisk::Expired
    } else if days_left <= EXPIRY_WARNING_DAYS {
        PermitRisk::Expiring
    } else {
        PermitRisk::Valid
    }
}
