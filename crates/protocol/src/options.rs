//! Protocol-wide defaults.

use std::time::Duration;

/// Default deadline for a delegated navigation request.
///
/// Applied when the caller does not configure a timeout. Silent renewals
/// against a responsive issuer complete well under this; interactive flows
/// normally override it upward.
pub const DEFAULT_SILENT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
