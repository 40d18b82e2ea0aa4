//! Flag lifecycle constants and validation functions.
//!
//! A flag starts at `pending` and transitions exactly once, to either
//! `resolved` or `dismissed`. Terminal states have no outgoing transitions.
//! These helpers are used by both the DB and API layers.

/// Flag is awaiting a moderator decision.
pub const STATUS_PENDING: &str = "pending";

/// Moderator decided the report warrants action on the content.
pub const STATUS_RESOLVED: &str = "resolved";

/// Moderator decided the report does not warrant action.
pub const STATUS_DISMISSED: &str = "dismissed";

/// All states a flag record can be in.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_RESOLVED, STATUS_DISMISSED];

/// The outcomes a moderator may move a pending flag to.
pub const RESOLUTION_OUTCOMES: &[&str] = &[STATUS_RESOLVED, STATUS_DISMISSED];

/// Validate that a resolution outcome is one of the accepted terminal states.
pub fn validate_outcome(outcome: &str) -> Result<(), String> {
    if RESOLUTION_OUTCOMES.contains(&outcome) {
        Ok(())
    } else {
        Err(format!(
            "Invalid status '{outcome}'. Must be one of: {}",
            RESOLUTION_OUTCOMES.join(", ")
        ))
    }
}

/// Validate a report reason: required and non-empty after trimming.
pub fn validate_reason(reason: &str) -> Result<(), String> {
    if reason.trim().is_empty() {
        Err("Reason is required and must not be empty".to_string())
    } else {
        Ok(())
    }
}
