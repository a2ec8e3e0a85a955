//! Quantity bookkeeping rules for assets attached to maintenance jobs.
//!
//! A maintenance-job asset row carries a total `quantity` and the portion of
//! it that is currently held back, `quantity_in_maintenance`. At all times
//! `0 <= quantity_in_maintenance <= quantity`.

use std::num::IntErrorKind;

use crate::types::{DbId, Quantity};

/// Entity type recorded in audit log entries for junction rows.
pub const ENTITY_TYPE: &str = "maintenance_job_assets";

const NEGATIVE_QUANTITY: &str = "Quantity in maintenance cannot be negative";
const NOT_A_WHOLE_NUMBER: &str = "Quantity in maintenance must be a whole number";

/// Tagged failures of the quantity-update operation.
///
/// Each variant maps to a stable wire code returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JobAssetError {
    #[error("{0}")]
    InvalidQuantity(&'static str),

    #[error("Job asset not found")]
    NotFound,

    #[error("Quantity in maintenance cannot exceed total quantity in job")]
    QuantityExceeds { requested: i64, total: Quantity },

    #[error("Could not update quantity")]
    UpdateFailed,
}

impl JobAssetError {
    /// Wire code sent in the `error.code` field of the response.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidQuantity(_) => "INVALID-QUANTITY",
            Self::NotFound => "NOT-FOUND",
            Self::QuantityExceeds { .. } => "QUANTITY-EXCEEDS",
            Self::UpdateFailed => "UPDATE-FAILED",
        }
    }
}

/// Parse the requested in-maintenance quantity from its form value.
///
/// Surrounding whitespace is ignored. Anything that is not a whole number,
/// or is negative, is rejected with `INVALID-QUANTITY`. Whole numbers too
/// large for `i64` saturate to `i64::MAX` so the bound check reports them.
pub fn parse_quantity_in_maintenance(raw: &str) -> Result<i64, JobAssetError> {
    let value: i64 = match raw.trim().parse() {
        Ok(value) => value,
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => {
                return Err(JobAssetError::InvalidQuantity(NEGATIVE_QUANTITY))
            }
            _ => return Err(JobAssetError::InvalidQuantity(NOT_A_WHOLE_NUMBER)),
        },
    };
    if value < 0 {
        return Err(JobAssetError::InvalidQuantity(NEGATIVE_QUANTITY));
    }
    Ok(value)
}

/// Check a requested in-maintenance quantity against the row's total.
///
/// Returns the value narrowed to the column type on success.
pub fn check_within_total(requested: i64, total: Quantity) -> Result<Quantity, JobAssetError> {
    if requested < 0 {
        return Err(JobAssetError::InvalidQuantity(NEGATIVE_QUANTITY));
    }
    if requested > i64::from(total) {
        return Err(JobAssetError::QuantityExceeds { requested, total });
    }
    Quantity::try_from(requested).map_err(|_| JobAssetError::QuantityExceeds { requested, total })
}

/// Ensure a row's owning instance matches the caller's instance.
///
/// A row with no resolvable instance (orphaned or soft-deleted job) is
/// treated the same as a row in another tenant.
pub fn ensure_same_instance(
    row_instance_id: Option<DbId>,
    caller_instance_id: DbId,
) -> Result<(), JobAssetError> {
    match row_instance_id {
        Some(id) if id == caller_instance_id => Ok(()),
        _ => Err(JobAssetError::NotFound),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parses_plain_and_padded_integers() {
        assert_eq!(parse_quantity_in_maintenance("0"), Ok(0));
        assert_eq!(parse_quantity_in_maintenance(" 12 "), Ok(12));
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let err = parse_quantity_in_maintenance("-1").unwrap_err();
        assert_eq!(err.code(), "INVALID-QUANTITY");
        assert_eq!(err.to_string(), "Quantity in maintenance cannot be negative");
    }

    #[test]
    fn non_numeric_quantity_is_rejected() {
        for raw in ["", "abc", "1.5", "3x"] {
            assert_matches!(
                parse_quantity_in_maintenance(raw),
                Err(JobAssetError::InvalidQuantity(_)),
                "input {raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn oversized_quantity_saturates_and_exceeds_total() {
        let value = parse_quantity_in_maintenance("99999999999999999999").unwrap();
        assert_eq!(value, i64::MAX);
        assert_matches!(
            check_within_total(value, Quantity::MAX),
            Err(JobAssetError::QuantityExceeds { .. })
        );
    }

    #[test]
    fn oversized_negative_quantity_is_negative() {
        assert_eq!(
            parse_quantity_in_maintenance("-99999999999999999999"),
            Err(JobAssetError::InvalidQuantity(NEGATIVE_QUANTITY))
        );
    }

    #[test]
    fn quantity_up_to_total_is_accepted() {
        assert_eq!(check_within_total(0, 5), Ok(0));
        assert_eq!(check_within_total(5, 5), Ok(5));
    }

    #[test]
    fn quantity_above_total_is_rejected() {
        let err = check_within_total(6, 5).unwrap_err();
        assert_eq!(err, JobAssetError::QuantityExceeds { requested: 6, total: 5 });
        assert_eq!(err.code(), "QUANTITY-EXCEEDS");
    }

    #[test]
    fn quantity_beyond_column_range_is_rejected() {
        assert_matches!(
            check_within_total(i64::MAX, Quantity::MAX),
            Err(JobAssetError::QuantityExceeds { .. })
        );
    }

    #[test]
    fn negative_quantity_never_passes_bound_check() {
        assert_matches!(
            check_within_total(-3, 10),
            Err(JobAssetError::InvalidQuantity(_))
        );
    }

    #[test]
    fn foreign_or_missing_instance_is_not_found() {
        assert_eq!(ensure_same_instance(Some(7), 7), Ok(()));
        assert_eq!(ensure_same_instance(Some(8), 7), Err(JobAssetError::NotFound));
        assert_eq!(ensure_same_instance(None, 7), Err(JobAssetError::NotFound));
    }

    #[test]
    fn codes_are_stable() {
        assert_eq!(JobAssetError::NotFound.code(), "NOT-FOUND");
        assert_eq!(JobAssetError::UpdateFailed.code(), "UPDATE-FAILED");
        assert_eq!(
            JobAssetError::UpdateFailed.to_string(),
            "Could not update quantity"
        );
    }
}
