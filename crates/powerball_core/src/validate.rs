//! Custom-ticket validation.
//!
//! Pure function over raw parsed integers. Rules run in a fixed order and
//! the first failure wins; on success the caller sorts the whites (see
//! [`Ticket::from_parts`](crate::models::Ticket::from_parts)).

use crate::error::TicketError;
use crate::models::{POWERBALL_MAX, POWERBALL_MIN, WHITES_PER_TICKET, WHITE_MAX, WHITE_MIN};

/// Checks a candidate ticket, in order: white count, white range, white
/// distinctness, powerball range. Does not sort and has no side effects.
pub fn validate_ticket(whites: &[i64], powerball: i64) -> Result<(), TicketError> {
    if whites.len() != WHITES_PER_TICKET {
        return Err(TicketError::WhiteCount { found: whites.len() });
    }

    for &white in whites {
        if !(WHITE_MIN as i64..=WHITE_MAX as i64).contains(&white) {
            return Err(TicketError::WhiteOutOfRange { value: white });
        }
    }

    // 5 elements, a pair scan beats building a set
    for i in 0..whites.len() {
        for j in (i + 1)..whites.len() {
            if whites[i] == whites[j] {
                return Err(TicketError::DuplicateWhite { value: whites[i] });
            }
        }
    }

    if !(POWERBALL_MIN as i64..=POWERBALL_MAX as i64).contains(&powerball) {
        return Err(TicketError::PowerballOutOfRange { value: powerball });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_accepts_valid_ticket() {
        assert_eq!(validate_ticket(&[1, 2, 3, 4, 5], 6), Ok(()));
        assert_eq!(validate_ticket(&[69, 1, 35, 12, 7], 26), Ok(()));
    }

    #[test]
    fn test_rejects_wrong_white_count() {
        assert_eq!(
            validate_ticket(&[1, 2, 3, 4], 5),
            Err(TicketError::WhiteCount { found: 4 })
        );
        assert_eq!(
            validate_ticket(&[1, 2, 3, 4, 5, 6], 5),
            Err(TicketError::WhiteCount { found: 6 })
        );
    }

    #[test]
    fn test_rejects_white_out_of_range() {
        assert_eq!(
            validate_ticket(&[0, 2, 3, 4, 5], 6),
            Err(TicketError::WhiteOutOfRange { value: 0 })
        );
        assert_eq!(
            validate_ticket(&[1, 2, 3, 4, 70], 6),
            Err(TicketError::WhiteOutOfRange { value: 70 })
        );
    }

    #[test]
    fn test_rejects_duplicate_whites() {
        // Range and count are fine here; the duplicate rule must fire.
        assert_eq!(
            validate_ticket(&[1, 1, 2, 3, 4], 5),
            Err(TicketError::DuplicateWhite { value: 1 })
        );
    }

    #[test]
    fn test_rejects_powerball_out_of_range() {
        assert_eq!(
            validate_ticket(&[1, 2, 3, 4, 5], 0),
            Err(TicketError::PowerballOutOfRange { value: 0 })
        );
        assert_eq!(
            validate_ticket(&[1, 2, 3, 4, 5], 27),
            Err(TicketError::PowerballOutOfRange { value: 27 })
        );
    }

    #[test]
    fn test_first_failing_rule_wins() {
        // Wrong count and bad powerball: count is reported.
        assert_eq!(
            validate_ticket(&[1, 2, 3], 99),
            Err(TicketError::WhiteCount { found: 3 })
        );
        // Out-of-range white and duplicate: range is reported.
        assert_eq!(
            validate_ticket(&[100, 100, 1, 2, 3], 99),
            Err(TicketError::WhiteOutOfRange { value: 100 })
        );
        // Duplicate and bad powerball: duplicate is reported.
        assert_eq!(
            validate_ticket(&[1, 1, 2, 3, 4], 99),
            Err(TicketError::DuplicateWhite { value: 1 })
        );
    }

    #[test]
    fn test_error_messages_match_ui_strings() {
        let err = validate_ticket(&[1, 2, 3], 5).unwrap_err();
        assert_eq!(err.to_string(), "Must enter exactly 5 white ball numbers");
        let err = validate_ticket(&[1, 2, 3, 4, 99], 5).unwrap_err();
        assert_eq!(err.to_string(), "White balls must be between 1 and 69");
        let err = validate_ticket(&[1, 1, 2, 3, 4], 5).unwrap_err();
        assert_eq!(err.to_string(), "White ball numbers must be unique");
        let err = validate_ticket(&[1, 2, 3, 4, 5], 0).unwrap_err();
        assert_eq!(err.to_string(), "Powerball must be between 1 and 26");
    }

    proptest! {
        #[test]
        fn prop_validation_is_idempotent(
            whites in proptest::collection::vec(-5i64..80, 0..8),
            powerball in -5i64..40,
        ) {
            let first = validate_ticket(&whites, powerball);
            let second = validate_ticket(&whites, powerball);
            prop_assert_eq!(first, second);
        }
    }
}
