use crate::core::{ContractInput, SspBreakdown};
use crate::domain::model::{SUPPORT_RATIO, UPFRONT_LICENSE_RATIO};
use crate::utils::error::Result;

/// Splits `amount` 85/15 and spreads the support share evenly over `term` months.
///
/// Fails with `InvalidInput` when `amount` is not a finite positive number or
/// `term` is not a positive integer. Nothing is rounded here; callers format
/// for display.
pub fn calculate(amount: f64, term: i64) -> Result<SspBreakdown> {
    let input = ContractInput::new(amount, term)?;
    Ok(calculate_input(&input))
}

pub fn calculate_input(input: &ContractInput) -> SspBreakdown {
    let amount = input.amount();
    let term = input.term_months();

    let upfront_license = amount * UPFRONT_LICENSE_RATIO;
    let total_support = amount * SUPPORT_RATIO;
    let monthly_support = total_support / f64::from(term);

    tracing::debug!(
        amount,
        term,
        upfront_license,
        total_support,
        monthly_support,
        "Computed SSP breakdown"
    );

    SspBreakdown {
        contract_amount: amount,
        contract_term: term,
        upfront_license,
        total_support,
        monthly_support,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SspError;

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {} but got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_hundred_thousand_over_a_year() {
        let result = calculate(100_000.0, 12).unwrap();
        assert_close(result.upfront_license, 85_000.0);
        assert_close(result.total_support, 15_000.0);
        assert_close(result.monthly_support, 1_250.0);
        assert_eq!(result.contract_term, 12);
    }

    #[test]
    fn test_single_month_term() {
        let result = calculate(1_000.0, 1).unwrap();
        assert_close(result.upfront_license, 850.0);
        assert_close(result.total_support, 150.0);
        assert_close(result.monthly_support, 150.0);
    }

    #[test]
    fn test_keeps_full_precision() {
        let result = calculate(1_000.0, 7).unwrap();
        assert_close(result.monthly_support, 150.0 / 7.0);
        assert_ne!(result.monthly_support, 21.43);
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        for amount in [0.0, -0.01, -100_000.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = calculate(amount, 12).unwrap_err();
            assert!(matches!(err, SspError::InvalidInput { ref field, .. } if field == "contract_amount"));
        }
    }

    #[test]
    fn test_rejects_non_positive_term() {
        for term in [0, -1, -12] {
            let err = calculate(100_000.0, term).unwrap_err();
            assert!(matches!(err, SspError::InvalidInput { ref field, .. } if field == "contract_term"));
        }
    }
}
