use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_amount, validate_term};
use serde::{Deserialize, Serialize};

/// Share of the contract recognised upfront as license revenue.
pub const UPFRONT_LICENSE_RATIO: f64 = 0.85;
/// Share of the contract amortised as support over the term.
pub const SUPPORT_RATIO: f64 = 0.15;
pub const DEFAULT_CONTRACT_TERM: u32 = 12;

/// Validated calculator input. Construct through [`ContractInput::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContractInput {
    amount: f64,
    term_months: u32,
}

impl ContractInput {
    pub fn new(amount: f64, term_months: i64) -> Result<Self> {
        validate_positive_amount("contract_amount", amount)?;
        let term_months = validate_term("contract_term", term_months)?;
        Ok(Self {
            amount,
            term_months,
        })
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn term_months(&self) -> u32 {
        self.term_months
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SspBreakdown {
    pub contract_amount: f64,
    pub contract_term: u32,
    pub upfront_license: f64,
    pub total_support: f64,
    pub monthly_support: f64,
}
