use crate::core::calculator::calculate_input;
use crate::core::{ContractInput, Presenter, SspBreakdown};
use crate::domain::model::DEFAULT_CONTRACT_TERM;
use crate::utils::error::{Result, SspError, INVALID_INPUT_NOTICE};
use crate::utils::validation::{parse_amount, parse_term};

/// The calculator form: two raw text fields and an optional results panel.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorForm {
    contract_amount: String,
    contract_term: String,
    default_term: u32,
    results: Option<SspBreakdown>,
}

impl Default for CalculatorForm {
    fn default() -> Self {
        Self::new(DEFAULT_CONTRACT_TERM)
    }
}

impl CalculatorForm {
    pub fn new(default_term: u32) -> Self {
        Self {
            contract_amount: String::new(),
            contract_term: default_term.to_string(),
            default_term,
            results: None,
        }
    }

    pub fn contract_amount(&self) -> &str {
        &self.contract_amount
    }

    pub fn contract_term(&self) -> &str {
        &self.contract_term
    }

    pub fn default_term(&self) -> u32 {
        self.default_term
    }

    pub fn results(&self) -> Option<&SspBreakdown> {
        self.results.as_ref()
    }

    pub fn set_contract_amount(&mut self, value: impl Into<String>) {
        self.contract_amount = value.into();
    }

    pub fn set_contract_term(&mut self, value: impl Into<String>) {
        self.contract_term = value.into();
    }

    /// Parses both fields without touching form state.
    pub fn parse_input(&self) -> Result<ContractInput> {
        let amount = parse_amount("contract_amount", &self.contract_amount)?;
        let term = parse_term("contract_term", &self.contract_term)?;
        ContractInput::new(amount, i64::from(term))
    }

    /// The "Calculate" action.
    ///
    /// On invalid input the presenter gets the blocking notice, the previous
    /// result (if any) stays in place, and `Ok(None)` is returned. Errors from
    /// the presenter itself are propagated.
    pub fn calculate<P: Presenter>(&mut self, presenter: &mut P) -> Result<Option<SspBreakdown>> {
        let input = match self.parse_input() {
            Ok(input) => input,
            Err(e @ SspError::InvalidInput { .. }) => {
                tracing::warn!("⚠️ Rejected form input: {}", e);
                presenter.notify(INVALID_INPUT_NOTICE)?;
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let breakdown = calculate_input(&input);
        presenter.show_results(&breakdown)?;
        self.results = Some(breakdown);
        Ok(Some(breakdown))
    }

    /// The "Clear" action: both fields back to defaults, results discarded.
    pub fn clear<P: Presenter>(&mut self, presenter: &mut P) -> Result<()> {
        self.contract_amount.clear();
        self.contract_term = self.default_term.to_string();
        self.results = None;
        tracing::debug!("Form cleared");
        presenter.clear_results()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingPresenter {
        shown: Vec<SspBreakdown>,
        notices: Vec<String>,
        clears: usize,
    }

    impl Presenter for RecordingPresenter {
        fn show_results(&mut self, breakdown: &SspBreakdown) -> Result<()> {
            self.shown.push(*breakdown);
            Ok(())
        }

        fn notify(&mut self, message: &str) -> Result<()> {
            self.notices.push(message.to_string());
            Ok(())
        }

        fn clear_results(&mut self) -> Result<()> {
            self.clears += 1;
            Ok(())
        }
    }

    #[test]
    fn test_defaults() {
        let form = CalculatorForm::default();
        assert_eq!(form.contract_amount(), "");
        assert_eq!(form.contract_term(), "12");
        assert!(form.results().is_none());
    }

    #[test]
    fn test_calculate_stores_results() {
        let mut form = CalculatorForm::default();
        let mut presenter = RecordingPresenter::default();
        form.set_contract_amount("100000");

        let result = form.calculate(&mut presenter).unwrap().unwrap();
        assert_eq!(result.upfront_license, 85_000.0);
        assert_eq!(form.results(), Some(&result));
        assert_eq!(presenter.shown.len(), 1);
        assert!(presenter.notices.is_empty());
    }

    #[test]
    fn test_invalid_input_notifies_and_keeps_state() {
        let mut form = CalculatorForm::default();
        let mut presenter = RecordingPresenter::default();
        form.set_contract_amount("1000");
        form.set_contract_term("1");
        let first = form.calculate(&mut presenter).unwrap();

        form.set_contract_term("0");
        assert_eq!(form.calculate(&mut presenter).unwrap(), None);
        assert_eq!(presenter.notices, vec![INVALID_INPUT_NOTICE.to_string()]);
        assert_eq!(form.results().copied(), first);
        assert_eq!(presenter.shown.len(), 1);
    }

    #[test]
    fn test_empty_amount_is_rejected() {
        let mut form = CalculatorForm::default();
        let mut presenter = RecordingPresenter::default();
        assert_eq!(form.calculate(&mut presenter).unwrap(), None);
        assert_eq!(presenter.notices.len(), 1);
        assert!(form.results().is_none());
    }

    #[test]
    fn test_clear_resets_to_configured_default() {
        let mut form = CalculatorForm::new(24);
        let mut presenter = RecordingPresenter::default();
        form.set_contract_amount("5000");
        form.set_contract_term("6");
        form.calculate(&mut presenter).unwrap();

        form.clear(&mut presenter).unwrap();
        assert_eq!(form.contract_amount(), "");
        assert_eq!(form.contract_term(), "24");
        assert!(form.results().is_none());
        assert_eq!(presenter.clears, 1);
    }
}
