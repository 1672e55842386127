//! Split Bill form

use crate::error::FormError;
use crate::models::Payer;

/// Parse numeric field text. Empty or malformed text is unset.
pub fn parse_amount(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Characters a numeric input field accepts
pub fn is_amount_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '-'
}

/// Whether an expense candidate is larger than the bill.
///
/// An unset bill always counts as exceeded. An unset candidate counts as 0.
pub fn exceeds(candidate: Option<f64>, bill_total: Option<f64>) -> bool {
    match bill_total {
        None => true,
        Some(total) => candidate.unwrap_or(0.0) > total,
    }
}

/// Split state for the currently selected friend
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SplitDraft {
    bill_total: Option<f64>,
    user_expense: Option<f64>,
    payer: Payer,
}

impl SplitDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bill_total(&self) -> Option<f64> {
        self.bill_total
    }

    pub fn user_expense(&self) -> Option<f64> {
        self.user_expense
    }

    pub fn payer(&self) -> Payer {
        self.payer
    }

    /// Not re-checked against an existing expense
    pub fn set_bill_total(&mut self, total: Option<f64>) {
        self.bill_total = total;
    }

    /// Rejects the candidate and keeps the previous value when it exceeds the bill
    pub fn set_user_expense(&mut self, expense: Option<f64>) -> Result<(), FormError> {
        if exceeds(expense, self.bill_total) {
            return Err(FormError::ExpenseExceedsBill);
        }
        self.user_expense = expense;
        Ok(())
    }

    /// The friend's share, only defined once a bill value is set
    pub fn counterpart_expense(&self) -> Option<f64> {
        self.bill_total
            .map(|total| total - self.user_expense.unwrap_or(0.0))
    }

    pub fn set_payer(&mut self, payer: Payer) {
        self.payer = payer;
    }

    pub fn toggle_payer(&mut self) {
        self.payer = self.payer.toggle();
    }

    /// Balance change for the selected friend if this split were applied.
    ///
    /// User paid: the friend owes their share. Friend paid: the user owes theirs.
    pub fn settlement_delta(&self) -> Result<f64, FormError> {
        let counterpart = self.counterpart_expense().ok_or(FormError::MissingBillTotal)?;
        Ok(match self.payer {
            Payer::User => counterpart,
            Payer::Friend => -self.user_expense.unwrap_or(0.0),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(total: f64, expense: f64) -> SplitDraft {
        let mut d = SplitDraft::new();
        d.set_bill_total(Some(total));
        d.set_user_expense(Some(expense)).unwrap();
        d
    }

    #[test]
    fn test_counterpart_expense() {
        let d = draft(100.0, 30.0);
        assert_eq!(d.counterpart_expense(), Some(70.0));
    }

    #[test]
    fn test_expense_over_bill_is_rejected() {
        let mut d = draft(100.0, 30.0);
        assert_eq!(d.set_user_expense(Some(150.0)), Err(FormError::ExpenseExceedsBill));
        assert_eq!(d.user_expense(), Some(30.0));
        assert_eq!(d.counterpart_expense(), Some(70.0));
    }

    #[test]
    fn test_expense_equal_to_bill_is_accepted() {
        let d = draft(100.0, 100.0);
        assert_eq!(d.counterpart_expense(), Some(0.0));
    }

    #[test]
    fn test_unset_bill_blocks_expense() {
        let mut d = SplitDraft::new();
        assert!(d.set_user_expense(Some(5.0)).is_err());
        assert!(d.set_user_expense(None).is_err());
        assert_eq!(d.user_expense(), None);
        assert_eq!(d.counterpart_expense(), None);
    }

    #[test]
    fn test_counterpart_without_expense_is_whole_bill() {
        let mut d = SplitDraft::new();
        d.set_bill_total(Some(42.0));
        assert_eq!(d.counterpart_expense(), Some(42.0));
    }

    #[test]
    fn test_lowering_bill_does_not_clamp_expense() {
        let mut d = draft(100.0, 80.0);
        d.set_bill_total(Some(50.0));
        assert_eq!(d.user_expense(), Some(80.0));
        assert_eq!(d.counterpart_expense(), Some(-30.0));
    }

    #[test]
    fn test_settlement_delta_by_payer() {
        let mut d = draft(100.0, 30.0);
        assert_eq!(d.settlement_delta(), Ok(70.0));

        d.set_payer(Payer::Friend);
        assert_eq!(d.settlement_delta(), Ok(-30.0));
    }

    #[test]
    fn test_settlement_delta_requires_bill() {
        let d = SplitDraft::new();
        assert_eq!(d.settlement_delta(), Err(FormError::MissingBillTotal));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.5"), Some(12.5));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("-"), None);
        assert_eq!(parse_amount("1.2.3"), None);
        assert!(is_amount_char('7'));
        assert!(!is_amount_char('x'));
    }
}
