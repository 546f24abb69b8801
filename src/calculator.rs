//! Wires the three bound inputs to the amortization engine and the chart.

use tracing::debug;

use crate::chart::ChartAdapter;
use crate::emi::{self, LoanParameters, LoanResult};
use crate::inputs::{BoundInput, LabelKind};

pub const AMOUNT_MIN: f64 = 100_000.0;
pub const AMOUNT_MAX: f64 = 20_000_000.0;
pub const AMOUNT_STEP: f64 = 50_000.0;
pub const YEARS_MIN: f64 = 1.0;
pub const YEARS_MAX: f64 = 20.0;
pub const YEARS_STEP: f64 = 1.0;
pub const RATE_MIN: f64 = 1.0;
pub const RATE_MAX: f64 = 20.0;
pub const RATE_STEP: f64 = 0.1;

pub const DEFAULT_AMOUNT: f64 = 1_000_000.0;
pub const DEFAULT_YEARS: f64 = 5.0;
pub const DEFAULT_RATE: f64 = 8.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Amount,
    Years,
    Rate,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[Field::Amount, Field::Years, Field::Rate]
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Amount => "Loan Amount",
            Self::Years => "Loan Tenure",
            Self::Rate => "Interest Rate",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Amount => Self::Years,
            Self::Years => Self::Rate,
            Self::Rate => Self::Amount,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Amount => Self::Rate,
            Self::Years => Self::Amount,
            Self::Rate => Self::Years,
        }
    }
}

/// Owns the bound inputs, the focus cursor, the last valid result, and the
/// chart. Every mutation funnels through `recompute`; an invalid parameter
/// set skips the update and leaves the previous result on screen.
#[derive(Debug)]
pub struct Calculator {
    amount: BoundInput,
    years: BoundInput,
    rate: BoundInput,
    focus: Field,
    result: Option<LoanResult>,
    chart: ChartAdapter,
}

impl Calculator {
    pub fn new() -> Self {
        let mut calc = Self {
            amount: BoundInput::new(DEFAULT_AMOUNT, AMOUNT_MIN, AMOUNT_MAX, AMOUNT_STEP, LabelKind::Rupees),
            years: BoundInput::new(DEFAULT_YEARS, YEARS_MIN, YEARS_MAX, YEARS_STEP, LabelKind::Years),
            rate: BoundInput::new(DEFAULT_RATE, RATE_MIN, RATE_MAX, RATE_STEP, LabelKind::Percent),
            focus: Field::Amount,
            result: None,
            chart: ChartAdapter::new(),
        };
        // Populate the initial frame with the defaults.
        calc.recompute();
        calc
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn input(&self, field: Field) -> &BoundInput {
        match field {
            Field::Amount => &self.amount,
            Field::Years => &self.years,
            Field::Rate => &self.rate,
        }
    }

    pub fn result(&self) -> Option<&LoanResult> {
        self.result.as_ref()
    }

    pub fn chart(&self) -> &ChartAdapter {
        &self.chart
    }

    /// Current parameters when all three buffers hold valid positive values.
    pub fn parameters(&self) -> Option<LoanParameters> {
        LoanParameters::parse(self.amount.text(), self.years.text(), self.rate.text()).ok()
    }

    pub fn type_char(&mut self, c: char) {
        self.focused_mut().push_char(c);
        self.recompute();
    }

    pub fn backspace(&mut self) {
        self.focused_mut().backspace();
        self.recompute();
    }

    pub fn nudge_up(&mut self) {
        self.focused_mut().increase();
        self.recompute();
    }

    pub fn nudge_down(&mut self) {
        self.focused_mut().decrease();
        self.recompute();
    }

    fn focused_mut(&mut self) -> &mut BoundInput {
        match self.focus {
            Field::Amount => &mut self.amount,
            Field::Years => &mut self.years,
            Field::Rate => &mut self.rate,
        }
    }

    fn recompute(&mut self) {
        let parsed = LoanParameters::parse(self.amount.text(), self.years.text(), self.rate.text());
        match parsed.and_then(|p| emi::amortize(&p)) {
            Ok(result) => {
                self.chart.update(result.total_principal, result.total_interest);
                self.result = Some(result);
            }
            Err(err) => {
                // Invalid input is not an error state the user sees; the
                // last valid result stays up.
                debug!(%err, "recompute skipped");
            }
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_populates_result_and_chart() {
        let calc = Calculator::new();
        let result = calc.result().expect("defaults must produce a result");
        assert_eq!(result.total_principal, DEFAULT_AMOUNT);
        assert_eq!(calc.chart().principal(), result.total_principal);
        assert_eq!(calc.chart().interest(), result.total_interest);
    }

    #[test]
    fn every_edit_recomputes() {
        let mut calc = Calculator::new();
        let before = *calc.result().unwrap();
        calc.focus_next(); // years
        calc.nudge_up();
        let after = *calc.result().unwrap();
        assert_ne!(before.monthly_installment, after.monthly_installment);
        assert_eq!(calc.chart().interest(), after.total_interest);
    }

    #[test]
    fn invalid_input_keeps_last_result() {
        let mut calc = Calculator::new();
        let before = *calc.result().unwrap();
        for _ in 0.."1000000".len() {
            calc.backspace();
        }
        // Amount buffer is now empty: parse fails, display unchanged.
        assert_eq!(*calc.result().unwrap(), before);
        assert_eq!(calc.chart().principal(), before.total_principal);

        calc.type_char('5');
        calc.type_char('0');
        calc.type_char('0');
        calc.type_char('0');
        calc.type_char('0');
        calc.type_char('0');
        let after = *calc.result().unwrap();
        assert_eq!(after.total_principal, 500_000.0);
    }

    #[test]
    fn focus_cycles_through_all_fields() {
        let mut calc = Calculator::new();
        assert_eq!(calc.focus(), Field::Amount);
        calc.focus_next();
        assert_eq!(calc.focus(), Field::Years);
        calc.focus_next();
        assert_eq!(calc.focus(), Field::Rate);
        calc.focus_next();
        assert_eq!(calc.focus(), Field::Amount);
        calc.focus_prev();
        assert_eq!(calc.focus(), Field::Rate);
    }
}
