//! Closed-form EMI amortization for education loans.

use serde::Serialize;
use thiserror::Error;

/// The three loan parameters, as entered by the user.
///
/// Input buffers stay opaque strings until they reach [`LoanParameters::parse`];
/// nothing upstream judges them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanParameters {
    pub principal: f64,
    pub term_years: f64,
    pub annual_rate_percent: f64,
}

/// Derived output, recomputed wholesale on every parameter change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanResult {
    pub monthly_installment: f64,
    pub total_principal: f64,
    pub total_interest: f64,
    pub total_payable: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComputeError {
    #[error("{field} is not a number")]
    NotANumber { field: &'static str },

    #[error("{field} must be positive")]
    NonPositive { field: &'static str },
}

impl LoanParameters {
    /// Parses the three raw input strings. Values ≤ 0 are rejected here so the
    /// engine never sees them.
    pub fn parse(principal: &str, term_years: &str, rate: &str) -> Result<Self, ComputeError> {
        let params = Self {
            principal: parse_field(principal, "loan amount")?,
            term_years: parse_field(term_years, "loan term")?,
            annual_rate_percent: parse_field(rate, "interest rate")?,
        };
        if params.principal <= 0.0 {
            return Err(ComputeError::NonPositive { field: "loan amount" });
        }
        if params.term_years <= 0.0 {
            return Err(ComputeError::NonPositive { field: "loan term" });
        }
        if params.annual_rate_percent <= 0.0 {
            return Err(ComputeError::NonPositive { field: "interest rate" });
        }
        Ok(params)
    }
}

fn parse_field(raw: &str, field: &'static str) -> Result<f64, ComputeError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ComputeError::NotANumber { field })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ComputeError::NotANumber { field })
    }
}

/// EMI = P·r·(1+r)^m / ((1+r)^m − 1), with r the monthly rate and m the
/// month count. No rounding happens here; display formatting rounds.
///
/// There is deliberately no limit-case branch for r → 0. Parameters are
/// validated strictly positive, and for tiny rates the quotient degrades
/// gracefully toward P/m (see `tiny_rate_approaches_linear_split`).
pub fn amortize(params: &LoanParameters) -> Result<LoanResult, ComputeError> {
    if params.principal <= 0.0 {
        return Err(ComputeError::NonPositive { field: "loan amount" });
    }
    if params.term_years <= 0.0 {
        return Err(ComputeError::NonPositive { field: "loan term" });
    }
    if params.annual_rate_percent <= 0.0 {
        return Err(ComputeError::NonPositive { field: "interest rate" });
    }

    let monthly_rate = params.annual_rate_percent / 1200.0;
    let months = params.term_years * 12.0;
    let growth = (1.0 + monthly_rate).powf(months);

    let installment = params.principal * monthly_rate * growth / (growth - 1.0);
    let total_payable = installment * months;

    Ok(LoanResult {
        monthly_installment: installment,
        total_principal: params.principal,
        total_interest: total_payable - params.principal,
        total_payable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(p: f64, years: f64, rate: f64) -> LoanParameters {
        LoanParameters {
            principal: p,
            term_years: years,
            annual_rate_percent: rate,
        }
    }

    #[test]
    fn worked_scenario_matches_closed_form() {
        let result = amortize(&params(1_000_000.0, 5.0, 8.5)).unwrap();

        // Independent evaluation of the same closed form.
        let r: f64 = 8.5 / 1200.0;
        let m: f64 = 60.0;
        let expected = 1_000_000.0 * r * (1.0 + r).powf(m) / ((1.0 + r).powf(m) - 1.0);
        assert!((result.monthly_installment - expected).abs() < 1e-9);

        // And a month-by-month balance simulation must amortize to zero.
        let mut balance = 1_000_000.0;
        for _ in 0..60 {
            balance += balance * r;
            balance -= result.monthly_installment;
        }
        assert!(
            balance.abs() < 1e-4,
            "residual balance after final installment: {balance}"
        );

        assert!(result.monthly_installment > 20_000.0);
        assert!(result.monthly_installment < 21_000.0);
    }

    #[test]
    fn interest_identity_is_exact() {
        let result = amortize(&params(750_000.0, 7.0, 11.25)).unwrap();
        assert_eq!(
            result.total_interest,
            result.total_payable - result.total_principal
        );
        // Interest is never negative for positive rates.
        assert!(result.monthly_installment * 7.0 * 12.0 >= result.total_principal);
    }

    #[test]
    fn identical_inputs_are_bit_identical() {
        let p = params(2_500_000.0, 10.0, 9.4);
        let a = amortize(&p).unwrap();
        let b = amortize(&p).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn tiny_rate_approaches_linear_split() {
        // Known numerical edge: the formula divides by (1+r)^m − 1 with no
        // limit branch. For r near zero the installment must still approach
        // P/m rather than blow up.
        let result = amortize(&params(1_200_000.0, 10.0, 0.0001)).unwrap();
        let linear = 1_200_000.0 / 120.0;
        assert!((result.monthly_installment - linear).abs() / linear < 0.001);
    }

    #[test]
    fn rejects_non_positive_inputs() {
        assert_eq!(
            amortize(&params(0.0, 5.0, 8.5)),
            Err(ComputeError::NonPositive { field: "loan amount" })
        );
        assert_eq!(
            amortize(&params(500_000.0, -1.0, 8.5)),
            Err(ComputeError::NonPositive { field: "loan term" })
        );
        assert_eq!(
            amortize(&params(500_000.0, 5.0, 0.0)),
            Err(ComputeError::NonPositive { field: "interest rate" })
        );
    }

    #[test]
    fn parse_rejects_garbage_and_accepts_numbers() {
        assert_eq!(
            LoanParameters::parse("abc", "5", "8.5"),
            Err(ComputeError::NotANumber { field: "loan amount" })
        );
        assert_eq!(
            LoanParameters::parse("1000000", "", "8.5"),
            Err(ComputeError::NotANumber { field: "loan term" })
        );
        let parsed = LoanParameters::parse(" 1000000 ", "5", "8.5").unwrap();
        assert_eq!(parsed.principal, 1_000_000.0);
        assert_eq!(parsed.term_years, 5.0);
        assert_eq!(parsed.annual_rate_percent, 8.5);
    }
}
