//! Snapshot exports: EMI summary as CSV, state records as JSON.

use std::fs::File;
use std::io::Write;

use anyhow::Result;
use tracing::info;

use crate::emi::{LoanParameters, LoanResult};
use crate::states::StateRecord;

/// Writes the current parameters and result to a small CSV summary.
pub fn write_summary_csv(filename: &str, params: &LoanParameters, result: &LoanResult) -> Result<()> {
    let mut file = File::create(filename)?;

    writeln!(file, "Field,Value")?;
    writeln!(file, "Loan Amount,{:.2}", params.principal)?;
    writeln!(file, "Loan Tenure (years),{}", params.term_years)?;
    writeln!(file, "Interest Rate (%),{}", params.annual_rate_percent)?;
    writeln!(file, "Monthly Installment,{:.2}", result.monthly_installment)?;
    writeln!(file, "Total Principal,{:.2}", result.total_principal)?;
    writeln!(file, "Total Interest,{:.2}", result.total_interest)?;
    writeln!(file, "Total Payable,{:.2}", result.total_payable)?;

    info!(filename, "wrote EMI summary");
    Ok(())
}

/// Writes one state's directory entry as pretty JSON.
pub fn write_state_json(filename: &str, record: &StateRecord) -> Result<()> {
    let file = File::create(filename)?;
    serde_json::to_writer_pretty(file, record)?;
    info!(filename, state = record.id, "wrote state snapshot");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emi;
    use crate::states;

    #[test]
    fn csv_summary_round_trips_through_disk() {
        let params = LoanParameters {
            principal: 1_000_000.0,
            term_years: 5.0,
            annual_rate_percent: 8.5,
        };
        let result = emi::amortize(&params).unwrap();
        let path = std::env::temp_dir().join("eduaccess_summary_test.csv");
        let path = path.to_str().unwrap();

        write_summary_csv(path, &params, &result).unwrap();
        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.starts_with("Field,Value"));
        assert!(contents.contains("Loan Amount,1000000.00"));
        assert!(contents.contains("Total Payable"));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn state_json_contains_institutions() {
        let delhi = states::lookup("delhi").unwrap();
        let path = std::env::temp_dir().join("eduaccess_state_test.json");
        let path = path.to_str().unwrap();

        write_state_json(path, delhi).unwrap();
        let contents = std::fs::read_to_string(path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["id"], "delhi");
        assert!(value["institutions"].as_array().unwrap().len() >= 3);
        std::fs::remove_file(path).ok();
    }
}
