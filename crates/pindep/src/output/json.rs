use pindep_core::ProjectionRow;
use pindep_reconcile::Reconciliation;
use serde::Serialize;

use super::ReportFormatter;
use crate::error::Result;
use crate::viewport::Viewport;

pub(crate) struct JsonFormatter;

#[derive(Serialize)]
struct Report<'a> {
    input: &'a str,
    range: &'a str,
    version: String,
    pin: String,
    rows: [ProjectionRow; 4],
}

impl ReportFormatter for JsonFormatter {
    fn format_report(&self, reconciliation: &Reconciliation, _viewport: Viewport) -> Result<String> {
        let report = Report {
            input: &reconciliation.input,
            range: reconciliation.range.expression(),
            version: reconciliation.version.to_string(),
            pin: reconciliation.pin.to_string(),
            rows: reconciliation.rows(),
        };

        let mut output = serde_json::to_string_pretty(&report)?;
        output.push('\n');
        Ok(output)
    }
}
