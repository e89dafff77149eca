use pindep_reconcile::Reconciliation;

use crate::error::Result;
use crate::viewport::Viewport;

pub(crate) trait ReportFormatter {
    fn format_report(&self, reconciliation: &Reconciliation, viewport: Viewport) -> Result<String>;
}
