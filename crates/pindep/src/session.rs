use pindep_reconcile::reconcile;

use crate::error::Result;
use crate::output::ReportFormatter;
use crate::viewport::BreakpointSignal;

const PLACEHOLDER_NARROW: &str = "Pin dependency (^1.0.0, ~1.0.0, ...)";
const PLACEHOLDER_WIDE: &str = "Pin version or dependency (^1.0.0, ~1.0.0, ...)";

/// Render context for one run of the tool.
///
/// Holds the raw input and nothing derived from it: every render
/// reconciles the current input from scratch. Nothing is shown until
/// [`Session::mount`] has run.
pub(crate) struct Session {
    input: String,
    loading: bool,
    signal: BreakpointSignal,
}

impl Session {
    pub(crate) fn new(signal: BreakpointSignal) -> Self {
        Self {
            input: String::new(),
            loading: true,
            signal,
        }
    }

    /// First-display hook. Re-measures the width once and ends loading;
    /// later calls do nothing.
    pub(crate) fn mount(&mut self) {
        if !self.loading {
            return;
        }
        self.signal.refresh();
        self.loading = false;
        tracing::debug!(width = self.signal.viewport().width, "session mounted");
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Handles a resize. Returns whether the output layout should change.
    pub(crate) fn resize(&mut self) -> bool {
        self.signal.refresh()
    }

    pub(crate) fn placeholder(&self) -> &'static str {
        if self.signal.is_below() {
            PLACEHOLDER_NARROW
        } else {
            PLACEHOLDER_WIDE
        }
    }

    pub(crate) fn render(&self, formatter: &dyn ReportFormatter) -> Result<String> {
        if self.is_loading() {
            return Ok(String::new());
        }
        formatter.format_report(&reconcile(&self.input), self.signal.viewport())
    }
}
