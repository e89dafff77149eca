mod explain;
mod interactive;

use clap::Subcommand;

use crate::error::Result;
use crate::output::OutputFormat;
use crate::session::Session;
use crate::viewport::{Breakpoint, BreakpointSignal, WidthSource};

pub(crate) use explain::ExplainArgs;

/// Options shared by every command.
pub(crate) struct Settings {
    pub(crate) format: OutputFormat,
    pub(crate) width: Option<u16>,
}

impl Settings {
    fn session(&self) -> Session {
        let source = WidthSource::from_flag(self.width);
        Session::new(BreakpointSignal::new(Breakpoint::Sm, source))
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show what a version or range pins to and how it reacts to new releases
    Explain(ExplainArgs),
    /// Prompt for versions or ranges and explain each one (default)
    Interactive,
}

impl Commands {
    pub(crate) fn execute(self, settings: &Settings) -> Result<()> {
        match self {
            Self::Explain(args) => explain::run(&args, settings),
            Self::Interactive => interactive::run(settings),
        }
    }
}
