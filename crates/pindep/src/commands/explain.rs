use std::io::Write as _;

use clap::Args;

use super::Settings;
use crate::error::Result;

#[derive(Args)]
pub(crate) struct ExplainArgs {
    /// Version or range to explain, e.g. "^1.2.3" (default: empty)
    #[arg(allow_hyphen_values = true)]
    pub(crate) input: Option<String>,
}

pub(crate) fn run(args: &ExplainArgs, settings: &Settings) -> Result<()> {
    let mut session = settings.session();
    session.mount();
    session.set_input(args.input.as_deref().unwrap_or_default());

    let formatter = settings.format.formatter();
    let output = session.render(formatter.as_ref())?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
