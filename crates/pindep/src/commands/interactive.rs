use std::io::{BufRead, Write};

use dialoguer::Input;

use super::Settings;
use crate::environment;
use crate::error::Result;
use crate::output::ReportFormatter;
use crate::session::Session;

const QUIT: &str = ":q";

pub(crate) fn run(settings: &Settings) -> Result<()> {
    let formatter = settings.format.formatter();
    let mut session = settings.session();
    session.mount();

    match environment::non_interactive_reason() {
        None => run_prompt(&mut session, formatter.as_ref()),
        Some(reason) => {
            tracing::debug!(%reason, "reading inputs from stdin");
            run_lines(
                &mut session,
                formatter.as_ref(),
                std::io::stdin().lock(),
                std::io::stdout().lock(),
            )
        }
    }
}

fn run_prompt(session: &mut Session, formatter: &dyn ReportFormatter) -> Result<()> {
    loop {
        session.resize();

        let input: String = Input::new()
            .with_prompt(session.placeholder())
            .allow_empty(true)
            .interact_text()?;

        if input.trim() == QUIT {
            return Ok(());
        }

        session.set_input(input);
        println!("{}", session.render(formatter)?);
    }
}

/// Explains every line of `reader`, one report per line.
///
/// Bytes that are not UTF-8 are replaced rather than rejected, so any
/// line still gets a report.
fn run_lines<R, W>(
    session: &mut Session,
    formatter: &dyn ReportFormatter,
    mut reader: R,
    mut writer: W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut buf = Vec::new();
    let mut first = true;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = buf
            .strip_suffix(b"\n")
            .map_or(&buf[..], |line| line.strip_suffix(b"\r").unwrap_or(line));

        if !first {
            writer.write_all(b"\n")?;
        }
        first = false;

        session.set_input(String::from_utf8_lossy(line));
        writer.write_all(session.render(formatter)?.as_bytes())?;
    }

    writer.flush()?;
    Ok(())
}
