mod formatter;
mod json;
mod plain;

use clap::ValueEnum;

pub(crate) use formatter::ReportFormatter;
pub(crate) use json::JsonFormatter;
pub(crate) use plain::PlainTextFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Plain,
    Json,
}

impl OutputFormat {
    pub(crate) fn formatter(self) -> Box<dyn ReportFormatter> {
        match self {
            Self::Plain => Box::new(PlainTextFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}
