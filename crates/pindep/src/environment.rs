use std::fmt;
use std::io::IsTerminal;

const NO_TTY_ENV: &str = "PINDEP_NO_TTY";
const FORCE_TTY_ENV: &str = "PINDEP_FORCE_TTY";

const CI_ENV_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
    "BUILDKITE",
    "TF_BUILD",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NonInteractiveReason {
    ExplicitDisable,
    CiDetected { env_var: String },
    NoTerminal,
}

impl fmt::Display for NonInteractiveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExplicitDisable => write!(f, "{NO_TTY_ENV} is set"),
            Self::CiDetected { env_var } => write!(f, "CI detected via {env_var}"),
            Self::NoTerminal => write!(f, "stdin is not a terminal"),
        }
    }
}

/// Why the prompt cannot be shown, if it cannot.
///
/// `PINDEP_NO_TTY` wins over `PINDEP_FORCE_TTY`, which wins over CI
/// detection and the stdin terminal check.
pub fn non_interactive_reason() -> Option<NonInteractiveReason> {
    if std::env::var_os(NO_TTY_ENV).is_some() {
        return Some(NonInteractiveReason::ExplicitDisable);
    }

    if std::env::var_os(FORCE_TTY_ENV).is_some() {
        return None;
    }

    if let Some(env_var) = detect_ci_env_var() {
        return Some(NonInteractiveReason::CiDetected { env_var });
    }

    if !std::io::stdin().is_terminal() {
        return Some(NonInteractiveReason::NoTerminal);
    }

    None
}

fn detect_ci_env_var() -> Option<String> {
    CI_ENV_VARS
        .iter()
        .find(|var| std::env::var_os(var).is_some())
        .map(|var| (*var).to_owned())
}
