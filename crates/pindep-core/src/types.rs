use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a hypothetical upcoming release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpType {
    Patch,
    Minor,
    Major,
}

impl BumpType {
    pub const ALL: [Self; 3] = [Self::Patch, Self::Minor, Self::Major];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the pinned range does when a release comes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// The release satisfies the range and gets picked up.
    Upgrade,
    /// The release falls outside the range; the pin stays.
    Keep,
}

impl Action {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upgrade => "upgrade",
            Self::Keep => "keep",
        }
    }

    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Upgrade => '↑',
            Self::Keep => '↔',
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symbol(), self.as_str())
    }
}

/// One cell of the result grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionRow {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
}

impl ProjectionRow {
    pub const PINNED_LABEL: &'static str = "You have pinned:";

    #[must_use]
    pub fn pinned(range: impl Into<String>) -> Self {
        Self {
            label: Self::PINNED_LABEL.to_owned(),
            value: range.into(),
            action: None,
        }
    }

    #[must_use]
    pub fn release(release: impl fmt::Display, value: impl Into<String>, action: Action) -> Self {
        Self {
            label: format!("If {release} comes out:"),
            value: value.into(),
            action: Some(action),
        }
    }
}
