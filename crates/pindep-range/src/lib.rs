pub mod error;

use nodejs_semver::{Range, Version};

pub use error::{RangeError, Result};

/// Expression shown for the range that matches every release.
pub const UNIVERSAL: &str = "*";

/// Canonical empty-set range some malformed inputs parse to.
pub const EMPTY_SENTINEL: &str = "<0.0.0";

/// Why a [`PinnedRange`] fell back to the universal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    Blank,
    Invalid,
    EmptySentinel,
}

/// Parses a range expression with npm's permissive rules.
///
/// Fails for unparseable input and for input that is literally
/// [`EMPTY_SENTINEL`]. An alternative whose comparators never intersect
/// (`>=3 <1`) is kept as written and matches nothing.
///
/// # Errors
///
/// Returns [`RangeError::Invalid`] when the parser rejects the input and
/// [`RangeError::EmptySentinel`] for the empty-set sentinel.
pub fn parse_range(input: &str) -> Result<PinnedRange> {
    let input = input.trim();
    let range = Range::parse(input)?;

    if is_empty_sentinel(input) {
        return Err(RangeError::EmptySentinel);
    }

    let alternatives: Vec<Range> = input
        .split("||")
        .filter_map(|alternative| Range::parse(alternative.trim()).ok())
        .collect();

    if !alternatives.iter().any(is_split_intersection) {
        return Ok(PinnedRange {
            expression: range.to_string(),
            sets: vec![range],
            fallback: None,
        });
    }

    let expression = alternatives
        .iter()
        .map(|alternative| {
            if is_split_intersection(alternative) {
                tracing::debug!(%alternative, "comparators never intersect");
                alternative.to_string().replace("||", " ")
            } else {
                alternative.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("||");

    Ok(PinnedRange {
        expression,
        sets: alternatives
            .into_iter()
            .filter(|alternative| !is_split_intersection(alternative))
            .collect(),
        fallback: None,
    })
}

fn is_empty_sentinel(input: &str) -> bool {
    input.split_whitespace().collect::<String>() == EMPTY_SENTINEL
}

/// The parser turns comparators that cannot all hold into a union of
/// them; a single alternative coming back as several is such a case.
fn is_split_intersection(alternative: &Range) -> bool {
    alternative.to_string().contains("||")
}

/// A range that is always valid: the parsed input or the universal range.
///
/// Alternatives that can never match are left out of `sets` but still
/// shown in the expression.
#[derive(Debug, Clone, PartialEq)]
pub struct PinnedRange {
    expression: String,
    sets: Vec<Range>,
    fallback: Option<Fallback>,
}

impl PinnedRange {
    #[must_use]
    pub fn normalize(input: &str) -> Self {
        if input.trim().is_empty() {
            return Self::universal(Fallback::Blank);
        }

        parse_range(input).unwrap_or_else(|err| {
            tracing::debug!(input, error = %err, "falling back to universal range");
            let fallback = match err {
                RangeError::Invalid(_) => Fallback::Invalid,
                RangeError::EmptySentinel => Fallback::EmptySentinel,
            };
            Self::universal(fallback)
        })
    }

    fn universal(fallback: Fallback) -> Self {
        Self {
            expression: UNIVERSAL.to_owned(),
            sets: vec![Range::any()],
            fallback: Some(fallback),
        }
    }

    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The alternatives that can match; empty when none can.
    #[must_use]
    pub fn sets(&self) -> &[Range] {
        &self.sets
    }

    #[must_use]
    pub fn fallback(&self) -> Option<Fallback> {
        self.fallback
    }

    #[must_use]
    pub fn is_universal_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    #[must_use]
    pub fn satisfies(&self, version: &Version) -> bool {
        self.sets.iter().any(|range| range.satisfies(version))
    }

    #[must_use]
    pub fn max_satisfying<'v>(&self, versions: &'v [Version]) -> Option<&'v Version> {
        self.sets
            .iter()
            .filter_map(|range| range.max_satisfying(versions))
            .max()
    }

    #[must_use]
    pub fn min_version(&self) -> Option<Version> {
        self.sets.iter().filter_map(Range::min_version).min()
    }
}

impl std::fmt::Display for PinnedRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.expression)
    }
}
