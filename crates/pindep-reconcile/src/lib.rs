use nodejs_semver::Version;
use pindep_core::{Action, BumpType, ProjectionRow};
use pindep_range::PinnedRange;
use pindep_version::{coerce, default_version, pin_candidates, release_bumps};

/// Outcome of one hypothetical release against the pinned range.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub bump_type: BumpType,
    /// The release that comes out.
    pub release: Version,
    /// The version in use afterwards.
    pub resolved: Version,
    pub action: Action,
}

/// Everything derived from a single raw input.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub input: String,
    pub range: PinnedRange,
    /// Version coerced from the input, or the default.
    pub version: Version,
    /// Version assumed to be in use today.
    pub pin: Version,
    /// Patch, minor and major projections, in that order.
    pub projections: [Projection; 3],
}

impl Reconciliation {
    #[must_use]
    pub fn rows(&self) -> [ProjectionRow; 4] {
        let [patch, minor, major] = &self.projections;
        [
            ProjectionRow::pinned(self.range.expression()),
            patch.row(),
            minor.row(),
            major.row(),
        ]
    }

    #[must_use]
    pub fn assumption(&self) -> String {
        format!(
            "Assuming that you are currently using version {} of a dependency.",
            self.pin
        )
    }

    #[must_use]
    pub fn projection(&self, bump_type: BumpType) -> &Projection {
        let index = match bump_type {
            BumpType::Patch => 0,
            BumpType::Minor => 1,
            BumpType::Major => 2,
        };
        &self.projections[index]
    }
}

impl Projection {
    fn row(&self) -> ProjectionRow {
        ProjectionRow::release(&self.release, self.resolved.to_string(), self.action)
    }
}

/// Reconciles raw user input into a pinned range, the version in use, and
/// what each kind of upcoming release would do to it.
///
/// Never fails: unparseable ranges become `*` and missing versions `1.0.0`.
#[must_use]
pub fn reconcile(input: &str) -> Reconciliation {
    let range = PinnedRange::normalize(input);
    let version = coerce(input).unwrap_or_else(|| {
        tracing::debug!(input, "no version in input, assuming default");
        default_version()
    });

    let pin = select_pin(&range, &version);
    let [patch, minor, major] = release_bumps(&pin);
    let projections = [
        project(&range, &pin, BumpType::Patch, patch),
        project(&range, &pin, BumpType::Minor, minor),
        project(&range, &pin, BumpType::Major, major),
    ];

    tracing::trace!(
        input,
        range = %range,
        version = %version,
        pin = %pin,
        "reconciled input"
    );

    Reconciliation {
        input: input.to_owned(),
        range,
        version,
        pin,
        projections,
    }
}

fn select_pin(range: &PinnedRange, version: &Version) -> Version {
    let candidates = pin_candidates(version);
    if let Some(pin) = range.max_satisfying(&candidates) {
        return pin.clone();
    }

    range.min_version().unwrap_or_else(|| {
        tracing::debug!(range = %range, "range has no minimum version, assuming default");
        default_version()
    })
}

fn project(
    range: &PinnedRange,
    pin: &Version,
    bump_type: BumpType,
    release: Version,
) -> Projection {
    let (resolved, action) = if range.satisfies(&release) {
        (release.clone(), Action::Upgrade)
    } else {
        (pin.clone(), Action::Keep)
    };

    Projection {
        bump_type,
        release,
        resolved,
        action,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn pin_prefers_highest_satisfying_candidate() {
        let range = PinnedRange::normalize("^1.0.0");

        assert_eq!(select_pin(&range, &v("1.5.2")), v("1.5.2"));
    }

    #[test]
    fn pin_falls_back_to_decremented_candidate() {
        let range = PinnedRange::normalize("<1.5.2");

        assert_eq!(select_pin(&range, &v("1.5.2")), v("1.5.1"));
    }

    #[test]
    fn pin_falls_back_to_range_minimum() {
        let range = PinnedRange::normalize(">=3.0.0");

        assert_eq!(select_pin(&range, &v("1.0.0")), v("3.0.0"));
    }

    #[test]
    fn projection_keeps_pin_outside_range() {
        let range = PinnedRange::normalize("~1.2.3");

        let projection = project(&range, &v("1.2.3"), BumpType::Minor, v("1.3.0"));

        assert_eq!(projection.release, v("1.3.0"));
        assert_eq!(projection.resolved, v("1.2.3"));
        assert_eq!(projection.action, Action::Keep);
    }

    #[test]
    fn projection_upgrades_inside_range() {
        let range = PinnedRange::normalize("~1.2.3");

        let projection = project(&range, &v("1.2.3"), BumpType::Patch, v("1.2.4"));

        assert_eq!(projection.resolved, v("1.2.4"));
        assert_eq!(projection.action, Action::Upgrade);
    }

    #[test]
    fn prerelease_pin_projects_three_distinct_releases() {
        let reconciliation = reconcile("2.0.0-rc.1");
        let releases: Vec<String> = reconciliation
            .projections
            .iter()
            .map(|projection| projection.release.to_string())
            .collect();

        assert_eq!(reconciliation.pin, v("2.0.0-rc.1"));
        assert_eq!(releases, ["2.0.0", "2.1.0", "3.0.0"]);
    }

    #[test]
    fn projection_lookup_by_bump_type() {
        let reconciliation = reconcile("^1.2.3");

        for bump_type in BumpType::ALL {
            assert_eq!(reconciliation.projection(bump_type).bump_type, bump_type);
        }
    }

    #[test]
    fn assumption_names_the_pin() {
        let reconciliation = reconcile("~4.1.7");

        assert_eq!(
            reconciliation.assumption(),
            "Assuming that you are currently using version 4.1.7 of a dependency."
        );
    }
}
