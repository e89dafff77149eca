mod coerce;

use nodejs_semver::Version;
use pindep_core::BumpType;

pub use coerce::coerce;

/// Version assumed when the input carries none.
pub const DEFAULT_VERSION: (u64, u64, u64) = (1, 0, 0);

#[must_use]
pub fn release(major: u64, minor: u64, patch: u64) -> Version {
    Version {
        major,
        minor,
        patch,
        build: Vec::new(),
        pre_release: Vec::new(),
    }
}

#[must_use]
pub fn default_version() -> Version {
    let (major, minor, patch) = DEFAULT_VERSION;
    release(major, minor, patch)
}

/// Next release of the given severity, as npm's `inc` computes it.
///
/// A prerelease is first completed at its own version when the lower
/// components already match the bump (`1.2.0-rc.1` bumps to `1.2.0` on
/// minor). Build metadata is always dropped.
#[must_use]
pub fn bump_version(version: &Version, bump_type: BumpType) -> Version {
    let mut bumped = version
        .inc(bump_type.as_str(), None, None)
        .unwrap_or_else(|_| saturating_bump(version, bump_type));
    bumped.build.clear();
    bumped
}

/// Only reached when a component is already `u64::MAX`.
fn saturating_bump(version: &Version, bump_type: BumpType) -> Version {
    let Version {
        major,
        minor,
        patch,
        ..
    } = *version;

    match bump_type {
        BumpType::Major => release(major.saturating_add(1), 0, 0),
        BumpType::Minor => release(major, minor.saturating_add(1), 0),
        BumpType::Patch => release(major, minor, patch.saturating_add(1)),
    }
}

/// Patch, minor and major releases following `pin`, in that order.
///
/// Each bump starts from the previous one, so a prerelease pin completes
/// once on patch and the three releases are strictly increasing.
#[must_use]
pub fn release_bumps(pin: &Version) -> [Version; 3] {
    let patch = bump_version(pin, BumpType::Patch);
    let minor = bump_version(&patch, BumpType::Minor);
    let major = bump_version(&minor, BumpType::Major);
    [patch, minor, major]
}

/// Versions probed as the one currently in use, lowest first.
///
/// Each component is decremented (floored at zero) from the left so the
/// highest candidate still satisfying a range approximates what a loose
/// caret or tilde pin resolves to today.
#[must_use]
pub fn pin_candidates(version: &Version) -> [Version; 4] {
    let dec = |n: u64| n.saturating_sub(1);

    [
        release(dec(version.major), dec(version.minor), dec(version.patch)),
        release(version.major, dec(version.minor), dec(version.patch)),
        release(version.major, version.minor, dec(version.patch)),
        version.clone(),
    ]
}
