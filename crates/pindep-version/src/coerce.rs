use nodejs_semver::Version;

use crate::release;

const MAX_COMPONENT_DIGITS: usize = 16;

/// JavaScript's `Number.MAX_SAFE_INTEGER`. `nodejs_semver` exports a
/// constant of that name, but with one digit missing.
const MAX_SAFE_COMPONENT: u64 = 9_007_199_254_740_991;

/// Extracts the first version-like token from arbitrary text.
///
/// A token is a run of up to 16 digits, not preceded by another digit,
/// optionally followed by one or two `.digits` components. Missing
/// components are zero and anything after the token (prerelease, build,
/// trailing text) is ignored, so `v1.2-beta` coerces to `1.2.0`.
///
/// A token with a component above 2^53 - 1 is not a version, and neither
/// is anything after it.
#[must_use]
pub fn coerce(input: &str) -> Option<Version> {
    let bytes = input.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        if !bytes[pos].is_ascii_digit() {
            pos += 1;
            continue;
        }

        let major_end = digit_run_end(bytes, pos);
        if let Some(major) = component(input, pos, major_end) {
            let mut parts = [major, 0, 0];
            let mut end = major_end;

            for part in &mut parts[1..] {
                match dotted_component(input, end) {
                    Some((value, next)) => {
                        *part = value;
                        end = next;
                    }
                    None => break,
                }
            }

            if parts.iter().any(|&part| part > MAX_SAFE_COMPONENT) {
                return None;
            }
            return Some(release(parts[0], parts[1], parts[2]));
        }

        pos = major_end;
    }

    None
}

fn digit_run_end(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|b| !b.is_ascii_digit())
        .map_or(bytes.len(), |offset| start + offset)
}

fn component(input: &str, start: usize, end: usize) -> Option<u64> {
    if end - start > MAX_COMPONENT_DIGITS {
        return None;
    }
    input[start..end].parse().ok()
}

fn dotted_component(input: &str, at: usize) -> Option<(u64, usize)> {
    let bytes = input.as_bytes();
    if bytes.get(at) != Some(&b'.') {
        return None;
    }

    let start = at + 1;
    if !bytes.get(start).is_some_and(u8::is_ascii_digit) {
        return None;
    }

    let end = digit_run_end(bytes, start);
    component(input, start, end).map(|value| (value, end))
}
