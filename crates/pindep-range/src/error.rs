use thiserror::Error;

#[derive(Debug, Error)]
pub enum RangeError {
    #[error("invalid range expression")]
    Invalid(#[from] nodejs_semver::SemverError),

    #[error("range parses to the empty set '{}'", crate::EMPTY_SENTINEL)]
    EmptySentinel,
}

pub type Result<T> = std::result::Result<T, RangeError>;
