//! Animation errors.

/// The only failure the animation knows about.
///
/// It is reported on the error channel and the affected step is skipped;
/// it never propagates to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntroError {
    #[error("Region not found: {id}")]
    RegionNotFound { id: String },
}
