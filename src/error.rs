use thiserror::Error;

/// All errors that the crate can generate.
///
/// Layout never retries: the first error reported by the canvas aborts the
/// current operation and is returned to the caller as-is. Output that was
/// already emitted before the failure is not retracted.
#[derive(Error, Debug)]
pub enum DocError {
    /// The canvas could not measure the width of a piece of text
    #[error("the canvas could not measure the width of {0:?}")]
    MeasurementUnavailable(String),

    /// A draw, cell, or page-break call on the canvas failed
    #[error("the canvas failed to render: {0}")]
    RenderFailure(String),

    /// Geometry that a layout call could not degrade from. Calls with a
    /// documented default (e.g. a table alignment list that does not match
    /// the column count) fall back to that default instead of returning this
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A hex colour string failed to parse
    #[error("invalid hex colour")]
    InvalidColour(#[from] std::num::ParseIntError),
}
