use miette::Diagnostic;
use thiserror::Error;

/// Main error type for easel operations.
///
/// Every variant is a validation or usage error, raised before any engine
/// state is mutated (the one exception is the two-phase `clear`, which rolls
/// the palette back itself). Environmental failures do not exist here: the
/// engine is a pure in-memory computation.
#[derive(Error, Diagnostic, Debug)]
pub enum EaselError {
    #[error("Out of bounds: {message}")]
    #[diagnostic(code(easel::bounds))]
    OutOfBounds {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Rejected no-op: {message}")]
    #[diagnostic(code(easel::noop))]
    NoOpRejected {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Size mismatch: expected {expected} pixels for {width}x{height}, got {actual}")]
    #[diagnostic(code(easel::size))]
    SizeMismatch {
        width: i32,
        height: i32,
        expected: usize,
        actual: usize,
    },
}

impl EaselError {
    /// Shorthand for an out-of-bounds error without a help message.
    pub(crate) fn bounds(message: impl Into<String>) -> Self {
        Self::OutOfBounds {
            message: message.into(),
            help: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EaselError>;
