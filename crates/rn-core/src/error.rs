use thiserror::Error;

pub type RnResult<T> = Result<T, RnError>;

/// Shared error type for the outer layers (CLI, I/O).
///
/// The network core itself never returns errors; its contracts are
/// boolean returns and lenient defaults.
#[derive(Error, Debug)]
pub enum RnError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
