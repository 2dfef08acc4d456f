use thiserror::Error;

/// Errors raised while building a DVB-T2 block.
/// Processing itself never fails, these only come out of constructors and config parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Dvbt2Error {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("unknown {parameter} code {code}")]
    UnknownCode { parameter: &'static str, code: u32 },
    #[error("window must have {expected} coefficients but got {got}")]
    WindowLength { expected: usize, got: usize },
    #[error("{field} value {value} does not fit in {bits} bits")]
    FieldOverflow { field: &'static str, value: u64, bits: u32 },
}
