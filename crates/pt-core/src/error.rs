use thiserror::Error;

pub type PtResult<T> = Result<T, PtError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PtError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Identifier out of range: {what} ({raw})")]
    IdOutOfRange { what: &'static str, raw: u32 },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
