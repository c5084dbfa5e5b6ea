use std::{path::PathBuf, time::Duration};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UtilError {
    #[error("env error")]
    EnvVar(#[from] std::env::VarError),

    #[error("io error")]
    Io(#[from] std::io::Error),

    #[error("keystore '{name}' not found in {}", .dir.display())]
    KeystoreNotFound { name: String, dir: PathBuf },

    #[error("{flag} must be a whole number of seconds, got {duration:?}")]
    SubSecondDuration {
        flag: &'static str,
        duration: Duration,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseDurationError {
    #[error("empty duration")]
    Empty,

    #[error("invalid duration ('{0}'): floating point values are not supported")]
    NoFloats(String),

    #[error("invalid duration ('{0}'): could not parse number into u64")]
    InvalidNumber(String),

    #[error("invalid duration units: '{0}'. Supported units: ms, msec, millisecond(s), s, sec(s), second(s), m, min(ute)(s), h, hr(s), hour(s), d, day(s).")]
    InvalidUnits(String),

    #[error("duration '{0}' overflows u64 milliseconds")]
    Overflow(String),
}
