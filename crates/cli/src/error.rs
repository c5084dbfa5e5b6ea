use crate::util::error::UtilError;
use alloy::signers::local::LocalSignerError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ListerError {
    #[error("lister error")]
    #[diagnostic(help("nothing is retried; rerun with --start-id set past the last listed token"))]
    Core(#[from] lister_core::Error),

    #[error("failed to load signing account")]
    Signer(#[from] LocalSignerError),

    #[error("util error")]
    Util(#[from] UtilError),
}
