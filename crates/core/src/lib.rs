pub mod error;
pub mod generator;
pub mod lister;
pub mod listing;
pub mod submitter;

pub type Result<T> = std::result::Result<T, error::Error>;
pub use error::Error;
