use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FirError {
    #[error("Invalid filter specification: {0}")]
    InvalidSpec(String),

    #[error("Degenerate filter design: {0}")]
    NumericDegeneracy(String),
}

impl FirError {
    pub fn is_invalid_spec(&self) -> bool {
        matches!(self, FirError::InvalidSpec(_))
    }

    pub fn is_numeric_degeneracy(&self) -> bool {
        matches!(self, FirError::NumericDegeneracy(_))
    }
}

pub type Result<T> = std::result::Result<T, FirError>;
