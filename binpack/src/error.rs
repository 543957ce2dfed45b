use thiserror::Error;

use crate::geometry::Real;

#[derive(Debug, Error, PartialEq)]
pub enum PackError {
    #[error("Sort modulus must be a finite number greater than zero, got {modulus}")]
    InvalidModulus { modulus: Real },
}
