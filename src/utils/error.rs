use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AlgoError {
    #[error("median is undefined when both input arrays are empty")]
    EmptyInput,

    #[error("no valid partition found; input arrays must be sorted in non-decreasing order")]
    Unsorted,
}

pub type Result<T> = std::result::Result<T, AlgoError>;
