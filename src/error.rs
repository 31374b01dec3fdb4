use alloc::string::String;

/// Two adjacent elements (or their keys) could not be ordered relative to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("elements at index {index} and {} are not mutually comparable", .index + 1)]
pub struct IncomparableError {
    /// Index of the left element of the pair
    pub index: usize,
}

/// An ordering mode name that [`Order`](crate::Order) does not recognize.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown ordering mode `{0}`")]
pub struct ParseOrderError(pub String);
