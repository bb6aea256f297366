use core::fmt;

/// Errors reported by the recoverable list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The index argument falls outside the bound accepted by the operation.
    IndexOutOfBounds { index: usize, len: usize },
    /// The list holds no element to return.
    Empty,
    /// A split destination already owns nodes.
    DestinationNotEmpty,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::IndexOutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for list of length {}", index, len)
            }
            ListError::Empty => f.write_str("list is empty"),
            ListError::DestinationNotEmpty => f.write_str("destination list is not empty"),
        }
    }
}

impl core::error::Error for ListError {}
