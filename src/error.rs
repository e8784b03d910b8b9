use crate::item::Kind;
use num::ToPrimitive;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The heap already holds elements of the other kind.
    #[error("heap holds {heap} elements, cannot insert {item} element")]
    ModeConflict { heap: Kind, item: Kind },

    /// No element with a matching priority.
    #[error("no element with the given priority")]
    NotFound,

    /// The priority is NaN or isn't representable as an `f64`.
    #[error("priority is not a number")]
    InvalidPriority,

    #[error("index {index} is out of bounds for heap of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Converts any primitive number into a heap priority.
pub fn priority_from<N: ToPrimitive>(value: N) -> Result<f64, HeapError> {
    match value.to_f64() {
        Some(priority) if !priority.is_nan() => Ok(priority),
        _ => Err(HeapError::InvalidPriority),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_primitive_numbers() {
        assert_eq!(priority_from(7i32), Ok(7.0));
        assert_eq!(priority_from(3u64), Ok(3.0));
        assert_eq!(priority_from(2.5f32), Ok(2.5));
        assert_eq!(priority_from(f64::INFINITY), Ok(f64::INFINITY));
    }

    #[test]
    fn rejects_nan() {
        assert_eq!(priority_from(f64::NAN), Err(HeapError::InvalidPriority));
        assert_eq!(priority_from(f32::NAN), Err(HeapError::InvalidPriority));
    }

    #[test]
    fn messages() {
        let err = HeapError::ModeConflict {
            heap: Kind::Number,
            item: Kind::Entry,
        };
        assert_eq!(
            err.to_string(),
            "heap holds number elements, cannot insert entry element"
        );
        assert_eq!(
            HeapError::IndexOutOfBounds { index: 4, len: 2 }.to_string(),
            "index 4 is out of bounds for heap of length 2"
        );
    }
}
