//! Fixed-length numeric buffer and its maximum scan.

use crate::error::{ExtError, Result};
use tracing::{debug, warn};

/// Find maximum value and its index.
///
/// The first element is the initial candidate and a later element replaces
/// it only when strictly greater, so ties keep the earliest index.
pub fn find_max(data: &[f64]) -> Option<(f64, usize)> {
    let (&first, rest) = data.split_first()?;

    let mut max_val = first;
    let mut max_idx = 0;

    for (i, &val) in rest.iter().enumerate() {
        if val > max_val {
            max_val = val;
            max_idx = i + 1;
        }
    }

    Some((max_val, max_idx))
}

/// Single-slot holder for one numeric sequence.
///
/// The first `set` fixes the length; later replacements must match it until
/// the store is cleared.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BufferStore {
    contents: Vec<f64>,
    fixed_len: Option<usize>,
}

impl BufferStore {
    /// Create an empty store with no fixed length.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents.
    ///
    /// Fails with [`ExtError::SizeMismatch`] when a length is already fixed
    /// and `values` differs from it; the store is left unchanged.
    pub fn set(&mut self, values: &[f64]) -> Result<()> {
        match self.fixed_len {
            Some(expected) if expected != values.len() => {
                warn!(expected, actual = values.len(), "rejected buffer replacement");
                Err(ExtError::SizeMismatch {
                    expected,
                    actual: values.len(),
                })
            }
            Some(_) => {
                self.contents.copy_from_slice(values);
                debug!(len = values.len(), "buffer contents replaced");
                Ok(())
            }
            None => {
                self.contents = values.to_vec();
                self.fixed_len = Some(values.len());
                debug!(len = values.len(), "buffer length fixed");
                Ok(())
            }
        }
    }

    /// Drop the contents and the fixed length.
    pub fn clear(&mut self) {
        if self.fixed_len.take().is_some() {
            debug!(len = self.contents.len(), "buffer cleared");
        }
        self.contents.clear();
    }

    /// Maximum of the current contents.
    pub fn max(&self) -> Result<f64> {
        self.max_with_index().map(|(val, _)| val)
    }

    /// Maximum of the current contents along with its first index.
    pub fn max_with_index(&self) -> Result<(f64, usize)> {
        find_max(&self.contents).ok_or(ExtError::EmptyBuffer)
    }

    /// Length fixed by the first `set`, if any.
    #[inline]
    pub fn fixed_len(&self) -> Option<usize> {
        self.fixed_len
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.contents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_max() {
        let data = vec![1.0, 5.0, 3.0, 2.0];
        let (max_val, max_idx) = find_max(&data).unwrap();
        assert_eq!(max_val, 5.0);
        assert_eq!(max_idx, 1);
    }

    #[test]
    fn test_find_max_ties_keep_first() {
        let data = vec![2.0, 7.0, 7.0, 1.0];
        assert_eq!(find_max(&data), Some((7.0, 1)));
    }

    #[test]
    fn test_find_max_negative_and_empty() {
        assert_eq!(find_max(&[-4.0, -1.5, -3.0]), Some((-1.5, 1)));
        assert_eq!(find_max(&[]), None);
    }

    #[test]
    fn test_find_max_nan_first_is_kept() {
        let (val, idx) = find_max(&[f64::NAN, 1.0, 2.0]).unwrap();
        assert!(val.is_nan());
        assert_eq!(idx, 0);

        assert_eq!(find_max(&[1.0, f64::NAN, 0.5]), Some((1.0, 0)));
    }

    #[test]
    fn test_set_then_max() {
        let mut store = BufferStore::new();
        store.set(&[3.0, 7.5, 2.0]).unwrap();

        assert_eq!(store.fixed_len(), Some(3));
        assert_eq!(store.max().unwrap(), 7.5);
        assert_eq!(store.max_with_index().unwrap(), (7.5, 1));
    }

    #[test]
    fn test_size_mismatch_leaves_contents() {
        let mut store = BufferStore::new();
        store.set(&[3.0, 7.5, 2.0]).unwrap();

        let result = store.set(&[3.0, 7.5]);
        assert_eq!(
            result,
            Err(ExtError::SizeMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(store.as_slice(), &[3.0, 7.5, 2.0]);
    }

    #[test]
    fn test_same_length_replacement() {
        let mut store = BufferStore::new();
        store.set(&[1.0, 2.0]).unwrap();
        store.set(&[9.0, -1.0]).unwrap();

        assert_eq!(store.as_slice(), &[9.0, -1.0]);
        assert_eq!(store.max().unwrap(), 9.0);
    }

    #[test]
    fn test_clear_then_reset_length() {
        let mut store = BufferStore::new();
        store.set(&[3.0, 7.5, 2.0]).unwrap();
        store.clear();

        assert!(store.is_empty());
        assert_eq!(store.fixed_len(), None);
        assert_eq!(store.max(), Err(ExtError::EmptyBuffer));

        store.set(&[3.0, 7.5]).unwrap();
        assert_eq!(store.max().unwrap(), 7.5);

        store.clear();
        store.clear();
        assert_eq!(store, BufferStore::new());
    }

    #[test]
    fn test_empty_sequence_fixes_zero_length() {
        let mut store = BufferStore::new();
        store.set(&[]).unwrap();

        assert_eq!(store.fixed_len(), Some(0));
        assert_eq!(store.max(), Err(ExtError::EmptyBuffer));
        assert!(matches!(
            store.set(&[1.0]),
            Err(ExtError::SizeMismatch {
                expected: 0,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_fresh_store_is_empty() {
        let store = BufferStore::new();
        assert_eq!(store.len(), 0);
        assert_eq!(store.max(), Err(ExtError::EmptyBuffer));
    }
}
