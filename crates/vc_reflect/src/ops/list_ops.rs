use crate::Reflect;

// -----------------------------------------------------------------------------
// List

/// A trait used to power [list-like] operations via reflection.
///
/// Implemented by growable sequences such as `Vec<T>` and by fixed-size
/// arrays. Paths address items with non-negative decimal indices, and may
/// grow a growable list when writing past its end.
///
/// # Example
///
/// ```
/// use vc_reflect::ops::List;
///
/// let mut list = vec![1_u8, 2];
/// assert!(List::grow_to(&mut list, 4));
/// assert_eq!(list, [1, 2, 0, 0]);
///
/// let mut array = [1_u8, 2];
/// assert!(!List::grow_to(&mut array, 4));
/// ```
///
/// [list-like]: https://doc.rust-lang.org/book/ch08-01-vectors.html
pub trait List: Reflect {
    /// Returns the number of items.
    fn len(&self) -> usize;

    /// Returns a reference to the item at `index`.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the item at `index`.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns `true` if the length cannot change.
    fn is_fixed(&self) -> bool {
        false
    }

    /// Appends default items until the list holds `len` items.
    ///
    /// Returns `false` when the list cannot grow. A list already
    /// holding `len` items or more is left untouched.
    fn grow_to(&mut self, len: usize) -> bool;

    /// Returns `true` if the list holds no items.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
