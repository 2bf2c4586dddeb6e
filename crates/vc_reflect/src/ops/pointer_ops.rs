use alloc::boxed::Box;

use crate::Reflect;

// -----------------------------------------------------------------------------
// Pointer

/// A trait used to power pointer-like operations via reflection.
///
/// A pointer holds at most one child, its pointee. Paths see through
/// pointers: a component is applied to the pointee, not to the pointer.
///
/// Implemented by `Option<T>`, `Box<T>`, `Arc<T>` and the dynamic slots
/// [`Dyn`](crate::ops::Dyn) and `serde_json::Value`.
///
/// # Example
///
/// ```
/// use vc_reflect::ops::Pointer;
///
/// let mut slot: Option<u32> = None;
/// assert!(slot.is_null());
///
/// assert!(slot.fill_default());
/// assert_eq!(slot, Some(0));
///
/// let pointee = slot.pointee().unwrap();
/// assert_eq!(pointee.downcast_ref::<u32>(), Some(&0));
/// ```
pub trait Pointer: Reflect {
    /// Returns `true` if there is no pointee.
    fn is_null(&self) -> bool;

    /// Returns a reference to the pointee.
    fn pointee(&self) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the pointee.
    ///
    /// Returns `None` if null, or if the pointee is shared and
    /// cannot be borrowed mutably.
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect>;

    /// Replaces the pointee with a default value.
    ///
    /// Returns `false` if no default pointee can be synthesized.
    fn fill_default(&mut self) -> bool;

    /// Returns `true` if [`store`](Pointer::store) would accept `value`.
    fn accepts(&self, value: &dyn Reflect) -> bool {
        let _ = value;
        false
    }

    /// Makes `value` the new pointee.
    ///
    /// Returns the value back if it is not accepted.
    fn store(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        Err(value)
    }
}
