use alloc::boxed::Box;
use core::fmt;
use core::marker::PhantomData;

use crate::Reflect;
use crate::ops::ReflectRef;

// -----------------------------------------------------------------------------
// Interface

/// A set of method names a value must expose to fit a [`Dyn`] slot.
///
/// # Examples
///
/// ```
/// use vc_reflect::ops::Interface;
///
/// struct Named;
///
/// impl Interface for Named {
///     const NAME: &'static str = "Named";
///     const METHODS: &'static [&'static str] = &["name"];
/// }
/// ```
pub trait Interface: 'static {
    /// A display name.
    const NAME: &'static str;

    /// Names of the methods a value must expose.
    const METHODS: &'static [&'static str];

    /// Returns `true` if `value` exposes every method of this interface.
    ///
    /// Methods are looked up on structs, seeing through pointers.
    fn is_satisfied_by(value: &dyn Reflect) -> bool {
        Self::METHODS.iter().all(|name| has_method(value, name))
    }
}

fn has_method(value: &dyn Reflect, name: &str) -> bool {
    match value.reflect_ref() {
        ReflectRef::Struct(value) => value.method(name).is_some(),
        ReflectRef::Pointer(value) => value.pointee().is_some_and(|v| has_method(v, name)),
        _ => false,
    }
}

/// The empty interface, satisfied by every value.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyValue;

impl Interface for AnyValue {
    const NAME: &'static str = "interface {}";
    const METHODS: &'static [&'static str] = &[];
}

// -----------------------------------------------------------------------------
// Dyn

/// A nullable slot holding any reflected value satisfying `I`.
///
/// Paths see through the slot like any other pointer. Writing a value
/// to the slot itself replaces its content when `I` is satisfied.
///
/// # Examples
///
/// ```
/// use vc_reflect::ops::{AnyValue, Dyn, Pointer};
///
/// let mut slot: Dyn<AnyValue> = Dyn::nil();
/// assert!(slot.is_null());
///
/// slot.store(Box::new(5_u8)).unwrap();
/// assert_eq!(slot.get().unwrap().downcast_ref::<u8>(), Some(&5));
/// ```
pub struct Dyn<I: Interface = AnyValue> {
    value: Option<Box<dyn Reflect>>,
    marker: PhantomData<fn() -> I>,
}

impl<I: Interface> Dyn<I> {
    /// Creates an empty slot.
    #[inline]
    pub const fn nil() -> Self {
        Self {
            value: None,
            marker: PhantomData,
        }
    }

    /// Creates a slot holding `value`.
    ///
    /// Returns the value back if it does not satisfy `I`.
    pub fn new(value: Box<dyn Reflect>) -> Result<Self, Box<dyn Reflect>> {
        if I::is_satisfied_by(&*value) {
            Ok(Self {
                value: Some(value),
                marker: PhantomData,
            })
        } else {
            Err(value)
        }
    }

    /// Returns the held value.
    #[inline]
    pub fn get(&self) -> Option<&dyn Reflect> {
        self.value.as_deref()
    }

    /// Returns the held value mutably.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.value.as_deref_mut()
    }

    /// Takes the held value out, leaving the slot empty.
    #[inline]
    pub fn take(&mut self) -> Option<Box<dyn Reflect>> {
        self.value.take()
    }
}

impl<I: Interface> Default for Dyn<I> {
    #[inline]
    fn default() -> Self {
        Self::nil()
    }
}

impl<I: Interface> fmt::Debug for Dyn<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => f.debug_tuple(I::NAME).field(value).finish(),
            None => write!(f, "{}(nil)", I::NAME),
        }
    }
}
