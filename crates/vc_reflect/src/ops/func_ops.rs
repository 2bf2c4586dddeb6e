use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use thiserror::Error;

use crate::Reflect;
use crate::info::{CallResult, Signature, Typed};

/// A boxed error returned by user code.
pub type BoxError = Box<dyn core::error::Error + Send + Sync + 'static>;

// -----------------------------------------------------------------------------
// CallError

/// A enumeration of all error outcomes of a reflected call.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CallError {
    #[error("expected {expected} arguments but received {found}")]
    ArgCount { expected: usize, found: usize },
    #[error("expected argument of type `{expected}` but received `{found}`")]
    ArgType {
        expected: &'static str,
        found: &'static str,
    },
    #[error("expected receiver of type `{expected}` but received `{found}`")]
    Receiver {
        expected: &'static str,
        found: &'static str,
    },
    #[error("method `{0}` needs a mutable receiver")]
    Immutable(&'static str),
    #[error("call of a nil function")]
    Nil,
    /// The error returned by the callee, untouched.
    #[error("{0}")]
    Returned(BoxError),
}

// -----------------------------------------------------------------------------
// Function

/// A trait used to power callable operations via reflection.
pub trait Function: Reflect {
    /// Returns the signature, `None` when nil.
    fn signature(&self) -> Option<&Signature>;

    /// Returns `true` if there is nothing to call.
    fn is_nil(&self) -> bool {
        self.signature().is_none()
    }

    /// Calls the function.
    fn call(&self, args: Vec<Box<dyn Reflect>>) -> CallResult;
}

// -----------------------------------------------------------------------------
// Func

type ErasedCall = dyn Fn(Vec<Box<dyn Reflect>>) -> CallResult + Send + Sync;

struct FuncInner {
    signature: Signature,
    call: Box<ErasedCall>,
}

/// A nullable callable value.
///
/// Cloning shares the underlying closure. The default value is nil.
///
/// # Examples
///
/// ```
/// use vc_reflect::ops::{Func, Function};
///
/// let answer = Func::getter(|| 42_u32);
/// let value = answer.call(Vec::new()).unwrap().unwrap();
/// assert_eq!(value.downcast_ref::<u32>(), Some(&42));
///
/// assert!(Func::nil().is_nil());
/// ```
#[derive(Clone, Default)]
pub struct Func(Option<Arc<FuncInner>>);

impl Func {
    /// Creates a nil function.
    #[inline]
    pub const fn nil() -> Self {
        Self(None)
    }

    /// Creates a function from raw parts.
    pub fn from_raw(
        signature: Signature,
        call: impl Fn(Vec<Box<dyn Reflect>>) -> CallResult + Send + Sync + 'static,
    ) -> Self {
        Self(Some(Arc::new(FuncInner {
            signature,
            call: Box::new(call),
        })))
    }

    /// `fn() -> R`
    pub fn getter<R: Reflect + Typed>(f: impl Fn() -> R + Send + Sync + 'static) -> Self {
        Self::from_raw(Signature::getter::<R>(), move |args| -> CallResult {
            crate::info::expect_args(&args, 0)?;
            Ok(Some(Box::new(f()) as Box<dyn Reflect>))
        })
    }

    /// `fn() -> Result<R, E>`
    pub fn try_getter<R: Reflect + Typed, E: Into<BoxError>>(
        f: impl Fn() -> Result<R, E> + Send + Sync + 'static,
    ) -> Self {
        Self::from_raw(Signature::try_getter::<R>(), move |args| -> CallResult {
            crate::info::expect_args(&args, 0)?;
            match f() {
                Ok(value) => Ok(Some(Box::new(value) as Box<dyn Reflect>)),
                Err(err) => Err(CallError::Returned(err.into())),
            }
        })
    }

    /// `fn(A)`
    pub fn setter<A: Reflect + Typed>(f: impl Fn(A) + Send + Sync + 'static) -> Self {
        Self::from_raw(Signature::setter::<A>(), move |args| -> CallResult {
            f(crate::info::take_single_arg::<A>(args)?);
            Ok(None)
        })
    }

    /// `fn(A) -> Result<(), E>`
    pub fn try_setter<A: Reflect + Typed, E: Into<BoxError>>(
        f: impl Fn(A) -> Result<(), E> + Send + Sync + 'static,
    ) -> Self {
        Self::from_raw(Signature::try_setter::<A>(), move |args| -> CallResult {
            let arg = crate::info::take_single_arg::<A>(args)?;
            f(arg).map_err(|err| CallError::Returned(err.into()))?;
            Ok(None)
        })
    }

    /// Returns `true` if both values share the same closure.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(inner) => f.debug_tuple("Func").field(&inner.signature).finish(),
            None => f.write_str("Func(nil)"),
        }
    }
}

impl Function for Func {
    #[inline]
    fn signature(&self) -> Option<&Signature> {
        self.0.as_ref().map(|inner| &inner.signature)
    }

    fn call(&self, args: Vec<Box<dyn Reflect>>) -> CallResult {
        match &self.0 {
            Some(inner) => (inner.call)(args),
            None => Err(CallError::Nil),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use core::any::TypeId;
    use std::sync::Mutex;

    use super::{CallError, Func, Function};
    use crate::Reflect;

    #[test]
    fn nil_call() {
        let func = Func::default();
        assert!(func.is_nil());
        assert!(matches!(func.call(vec![]), Err(CallError::Nil)));
    }

    #[test]
    fn setter_checks_arguments() {
        let seen = alloc::sync::Arc::new(Mutex::new(0_i32));
        let sink = seen.clone();
        let func = Func::setter(move |v: i32| *sink.lock().unwrap() = v);

        assert!(func.signature().unwrap().is_setter_for(TypeId::of::<i32>()));
        assert!(func.call(vec![Box::new(5_i32) as Box<dyn Reflect>]).unwrap().is_none());
        assert_eq!(*seen.lock().unwrap(), 5);

        assert!(matches!(
            func.call(vec![Box::new(5_u8) as Box<dyn Reflect>]),
            Err(CallError::ArgType { .. })
        ));
        assert!(matches!(
            func.call(vec![]),
            Err(CallError::ArgCount {
                expected: 1,
                found: 0
            })
        ));
    }

    #[test]
    fn returned_error_is_kept() {
        let func = Func::try_getter(|| -> Result<u32, String> { Err("BOOM".into()) });
        match func.call(vec![]) {
            Err(CallError::Returned(err)) => assert_eq!(err.to_string(), "BOOM"),
            _ => panic!("expected the returned error"),
        }
    }

    #[test]
    fn clones_share_closure() {
        let a = Func::getter(|| 1_u8);
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&Func::getter(|| 1_u8)));
    }
}
