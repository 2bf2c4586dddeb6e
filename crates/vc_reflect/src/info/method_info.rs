use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::TypeId;
use core::fmt;

use crate::Reflect;
use crate::info::{TypeInfo, Typed};
use crate::ops::{BoxError, CallError};

/// The result of a type-erased call: the returned value, if any.
pub type CallResult = Result<Option<Box<dyn Reflect>>, CallError>;

// -----------------------------------------------------------------------------
// Signature

/// The output shape of a callable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Returns nothing.
    Unit,
    /// Returns a value.
    Value,
    /// Returns a value or an error.
    Fallible,
    /// Returns nothing or an error.
    Error,
}

/// Information for a callable parameter.
#[derive(Debug, Clone)]
pub struct ParamInfo {
    ty_id: TypeId,
    type_info: fn() -> &'static TypeInfo,
}

impl ParamInfo {
    /// Creates a parameter of type `T`.
    #[inline]
    pub fn new<T: Typed>() -> Self {
        Self {
            ty_id: TypeId::of::<T>(),
            type_info: T::type_info,
        }
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Returns the parameter's [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}

/// Parameters and output shape of a callable.
///
/// Paths only call two kinds of callables:
///
/// - getters, hopped through with the `()` component;
/// - setters, called when a value is written to the callable's slot.
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use vc_reflect::info::Signature;
///
/// assert!(Signature::getter::<u32>().is_getter());
/// assert!(Signature::try_setter::<u32>().is_setter_for(TypeId::of::<u32>()));
/// assert!(!Signature::setter::<u32>().is_setter_for(TypeId::of::<i32>()));
/// ```
#[derive(Debug, Clone)]
pub struct Signature {
    params: Box<[ParamInfo]>,
    output: Output,
    output_info: Option<fn() -> &'static TypeInfo>,
}

impl Signature {
    /// Creates a signature from raw parts.
    pub fn new(params: impl IntoIterator<Item = ParamInfo>, output: Output) -> Self {
        Self {
            params: params.into_iter().collect::<Vec<_>>().into_boxed_slice(),
            output,
            output_info: None,
        }
    }

    /// Records the type of the returned value.
    #[inline]
    pub fn with_output_info<R: Typed>(mut self) -> Self {
        self.output_info = Some(R::type_info);
        self
    }

    /// `fn() -> R`
    #[inline]
    pub fn getter<R: Typed>() -> Self {
        Self::new([], Output::Value).with_output_info::<R>()
    }

    /// `fn() -> Result<R, E>`
    #[inline]
    pub fn try_getter<R: Typed>() -> Self {
        Self::new([], Output::Fallible).with_output_info::<R>()
    }

    /// `fn(A)`
    #[inline]
    pub fn setter<A: Typed>() -> Self {
        Self::new([ParamInfo::new::<A>()], Output::Unit)
    }

    /// `fn(A) -> Result<(), E>`
    #[inline]
    pub fn try_setter<A: Typed>() -> Self {
        Self::new([ParamInfo::new::<A>()], Output::Error)
    }

    /// Returns the parameters.
    #[inline]
    pub fn params(&self) -> &[ParamInfo] {
        &self.params
    }

    /// Returns the output shape.
    #[inline]
    pub const fn output(&self) -> Output {
        self.output
    }

    /// Returns the [`TypeInfo`] of the returned value, if recorded.
    #[inline]
    pub fn output_info(&self) -> Option<&'static TypeInfo> {
        self.output_info.map(|f| f())
    }

    /// No parameters, returns a value and optionally an error.
    pub fn is_getter(&self) -> bool {
        self.params.is_empty() && matches!(self.output, Output::Value | Output::Fallible)
    }

    /// Exactly one parameter of the given type, returns nothing or an error.
    pub fn is_setter_for(&self, ty_id: TypeId) -> bool {
        matches!(&*self.params, [param] if param.ty_id() == ty_id)
            && matches!(self.output, Output::Unit | Output::Error)
    }
}

// -----------------------------------------------------------------------------
// MethodInfo

/// The type-erased body of a method.
///
/// Getters borrow the receiver, setters need it mutably.
#[derive(Clone)]
pub enum MethodCall {
    Ref(Arc<dyn Fn(&dyn Reflect, Vec<Box<dyn Reflect>>) -> CallResult + Send + Sync>),
    Mut(Arc<dyn Fn(&mut dyn Reflect, Vec<Box<dyn Reflect>>) -> CallResult + Send + Sync>),
}

/// A named method of a struct, reachable by paths.
///
/// Usually declared through the `getter`, `try_getter`, `setter` and
/// `try_setter` attributes of [`#[derive(Reflect)]`](crate::derive::Reflect).
///
/// # Examples
///
/// ```
/// use vc_reflect::info::MethodInfo;
///
/// let method = MethodInfo::getter::<u32, _>("doubled", |v: &u32| *v * 2);
/// let result = method.call_ref(&21_u32, Vec::new()).unwrap().unwrap();
/// assert_eq!(result.downcast_ref::<u32>(), Some(&42));
/// ```
#[derive(Clone)]
pub struct MethodInfo {
    name: &'static str,
    signature: Signature,
    call: MethodCall,
}

impl MethodInfo {
    /// Creates a method from raw parts.
    pub fn from_raw(name: &'static str, signature: Signature, call: MethodCall) -> Self {
        Self {
            name,
            signature,
            call,
        }
    }

    /// `fn(&T) -> R`
    pub fn getter<T: Reflect, R: Reflect + Typed>(
        name: &'static str,
        f: impl Fn(&T) -> R + Send + Sync + 'static,
    ) -> Self {
        let call = move |receiver: &dyn Reflect, args: Vec<Box<dyn Reflect>>| -> CallResult {
            expect_args(&args, 0)?;
            let receiver = receiver_ref::<T>(receiver)?;
            Ok(Some(Box::new(f(receiver)) as Box<dyn Reflect>))
        };
        Self::from_raw(name, Signature::getter::<R>(), MethodCall::Ref(Arc::new(call)))
    }

    /// `fn(&T) -> Result<R, E>`
    pub fn try_getter<T: Reflect, R: Reflect + Typed, E: Into<BoxError>>(
        name: &'static str,
        f: impl Fn(&T) -> Result<R, E> + Send + Sync + 'static,
    ) -> Self {
        let call = move |receiver: &dyn Reflect, args: Vec<Box<dyn Reflect>>| -> CallResult {
            expect_args(&args, 0)?;
            let receiver = receiver_ref::<T>(receiver)?;
            match f(receiver) {
                Ok(value) => Ok(Some(Box::new(value) as Box<dyn Reflect>)),
                Err(err) => Err(CallError::Returned(err.into())),
            }
        };
        Self::from_raw(name, Signature::try_getter::<R>(), MethodCall::Ref(Arc::new(call)))
    }

    /// `fn(&mut T, A)`
    pub fn setter<T: Reflect, A: Reflect + Typed>(
        name: &'static str,
        f: impl Fn(&mut T, A) + Send + Sync + 'static,
    ) -> Self {
        let call = move |receiver: &mut dyn Reflect, args: Vec<Box<dyn Reflect>>| -> CallResult {
            let arg = take_single_arg::<A>(args)?;
            let receiver = receiver_mut::<T>(receiver)?;
            f(receiver, arg);
            Ok(None)
        };
        Self::from_raw(name, Signature::setter::<A>(), MethodCall::Mut(Arc::new(call)))
    }

    /// `fn(&mut T, A) -> Result<(), E>`
    pub fn try_setter<T: Reflect, A: Reflect + Typed, E: Into<BoxError>>(
        name: &'static str,
        f: impl Fn(&mut T, A) -> Result<(), E> + Send + Sync + 'static,
    ) -> Self {
        let call = move |receiver: &mut dyn Reflect, args: Vec<Box<dyn Reflect>>| -> CallResult {
            let arg = take_single_arg::<A>(args)?;
            let receiver = receiver_mut::<T>(receiver)?;
            f(receiver, arg).map_err(|err| CallError::Returned(err.into()))?;
            Ok(None)
        };
        Self::from_raw(name, Signature::try_setter::<A>(), MethodCall::Mut(Arc::new(call)))
    }

    /// Returns the method name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the signature.
    #[inline]
    pub const fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Returns the type-erased body.
    #[inline]
    pub const fn body(&self) -> &MethodCall {
        &self.call
    }

    /// Returns `true` if the method needs a mutable receiver.
    #[inline]
    pub const fn needs_mut(&self) -> bool {
        matches!(self.call, MethodCall::Mut(_))
    }

    /// Calls the method on a shared receiver.
    ///
    /// Fails with [`CallError::Immutable`] for methods needing a mutable receiver.
    pub fn call_ref(&self, receiver: &dyn Reflect, args: Vec<Box<dyn Reflect>>) -> CallResult {
        match &self.call {
            MethodCall::Ref(call) => call(receiver, args),
            MethodCall::Mut(_) => Err(CallError::Immutable(self.name)),
        }
    }

    /// Calls the method on a mutable receiver.
    pub fn call_mut(&self, receiver: &mut dyn Reflect, args: Vec<Box<dyn Reflect>>) -> CallResult {
        match &self.call {
            MethodCall::Ref(call) => call(receiver, args),
            MethodCall::Mut(call) => call(receiver, args),
        }
    }
}

impl fmt::Debug for MethodInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodInfo")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .field("mutable", &self.needs_mut())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Argument helpers

pub(crate) fn expect_args(args: &[Box<dyn Reflect>], expected: usize) -> Result<(), CallError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(CallError::ArgCount {
            expected,
            found: args.len(),
        })
    }
}

pub(crate) fn take_single_arg<A: Reflect + Typed>(
    mut args: Vec<Box<dyn Reflect>>,
) -> Result<A, CallError> {
    expect_args(&args, 1)?;
    let Some(arg) = args.pop() else {
        return Err(CallError::ArgCount {
            expected: 1,
            found: 0,
        });
    };
    arg.take::<A>().map_err(|arg| CallError::ArgType {
        expected: A::type_info().type_path(),
        found: arg.reflect_type_info().type_path(),
    })
}

fn receiver_ref<T: Reflect>(receiver: &dyn Reflect) -> Result<&T, CallError> {
    let found = receiver.reflect_type_info().type_path();
    receiver.downcast_ref::<T>().ok_or(CallError::Receiver {
        expected: core::any::type_name::<T>(),
        found,
    })
}

fn receiver_mut<T: Reflect>(receiver: &mut dyn Reflect) -> Result<&mut T, CallError> {
    let found = receiver.reflect_type_info().type_path();
    receiver.downcast_mut::<T>().ok_or(CallError::Receiver {
        expected: core::any::type_name::<T>(),
        found,
    })
}
