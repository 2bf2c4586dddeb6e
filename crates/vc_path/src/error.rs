use alloc::string::String;

use thiserror::Error;
use vc_reflect::info::ReflectKind;
use vc_reflect::ops::{BoxError, CallError, Direction, ReflectCloneError, StreamError};

use crate::Path;

// -----------------------------------------------------------------------------
// ErrorKind

/// The stable classification of a [`PathError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The path went through a nil value, a missing key or an index out
    /// of range, and nothing was created.
    Missing,
    /// A value could not be assigned or converted to the target type.
    InvalidType,
    /// A nil value was found where a value was required.
    Nil,
    /// The path does not fit the shape of the object.
    Structural,
    /// An error returned by user code: a callable or a setter.
    Returned,
}

// -----------------------------------------------------------------------------
// PathError

/// A enumeration of all error outcomes of path operations.
///
/// Structural variants carry the path matched so far and the offending
/// component.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PathError {
    #[error("unable to path through the object at `{path}`")]
    Missing { path: Path },

    #[error("type mismatch: expected `{expected}` but found `{found}`")]
    InvalidType {
        expected: &'static str,
        found: &'static str,
    },

    #[error("value is nil at `{path}`")]
    Nil { path: Path },

    #[error("no field `{component}` in type `{type_path}` at `{path}`")]
    NoField {
        path: Path,
        component: String,
        type_path: &'static str,
    },

    #[error("invalid index `{component}` at `{path}`")]
    InvalidIndex { path: Path, component: String },

    #[error("unsupported key type `{key}` for map `{type_path}` at `{path}`")]
    UnsupportedKey {
        path: Path,
        key: &'static str,
        type_path: &'static str,
    },

    #[error("missing required `()` component before `{component}` at `{path}`")]
    MissingCall { path: Path, component: String },

    #[error("invalid signature for `{component}` at `{path}`")]
    InvalidSignature { path: Path, component: String },

    #[error("invalid channel direction `{direction}` at `{path}`")]
    ChannelDirection { path: Path, direction: Direction },

    #[error("invalid channel component `{component}` at `{path}`")]
    ChannelComponent { path: Path, component: String },

    #[error("premature end of path: `{component}` into {kind} `{type_path}` at `{path}`")]
    PrematureEnd {
        path: Path,
        component: String,
        kind: ReflectKind,
        type_path: &'static str,
    },

    #[error("unable to create `{type_path}` at `{path}`")]
    CannotCreate { path: Path, type_path: &'static str },

    #[error("value is not addressable at `{path}`")]
    NotAddressable { path: Path },

    #[error("unable to set `{type_path}` at `{path}`")]
    NotAssignable { path: Path, type_path: &'static str },

    #[error("unable to grow fixed-size `{type_path}` at `{path}`")]
    FixedSize { path: Path, type_path: &'static str },

    #[error("unable to grow `{type_path}` to {len} items at `{path}`")]
    CannotGrow {
        path: Path,
        type_path: &'static str,
        len: usize,
    },

    #[error("call failed at `{path}`: {source}")]
    Call { path: Path, source: CallError },

    #[error("send failed at `{path}`: {source}")]
    Send { path: Path, source: StreamError },

    #[error(transparent)]
    Clone(#[from] ReflectCloneError),

    /// The error returned by user code, untouched.
    #[error(transparent)]
    Returned(BoxError),
}

impl PathError {
    /// Returns the kind of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Missing { .. } => ErrorKind::Missing,
            Self::InvalidType { .. } => ErrorKind::InvalidType,
            Self::Nil { .. } => ErrorKind::Nil,
            Self::Returned(_) => ErrorKind::Returned,
            _ => ErrorKind::Structural,
        }
    }

    /// Returns `true` for [`ErrorKind::Missing`].
    #[inline]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }

    /// Wraps the error of a call made at `path`.
    ///
    /// An error returned by the callee is kept as is.
    pub(crate) fn from_call(path: &Path, err: CallError) -> Self {
        match err {
            CallError::Returned(err) => Self::Returned(err),
            source => Self::Call {
                path: path.clone(),
                source,
            },
        }
    }

    /// Wraps the error of a send made at `path`.
    pub(crate) fn from_send(path: &Path, err: StreamError) -> Self {
        match err {
            StreamError::ItemType { expected, found } => Self::InvalidType { expected, found },
            source => Self::Send {
                path: path.clone(),
                source,
            },
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::ToString;

    use vc_reflect::ops::{CallError, StreamError};

    use super::{ErrorKind, PathError};
    use crate::Path;

    #[derive(Debug)]
    struct Boom;

    impl core::fmt::Display for Boom {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            f.write_str("BOOM")
        }
    }

    impl core::error::Error for Boom {}

    #[derive(Debug)]
    struct Rejected(Boom);

    impl core::fmt::Display for Rejected {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            f.write_str("rejected")
        }
    }

    impl core::error::Error for Rejected {
        fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn returned_errors_are_kept() {
        let err = PathError::from_call(&Path::new("F"), CallError::Returned(Box::new(Boom)));
        assert_eq!(err.kind(), ErrorKind::Returned);
        assert_eq!(err.to_string(), "BOOM");

        let PathError::Returned(inner) = err else {
            panic!("expected a returned error");
        };
        assert!(inner.downcast_ref::<Boom>().is_some());
    }

    #[test]
    fn returned_errors_keep_their_source() {
        use core::error::Error;

        let returned = CallError::Returned(Box::new(Rejected(Boom)));
        let err = PathError::from_call(&Path::new("F"), returned);
        assert_eq!(err.to_string(), "rejected");

        let source = err.source().expect("source of the returned error");
        assert_eq!(source.to_string(), "BOOM");
        assert!(source.downcast_ref::<Boom>().is_some());
    }

    #[test]
    fn kinds() {
        let path = Path::new("A.B");
        assert!(PathError::Missing { path: path.clone() }.is_missing());
        assert_eq!(
            PathError::from_call(&path, CallError::Nil).kind(),
            ErrorKind::Structural
        );
        assert_eq!(
            PathError::from_send(&path, StreamError::ItemType { expected: "u8", found: "i8" })
                .kind(),
            ErrorKind::InvalidType
        );
        assert_eq!(
            PathError::InvalidIndex { path, component: "-1".into() }.to_string(),
            "invalid index `-1` at `A.B`"
        );
    }
}
