//! Value conversions between reflected scalars.
//!
//! - [`read_as`]: the permissive conversion used when reading a value out
//!   into a caller's variable. Any numeric type converts to any other
//!   (with `as` semantics), and string-likes convert to `String`.
//! - [`widen`]: the lossless conversion used when writing a value into a
//!   slot of another type. Integers widen to integers able to hold the
//!   value and to `f64`, `f32` widens to `f64`, `&'static str` becomes
//!   `String`. Floats never narrow into integers.

use alloc::boxed::Box;
use alloc::string::String;
use core::any::TypeId;

use crate::Reflect;

#[derive(Debug, Clone, Copy)]
enum Scalar {
    Int(i128),
    F32(f32),
    F64(f64),
}

macro_rules! scalar_from_ints {
    ($value:ident, $($ty:ty),*) => {$(
        if let Some(v) = $value.downcast_ref::<$ty>() {
            return i128::try_from(*v).ok().map(Scalar::Int);
        }
    )*};
}

fn scalar_of(value: &dyn Reflect) -> Option<Scalar> {
    scalar_from_ints!(value, i8, i16, i32, i64, i128, isize);
    scalar_from_ints!(value, u8, u16, u32, u64, u128, usize);

    if let Some(v) = value.downcast_ref::<f32>() {
        return Some(Scalar::F32(*v));
    }
    if let Some(v) = value.downcast_ref::<f64>() {
        return Some(Scalar::F64(*v));
    }

    #[cfg(feature = "json")]
    if let Some(n) = value.downcast_ref::<serde_json::Number>() {
        if let Some(v) = n.as_i64() {
            return Some(Scalar::Int(v.into()));
        }
        if let Some(v) = n.as_u64() {
            return Some(Scalar::Int(v.into()));
        }
        return n.as_f64().map(Scalar::F64);
    }

    None
}

macro_rules! int_targets {
    ($target:ident, $scalar:ident, $lossless:ident, $($ty:ty),*) => {$(
        if $target == TypeId::of::<$ty>() {
            let value: Option<$ty> = match $scalar {
                Scalar::Int(v) if $lossless => <$ty>::try_from(v).ok(),
                Scalar::Int(v) => Some(v as $ty),
                Scalar::F32(_) | Scalar::F64(_) if $lossless => None,
                Scalar::F32(v) => Some(v as $ty),
                Scalar::F64(v) => Some(v as $ty),
            };
            return value.map(|v| Box::new(v) as Box<dyn Reflect>);
        }
    )*};
}

fn scalar_into(scalar: Scalar, target: TypeId, lossless: bool) -> Option<Box<dyn Reflect>> {
    int_targets!(target, scalar, lossless, i8, i16, i32, i64, i128, isize);
    int_targets!(target, scalar, lossless, u8, u16, u32, u64, u128, usize);

    if target == TypeId::of::<f64>() {
        let value = match scalar {
            Scalar::Int(v) => v as f64,
            Scalar::F32(v) => f64::from(v),
            Scalar::F64(v) => v,
        };
        return Some(Box::new(value));
    }
    if target == TypeId::of::<f32>() {
        return match scalar {
            Scalar::F32(v) => Some(Box::new(v)),
            _ if lossless => None,
            Scalar::Int(v) => Some(Box::new(v as f32)),
            Scalar::F64(v) => Some(Box::new(v as f32)),
        };
    }

    #[cfg(feature = "json")]
    if target == TypeId::of::<serde_json::Number>() && !lossless {
        return json_number(scalar).map(|n| Box::new(n) as Box<dyn Reflect>);
    }

    None
}

fn string_of(value: &dyn Reflect) -> Option<String> {
    if let Some(v) = value.downcast_ref::<&'static str>() {
        return Some(String::from(*v));
    }
    value.downcast_ref::<String>().cloned()
}

/// Reads `value` as a `T`.
///
/// Values of type `T` are cloned, numbers convert into any numeric
/// type and string-likes into `String`. Returns `None` if no
/// conversion exists.
///
/// # Examples
///
/// ```
/// use vc_reflect::convert::read_as;
///
/// assert_eq!(read_as::<i32>(&10.7_f64), Some(10));
/// assert_eq!(read_as::<u8>(&3_i64), Some(3));
/// assert_eq!(read_as::<String>(&"hi"), Some(String::from("hi")));
/// assert_eq!(read_as::<bool>(&1_u8), None);
/// ```
pub fn read_as<T: Reflect>(value: &dyn Reflect) -> Option<T> {
    if value.is::<T>() {
        return value.reflect_clone().ok()?.take::<T>().ok();
    }
    let target = TypeId::of::<T>();
    if let Some(scalar) = scalar_of(value) {
        return scalar_into(scalar, target, false)?.take::<T>().ok();
    }
    if target == TypeId::of::<String>() {
        let value: Box<dyn Reflect> = Box::new(string_of(value)?);
        return value.take::<T>().ok();
    }
    None
}

/// Widens `value` into the type identified by `target` without loss.
///
/// Returns `None` if no lossless conversion exists.
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use vc_reflect::convert::widen;
///
/// let wide = widen(&7_u8, TypeId::of::<i64>()).unwrap();
/// assert_eq!(wide.downcast_ref::<i64>(), Some(&7));
///
/// assert!(widen(&300_i32, TypeId::of::<u8>()).is_none());
/// assert!(widen(&1.0_f64, TypeId::of::<i32>()).is_none());
/// ```
pub fn widen(value: &dyn Reflect, target: TypeId) -> Option<Box<dyn Reflect>> {
    if let Some(scalar) = scalar_of(value) {
        return scalar_into(scalar, target, true);
    }
    if target == TypeId::of::<String>() {
        let value = value.downcast_ref::<&'static str>()?;
        return Some(Box::new(String::from(*value)));
    }
    None
}

/// Returns the JSON number for numeric values.
#[cfg(feature = "json")]
pub(crate) fn as_json_number(value: &dyn Reflect) -> Option<serde_json::Number> {
    json_number(scalar_of(value)?)
}

#[cfg(feature = "json")]
fn json_number(scalar: Scalar) -> Option<serde_json::Number> {
    match scalar {
        Scalar::Int(v) => i64::try_from(v)
            .map(serde_json::Number::from)
            .or_else(|_| u64::try_from(v).map(serde_json::Number::from))
            .ok(),
        Scalar::F32(v) => serde_json::Number::from_f64(f64::from(v)),
        Scalar::F64(v) => serde_json::Number::from_f64(v),
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use core::any::TypeId;

    use super::{read_as, widen};

    #[test]
    fn read_truncates_floats() {
        assert_eq!(read_as::<i64>(&-2.9_f32), Some(-2));
        assert_eq!(read_as::<f32>(&2_u64), Some(2.0));
    }

    #[test]
    fn read_exact_type_clones() {
        assert_eq!(read_as::<String>(&String::from("a")), Some(String::from("a")));
        assert_eq!(read_as::<u8>(&String::from("1")), None);
    }

    #[cfg(feature = "json")]
    #[test]
    fn read_json_numbers() {
        let number = serde_json::Number::from_f64(10.0).unwrap();
        assert_eq!(read_as::<i32>(&number), Some(10));
        assert_eq!(read_as::<u64>(&serde_json::Number::from(3_u64)), Some(3));
    }

    #[test]
    fn widen_is_lossless() {
        assert!(widen(&-1_i32, TypeId::of::<u64>()).is_none());
        assert!(widen(&u64::MAX, TypeId::of::<i128>()).is_some());
        assert!(widen(&1.5_f32, TypeId::of::<f64>()).is_some());
        assert!(widen(&1.5_f64, TypeId::of::<f32>()).is_none());

        let text = widen(&"x", TypeId::of::<String>()).unwrap();
        assert_eq!(text.downcast_ref::<String>().map(String::as_str), Some("x"));
        assert!(widen(&String::new(), TypeId::of::<String>()).is_none());
    }
}
