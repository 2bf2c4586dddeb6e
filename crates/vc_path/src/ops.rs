//! Operations over paths, all built on [`Path::apply`].

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

use vc_reflect::Reflect;
use vc_reflect::convert::{read_as, widen};
use vc_reflect::info::TypeInfo;
use vc_reflect::ops::{ReflectMut, ReflectRef};

use crate::apply::apply;
use crate::context::{Context, Visit};
use crate::value::Value;
use crate::{Path, PathError};

// -----------------------------------------------------------------------------
// Path operations

impl Path {
    /// Applies the path to `obj`, calling the visitor of `ctx` on every
    /// matched value.
    ///
    /// Values reached through a shared reference cannot be modified: use
    /// [`apply_mut`](Self::apply_mut) for that.
    pub fn apply(&self, obj: &dyn Reflect, ctx: &mut Context<'_>) -> Result<(), PathError> {
        ctx.reset();
        apply(Value::shared(obj), self.components(), ctx)
    }

    /// Applies the path to `obj`, calling the visitor of `ctx` on every
    /// matched value, which may be modified.
    pub fn apply_mut(&self, obj: &mut dyn Reflect, ctx: &mut Context<'_>) -> Result<(), PathError> {
        ctx.reset();
        apply(Value::exclusive(obj), self.components(), ctx)
    }

    /// Returns a copy of the first value matching the path.
    ///
    /// Fails with [`PathError::Missing`] if nothing matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use vc_path::Path;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(String::from("foo"), vec![1_u32, 2]);
    ///
    /// let value = Path::new("foo.1").get(&map).unwrap();
    /// assert_eq!(value.downcast_ref::<u32>(), Some(&2));
    ///
    /// assert!(Path::new("bar.1").get(&map).unwrap_err().is_missing());
    /// ```
    pub fn get(&self, obj: &dyn Reflect) -> Result<Box<dyn Reflect>, PathError> {
        let mut result = None;
        let mut ctx = Context::new(|_, visit| {
            result = Some(visit.to_owned()?);
            Ok(false)
        });
        self.apply(obj, &mut ctx)?;
        drop(ctx);

        result.ok_or_else(|| PathError::Missing { path: self.clone() })
    }

    /// Returns copies of all the values matching the path.
    pub fn get_all(&self, obj: &dyn Reflect) -> Result<Vec<Box<dyn Reflect>>, PathError> {
        let mut result = Vec::new();
        let mut ctx = Context::new(|_, visit| {
            result.push(visit.to_owned()?);
            Ok(true)
        });
        self.apply(obj, &mut ctx)?;
        drop(ctx);

        Ok(result)
    }

    /// Assigns `value` to the first value matching the path, creating
    /// missing components.
    ///
    /// See [`set_boxed`](Self::set_boxed).
    #[inline]
    pub fn set<T: Reflect>(&self, obj: &mut dyn Reflect, value: T) -> Result<(), PathError> {
        // Not Inline `set_boxed`: compiled once, independent of T.
        self.set_boxed(obj, Box::new(value))
    }

    /// Assigns `value` to the first value matching the path, creating
    /// missing components.
    ///
    /// The matched slot decides how the value is taken:
    ///
    /// - a stream sends it;
    /// - a function or method taking exactly the value's type is called
    ///   with it, its error returned as [`PathError::Returned`];
    /// - a slot of the value's type is overwritten;
    /// - a pointer accepting the value stores it;
    /// - a slot of a wider numeric type gets the widened value.
    ///
    /// Anything else is [`PathError::InvalidType`]. Slots stored by value
    /// in a map are replaced through the map; other slots that cannot be
    /// modified in place are [`PathError::NotAssignable`].
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_path::Path;
    ///
    /// let mut list: Vec<u64> = vec![1, 2];
    /// Path::new("4").set(&mut list, 7_u64).unwrap();
    /// assert_eq!(list, [1, 2, 0, 0, 7]);
    ///
    /// // Widening.
    /// Path::new("0").set(&mut list, 9_u8).unwrap();
    /// assert_eq!(list[0], 9);
    /// ```
    #[inline(never)]
    pub fn set_boxed(
        &self,
        obj: &mut dyn Reflect,
        value: Box<dyn Reflect>,
    ) -> Result<(), PathError> {
        let mut value = Some(value);
        let mut ctx = Context::new(|path, visit| {
            if let Some(value) = value.take() {
                assign(path, visit, value)?;
            }
            Ok(false)
        })
        .create_if_missing(true);
        self.apply_mut(obj, &mut ctx)
    }

    /// Assigns a copy of `value` to every value matching the path,
    /// creating missing components.
    ///
    /// Matches assigned before a failure keep their new value.
    #[inline]
    pub fn set_all<T: Reflect>(&self, obj: &mut dyn Reflect, value: T) -> Result<(), PathError> {
        self.set_all_boxed(obj, &value)
    }

    /// Assigns a copy of `value` to every value matching the path,
    /// creating missing components.
    #[inline(never)]
    pub fn set_all_boxed(
        &self,
        obj: &mut dyn Reflect,
        value: &dyn Reflect,
    ) -> Result<(), PathError> {
        let mut ctx = Context::new(|path, visit| {
            assign(path, visit, value.reflect_clone()?)?;
            Ok(true)
        })
        .create_if_missing(true);
        self.apply_mut(obj, &mut ctx)
    }

    /// Reads the first value matching the path as a `T`.
    ///
    /// Numbers convert to any numeric type and string-likes to `String`.
    /// Pointers are followed until a convertible value is found, failing
    /// with [`PathError::Nil`] on a nil one.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_path::Path;
    /// use serde_json::json;
    ///
    /// let doc = json!({ "a": { "x": 10 } });
    /// assert_eq!(Path::new("a.x").read::<i32>(&doc).unwrap(), 10);
    /// assert_eq!(Path::new("a.x").read::<f64>(&doc).unwrap(), 10.0);
    /// assert!(Path::new("a").read::<i32>(&doc).is_err());
    /// ```
    pub fn read<T: Reflect>(&self, obj: &dyn Reflect) -> Result<T, PathError> {
        let mut result = None;
        let mut ctx = Context::new(|path, visit| {
            result = Some(read_visit::<T>(path, visit)?);
            Ok(false)
        });
        self.apply(obj, &mut ctx)?;
        drop(ctx);

        result.ok_or_else(|| PathError::Missing { path: self.clone() })
    }

    /// Reads every value matching the path as a `T`, appending them to
    /// `dest`.
    ///
    /// Values read before a failure stay in `dest`.
    pub fn read_all<T: Reflect>(
        &self,
        obj: &dyn Reflect,
        dest: &mut Vec<T>,
    ) -> Result<(), PathError> {
        let mut ctx = Context::new(|path, visit| {
            dest.push(read_visit::<T>(path, visit)?);
            Ok(true)
        });
        self.apply(obj, &mut ctx)
    }

    /// Returns the type of the first value matching the path.
    pub fn type_of(&self, obj: &dyn Reflect) -> Result<&'static TypeInfo, PathError> {
        let mut result = None;
        let mut ctx = Context::new(|_, visit| {
            result = Some(visit.type_info());
            Ok(false)
        });
        self.apply(obj, &mut ctx)?;
        drop(ctx);

        result.ok_or_else(|| PathError::Missing { path: self.clone() })
    }
}

// -----------------------------------------------------------------------------
// Read

fn read_visit<T: Reflect>(path: &Path, visit: &Visit<'_, '_>) -> Result<T, PathError> {
    match visit.get() {
        Some(value) => read_through(path, value),
        None => read_through(path, &*visit.to_owned()?),
    }
}

fn read_through<T: Reflect>(path: &Path, mut value: &dyn Reflect) -> Result<T, PathError> {
    loop {
        if let Some(result) = read_as::<T>(value) {
            return Ok(result);
        }
        let ReflectRef::Pointer(pointer) = value.reflect_ref() else {
            return Err(PathError::InvalidType {
                expected: core::any::type_name::<T>(),
                found: value.reflect_type_info().type_path(),
            });
        };
        let Some(pointee) = pointer.pointee() else {
            return Err(PathError::Nil { path: path.clone() });
        };
        value = pointee;
    }
}

// -----------------------------------------------------------------------------
// Assign

fn assign(
    path: &Path,
    visit: &mut Visit<'_, '_>,
    value: Box<dyn Reflect>,
) -> Result<(), PathError> {
    if let Some(stream) = visit.stream() {
        return stream
            .send(value)
            .map_err(|err| PathError::from_send(path, err));
    }

    if visit.signature().is_some_and(|sig| sig.is_setter_for(value.ty_id())) {
        return visit
            .call(vec![value])
            .map(|_| ())
            .map_err(|err| PathError::from_call(path, err));
    }

    let expected = visit.type_info().type_path();
    let found = value.reflect_type_info().type_path();
    let Some(target) = visit.get() else {
        return Err(PathError::InvalidType { expected, found });
    };

    let target_id = target.ty_id();
    let accepts = match target.reflect_ref() {
        ReflectRef::Pointer(pointer) => pointer.accepts(&*value),
        _ => false,
    };

    if target_id == value.ty_id() {
        return place(path, visit, value);
    }
    if accepts {
        return store(path, visit, value);
    }
    match widen(&*value, target_id) {
        Some(value) => place(path, visit, value),
        None => Err(PathError::InvalidType { expected, found }),
    }
}

/// Overwrites the matched value with `value` of the same type.
fn place(path: &Path, visit: &mut Visit<'_, '_>, value: Box<dyn Reflect>) -> Result<(), PathError> {
    let type_path = visit.type_info().type_path();
    if let Some(target) = visit.get_mut() {
        return target.set(value).map_err(|value| PathError::InvalidType {
            expected: type_path,
            found: value.reflect_type_info().type_path(),
        });
    }
    visit
        .write_back(value)
        .map_err(|_| PathError::NotAssignable {
            path: path.clone(),
            type_path,
        })
}

/// Makes `value` the pointee of the matched pointer.
fn store(path: &Path, visit: &mut Visit<'_, '_>, value: Box<dyn Reflect>) -> Result<(), PathError> {
    let type_path = visit.type_info().type_path();
    let mismatch = |value: Box<dyn Reflect>| PathError::InvalidType {
        expected: type_path,
        found: value.reflect_type_info().type_path(),
    };

    if let Some(target) = visit.get_mut() {
        return store_into(target, value).map_err(mismatch);
    }
    if !visit.can_write_back() {
        return Err(PathError::NotAssignable {
            path: path.clone(),
            type_path,
        });
    }

    let mut replacement = match visit.get() {
        Some(current) => current.reflect_clone()?,
        None => return Err(mismatch(value)),
    };
    store_into(&mut *replacement, value).map_err(mismatch)?;
    visit
        .write_back(replacement)
        .map_err(|_| PathError::NotAssignable {
            path: path.clone(),
            type_path,
        })
}

fn store_into(target: &mut dyn Reflect, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
    match target.reflect_mut() {
        ReflectMut::Pointer(pointer) => pointer.store(value),
        _ => Err(value),
    }
}

// -----------------------------------------------------------------------------
// ReflectPath

/// Path operations on reflected values, taking the path as text.
///
/// The path is parsed on every call. If a path needs to be reused,
/// consider parsing it once into a [`Path`].
///
/// # Examples
///
/// ```
/// use vc_path::ReflectPath;
/// use vc_reflect::derive::Reflect;
///
/// #[derive(Reflect, Default)]
/// struct Account {
///     owner: String,
///     balance: Option<i64>,
/// }
///
/// let mut account = Account::default();
/// assert!(account.get_at("balance.x").unwrap_err().is_missing());
///
/// account.set_at("balance", 10_i64).unwrap();
/// assert_eq!(account.read_at::<i64>("balance").unwrap(), 10);
/// assert_eq!(account.type_at("owner").unwrap().type_name(), "String");
/// ```
pub trait ReflectPath {
    /// See [`Path::get`].
    fn get_at(&self, path: &str) -> Result<Box<dyn Reflect>, PathError>;

    /// See [`Path::get_all`].
    fn get_all_at(&self, path: &str) -> Result<Vec<Box<dyn Reflect>>, PathError>;

    /// See [`Path::set`].
    fn set_at<T: Reflect>(&mut self, path: &str, value: T) -> Result<(), PathError>;

    /// See [`Path::set_all`].
    fn set_all_at<T: Reflect>(&mut self, path: &str, value: T) -> Result<(), PathError>;

    /// See [`Path::read`].
    fn read_at<T: Reflect>(&self, path: &str) -> Result<T, PathError>;

    /// See [`Path::read_all`].
    fn read_all_at<T: Reflect>(&self, path: &str, dest: &mut Vec<T>) -> Result<(), PathError>;

    /// See [`Path::type_of`].
    fn type_at(&self, path: &str) -> Result<&'static TypeInfo, PathError>;
}

impl ReflectPath for dyn Reflect {
    #[inline(never)]
    fn get_at(&self, path: &str) -> Result<Box<dyn Reflect>, PathError> {
        Path::new(path).get(self)
    }

    #[inline(never)]
    fn get_all_at(&self, path: &str) -> Result<Vec<Box<dyn Reflect>>, PathError> {
        Path::new(path).get_all(self)
    }

    #[inline]
    fn set_at<T: Reflect>(&mut self, path: &str, value: T) -> Result<(), PathError> {
        Path::new(path).set(self, value)
    }

    #[inline]
    fn set_all_at<T: Reflect>(&mut self, path: &str, value: T) -> Result<(), PathError> {
        Path::new(path).set_all(self, value)
    }

    #[inline]
    fn read_at<T: Reflect>(&self, path: &str) -> Result<T, PathError> {
        Path::new(path).read(self)
    }

    #[inline]
    fn read_all_at<T: Reflect>(&self, path: &str, dest: &mut Vec<T>) -> Result<(), PathError> {
        Path::new(path).read_all(self, dest)
    }

    #[inline(never)]
    fn type_at(&self, path: &str) -> Result<&'static TypeInfo, PathError> {
        Path::new(path).type_of(self)
    }
}

macro_rules! impl_reflect_path {
    (T: $name:ident) => {
        impl<P: Sized + $name> ReflectPath for P {
            #[inline(always)]
            fn get_at(&self, path: &str) -> Result<Box<dyn Reflect>, PathError> {
                // Significantly reduce compilation time
                <dyn Reflect as ReflectPath>::get_at(self, path)
            }

            #[inline(always)]
            fn get_all_at(&self, path: &str) -> Result<Vec<Box<dyn Reflect>>, PathError> {
                // Significantly reduce compilation time
                <dyn Reflect as ReflectPath>::get_all_at(self, path)
            }

            #[inline(always)]
            fn set_at<T: Reflect>(&mut self, path: &str, value: T) -> Result<(), PathError> {
                // Significantly reduce compilation time
                <dyn Reflect as ReflectPath>::set_at::<T>(self, path, value)
            }

            #[inline(always)]
            fn set_all_at<T: Reflect>(&mut self, path: &str, value: T) -> Result<(), PathError> {
                // Significantly reduce compilation time
                <dyn Reflect as ReflectPath>::set_all_at::<T>(self, path, value)
            }

            #[inline(always)]
            fn read_at<T: Reflect>(&self, path: &str) -> Result<T, PathError> {
                // Significantly reduce compilation time
                <dyn Reflect as ReflectPath>::read_at::<T>(self, path)
            }

            #[inline(always)]
            fn read_all_at<T: Reflect>(
                &self,
                path: &str,
                dest: &mut Vec<T>,
            ) -> Result<(), PathError> {
                // Significantly reduce compilation time
                <dyn Reflect as ReflectPath>::read_all_at::<T>(self, path, dest)
            }

            #[inline(always)]
            fn type_at(&self, path: &str) -> Result<&'static TypeInfo, PathError> {
                // Significantly reduce compilation time
                <dyn Reflect as ReflectPath>::type_at(self, path)
            }
        }
    };
}

impl_reflect_path!(T: Reflect);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};
    use alloc::sync::Arc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::fmt;
    use std::collections::HashMap;

    use parking_lot::Mutex;
    use serde_json::json;
    use vc_reflect::derive::Reflect;
    use vc_reflect::ops::{Chan, Dyn, Func, Function};

    use super::ReflectPath;
    use crate::{ErrorKind, Path, PathError};

    #[derive(Debug)]
    struct Boom;

    impl fmt::Display for Boom {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("BOOM")
        }
    }

    impl core::error::Error for Boom {}

    #[derive(Reflect, Default, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Reflect, Default)]
    #[reflect(getter(sum), try_getter(fail), setter(shift), try_setter(checked_shift))]
    struct Sample {
        n: i32,
        opt: Option<Point>,
        list: Vec<i64>,
        array: [u8; 2],
        points: HashMap<String, Point>,
        boxed: HashMap<String, Box<Point>>,
        any: Dyn,
        func: Func,
        chan: Chan<i32>,
    }

    impl Sample {
        fn sum(&self) -> i64 {
            self.list.iter().sum()
        }

        fn fail(&self) -> Result<i32, Boom> {
            Err(Boom)
        }

        fn shift(&mut self, by: i32) {
            self.n += by;
        }

        fn checked_shift(&mut self, by: i32) -> Result<(), Boom> {
            if by < 0 {
                return Err(Boom);
            }
            self.n += by;
            Ok(())
        }
    }

    fn is_boom(err: &PathError) -> bool {
        matches!(err, PathError::Returned(inner) if inner.is::<Boom>())
    }

    #[test]
    fn get_fields_and_entries() {
        let mut sample = Sample {
            n: 3,
            ..Default::default()
        };
        sample.points.insert("a".into(), Point { x: 1, y: 2 });

        let n = Path::new("n").get(&sample).unwrap();
        assert_eq!(n.downcast_ref::<i32>(), Some(&3));
        assert_eq!(Path::new("points.a.y").read::<i32>(&sample).unwrap(), 2);

        let err = Path::new("nope").get(&sample).unwrap_err();
        assert!(matches!(err, PathError::NoField { .. }));
        assert_eq!(err.kind(), ErrorKind::Structural);

        let err = Path::new("n.x").get(&sample).unwrap_err();
        assert!(matches!(err, PathError::PrematureEnd { .. }));
    }

    #[test]
    fn missing_until_created() {
        let mut sample = Sample::default();

        let err = Path::new("opt.x").get(&sample).unwrap_err();
        assert!(err.is_missing());

        Path::new("opt.x").set(&mut sample, 4_i32).unwrap();
        assert_eq!(sample.opt, Some(Point { x: 4, y: 0 }));
        assert_eq!(Path::new("opt.x").read::<i32>(&sample).unwrap(), 4);

        assert!(Path::new("boxed.k.x").get(&sample).unwrap_err().is_missing());
        Path::new("boxed.k.y").set(&mut sample, 5_i32).unwrap();
        assert_eq!(sample.boxed["k"].y, 5);
    }

    #[test]
    fn lists_grow_when_creating() {
        let mut sample = Sample {
            list: vec![1, 2],
            ..Default::default()
        };

        Path::new("list.4").set(&mut sample, 9_i64).unwrap();
        assert_eq!(sample.list, [1, 2, 0, 0, 9]);

        assert!(Path::new("list.9").get(&sample).unwrap_err().is_missing());

        let err = Path::new("array.2").set(&mut sample, 1_u8).unwrap_err();
        assert!(matches!(err, PathError::FixedSize { .. }));

        for index in ["x", "-1"] {
            let err = Path::new("list").join(index).get(&sample).unwrap_err();
            assert!(matches!(err, PathError::InvalidIndex { .. }));
        }
    }

    #[test]
    fn set_checks_types() {
        let mut sample = Sample::default();

        let err = Path::new("n").set(&mut sample, "a string").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidType);

        let err = Path::new("n").set(&mut sample, 1.5_f64).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidType);

        Path::new("n").set(&mut sample, 7_u8).unwrap();
        assert_eq!(sample.n, 7);

        Path::root().set(&mut sample.n, 8_i32).unwrap();
        assert_eq!(sample.n, 8);
    }

    #[test]
    fn wildcards_visit_everything() {
        let mut sample = Sample {
            list: vec![4, 5, 6],
            ..Default::default()
        };
        sample.points.insert("a".into(), Point::default());
        sample.points.insert("b".into(), Point::default());

        let items = Path::new("list.*").get_all(&sample).unwrap();
        let items: Vec<i64> = items
            .iter()
            .filter_map(|v| v.downcast_ref::<i64>().copied())
            .collect();
        assert_eq!(items, [4, 5, 6]);

        let fields = Path::new("*").get_all(&Point { x: 1, y: 2 }).unwrap();
        let fields: Vec<i32> = fields
            .iter()
            .filter_map(|v| v.downcast_ref::<i32>().copied())
            .collect();
        assert_eq!(fields, [1, 2]);

        assert_eq!(Path::new("points.*").get_all(&sample).unwrap().len(), 2);
        assert_eq!(Path::new("*").get_all(&sample).unwrap().len(), 9);
    }

    #[test]
    fn wildcards_skip_missing_only() {
        let mut holders: HashMap<String, Option<Point>> = HashMap::new();
        holders.insert("a".into(), Some(Point { x: 1, y: 0 }));
        holders.insert("b".into(), Some(Point { x: 2, y: 0 }));
        holders.insert("c".into(), None);

        let mut xs: Vec<i32> = Vec::new();
        Path::new("*.x").read_all(&holders, &mut xs).unwrap();
        xs.sort_unstable();
        assert_eq!(xs, [1, 2]);

        let err = Path::new("*.z").get_all(&holders).unwrap_err();
        assert!(matches!(err, PathError::NoField { .. }));
    }

    #[test]
    fn map_structs_are_values() {
        let mut sample = Sample::default();
        sample.points.insert("a".into(), Point { x: 1, y: 1 });
        sample.boxed.insert("a".into(), Box::new(Point { x: 1, y: 1 }));

        let err = Path::new("points.a.x").set(&mut sample, 5_i32).unwrap_err();
        assert!(matches!(err, PathError::NotAssignable { .. }));
        assert_eq!(sample.points["a"].x, 1);

        Path::new("points.a").set(&mut sample, Point { x: 5, y: 6 }).unwrap();
        assert_eq!(sample.points["a"], Point { x: 5, y: 6 });

        Path::new("boxed.a.x").set(&mut sample, 5_i32).unwrap();
        assert_eq!(sample.boxed["a"].x, 5);
    }

    #[test]
    fn interface_slots() {
        let mut sample = Sample::default();

        assert!(Path::new("any.x").get(&sample).unwrap_err().is_missing());
        let err = Path::new("any.x").set(&mut sample, 1_i32).unwrap_err();
        assert!(matches!(err, PathError::CannotCreate { .. }));

        Path::new("any").set(&mut sample, Point { x: 1, y: 2 }).unwrap();
        Path::new("any.x").set(&mut sample, 3_i32).unwrap();
        assert_eq!(Path::new("any.x").read::<i32>(&sample).unwrap(), 3);
        assert_eq!(Path::new("any.y").read::<i32>(&sample).unwrap(), 2);
    }

    #[test]
    fn setter_methods() {
        let mut sample = Sample::default();

        Path::new("shift").set(&mut sample, 2_i32).unwrap();
        assert_eq!(sample.n, 2);

        let err = Path::new("checked_shift").set(&mut sample, -1_i32).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Returned);
        assert!(is_boom(&err));
        assert_eq!(err.to_string(), "BOOM");

        Path::new("checked_shift").set(&mut sample, 3_i32).unwrap();
        assert_eq!(sample.n, 5);

        let err = Path::new("shift").set(&mut sample, 2_i64).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidType);
    }

    #[test]
    fn callables() {
        let mut sample = Sample {
            list: vec![1, 2, 3],
            func: Func::getter(|| 5_i32),
            ..Default::default()
        };

        assert_eq!(Path::new("func.()").read::<i32>(&sample).unwrap(), 5);
        let err = Path::new("func.x").get(&sample).unwrap_err();
        assert!(matches!(err, PathError::MissingCall { .. }));

        assert_eq!(Path::new("sum.()").read::<i64>(&sample).unwrap(), 6);
        let bound = Path::new("sum").get(&sample).unwrap();
        let bound = bound.downcast_ref::<Func>().unwrap();
        let result = bound.call(Vec::new()).unwrap().unwrap();
        assert_eq!(result.downcast_ref::<i64>(), Some(&6));

        assert!(is_boom(&Path::new("fail.()").get(&sample).unwrap_err()));

        let err = Path::new("shift.()").get(&sample).unwrap_err();
        assert!(matches!(err, PathError::InvalidSignature { .. }));

        let seen = Arc::new(Mutex::new(0));
        let sink = seen.clone();
        sample.func = Func::setter(move |value: i32| *sink.lock() = value);
        Path::new("func").set(&mut sample, 8_i32).unwrap();
        assert_eq!(*seen.lock(), 8);

        sample.func = Func::nil();
        assert!(Path::new("func.()").get(&sample).unwrap_err().is_missing());
    }

    #[test]
    fn channels() {
        let chan = Chan::<i32>::new(4);
        for value in 1..=3 {
            chan.send(value).unwrap();
        }
        chan.close();
        let mut sample = Sample {
            chan,
            ..Default::default()
        };

        assert_eq!(Path::new("chan.1").read::<i32>(&sample).unwrap(), 1);
        let mut rest: Vec<i32> = Vec::new();
        Path::new("chan.*").read_all(&sample, &mut rest).unwrap();
        assert_eq!(rest, [2, 3]);
        assert!(Path::new("chan.1").get(&sample).unwrap_err().is_missing());

        let err = Path::new("chan.x").get(&sample).unwrap_err();
        assert!(matches!(err, PathError::ChannelComponent { .. }));

        let chan = Chan::<i32>::new(1);
        sample.chan = chan.sender();
        let err = Path::new("chan.1").get(&sample).unwrap_err();
        assert!(matches!(err, PathError::ChannelDirection { .. }));

        Path::new("chan").set(&mut sample, 4_i32).unwrap();
        assert_eq!(chan.recv(), Some(4));

        let err = Path::new("chan").set(&mut sample, "x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidType);
    }

    #[test]
    fn json_documents() {
        let mut doc = json!({ "data": { "foo": "bar", "blah": ["bleh", "bloh"] } });

        assert_eq!(Path::new("data.foo").read::<String>(&doc).unwrap(), "bar");
        let item = Path::new("data.blah.0").get(&doc).unwrap();
        assert_eq!(item.downcast_ref::<serde_json::Value>(), Some(&json!("bleh")));

        let mut all: Vec<String> = Vec::new();
        Path::new("data.blah.*").read_all(&doc, &mut all).unwrap();
        assert_eq!(all, ["bleh", "bloh"]);

        Path::new("data.blah.3").set(&mut doc, "new").unwrap();
        Path::new("data.fresh.deep").set(&mut doc, 1_u8).unwrap();
        assert_eq!(
            doc,
            json!({
                "data": {
                    "foo": "bar",
                    "blah": ["bleh", "bloh", null, "new"],
                    "fresh": { "deep": 1 },
                }
            })
        );

        let err = Path::new("data").read::<i32>(&doc).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidType);
        let err = Path::new("data.blah.2").read::<i32>(&doc).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Nil);
    }

    #[test]
    fn read_all_numbers() {
        let doc = json!({ "a": [1, 2, 3] });
        let mut values: Vec<u64> = Vec::new();
        Path::new("a.*").read_all(&doc, &mut values).unwrap();
        assert_eq!(values, [1, 2, 3]);

        let doc = json!({ "a": { "x": 10 } });
        assert_eq!(Path::new("a.x").read::<i32>(&doc).unwrap(), 10);
    }

    #[test]
    fn set_all_assigns_each_match() {
        let mut sample = Sample {
            list: vec![1, 2, 3],
            ..Default::default()
        };
        sample.boxed.insert("a".into(), Box::default());
        sample.boxed.insert("b".into(), Box::default());

        Path::new("list.*").set_all(&mut sample, 0_i64).unwrap();
        assert_eq!(sample.list, [0, 0, 0]);

        Path::new("boxed.*.x").set_all(&mut sample, 1_i32).unwrap();
        assert!(sample.boxed.values().all(|point| point.x == 1));
    }

    #[derive(Reflect, Default)]
    struct Mixed {
        first: Point,
        second: Option<Point>,
        count: u8,
        last: Point,
    }

    #[test]
    fn set_all_keeps_earlier_matches_on_error() {
        let mut mixed = Mixed::default();
        let err = Path::new("*.x").set_all(&mut mixed, 4_i32).unwrap_err();
        assert!(matches!(err, PathError::PrematureEnd { .. }));
        assert_eq!(err.kind(), ErrorKind::Structural);

        assert_eq!(mixed.first, Point { x: 4, y: 0 });
        assert_eq!(mixed.second, Some(Point { x: 4, y: 0 }));
        assert_eq!(mixed.count, 0);
        assert_eq!(mixed.last, Point::default());
    }

    #[test]
    fn types_of_matches() {
        let sample = Sample::default();
        assert!(Path::new("list").type_of(&sample).unwrap().type_is::<Vec<i64>>());
        assert!(Path::new("sum").type_of(&sample).unwrap().type_is::<Func>());
        assert!(Path::new("opt.x").type_of(&sample).unwrap_err().is_missing());
    }

    #[test]
    fn textual_paths() {
        let mut sample = Sample::default();
        sample.set_at("list.1", 4_i64).unwrap();
        sample.set_all_at("list.*", 2_i64).unwrap();
        assert_eq!(sample.read_at::<i64>("sum.()").unwrap(), 4);
        assert_eq!(sample.get_all_at("list.*").unwrap().len(), 2);

        let mut values: Vec<i64> = Vec::new();
        sample.read_all_at("list.*", &mut values).unwrap();
        assert_eq!(values, [2, 2]);
        assert!(sample.type_at("n").unwrap().type_is::<i32>());
        assert!(sample.get_at("n").is_ok());
    }
}
