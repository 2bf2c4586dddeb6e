use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use parking_lot::Mutex;
use vc_reflect::Reflect;
use vc_reflect::info::{CallResult, MethodInfo, ReflectKind, Signature, TypeInfo};
use vc_reflect::ops::{CallError, Func, ReflectRef, Stream};

use crate::value::{Node, Value};
use crate::{Path, PathError};

/// The function called for every value matched by a path.
///
/// Returns whether the traversal should look for more matches.
pub type Visitor<'f> = dyn FnMut(&Path, &mut Visit<'_, '_>) -> Result<bool, PathError> + 'f;

// -----------------------------------------------------------------------------
// Frame

/// A value on the ancestor stack.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    kind: ReflectKind,
    info: &'static TypeInfo,
    addressable: bool,
}

impl Frame {
    pub(crate) fn of(value: &Value<'_>) -> Self {
        Self {
            kind: value.kind(),
            info: value.type_info(),
            addressable: value.is_addressable(),
        }
    }

    /// Returns the shape kind of the value.
    #[inline]
    pub fn kind(&self) -> ReflectKind {
        self.kind
    }

    /// Returns the type information of the value.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        self.info
    }

    /// Returns `true` if the value could be modified in place.
    #[inline]
    pub fn is_addressable(&self) -> bool {
        self.addressable
    }
}

// -----------------------------------------------------------------------------
// Context

/// The state of a traversal.
///
/// Holds the visitor, the options of the traversal, and the stack of
/// values being traversed, innermost last. A context drives a single
/// traversal at a time.
///
/// # Examples
///
/// ```
/// use vc_path::{Context, Path};
///
/// let list = vec![1_u8, 2, 3];
/// let mut matched = Vec::new();
///
/// let mut ctx = Context::new(|path, _visit| {
///     matched.push(path.to_string());
///     Ok(true)
/// });
/// Path::new("*").apply(&list, &mut ctx).unwrap();
/// drop(ctx);
///
/// assert_eq!(matched, ["0", "1", "2"]);
/// ```
pub struct Context<'f> {
    visitor: Box<Visitor<'f>>,
    create_if_missing: bool,
    pub(crate) stop: bool,
    pub(crate) head: Path,
    frames: Vec<Frame>,
    write_back: Option<Box<dyn Reflect>>,
}

impl<'f> Context<'f> {
    /// Creates a context calling `visitor` for every match.
    pub fn new(
        visitor: impl FnMut(&Path, &mut Visit<'_, '_>) -> Result<bool, PathError> + 'f,
    ) -> Self {
        Self {
            visitor: Box::new(visitor),
            create_if_missing: false,
            stop: false,
            head: Path::root(),
            frames: Vec::new(),
            write_back: None,
        }
    }

    /// Fills in missing components instead of failing with
    /// [`PathError::Missing`].
    ///
    /// Nil pointers get a default pointee, lists grow up to the requested
    /// index, missing map keys are inserted and nil streams are opened.
    /// Nil functions and interfaces cannot be created.
    #[inline]
    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }

    /// Returns `true` if missing components are filled in.
    #[inline]
    pub fn creates_missing(&self) -> bool {
        self.create_if_missing
    }

    /// Returns `true` once the visitor asked to stop.
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stop
    }

    /// Returns the path matched so far.
    #[inline]
    pub fn head(&self) -> &Path {
        &self.head
    }

    /// Resets the traversal state, keeping the visitor and the options.
    pub(crate) fn reset(&mut self) {
        self.stop = false;
        self.head = Path::root();
        self.frames.clear();
        self.write_back = None;
    }

    #[inline]
    pub(crate) fn push(&mut self, value: &Value<'_>) {
        self.frames.push(Frame::of(value));
    }

    #[inline]
    pub(crate) fn pop(&mut self) {
        self.frames.pop();
    }

    /// Runs `f` with `component` appended to the matched path.
    pub(crate) fn descend<R>(&mut self, component: &str, f: impl FnOnce(&mut Self) -> R) -> R {
        self.head.push(component);
        let result = f(self);
        self.head.pop();
        result
    }

    /// Takes the value handed back by the last child.
    #[inline]
    pub(crate) fn take_write_back(&mut self) -> Option<Box<dyn Reflect>> {
        self.write_back.take()
    }

    pub(crate) fn visit(&mut self, value: &mut Value<'_>) -> Result<(), PathError> {
        let Self {
            visitor,
            head,
            frames,
            write_back,
            ..
        } = self;

        let mut visit = Visit {
            value,
            frames,
            write_back,
        };
        let result = visitor(head, &mut visit);
        self.stop = !matches!(result, Ok(true));
        result.map(|_| ())
    }
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("create_if_missing", &self.create_if_missing)
            .field("stop", &self.stop)
            .field("head", &self.head)
            .field("frames", &self.frames)
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// Visit

/// The visitor's view of a matched value.
pub struct Visit<'v, 'a> {
    value: &'v mut Value<'a>,
    frames: &'v [Frame],
    write_back: &'v mut Option<Box<dyn Reflect>>,
}

impl<'v, 'a> Visit<'v, 'a> {
    /// Returns the matched value, `None` for a bound method.
    pub fn get(&self) -> Option<&dyn Reflect> {
        match &*self.value {
            Value::Node(node) => Some(node.get()),
            Value::Method(..) => None,
        }
    }

    /// Returns the matched value if it can be modified in place.
    pub fn get_mut(&mut self) -> Option<&mut dyn Reflect> {
        match &mut *self.value {
            Value::Node(node) => node.get_mut(),
            Value::Method(..) => None,
        }
    }

    /// Returns an owned copy of the matched value.
    ///
    /// A bound method becomes a [`Func`] calling the method on a copy of
    /// its receiver.
    pub fn to_owned(&self) -> Result<Box<dyn Reflect>, PathError> {
        match &*self.value {
            Value::Node(node) => Ok(node.get().reflect_clone()?),
            Value::Method(receiver, method) => {
                let method: &'static MethodInfo = *method;
                let receiver = Arc::new(Mutex::new(receiver.get().reflect_clone()?));
                let func = Func::from_raw(method.signature().clone(), move |args| {
                    let mut receiver = receiver.lock();
                    method.call_mut(&mut **receiver, args)
                });
                Ok(Box::new(func))
            }
        }
    }

    /// Returns the shape kind of the matched value.
    #[inline]
    pub fn kind(&self) -> ReflectKind {
        self.value.kind()
    }

    /// Returns the type information of the matched value.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        self.value.type_info()
    }

    /// Returns `true` if the matched value can be modified in place.
    #[inline]
    pub fn is_addressable(&self) -> bool {
        self.value.is_addressable()
    }

    /// Returns `true` if the matched value is nil.
    #[inline]
    pub fn is_nil(&self) -> bool {
        self.value.is_nil()
    }

    /// Returns the number of values on the ancestor stack, the matched
    /// value included.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns the value containing the matched value.
    ///
    /// Pointers count as containers: the parent of a pointee is its pointer.
    pub fn parent(&self) -> Option<&Frame> {
        self.frames.len().checked_sub(2).map(|index| &self.frames[index])
    }

    /// Returns `true` if the parent is a map able to take a replacement
    /// of the matched value.
    pub fn can_write_back(&self) -> bool {
        self.parent()
            .is_some_and(|parent| parent.kind() == ReflectKind::Map && parent.is_addressable())
    }

    /// Hands a replacement of the matched value to its parent map, which
    /// stores it under the matched key once the visitor returns.
    ///
    /// Returns the value back if the parent cannot take it.
    pub fn write_back(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        if !self.can_write_back() {
            return Err(value);
        }
        *self.write_back = Some(value);
        Ok(())
    }

    /// Returns the signature of the matched callable.
    pub fn signature(&self) -> Option<&Signature> {
        match &*self.value {
            Value::Node(node) => match node.get().reflect_ref() {
                ReflectRef::Func(func) => func.signature(),
                _ => None,
            },
            Value::Method(_, method) => Some(method.signature()),
        }
    }

    /// Calls the matched callable.
    ///
    /// Methods needing a mutable receiver can only be called on
    /// addressable receivers.
    pub fn call(&mut self, args: Vec<Box<dyn Reflect>>) -> CallResult {
        match &mut *self.value {
            Value::Node(node) => match node.get().reflect_ref() {
                ReflectRef::Func(func) => func.call(args),
                _ => Err(CallError::Nil),
            },
            Value::Method(Node::Ref(receiver), method) => method.call_ref(*receiver, args),
            Value::Method(Node::Mut(receiver), method) => method.call_mut(&mut **receiver, args),
        }
    }

    /// Returns the matched stream.
    pub fn stream(&self) -> Option<&dyn Stream> {
        match &*self.value {
            Value::Node(node) => match node.get().reflect_ref() {
                ReflectRef::Stream(stream) => Some(stream),
                _ => None,
            },
            Value::Method(..) => None,
        }
    }
}

impl fmt::Debug for Visit<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Visit")
            .field("kind", &self.kind())
            .field("type", &self.type_info().type_path())
            .field("addressable", &self.is_addressable())
            .field("depth", &self.depth())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;
    use std::collections::HashMap;

    use vc_reflect::derive::Reflect;
    use vc_reflect::info::ReflectKind;

    use crate::{Context, Path};

    #[derive(Reflect, Default, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Reflect, Default)]
    struct Inventory {
        items: HashMap<String, Point>,
        list: Vec<Point>,
    }

    fn inventory() -> Inventory {
        Inventory {
            items: HashMap::from([("a".into(), Point { x: 1, y: 2 })]),
            list: vec![Point { x: 3, y: 4 }],
        }
    }

    #[test]
    fn map_values_are_written_back() {
        let mut inventory = inventory();
        let mut ctx = Context::new(|path, visit| {
            assert_eq!(path.to_string(), "items.a");
            assert_eq!(visit.depth(), 3);
            assert_eq!(visit.kind(), ReflectKind::Struct);
            assert!(!visit.is_addressable());
            assert!(visit.get_mut().is_none());

            let parent = visit.parent().unwrap();
            assert_eq!(parent.kind(), ReflectKind::Map);
            assert!(parent.is_addressable());
            assert!(visit.can_write_back());

            let mut point = visit.to_owned()?;
            point.downcast_mut::<Point>().unwrap().x = 7;
            assert!(visit.write_back(point).is_ok());
            Ok(true)
        });
        Path::new("items.a").apply_mut(&mut inventory, &mut ctx).unwrap();
        drop(ctx);

        assert_eq!(inventory.items["a"], Point { x: 7, y: 2 });
    }

    #[test]
    fn fields_of_map_values_cannot_write_back() {
        let mut inventory = inventory();
        let mut ctx = Context::new(|_, visit| {
            assert_eq!(visit.depth(), 4);
            assert_eq!(visit.parent().unwrap().kind(), ReflectKind::Struct);
            assert!(!visit.can_write_back());
            assert!(visit.write_back(Box::new(9_i32)).is_err());
            Ok(true)
        });
        Path::new("items.a.x").apply_mut(&mut inventory, &mut ctx).unwrap();
        drop(ctx);

        assert_eq!(inventory.items["a"].x, 1);
    }

    #[test]
    fn list_items_are_modified_in_place() {
        let mut inventory = inventory();
        let mut visited = Vec::new();
        let mut ctx = Context::new(|path, visit| {
            assert!(visit.is_addressable());
            assert!(!visit.can_write_back());
            *visit.get_mut().unwrap().downcast_mut::<i32>().unwrap() = 5;
            visited.push(path.to_string());
            Ok(true)
        });
        Path::new("list.*.*").apply_mut(&mut inventory, &mut ctx).unwrap();
        drop(ctx);

        assert_eq!(visited, ["list.0.x", "list.0.y"]);
        assert_eq!(inventory.list, [Point { x: 5, y: 5 }]);
    }

    #[test]
    fn contexts_are_reusable() {
        let inventory = inventory();
        let mut count = 0;
        let mut ctx = Context::new(|_, _| {
            count += 1;
            Ok(false)
        });
        let path = Path::new("list.*");
        path.apply(&inventory, &mut ctx).unwrap();
        path.apply(&inventory, &mut ctx).unwrap();
        assert!(ctx.head().is_empty());
        drop(ctx);
        assert_eq!(count, 2);
    }
}
