//! The traversal engine.
//!
//! [`apply`] walks a value component by component. Each shape kind has
//! its adapter deciding what a component means for it:
//!
//! | Kind | Components |
//! |---|---|
//! | `Struct` | field name, method name, `*` |
//! | `List` | index, `*` |
//! | `Map` | key, `*` |
//! | `Pointer` | method name of the pointee, else seen through |
//! | `Func` | `()` |
//! | `Stream` | `1`, `*` |
//!
//! Fan-outs skip children that are [`Missing`](PathError::Missing) and
//! abort on any other error.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use vc_reflect::Reflect;
use vc_reflect::info::{MethodInfo, ReflectKind};
use vc_reflect::ops::{Function, List, Map, Pointer, ReflectRef, Stream, Struct};

use crate::PathError;
use crate::context::Context;
use crate::ensure::ensure;
use crate::path::{CALL, RECV_ONE, WILDCARD};
use crate::value::{Node, Shape, Value};

/// Applies the `tail` of a path to `value`, calling the visitor of `ctx`
/// on every match.
pub(crate) fn apply(
    mut value: Value<'_>,
    tail: &[String],
    ctx: &mut Context<'_>,
) -> Result<(), PathError> {
    ensure(&mut value, tail, ctx)?;

    ctx.push(&value);
    let result = match tail.split_first() {
        None => ctx.visit(&mut value),
        Some((mid, tail)) => dispatch(value, mid, tail, ctx),
    };
    ctx.pop();

    result
}

fn dispatch(
    value: Value<'_>,
    mid: &str,
    tail: &[String],
    ctx: &mut Context<'_>,
) -> Result<(), PathError> {
    let node = match value {
        Value::Node(node) => node,
        Value::Method(receiver, method) => {
            return apply_to_method(receiver, method, mid, tail, ctx);
        }
    };

    match Shape::of(node) {
        Shape::Struct(node) => apply_to_struct(node, mid, tail, ctx),
        Shape::List(node) => apply_to_list(node, mid, tail, ctx),
        Shape::Map(node) => apply_to_map(node, mid, tail, ctx),
        Shape::Pointer(node) => apply_to_pointer(node, mid, tail, ctx),
        Shape::Func(func) => apply_to_func(func, mid, tail, ctx),
        Shape::Stream(stream) => apply_to_stream(stream, mid, tail, ctx),
        Shape::Opaque(value) => Err(PathError::PrematureEnd {
            path: ctx.head.clone(),
            component: mid.to_string(),
            kind: ReflectKind::Opaque,
            type_path: value.reflect_type_info().type_path(),
        }),
    }
}

/// Swallows [`Missing`](PathError::Missing) errors of a fan-out child.
fn skip_missing(
    ctx: &Context<'_>,
    component: &str,
    result: Result<(), PathError>,
) -> Result<(), PathError> {
    match result {
        Err(err) if err.is_missing() => {
            log::debug!("skipping `{component}` at `{}`: {err}", ctx.head);
            Ok(())
        }
        result => result,
    }
}

// -----------------------------------------------------------------------------
// Struct

fn apply_to_struct(
    mut node: Node<'_, dyn Struct>,
    mid: &str,
    tail: &[String],
    ctx: &mut Context<'_>,
) -> Result<(), PathError> {
    if mid != WILDCARD {
        return apply_to_member(node, mid, tail, ctx);
    }

    for index in 0..node.get().field_len() {
        if ctx.stop {
            break;
        }
        let Some(name) = node.get().name_at(index).map(String::from) else {
            continue;
        };
        let result = apply_to_member(node.reborrow(), &name, tail, ctx);
        skip_missing(ctx, &name, result)?;
    }
    Ok(())
}

fn apply_to_member(
    mut node: Node<'_, dyn Struct>,
    mid: &str,
    tail: &[String],
    ctx: &mut Context<'_>,
) -> Result<(), PathError> {
    let field = match &mut node {
        Node::Ref(value) => value.field(mid).map(Value::shared),
        Node::Mut(value) => value.field_mut(mid).map(Value::exclusive),
    };
    if let Some(field) = field {
        return ctx.descend(mid, |ctx| apply(field, tail, ctx));
    }

    let Some(method) = node.get().method(mid) else {
        return Err(PathError::NoField {
            path: ctx.head.clone(),
            component: mid.to_string(),
            type_path: node.get().reflect_type_info().type_path(),
        });
    };
    let method = Value::Method(node.upcast(), method);
    ctx.descend(mid, |ctx| apply(method, tail, ctx))
}

// -----------------------------------------------------------------------------
// List

fn apply_to_list(
    mut node: Node<'_, dyn List>,
    mid: &str,
    tail: &[String],
    ctx: &mut Context<'_>,
) -> Result<(), PathError> {
    if mid != WILDCARD {
        let index = parse_index(mid, ctx)?;
        return apply_to_index(node, index, mid, tail, ctx);
    }

    for index in 0..node.get().len() {
        if ctx.stop {
            break;
        }
        let component = index.to_string();
        let result = apply_to_index(node.reborrow(), index, &component, tail, ctx);
        skip_missing(ctx, &component, result)?;
    }
    Ok(())
}

/// Parses a sequence index, limited to the `i32` range.
fn parse_index(mid: &str, ctx: &Context<'_>) -> Result<usize, PathError> {
    mid.parse::<i32>()
        .ok()
        .and_then(|index| usize::try_from(index).ok())
        .ok_or_else(|| PathError::InvalidIndex {
            path: ctx.head.clone(),
            component: mid.to_string(),
        })
}

fn apply_to_index(
    mut node: Node<'_, dyn List>,
    index: usize,
    mid: &str,
    tail: &[String],
    ctx: &mut Context<'_>,
) -> Result<(), PathError> {
    if index >= node.get().len() {
        grow(&mut node, index, mid, ctx)?;
    }

    let item = match node {
        Node::Ref(list) => list.get(index).map(Value::shared),
        Node::Mut(list) => list.get_mut(index).map(Value::exclusive),
    };
    let Some(item) = item else {
        return Err(PathError::Missing {
            path: ctx.head.join(mid),
        });
    };
    ctx.descend(mid, |ctx| apply(item, tail, ctx))
}

/// Grows a list so that `index` is in range.
fn grow(
    node: &mut Node<'_, dyn List>,
    index: usize,
    mid: &str,
    ctx: &Context<'_>,
) -> Result<(), PathError> {
    if !ctx.creates_missing() {
        return Err(PathError::Missing {
            path: ctx.head.join(mid),
        });
    }

    let type_path = node.get().reflect_type_info().type_path();
    let Some(list) = node.get_mut() else {
        return Err(PathError::NotAddressable {
            path: ctx.head.join(mid),
        });
    };
    if list.is_fixed() {
        return Err(PathError::FixedSize {
            path: ctx.head.clone(),
            type_path,
        });
    }
    if !list.grow_to(index + 1) {
        return Err(PathError::CannotGrow {
            path: ctx.head.clone(),
            type_path,
            len: index + 1,
        });
    }

    log::trace!("grew `{type_path}` to {} at `{}`", index + 1, ctx.head);
    Ok(())
}

// -----------------------------------------------------------------------------
// Map

fn apply_to_map(
    mut node: Node<'_, dyn Map>,
    mid: &str,
    tail: &[String],
    ctx: &mut Context<'_>,
) -> Result<(), PathError> {
    if !node.get().has_string_keys() {
        let info = node.get().reflect_type_info();
        return Err(PathError::UnsupportedKey {
            path: ctx.head.clone(),
            key: info.as_map().map_or("?", |map| map.key_info().type_path()),
            type_path: info.type_path(),
        });
    }

    if mid != WILDCARD {
        return apply_to_entry(node, mid, tail, ctx);
    }

    let keys = node.get().keys();
    for key in keys {
        if ctx.stop {
            break;
        }
        let result = apply_to_entry(node.reborrow(), &key, tail, ctx);
        skip_missing(ctx, &key, result)?;
    }
    Ok(())
}

fn apply_to_entry(
    node: Node<'_, dyn Map>,
    key: &str,
    tail: &[String],
    ctx: &mut Context<'_>,
) -> Result<(), PathError> {
    let map = match node {
        Node::Ref(map) => {
            let Some(value) = map.get(key) else {
                return Err(PathError::Missing {
                    path: ctx.head.join(key),
                });
            };
            return ctx.descend(key, |ctx| apply(Value::shared(value), tail, ctx));
        }
        Node::Mut(map) => map,
    };

    if map.get(key).is_none() {
        if !ctx.creates_missing() {
            return Err(PathError::Missing {
                path: ctx.head.join(key),
            });
        }
        if map.insert_default(key).is_none() {
            return Err(PathError::CannotCreate {
                path: ctx.head.join(key),
                type_path: map.reflect_type_info().type_path(),
            });
        }
        log::trace!("inserted `{key}` at `{}`", ctx.head);
    }

    let result = match map.get_mut(key) {
        Some(value) => {
            let value = if has_value_semantics(value) {
                Value::shared(value)
            } else {
                Value::exclusive(value)
            };
            ctx.descend(key, |ctx| apply(value, tail, ctx))
        }
        None => Err(PathError::Missing {
            path: ctx.head.join(key),
        }),
    };

    if let Some(value) = ctx.take_write_back() {
        log::trace!("writing `{key}` back at `{}`", ctx.head);
        store_entry(map, key, value)?;
    }
    result
}

/// Values copied in and out of maps rather than modified in place.
fn has_value_semantics(value: &dyn Reflect) -> bool {
    match value.reflect_ref() {
        ReflectRef::Struct(_) => true,
        ReflectRef::List(list) => list.is_fixed(),
        _ => false,
    }
}

fn store_entry(map: &mut dyn Map, key: &str, value: Box<dyn Reflect>) -> Result<(), PathError> {
    map.insert_boxed(key, value).map_err(|value| PathError::InvalidType {
        expected: map
            .reflect_type_info()
            .as_map()
            .map_or("?", |info| info.value_info().type_path()),
        found: value.reflect_type_info().type_path(),
    })
}

// -----------------------------------------------------------------------------
// Pointer

fn apply_to_pointer(
    node: Node<'_, dyn Pointer>,
    mid: &str,
    tail: &[String],
    ctx: &mut Context<'_>,
) -> Result<(), PathError> {
    let pointee = match node {
        Node::Ref(pointer) => pointer.pointee().map(Node::Ref),
        Node::Mut(pointer) => {
            // Shared pointees cannot be borrowed mutably.
            if pointer.pointee_mut().is_some() {
                pointer.pointee_mut().map(Node::Mut)
            } else {
                pointer.pointee().map(Node::Ref)
            }
        }
    };
    let Some(pointee) = pointee else {
        return Err(PathError::Missing {
            path: ctx.head.clone(),
        });
    };

    if let Some(method) = method_of(pointee.get(), mid) {
        let method = Value::Method(pointee, method);
        return ctx.descend(mid, |ctx| apply(method, tail, ctx));
    }

    // Pointers are transparent: the component applies to the pointee.
    let tail = prepend(mid, tail);
    apply(Value::Node(pointee), &tail, ctx)
}

fn method_of(value: &dyn Reflect, name: &str) -> Option<&'static MethodInfo> {
    match value.reflect_ref() {
        ReflectRef::Struct(value) => value.method(name),
        _ => None,
    }
}

fn prepend(mid: &str, tail: &[String]) -> Vec<String> {
    let mut path = Vec::with_capacity(tail.len() + 1);
    path.push(mid.to_string());
    path.extend_from_slice(tail);
    path
}

// -----------------------------------------------------------------------------
// Func

fn apply_to_func(
    func: &dyn Function,
    mid: &str,
    tail: &[String],
    ctx: &mut Context<'_>,
) -> Result<(), PathError> {
    expect_call(mid, func.signature().is_some_and(|sig| sig.is_getter()), ctx)?;

    let result = func
        .call(Vec::new())
        .map_err(|err| PathError::from_call(&ctx.head, err))?;
    apply_to_result(result, mid, tail, ctx)
}

fn apply_to_method(
    receiver: Node<'_, dyn Reflect>,
    method: &'static MethodInfo,
    mid: &str,
    tail: &[String],
    ctx: &mut Context<'_>,
) -> Result<(), PathError> {
    expect_call(mid, method.signature().is_getter(), ctx)?;

    let result = method
        .call_ref(receiver.get(), Vec::new())
        .map_err(|err| PathError::from_call(&ctx.head, err))?;
    apply_to_result(result, mid, tail, ctx)
}

fn expect_call(mid: &str, is_getter: bool, ctx: &Context<'_>) -> Result<(), PathError> {
    if mid != CALL {
        return Err(PathError::MissingCall {
            path: ctx.head.clone(),
            component: mid.to_string(),
        });
    }
    if !is_getter {
        return Err(PathError::InvalidSignature {
            path: ctx.head.clone(),
            component: ctx.head.last().unwrap_or_default().to_string(),
        });
    }
    Ok(())
}

/// Continues with the value returned by a getter.
///
/// Returned values are temporaries: they cannot be assigned.
fn apply_to_result(
    result: Option<Box<dyn Reflect>>,
    mid: &str,
    tail: &[String],
    ctx: &mut Context<'_>,
) -> Result<(), PathError> {
    let Some(result) = result else {
        return Err(PathError::InvalidSignature {
            path: ctx.head.clone(),
            component: mid.to_string(),
        });
    };
    ctx.descend(mid, |ctx| apply(Value::shared(&*result), tail, ctx))
}

// -----------------------------------------------------------------------------
// Stream

fn apply_to_stream(
    stream: &dyn Stream,
    mid: &str,
    tail: &[String],
    ctx: &mut Context<'_>,
) -> Result<(), PathError> {
    let direction = stream.direction();
    if !direction.can_recv() {
        return Err(PathError::ChannelDirection {
            path: ctx.head.clone(),
            direction,
        });
    }

    match mid {
        RECV_ONE => {
            let Some(item) = stream.recv() else {
                return Err(PathError::Missing {
                    path: ctx.head.join(mid),
                });
            };
            ctx.descend(mid, |ctx| apply(Value::shared(&*item), tail, ctx))
        }
        WILDCARD => {
            while !ctx.stop {
                let Some(item) = stream.recv() else {
                    break;
                };
                let result = ctx.descend(mid, |ctx| apply(Value::shared(&*item), tail, ctx));
                skip_missing(ctx, mid, result)?;
            }
            Ok(())
        }
        _ => Err(PathError::ChannelComponent {
            path: ctx.head.clone(),
            component: mid.to_string(),
        }),
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::sync::Arc;
    use alloc::vec;
    use alloc::vec::Vec;
    use std::collections::BTreeMap;

    use vc_reflect::derive::Reflect;

    use crate::{Context, ErrorKind, Path, PathError};

    #[derive(Reflect, Default, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Reflect, Default)]
    struct Shapes {
        list: Vec<i64>,
        shared: Arc<Point>,
        tags: BTreeMap<String, u8>,
    }

    fn shapes() -> Shapes {
        Shapes {
            list: vec![1, 2, 3],
            shared: Arc::new(Point { x: 1, y: 2 }),
            tags: BTreeMap::from([("a".into(), 1), ("b".into(), 2)]),
        }
    }

    #[test]
    fn stop_after_first_match() {
        let mut shapes = shapes();
        Path::new("list.*").set(&mut shapes, 9_i64).unwrap();
        assert_eq!(shapes.list, [9, 2, 3]);

        let first = Path::new("tags.*").get(&shapes).unwrap();
        assert_eq!(first.downcast_ref::<u8>(), Some(&1));

        for path in ["list.*", "tags.*", "*"] {
            let mut calls = 0;
            let mut ctx = Context::new(|_, _| {
                calls += 1;
                Ok(false)
            });
            Path::new(path).apply(&shapes, &mut ctx).unwrap();
            assert!(ctx.is_stopped());
            drop(ctx);
            assert_eq!(calls, 1, "{path}");
        }
    }

    #[test]
    fn visitor_errors_abort() {
        let shapes = shapes();
        let mut calls = 0;
        let mut ctx = Context::new(|path, _| {
            calls += 1;
            Err(PathError::Nil { path: path.clone() })
        });
        let err = Path::new("list.*").apply(&shapes, &mut ctx).unwrap_err();
        drop(ctx);
        assert_eq!(err.kind(), ErrorKind::Nil);
        assert_eq!(calls, 1);
    }

    #[test]
    fn shared_pointees_are_read_only() {
        let mut shapes = shapes();
        let other = Arc::clone(&shapes.shared);

        let err = Path::new("shared.x").set(&mut shapes, 5_i32).unwrap_err();
        assert!(matches!(err, PathError::NotAssignable { .. }));
        assert_eq!(Path::new("shared.x").read::<i32>(&shapes).unwrap(), 1);

        drop(other);
        Path::new("shared.x").set(&mut shapes, 5_i32).unwrap();
        assert_eq!(*shapes.shared, Point { x: 5, y: 2 });
    }

    #[test]
    fn indices_stay_in_range() {
        let mut shapes = shapes();
        for index in ["2147483648", "9223372036854775807", "-1", "x"] {
            let path = Path::from_components(["list", index]);
            let err = path.set(&mut shapes, 1_i64).unwrap_err();
            assert!(matches!(err, PathError::InvalidIndex { .. }), "{index}");
            assert_eq!(err.kind(), ErrorKind::Structural);
        }
        assert_eq!(shapes.list, [1, 2, 3]);

        assert!(Path::new("list.5").get(&shapes).unwrap_err().is_missing());
        Path::new("list.5").set(&mut shapes, 6_i64).unwrap();
        assert_eq!(shapes.list, [1, 2, 3, 0, 0, 6]);
    }
}
