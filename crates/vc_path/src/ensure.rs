use alloc::string::String;

use vc_reflect::ops::ReflectMut;

use crate::PathError;
use crate::context::Context;
use crate::value::{Value, is_nil};

/// Makes sure a nil value can be traversed by the rest of the path.
///
/// A nil value ending the path is left alone. Otherwise, without
/// `create_if_missing` the path is [`Missing`](PathError::Missing);
/// with it the value is filled in place: pointers get a default
/// pointee and streams are opened with a capacity of one.
pub(crate) fn ensure(
    value: &mut Value<'_>,
    tail: &[String],
    ctx: &Context<'_>,
) -> Result<(), PathError> {
    let Value::Node(node) = value else {
        return Ok(());
    };
    if tail.is_empty() || !is_nil(node.get()) {
        return Ok(());
    }
    if !ctx.creates_missing() {
        return Err(PathError::Missing {
            path: ctx.head.clone(),
        });
    }

    let type_path = node.get().reflect_type_info().type_path();
    let Some(target) = node.get_mut() else {
        return Err(PathError::NotAddressable {
            path: ctx.head.clone(),
        });
    };

    let created = match target.reflect_mut() {
        ReflectMut::Pointer(pointer) => pointer.fill_default(),
        ReflectMut::Stream(stream) => {
            stream.open(1);
            true
        }
        _ => false,
    };
    if !created {
        return Err(PathError::CannotCreate {
            path: ctx.head.clone(),
            type_path,
        });
    }

    log::trace!("created `{type_path}` at `{}`", ctx.head);
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    use vc_reflect::ops::{Chan, Dyn};

    use super::ensure;
    use crate::PathError;
    use crate::context::Context;
    use crate::value::Value;

    fn tail(components: &[&str]) -> Vec<String> {
        components.iter().map(ToString::to_string).collect()
    }

    fn creating() -> Context<'static> {
        Context::new(|_, _| Ok(true)).create_if_missing(true)
    }

    #[test]
    fn opens_nil_streams_with_one_slot() {
        let mut chan = Chan::<u8>::nil();
        ensure(&mut Value::exclusive(&mut chan), &tail(&["1"]), &creating()).unwrap();
        assert_eq!(chan.capacity(), Some(1));

        chan.send(4).unwrap();
        assert_eq!(chan.recv(), Some(4));
    }

    #[test]
    fn fills_nil_pointers() {
        let mut opt: Option<Vec<u8>> = None;
        ensure(&mut Value::exclusive(&mut opt), &tail(&["0"]), &creating()).unwrap();
        assert_eq!(opt, Some(vec![]));
    }

    #[test]
    fn leaves_nil_at_the_end() {
        let mut opt: Option<u8> = None;
        ensure(&mut Value::exclusive(&mut opt), &[], &creating()).unwrap();
        assert_eq!(opt, None);
    }

    #[test]
    fn missing_without_creation() {
        let mut chan = Chan::<u8>::nil();
        let ctx = Context::new(|_, _| Ok(true));
        let err = ensure(&mut Value::exclusive(&mut chan), &tail(&["1"]), &ctx).unwrap_err();
        assert!(err.is_missing());
        assert!(chan.is_nil());
    }

    #[test]
    fn refuses_what_cannot_be_filled() {
        let mut any: Dyn = Dyn::default();
        let err = ensure(&mut Value::exclusive(&mut any), &tail(&["x"]), &creating()).unwrap_err();
        assert!(matches!(err, PathError::CannotCreate { .. }));

        let opt: Option<u8> = None;
        let err = ensure(&mut Value::shared(&opt), &tail(&["x"]), &creating()).unwrap_err();
        assert!(matches!(err, PathError::NotAddressable { .. }));
    }
}
