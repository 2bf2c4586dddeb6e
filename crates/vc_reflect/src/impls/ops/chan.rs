use alloc::boxed::Box;

use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{StreamInfo, TypeInfo, Typed};
use crate::ops::{Chan, Direction, ReflectCloneError, Stream, StreamError};

impl<T: Reflect + Typed> Typed for Chan<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Stream(StreamInfo::new::<Self, T>()))
    }
}

impl<T: Reflect + Typed> Reflect for Chan<T> {
    crate::reflection::impl_reflect_cast_fn!(Stream);

    /// Clones the handle, the channel is shared.
    #[inline]
    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        Ok(Box::new(self.clone()))
    }

    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(self, f)
    }
}

impl<T: Reflect + Typed> Stream for Chan<T> {
    #[inline]
    fn direction(&self) -> Direction {
        Chan::direction(self)
    }

    #[inline]
    fn is_nil(&self) -> bool {
        Chan::is_nil(self)
    }

    fn recv(&self) -> Option<Box<dyn Reflect>> {
        Chan::recv(self).map(Reflect::into_boxed_reflect)
    }

    fn send(&self, value: Box<dyn Reflect>) -> Result<(), StreamError> {
        let value = value.take::<T>().map_err(|value| StreamError::ItemType {
            expected: T::type_info().type_path(),
            found: value.reflect_type_info().type_path(),
        })?;
        Chan::send(self, value)
    }

    fn open(&mut self, capacity: usize) {
        *self = Chan::new(capacity);
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use crate::ops::{Chan, Stream, StreamError};

    #[test]
    fn erased_send_and_recv() {
        let chan = Chan::<i32>::new(2);
        let stream: &dyn Stream = &chan;

        stream.send(Box::new(4_i32)).unwrap();
        assert!(matches!(
            stream.send(Box::new(4_u8)),
            Err(StreamError::ItemType { .. })
        ));

        let value = stream.recv().unwrap();
        assert_eq!(value.downcast_ref::<i32>(), Some(&4));
    }

    #[test]
    fn open_replaces_nil() {
        let mut chan = Chan::<i32>::nil();
        assert!(Stream::is_nil(&chan));

        Stream::open(&mut chan, 1);
        assert!(!Stream::is_nil(&chan));
        chan.send(1).unwrap();
        assert_eq!(chan.recv(), Some(1));
    }
}
