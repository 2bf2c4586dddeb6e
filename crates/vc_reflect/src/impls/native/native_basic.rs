use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, Typed};

macro_rules! impl_native_basic {
    ($($ty:ty),* $(,)?) => {$(
        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
            }
        }

        impl crate::Reflect for $ty {
            crate::impls::impl_simple_type_reflect!();
        }
    )*};
}

impl_native_basic!(u8, u16, u32, u64, u128, usize);
impl_native_basic!(i8, i16, i32, i64, i128, isize);
impl_native_basic!(f32, f64, bool, char, ());

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::format;

    use crate::Reflect;
    use crate::info::{ReflectKind, Typed};

    #[test]
    fn scalars_are_opaque() {
        assert_eq!(3_u8.reflect_kind(), ReflectKind::Opaque);
        assert_eq!(<f64>::type_info().type_name(), "f64");
        assert_eq!(<()>::type_info().type_name(), "()");
    }

    #[test]
    fn set_is_type_checked() {
        let mut value = 1_i64;
        assert!(value.set(Box::new(2_i64)).is_ok());
        assert!(value.set(Box::new(2_i32)).is_err());
        assert_eq!(value, 2);
        assert_eq!(format!("{:?}", value.as_reflect()), "2");
    }
}
