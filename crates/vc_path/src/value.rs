use vc_reflect::Reflect;
use vc_reflect::info::{MethodInfo, ReflectKind, TypeInfo, Typed};
use vc_reflect::ops::{Func, Function, List, Map, Pointer, ReflectMut, ReflectRef, Stream, Struct};

// -----------------------------------------------------------------------------
// Node

/// A borrowed value, shared or exclusive.
///
/// Exclusive nodes are addressable: they can be assigned in place.
pub enum Node<'a, T: ?Sized + 'a> {
    Ref(&'a T),
    Mut(&'a mut T),
}

impl<'a, T: ?Sized + 'a> Node<'a, T> {
    /// Returns a shared reference to the value.
    #[inline]
    pub fn get(&self) -> &T {
        match self {
            Self::Ref(value) => *value,
            Self::Mut(value) => &**value,
        }
    }

    /// Returns a mutable reference to the value if the node is exclusive.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Ref(_) => None,
            Self::Mut(value) => Some(&mut **value),
        }
    }

    /// Returns `true` if the node is exclusive.
    #[inline]
    pub fn is_mut(&self) -> bool {
        matches!(self, Self::Mut(_))
    }
}

macro_rules! impl_reborrow {
    ($($name:ident),*) => {$(
        impl<'a> Node<'a, dyn $name> {
            /// Borrows the node for a shorter lifetime.
            #[inline]
            pub fn reborrow(&mut self) -> Node<'_, dyn $name> {
                match self {
                    Self::Ref(value) => {
                        let value: &dyn $name = *value;
                        Node::Ref(value)
                    }
                    Self::Mut(value) => {
                        let value: &mut dyn $name = &mut **value;
                        Node::Mut(value)
                    }
                }
            }
        }
    )*};
}

impl_reborrow!(Reflect, Struct, List, Map, Pointer);

impl<'a> Node<'a, dyn Struct> {
    pub(crate) fn upcast(self) -> Node<'a, dyn Reflect> {
        match self {
            Self::Ref(value) => {
                let value: &dyn Reflect = value;
                Node::Ref(value)
            }
            Self::Mut(value) => {
                let value: &mut dyn Reflect = value;
                Node::Mut(value)
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Value

/// A value reached by a path.
///
/// Either a reflected value, or a method bound to its receiver. Bound
/// methods have no storage of their own; they are values of kind
/// [`ReflectKind::Func`].
pub enum Value<'a> {
    Node(Node<'a, dyn Reflect>),
    Method(Node<'a, dyn Reflect>, &'static MethodInfo),
}

impl<'a> Value<'a> {
    #[inline]
    pub(crate) fn shared(value: &'a dyn Reflect) -> Self {
        Self::Node(Node::Ref(value))
    }

    #[inline]
    pub(crate) fn exclusive(value: &'a mut dyn Reflect) -> Self {
        Self::Node(Node::Mut(value))
    }

    /// Returns the shape kind.
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Node(node) => node.get().reflect_kind(),
            Self::Method(..) => ReflectKind::Func,
        }
    }

    /// Returns the type information.
    ///
    /// Bound methods report the type of [`Func`].
    pub fn type_info(&self) -> &'static TypeInfo {
        match self {
            Self::Node(node) => node.get().reflect_type_info(),
            Self::Method(..) => Func::type_info(),
        }
    }

    /// Returns `true` if the value can be assigned in place.
    #[inline]
    pub fn is_addressable(&self) -> bool {
        matches!(self, Self::Node(Node::Mut(_)))
    }

    /// Returns `true` for nil pointers, functions and streams.
    pub fn is_nil(&self) -> bool {
        match self {
            Self::Node(node) => is_nil(node.get()),
            Self::Method(..) => false,
        }
    }
}

pub(crate) fn is_nil(value: &dyn Reflect) -> bool {
    match value.reflect_ref() {
        ReflectRef::Pointer(value) => value.is_null(),
        ReflectRef::Func(value) => value.is_nil(),
        ReflectRef::Stream(value) => value.is_nil(),
        _ => false,
    }
}

// -----------------------------------------------------------------------------
// Shape

/// A node seen through the trait of its kind.
pub(crate) enum Shape<'a> {
    Struct(Node<'a, dyn Struct>),
    List(Node<'a, dyn List>),
    Map(Node<'a, dyn Map>),
    Pointer(Node<'a, dyn Pointer>),
    Func(&'a dyn Function),
    Stream(&'a dyn Stream),
    Opaque(&'a dyn Reflect),
}

impl<'a> Shape<'a> {
    pub(crate) fn of(node: Node<'a, dyn Reflect>) -> Self {
        match node {
            Node::Ref(value) => match value.reflect_ref() {
                ReflectRef::Struct(value) => Self::Struct(Node::Ref(value)),
                ReflectRef::List(value) => Self::List(Node::Ref(value)),
                ReflectRef::Map(value) => Self::Map(Node::Ref(value)),
                ReflectRef::Pointer(value) => Self::Pointer(Node::Ref(value)),
                ReflectRef::Func(value) => Self::Func(value),
                ReflectRef::Stream(value) => Self::Stream(value),
                ReflectRef::Opaque(value) => Self::Opaque(value),
            },
            Node::Mut(value) => match value.reflect_mut() {
                ReflectMut::Struct(value) => Self::Struct(Node::Mut(value)),
                ReflectMut::List(value) => Self::List(Node::Mut(value)),
                ReflectMut::Map(value) => Self::Map(Node::Mut(value)),
                ReflectMut::Pointer(value) => Self::Pointer(Node::Mut(value)),
                ReflectMut::Func(value) => Self::Func(value),
                ReflectMut::Stream(value) => Self::Stream(value),
                ReflectMut::Opaque(value) => Self::Opaque(value),
            },
        }
    }
}
