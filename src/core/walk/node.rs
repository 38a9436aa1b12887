//! The `Node` trait and its implementations for containers and scalars.

use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;

use super::Segment;
use crate::core::secret::Sealable;
use crate::core::validation::Validate;

/// A value the walker can traverse.
///
/// A container lists its direct children and nothing more. Whether a
/// value carries a capability is answered by the `as_*` accessors, which
/// default to `None`.
///
/// Structs normally get this impl from [`walkable!`](crate::walkable).
pub trait Node: Any {
    /// Direct children in traversal order.
    fn children(&self) -> Vec<(Segment, &dyn Node)> {
        Vec::new()
    }

    /// Direct children in traversal order, mutably.
    fn children_mut(&mut self) -> Vec<(Segment, &mut dyn Node)> {
        Vec::new()
    }

    /// Type-erased view, used for cross-field lookups from the walk root.
    fn as_any(&self) -> &dyn Any;

    fn as_sealable(&self) -> Option<&(dyn Sealable + 'static)> {
        None
    }

    fn as_sealable_mut(&mut self) -> Option<&mut (dyn Sealable + 'static)> {
        None
    }

    fn as_validate(&self) -> Option<&(dyn Validate + 'static)> {
        None
    }
}

/// Implement [`Node`] for a struct from its field list.
///
/// Fields are visited in the order given. `field as "name"` sets the path
/// segment to the field's serialization name. Capabilities the struct
/// implements are listed in brackets: `Seal` for
/// [`Sealable`](crate::core::secret::Sealable), `Validate` for
/// [`Validate`](crate::core::validation::Validate).
///
/// ```ignore
/// walkable!(Account [Validate] { name, username as "login", password });
/// ```
#[macro_export]
macro_rules! walkable {
    (@name $field:ident) => {
        stringify!($field)
    };
    (@name $field:ident as $alias:literal) => {
        $alias
    };
    (@cap Seal) => {
        fn as_sealable(&self) -> Option<&(dyn $crate::core::secret::Sealable + 'static)> {
            Some(self)
        }

        fn as_sealable_mut(
            &mut self,
        ) -> Option<&mut (dyn $crate::core::secret::Sealable + 'static)> {
            Some(self)
        }
    };
    (@cap Validate) => {
        fn as_validate(&self) -> Option<&(dyn $crate::core::validation::Validate + 'static)> {
            Some(self)
        }
    };
    ($ty:ident $([$($cap:ident),* $(,)?])? { $($field:ident $(as $alias:literal)?),* $(,)? }) => {
        impl $crate::core::walk::Node for $ty {
            fn children(
                &self,
            ) -> Vec<($crate::core::walk::Segment, &dyn $crate::core::walk::Node)> {
                vec![$(
                    (
                        $crate::core::walk::Segment::Field($crate::walkable!(@name $field $(as $alias)?)),
                        &self.$field as &dyn $crate::core::walk::Node,
                    )
                ),*]
            }

            fn children_mut(
                &mut self,
            ) -> Vec<($crate::core::walk::Segment, &mut dyn $crate::core::walk::Node)> {
                vec![$(
                    (
                        $crate::core::walk::Segment::Field($crate::walkable!(@name $field $(as $alias)?)),
                        &mut self.$field as &mut dyn $crate::core::walk::Node,
                    )
                ),*]
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            $($($crate::walkable!(@cap $cap);)*)?
        }
    };
}

// Option and Box are transparent: no path token, and a value's
// capabilities show through them. `None` has no capabilities and no
// children, so the walk skips it entirely.
impl<T: Node> Node for Option<T> {
    fn children(&self) -> Vec<(Segment, &dyn Node)> {
        match self {
            Some(inner) => inner.children(),
            None => Vec::new(),
        }
    }

    fn children_mut(&mut self) -> Vec<(Segment, &mut dyn Node)> {
        match self {
            Some(inner) => inner.children_mut(),
            None => Vec::new(),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_sealable(&self) -> Option<&(dyn Sealable + 'static)> {
        self.as_ref().and_then(|inner| inner.as_sealable())
    }

    fn as_sealable_mut(&mut self) -> Option<&mut (dyn Sealable + 'static)> {
        self.as_mut().and_then(|inner| inner.as_sealable_mut())
    }

    fn as_validate(&self) -> Option<&(dyn Validate + 'static)> {
        self.as_ref().and_then(|inner| inner.as_validate())
    }
}

impl<T: Node> Node for Box<T> {
    fn children(&self) -> Vec<(Segment, &dyn Node)> {
        (**self).children()
    }

    fn children_mut(&mut self) -> Vec<(Segment, &mut dyn Node)> {
        (**self).children_mut()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_sealable(&self) -> Option<&(dyn Sealable + 'static)> {
        (**self).as_sealable()
    }

    fn as_sealable_mut(&mut self) -> Option<&mut (dyn Sealable + 'static)> {
        (**self).as_sealable_mut()
    }

    fn as_validate(&self) -> Option<&(dyn Validate + 'static)> {
        (**self).as_validate()
    }
}

impl<T: Node> Node for Vec<T> {
    fn children(&self) -> Vec<(Segment, &dyn Node)> {
        self.iter()
            .enumerate()
            .map(|(i, item)| (Segment::Index(i), item as &dyn Node))
            .collect()
    }

    fn children_mut(&mut self) -> Vec<(Segment, &mut dyn Node)> {
        self.iter_mut()
            .enumerate()
            .map(|(i, item)| (Segment::Index(i), item as &mut dyn Node))
            .collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<K, V> Node for BTreeMap<K, V>
where
    K: Display + 'static,
    V: Node,
{
    fn children(&self) -> Vec<(Segment, &dyn Node)> {
        self.iter()
            .map(|(k, v)| (Segment::Key(k.to_string()), v as &dyn Node))
            .collect()
    }

    fn children_mut(&mut self) -> Vec<(Segment, &mut dyn Node)> {
        self.iter_mut()
            .map(|(k, v)| (Segment::Key(k.to_string()), v as &mut dyn Node))
            .collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<K, V, S> Node for HashMap<K, V, S>
where
    K: Display + 'static,
    V: Node,
    S: 'static,
{
    fn children(&self) -> Vec<(Segment, &dyn Node)> {
        self.iter()
            .map(|(k, v)| (Segment::Key(k.to_string()), v as &dyn Node))
            .collect()
    }

    fn children_mut(&mut self) -> Vec<(Segment, &mut dyn Node)> {
        self.iter_mut()
            .map(|(k, v)| (Segment::Key(k.to_string()), v as &mut dyn Node))
            .collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

macro_rules! leaf_nodes {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Node for $ty {
                fn as_any(&self) -> &dyn Any {
                    self
                }
            }
        )*
    };
}

leaf_nodes!(String, bool, char, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);
