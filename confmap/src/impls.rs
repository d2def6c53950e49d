//! Built-in [`Mapped`] implementations.
//!
//! Scalar parsing is strict: integers accept integer scalars (range
//! checked) and plain textual parses, never floats; floats accept integer,
//! float, and textual scalars; booleans accept boolean scalars and the
//! literal texts `true`/`false` (any ASCII case); strings accept text
//! scalars only.

use core::any::Any;
use std::collections::BTreeMap;

use confmap_tree::Scalar;
use indexmap::IndexMap;

use crate::descriptor::{
    MapDescriptor, OptionalDescriptor, ScalarDescriptor, ScalarKind, SequenceDescriptor,
    TypeDescriptor,
};
use crate::mapped::Mapped;

impl Mapped for String {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::Scalar(ScalarDescriptor::new(
            ScalarKind::Text,
            |scalar| match scalar {
                Scalar::Text(value) => Some(Box::new(value.clone()) as Box<dyn Any>),
                _ => None,
            },
            |value| {
                value
                    .downcast_ref::<String>()
                    .map(|value| Scalar::Text(value.clone()))
            },
        ))
    }
}

impl Mapped for bool {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::Scalar(ScalarDescriptor::new(
            ScalarKind::Boolean,
            |scalar| match scalar {
                Scalar::Bool(value) => Some(Box::new(*value) as Box<dyn Any>),
                Scalar::Text(text) if text.eq_ignore_ascii_case("true") => {
                    Some(Box::new(true) as Box<dyn Any>)
                }
                Scalar::Text(text) if text.eq_ignore_ascii_case("false") => {
                    Some(Box::new(false) as Box<dyn Any>)
                }
                _ => None,
            },
            |value| value.downcast_ref::<bool>().map(|value| Scalar::Bool(*value)),
        ))
    }
}

macro_rules! impl_mapped_int {
    ($($int:ty),* $(,)?) => {$(
        impl Mapped for $int {
            fn describe() -> TypeDescriptor {
                TypeDescriptor::Scalar(ScalarDescriptor::new(
                    ScalarKind::Integer,
                    |scalar| match scalar {
                        Scalar::Int(value) => <$int>::try_from(*value)
                            .ok()
                            .map(|value| Box::new(value) as Box<dyn Any>),
                        Scalar::Text(text) => text
                            .parse::<$int>()
                            .ok()
                            .map(|value| Box::new(value) as Box<dyn Any>),
                        _ => None,
                    },
                    |value| {
                        value.downcast_ref::<$int>().map(|value| {
                            i64::try_from(*value)
                                .map(Scalar::Int)
                                .unwrap_or_else(|_| Scalar::Text(value.to_string()))
                        })
                    },
                ))
            }
        }
    )*};
}

impl_mapped_int!(i8, i16, i32, i64, u8, u16, u32, u64);

macro_rules! impl_mapped_float {
    ($($float:ty),* $(,)?) => {$(
        impl Mapped for $float {
            fn describe() -> TypeDescriptor {
                TypeDescriptor::Scalar(ScalarDescriptor::new(
                    ScalarKind::Float,
                    |scalar| match scalar {
                        Scalar::Float(value) => Some(Box::new(*value as $float) as Box<dyn Any>),
                        Scalar::Int(value) => Some(Box::new(*value as $float) as Box<dyn Any>),
                        Scalar::Text(text) => text
                            .parse::<$float>()
                            .ok()
                            .map(|value| Box::new(value) as Box<dyn Any>),
                        _ => None,
                    },
                    |value| {
                        value
                            .downcast_ref::<$float>()
                            .map(|value| Scalar::Float(f64::from(*value)))
                    },
                ))
            }
        }
    )*};
}

impl_mapped_float!(f32, f64);

impl<T: Mapped> Mapped for Option<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::Optional(OptionalDescriptor::new(
            T::descriptor(),
            |inner| match inner {
                Some(value) => Box::new(Some(
                    *value
                        .downcast::<T>()
                        .expect("optional inner value of a different type"),
                )),
                None => Box::new(None::<T>),
            },
            |value| {
                value
                    .downcast_ref::<Option<T>>()
                    .expect("optional projection on a different type")
                    .as_ref()
                    .map(|inner| inner as &dyn Any)
            },
        ))
    }
}

impl<T: Mapped> Mapped for Vec<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::Sequence(SequenceDescriptor::new(
            T::descriptor(),
            |items| {
                let items: Vec<T> = items
                    .into_iter()
                    .map(|item| {
                        *item
                            .downcast::<T>()
                            .expect("sequence element of a different type")
                    })
                    .collect();
                Box::new(items)
            },
            |value| {
                value
                    .downcast_ref::<Vec<T>>()
                    .expect("sequence projection on a different type")
                    .iter()
                    .map(|item| item as &dyn Any)
                    .collect()
            },
        ))
    }
}

impl<T: Mapped> Mapped for IndexMap<String, T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::StringMap(MapDescriptor::new(
            T::descriptor(),
            |entries| {
                let entries: IndexMap<String, T> = entries
                    .into_iter()
                    .map(|(key, value)| {
                        (
                            key,
                            *value
                                .downcast::<T>()
                                .expect("map value of a different type"),
                        )
                    })
                    .collect();
                Box::new(entries)
            },
            |value| {
                value
                    .downcast_ref::<IndexMap<String, T>>()
                    .expect("map projection on a different type")
                    .iter()
                    .map(|(key, value)| (key.as_str(), value as &dyn Any))
                    .collect()
            },
        ))
    }
}

impl<T: Mapped> Mapped for BTreeMap<String, T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::StringMap(MapDescriptor::new(
            T::descriptor(),
            |entries| {
                let entries: BTreeMap<String, T> = entries
                    .into_iter()
                    .map(|(key, value)| {
                        (
                            key,
                            *value
                                .downcast::<T>()
                                .expect("map value of a different type"),
                        )
                    })
                    .collect();
                Box::new(entries)
            },
            |value| {
                value
                    .downcast_ref::<BTreeMap<String, T>>()
                    .expect("map projection on a different type")
                    .iter()
                    .map(|(key, value)| (key.as_str(), value as &dyn Any))
                    .collect()
            },
        ))
    }
}
