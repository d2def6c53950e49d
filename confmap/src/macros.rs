//! Registration macros for user-defined record and enum types.

/// Defines a record type and registers it for mapping.
///
/// The macro emits the struct itself, a `Default` implementation built from
/// the per-field `= expr` defaults, and the [`Mapped`](crate::Mapped)
/// implementation carrying the record's ordered field descriptors. `Clone`,
/// `Debug`, and `PartialEq` are derived.
///
/// Every field is mappable: it is matched against a child of the backing
/// mapping by its identifier (case-insensitive on import, verbatim on
/// export), falling back to its declared default when the child is absent
/// or does not decode. A field can be exported under a different segment
/// with `name as "segment"`.
///
/// Record graphs must be acyclic; a field type that refers back to an
/// enclosing record recurses without bound.
///
/// # Example
///
/// ```
/// use confmap::record;
///
/// record! {
///     /// Connection settings.
///     pub struct Connection {
///         pub host: String = String::from("localhost"),
///         pub port: u16 = 8080,
///         pub verbose as "debugOutput": bool = false,
///     }
/// }
///
/// assert_eq!(Connection::default().port, 8080);
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident $(as $rename:literal)? : $field_ty:ty = $default:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(::core::clone::Clone, ::core::fmt::Debug, ::core::cmp::PartialEq)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $field_ty,
            )*
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self {
                    $( $field: $default, )*
                }
            }
        }

        impl $crate::Mapped for $name {
            fn describe() -> $crate::TypeDescriptor {
                fn instantiate() -> ::std::boxed::Box<dyn ::core::any::Any> {
                    ::std::boxed::Box::new(<$name as ::core::default::Default>::default())
                }
                $crate::TypeDescriptor::Record($crate::RecordDescriptor::new(
                    ::core::any::type_name::<$name>(),
                    instantiate,
                    ::std::vec![
                        $(
                            {
                                fn get(record: &dyn ::core::any::Any) -> &dyn ::core::any::Any {
                                    let record = record
                                        .downcast_ref::<$name>()
                                        .expect("field getter invoked on a different record type");
                                    &record.$field
                                }
                                fn set(
                                    record: &mut dyn ::core::any::Any,
                                    value: ::std::boxed::Box<dyn ::core::any::Any>,
                                ) {
                                    let record = record
                                        .downcast_mut::<$name>()
                                        .expect("field setter invoked on a different record type");
                                    record.$field = *value
                                        .downcast::<$field_ty>()
                                        .expect("field setter given a value of a different type");
                                }
                                $crate::FieldDescriptor::new(
                                    $crate::__field_name!($field $(as $rename)?),
                                    <$field_ty as $crate::Mapped>::descriptor(),
                                    get,
                                    set,
                                )
                            }
                        ),*
                    ],
                ))
            }
        }
    };
}

/// Defines a unit enum and registers it for mapping.
///
/// Decoding matches a text scalar against the declared constant names,
/// ignoring ASCII case; export writes the declared name verbatim. `Clone`,
/// `Copy`, `Debug`, `PartialEq`, and `Eq` are derived.
///
/// # Example
///
/// ```
/// use confmap::mapped_enum;
///
/// mapped_enum! {
///     /// Who runs a command.
///     pub enum Executor {
///         Console,
///         User,
///     }
/// }
///
/// let decoded: Executor = confmap::from_node(&confmap::tree!("console"))
///     .unwrap()
///     .unwrap();
/// assert_eq!(decoded, Executor::Console);
/// ```
#[macro_export]
macro_rules! mapped_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            ::core::clone::Clone,
            ::core::marker::Copy,
            ::core::fmt::Debug,
            ::core::cmp::PartialEq,
            ::core::cmp::Eq,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $crate::Mapped for $name {
            fn describe() -> $crate::TypeDescriptor {
                fn from_name(
                    name: &str,
                ) -> ::core::option::Option<::std::boxed::Box<dyn ::core::any::Any>> {
                    $(
                        if name.eq_ignore_ascii_case(::core::stringify!($variant)) {
                            return ::core::option::Option::Some(
                                ::std::boxed::Box::new($name::$variant),
                            );
                        }
                    )+
                    ::core::option::Option::None
                }
                fn name_of(value: &dyn ::core::any::Any) -> &'static str {
                    match value
                        .downcast_ref::<$name>()
                        .expect("constant name lookup on a different enum type")
                    {
                        $( $name::$variant => ::core::stringify!($variant), )+
                    }
                }
                $crate::TypeDescriptor::Enum($crate::EnumDescriptor::new(
                    ::core::any::type_name::<$name>(),
                    &[ $( ::core::stringify!($variant) ),+ ],
                    from_name,
                    name_of,
                ))
            }
        }
    };
}

/// Resolves a record field's exported path segment.
#[doc(hidden)]
#[macro_export]
macro_rules! __field_name {
    ($field:ident) => {
        ::core::stringify!($field)
    };
    ($field:ident as $rename:literal) => {
        $rename
    };
}
