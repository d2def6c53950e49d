//! Target-shape descriptors.
//!
//! A [`TypeDescriptor`] tells the decoder and the leaf exporter what shape a
//! target type has: scalar, enum, sequence, string-keyed map, optional, or
//! record. Each variant carries monomorphized function hooks so the engine
//! can build, read, and write values of the described type behind
//! `dyn Any`, without knowing the concrete type at the recursion site.
//!
//! Descriptors are built once per type by [`Mapped::describe`] and cached;
//! see [`Mapped`](crate::Mapped). They are never mutated after
//! construction.

use core::any::Any;
use std::sync::Arc;

use confmap_tree::Scalar;

/// Parses one scalar leaf into a typed value.
pub type ParseScalarFn = fn(&Scalar) -> Option<Box<dyn Any>>;
/// Converts a typed value back into a scalar leaf.
pub type ToScalarFn = fn(&dyn Any) -> Option<Scalar>;
/// Resolves an enum constant from its name, ignoring ASCII case.
pub type FromNameFn = fn(&str) -> Option<Box<dyn Any>>;
/// Returns the declared name of an enum constant.
pub type NameOfFn = fn(&dyn Any) -> &'static str;
/// Builds a sequence value from decoded elements.
pub type BuildSequenceFn = fn(Vec<Box<dyn Any>>) -> Box<dyn Any>;
/// Borrows the elements of a sequence value.
pub type ElementsFn = for<'a> fn(&'a dyn Any) -> Vec<&'a dyn Any>;
/// Builds a map value from decoded entries.
pub type BuildMapFn = fn(Vec<(String, Box<dyn Any>)>) -> Box<dyn Any>;
/// Borrows the entries of a map value.
pub type EntriesFn = for<'a> fn(&'a dyn Any) -> Vec<(&'a str, &'a dyn Any)>;
/// Wraps a decoded inner value (or its absence) into an optional value.
pub type WrapOptionalFn = fn(Option<Box<dyn Any>>) -> Box<dyn Any>;
/// Borrows the contained value of an optional value, if present.
pub type ProjectOptionalFn = for<'a> fn(&'a dyn Any) -> Option<&'a dyn Any>;
/// Produces a fresh default instance of a record type.
pub type InstantiateFn = fn() -> Box<dyn Any>;
/// Borrows one field out of a record value.
pub type GetFieldFn = for<'a> fn(&'a dyn Any) -> &'a dyn Any;
/// Stores a decoded value into one field of a record value.
pub type SetFieldFn = fn(&mut dyn Any, Box<dyn Any>);

/// The shape of a target type.
#[derive(Debug)]
pub enum TypeDescriptor {
    /// A scalar leaf type.
    Scalar(ScalarDescriptor),
    /// A unit enum decoded by constant name.
    Enum(EnumDescriptor),
    /// An ordered sequence of elements.
    Sequence(SequenceDescriptor),
    /// A string-keyed map.
    StringMap(MapDescriptor),
    /// An optional wrapper around an inner shape.
    Optional(OptionalDescriptor),
    /// A record with named, typed fields.
    Record(RecordDescriptor),
}

/// Which family of scalars a scalar descriptor parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// Booleans.
    Boolean,
    /// Integers of any width.
    Integer,
    /// Floating point numbers.
    Float,
    /// Text.
    Text,
}

/// Describes a scalar target type.
#[derive(Debug)]
pub struct ScalarDescriptor {
    kind: ScalarKind,
    parse: ParseScalarFn,
    to_scalar: ToScalarFn,
}

impl ScalarDescriptor {
    /// Creates a scalar descriptor from its parse and unparse hooks.
    pub fn new(kind: ScalarKind, parse: ParseScalarFn, to_scalar: ToScalarFn) -> Self {
        Self {
            kind,
            parse,
            to_scalar,
        }
    }

    /// The scalar family.
    pub fn kind(&self) -> ScalarKind {
        self.kind
    }

    /// Strictly parses `scalar` into a typed value, or `None` on mismatch.
    pub fn parse(&self, scalar: &Scalar) -> Option<Box<dyn Any>> {
        (self.parse)(scalar)
    }

    /// Converts a typed value back into a scalar leaf.
    pub fn to_scalar(&self, value: &dyn Any) -> Option<Scalar> {
        (self.to_scalar)(value)
    }
}

/// Describes a unit enum target type.
#[derive(Debug)]
pub struct EnumDescriptor {
    type_name: &'static str,
    constants: &'static [&'static str],
    from_name: FromNameFn,
    name_of: NameOfFn,
}

impl EnumDescriptor {
    /// Creates an enum descriptor from its constant list and name hooks.
    pub fn new(
        type_name: &'static str,
        constants: &'static [&'static str],
        from_name: FromNameFn,
        name_of: NameOfFn,
    ) -> Self {
        Self {
            type_name,
            constants,
            from_name,
            name_of,
        }
    }

    /// Name of the enum type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The declared constant names, in declaration order.
    pub fn constants(&self) -> &'static [&'static str] {
        self.constants
    }

    /// Resolves a constant by name, ignoring ASCII case.
    pub fn decode_name(&self, name: &str) -> Option<Box<dyn Any>> {
        (self.from_name)(name)
    }

    /// The declared name of the given constant value.
    pub fn name_of(&self, value: &dyn Any) -> &'static str {
        (self.name_of)(value)
    }
}

/// Describes an ordered-sequence target type.
#[derive(Debug)]
pub struct SequenceDescriptor {
    element: Arc<TypeDescriptor>,
    build: BuildSequenceFn,
    elements: ElementsFn,
}

impl SequenceDescriptor {
    /// Creates a sequence descriptor over an element shape.
    pub fn new(element: Arc<TypeDescriptor>, build: BuildSequenceFn, elements: ElementsFn) -> Self {
        Self {
            element,
            build,
            elements,
        }
    }

    /// The element shape.
    pub fn element(&self) -> &TypeDescriptor {
        &self.element
    }

    /// Assembles a sequence value from decoded elements.
    pub fn build(&self, items: Vec<Box<dyn Any>>) -> Box<dyn Any> {
        (self.build)(items)
    }

    /// Borrows the elements of a sequence value, in order.
    pub fn elements<'a>(&self, value: &'a dyn Any) -> Vec<&'a dyn Any> {
        (self.elements)(value)
    }
}

/// Describes a string-keyed map target type.
#[derive(Debug)]
pub struct MapDescriptor {
    value: Arc<TypeDescriptor>,
    build: BuildMapFn,
    entries: EntriesFn,
}

impl MapDescriptor {
    /// Creates a map descriptor over a value shape.
    pub fn new(value: Arc<TypeDescriptor>, build: BuildMapFn, entries: EntriesFn) -> Self {
        Self {
            value,
            build,
            entries,
        }
    }

    /// The shape of the map's values.
    pub fn value(&self) -> &TypeDescriptor {
        &self.value
    }

    /// Assembles a map value from decoded entries.
    pub fn build(&self, entries: Vec<(String, Box<dyn Any>)>) -> Box<dyn Any> {
        (self.build)(entries)
    }

    /// Borrows the entries of a map value, in iteration order.
    pub fn entries<'a>(&self, value: &'a dyn Any) -> Vec<(&'a str, &'a dyn Any)> {
        (self.entries)(value)
    }
}

/// Describes an optional target type.
#[derive(Debug)]
pub struct OptionalDescriptor {
    inner: Arc<TypeDescriptor>,
    wrap: WrapOptionalFn,
    project: ProjectOptionalFn,
}

impl OptionalDescriptor {
    /// Creates an optional descriptor over an inner shape.
    pub fn new(inner: Arc<TypeDescriptor>, wrap: WrapOptionalFn, project: ProjectOptionalFn) -> Self {
        Self {
            inner,
            wrap,
            project,
        }
    }

    /// The contained shape.
    pub fn inner(&self) -> &TypeDescriptor {
        &self.inner
    }

    /// Wraps a decoded inner value into a present optional.
    pub fn wrap_value(&self, value: Box<dyn Any>) -> Box<dyn Any> {
        (self.wrap)(Some(value))
    }

    /// The empty optional value.
    pub fn empty(&self) -> Box<dyn Any> {
        (self.wrap)(None)
    }

    /// Borrows the contained value, if present.
    pub fn project<'a>(&self, value: &'a dyn Any) -> Option<&'a dyn Any> {
        (self.project)(value)
    }
}

/// Describes a record target type and its mappable fields.
#[derive(Debug)]
pub struct RecordDescriptor {
    type_name: &'static str,
    instantiate: InstantiateFn,
    fields: Vec<FieldDescriptor>,
}

impl RecordDescriptor {
    /// Creates a record descriptor from its default constructor and fields.
    pub fn new(
        type_name: &'static str,
        instantiate: InstantiateFn,
        fields: Vec<FieldDescriptor>,
    ) -> Self {
        Self {
            type_name,
            instantiate,
            fields,
        }
    }

    /// Name of the record type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Produces a fresh default instance, the base for per-field fallback.
    pub fn instantiate(&self) -> Box<dyn Any> {
        (self.instantiate)()
    }

    /// The record's fields, in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }
}

/// One mappable field of a record: its name, shape, and accessors.
#[derive(Debug)]
pub struct FieldDescriptor {
    name: &'static str,
    descriptor: Arc<TypeDescriptor>,
    get: GetFieldFn,
    set: SetFieldFn,
}

impl FieldDescriptor {
    /// Creates a field descriptor.
    pub fn new(
        name: &'static str,
        descriptor: Arc<TypeDescriptor>,
        get: GetFieldFn,
        set: SetFieldFn,
    ) -> Self {
        Self {
            name,
            descriptor,
            get,
            set,
        }
    }

    /// The field's path segment. Matched case-insensitively on import,
    /// written verbatim on export.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The field's shape.
    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    /// Borrows the field's current value out of a record.
    pub fn value<'a>(&self, record: &'a dyn Any) -> &'a dyn Any {
        (self.get)(record)
    }

    /// Stores a decoded value into the field of a record.
    pub fn set_value(&self, record: &mut dyn Any, value: Box<dyn Any>) {
        (self.set)(record, value)
    }
}
