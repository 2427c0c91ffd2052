//! Definition of declared fields used to build a [crate::schema::Schema].

use crate::value::Value;

/// Scalar type tag: how wide one value is in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    /// Length-prefixed character data; the on-disk size is carried in the
    /// stream, not in the tag.
    String,
    U8,
    U16,
    U32,
}

impl Width {
    /// Number of bits the reader pulls for one value, or `None` for
    /// [Width::String] whose size is only known at read time.
    pub fn bits(&self) -> Option<u32> {
        match self {
            Width::String => None,
            Width::U8 => Some(8),
            Width::U16 => Some(16),
            Width::U32 => Some(32),
        }
    }
}

/// Describes what one declared field holds and how the reader should pull it.
///
/// Fields narrower than 32 bits are padded out to the next 32-bit boundary
/// unless `no_pad` is set. [crate::padding::infer] sets it from type-tag
/// adjacency; a concrete record definition may also set it by hand where the
/// heuristic is known to miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Descriptor {
    /// Single value of the given width.
    Scalar { width: Width, no_pad: bool },
    /// Counted sequence of scalars. The entry count precedes the elements in
    /// the stream and is stored in `count_width` bits; `no_pad` applies to
    /// the element width.
    List {
        width: Width,
        count_width: Width,
        no_pad: bool,
    },
    /// Single instance of another named schema.
    Nested(String),
    /// Counted sequence of instances of another named schema.
    NestedList(String),
    /// No data: the reader advances the cursor to the next multiple of this
    /// many bits, then the field is dropped by cleanup.
    Align(u32),
}

impl Descriptor {
    pub fn scalar(width: Width) -> Self {
        Descriptor::Scalar {
            width,
            no_pad: false,
        }
    }

    /// List with the default 32-bit entry count.
    pub fn list(width: Width) -> Self {
        Descriptor::list_counted(width, Width::U32)
    }

    /// List whose entry count is stored in `count_width` bits.
    pub fn list_counted(width: Width, count_width: Width) -> Self {
        Descriptor::List {
            width,
            count_width,
            no_pad: false,
        }
    }

    pub fn nested(schema: impl Into<String>) -> Self {
        Descriptor::Nested(schema.into())
    }

    pub fn nested_list(schema: impl Into<String>) -> Self {
        Descriptor::NestedList(schema.into())
    }

    pub fn align(bits: u32) -> Self {
        Descriptor::Align(bits)
    }
}

/// A single named field: the declared descriptor plus the value the external
/// reader fills in.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Name used in the presented result; unique within one schema.
    pub name: String,
    /// What the field holds and how to pull it.
    pub descriptor: Descriptor,
    /// Populated by the external reader, in declared order. `None` until
    /// then, and never set for [Descriptor::Align] fields.
    pub value: Option<Value>,
}
