//! JSON-deserializable schema description.
//!
//! These types describe the *shape* of one record kind. They are intended to
//! be constructed from JSON (for example a schema file shipped next to the
//! type registry) and then converted into core `rszcraft` types. Conversion
//! goes through [crate::schema::Schema::declare], so a malformed definition
//! fails the same way a hand-written one would.

use serde::{Deserialize, Serialize};

use crate::{
    errors::DeclareError,
    field::{Descriptor, Width},
    schema::Schema,
};

/// Top-level definition: record-type name plus its fields in on-disk order.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SchemaDef {
    /// Record-type name, as resolved by the type registry.
    pub name: String,
    /// All fields of the record, in on-disk order.
    pub fields: Vec<FieldDef>,
}

/// Description of a single declared field.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FieldDef {
    /// Field name; becomes the key in the presented output.
    pub name: String,
    /// What the field holds.
    pub descriptor: DescriptorDef,
}

/// Kind of field in the schema.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(tag = "type")]
pub enum DescriptorDef {
    /// Single scalar value.
    Scalar {
        width: WidthDef,
        /// Omit to let padding inference decide; set to hand-override.
        #[serde(default)]
        no_pad: bool,
    },
    /// Counted sequence of scalars.
    List {
        width: WidthDef,
        /// Width of the entry count preceding the elements; defaults to u32.
        #[serde(default = "default_count_width")]
        count_width: WidthDef,
        #[serde(default)]
        no_pad: bool,
    },
    /// Single instance of another named schema.
    Nested { schema: String },
    /// Counted sequence of instances of another named schema.
    NestedList { schema: String },
    /// Cursor-advance marker to the next multiple of `bits`.
    Align { bits: u32 },
}

/// Scalar width tag.
#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
pub enum WidthDef {
    String,
    U8,
    U16,
    U32,
}

fn default_count_width() -> WidthDef {
    WidthDef::U32
}

impl From<WidthDef> for Width {
    fn from(value: WidthDef) -> Self {
        match value {
            WidthDef::String => Width::String,
            WidthDef::U8 => Width::U8,
            WidthDef::U16 => Width::U16,
            WidthDef::U32 => Width::U32,
        }
    }
}

impl From<DescriptorDef> for Descriptor {
    fn from(value: DescriptorDef) -> Self {
        match value {
            DescriptorDef::Scalar { width, no_pad } => Descriptor::Scalar {
                width: width.into(),
                no_pad,
            },
            DescriptorDef::List {
                width,
                count_width,
                no_pad,
            } => Descriptor::List {
                width: width.into(),
                count_width: count_width.into(),
                no_pad,
            },
            DescriptorDef::Nested { schema } => Descriptor::Nested(schema),
            DescriptorDef::NestedList { schema } => Descriptor::NestedList(schema),
            DescriptorDef::Align { bits } => Descriptor::Align(bits),
        }
    }
}

impl TryFrom<SchemaDef> for Schema {
    type Error = DeclareError;

    fn try_from(value: SchemaDef) -> Result<Self, Self::Error> {
        let mut schema = Schema::new(value.name);
        for field in value.fields {
            schema.declare(field.name, field.descriptor.into())?;
        }
        Ok(schema)
    }
}
