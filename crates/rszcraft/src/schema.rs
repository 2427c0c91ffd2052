//! Schema: ordered field declarations for one record kind.

use crate::{
    errors::DeclareError,
    field::{Descriptor, Field, Width},
    padding,
    value::Value,
};

/// Ordered field declarations for one record kind. The order fields are
/// declared in IS the on-disk order; it is never permuted, only annotated by
/// [Schema::infer_padding] and truncated by [Schema::strip_alignment].
///
/// One instance is built fresh per decoded record and goes through four
/// stages: declare, infer padding, populate (done by the external reader
/// writing into [Schema::fields]), strip alignment markers. A partially
/// populated instance is simply discarded if the reader gives up.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    name: String,
    /// Declared fields in on-disk order. Public so the external reader can
    /// walk them and fill values in place.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Creates an empty schema for the record type `name` (the name the
    /// type registry resolves codes to).
    pub fn new(name: impl Into<String>) -> Self {
        Schema {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Record-type name this schema decodes.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a field declaration. Call order is the on-disk field order.
    ///
    /// Fails on a malformed declaration: duplicate or empty name, a list
    /// counted in [Width::String], or a zero-bit alignment marker.
    pub fn declare(
        &mut self,
        name: impl Into<String>,
        descriptor: Descriptor,
    ) -> Result<(), DeclareError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DeclareError::EmptyFieldName);
        }
        if self.fields.iter().any(|field| field.name == name) {
            return Err(DeclareError::DuplicateField(name));
        }
        match descriptor {
            Descriptor::List {
                count_width: Width::String,
                ..
            } => return Err(DeclareError::InvalidCountWidth(Width::String)),
            Descriptor::Align(0) => return Err(DeclareError::ZeroAlignment),
            _ => {}
        }

        self.fields.push(Field {
            name,
            descriptor,
            value: None,
        });
        Ok(())
    }

    /// Ordered `(name, descriptor)` view for the reader, pre-population.
    pub fn declared(&self) -> impl Iterator<Item = (&str, &Descriptor)> {
        self.fields
            .iter()
            .map(|field| (field.name.as_str(), &field.descriptor))
    }

    /// Ordered `(name, value)` view over populated fields, for presentation
    /// and export after cleanup. Unpopulated fields are skipped.
    pub fn values(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().filter_map(|field| {
            field
                .value
                .as_ref()
                .map(|value| (field.name.as_str(), value))
        })
    }

    /// Fetches one field by name.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Runs [padding::infer] over the declared fields, marking `no_pad`
    /// where type-tag adjacency implies tight packing.
    pub fn infer_padding(&mut self) {
        padding::infer(&mut self.fields);
    }

    /// Removes every alignment-marker field, preserving the relative order
    /// of the rest. Runs after the reader consumed the markers as
    /// cursor-advance instructions; idempotent since no markers remain.
    pub fn strip_alignment(&mut self) {
        self.fields
            .retain(|field| !matches!(field.descriptor, Descriptor::Align(_)));
    }
}
