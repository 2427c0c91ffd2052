//! Decoded values stored into a schema by the external reader.

use crate::schema::Schema;

/// A raw decoded value. Scalars stay unsigned regardless of how the record
/// will present them; signed and float casting happens after cleanup, in the
/// presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Raw unsigned scalar; the actual width is the one the descriptor
    /// declared.
    U32(u32),
    String(String),
    /// Elements of a list field, or of a nested-schema list.
    List(Vec<Value>),
    /// A populated nested schema instance.
    Record(Schema),
}
