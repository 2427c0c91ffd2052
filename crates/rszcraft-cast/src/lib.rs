//! Presentation layer: cast raw `rszcraft` schema values into typed,
//! human-readable data.
//!
//! The schema layer stores every scalar as a raw unsigned bit pattern; this
//! crate holds the reinterpretation primitives a record's presentation code
//! applies after cleanup (unsigned to signed, raw bits to float), plus the
//! [`Presentable`] seam the export layer calls and default walkers for
//! fields that need no reinterpretation.
//!
//! ## Example
//!
//! ```
//! use rszcraft_cast::{bits_to_f32, u8_to_i8};
//!
//! assert_eq!(bits_to_f32(0x3F800000), 1.0);
//! assert_eq!(u8_to_i8(0xFF), -1);
//! ```

use rszcraft::{schema::Schema, value::Value};

/// Reinterprets a 32-bit pattern as an IEEE-754 single-precision float,
/// rounded to 3 decimal digits for display.
///
/// A raw value of exactly `0` short-circuits to `0.0` without touching the
/// bit pattern. Rounding happens in f64 so the largest float magnitudes
/// survive the scale-and-round.
pub fn bits_to_f32(raw: u32) -> f32 {
    if raw == 0 {
        return 0.0;
    }
    let value = f64::from(f32::from_bits(raw));
    ((value * 1000.0).round() / 1000.0) as f32
}

/// Two's-complement reinterpretation of a raw 32-bit value: anything above
/// `0x7FFF_FFFF` maps to `raw - 0x1_0000_0000`.
pub fn u32_to_i32(raw: u32) -> i32 {
    raw as i32
}

/// Two's-complement reinterpretation of a raw 16-bit value: anything above
/// `0x7FFF` maps to `raw - 0x1_0000`.
pub fn u16_to_i16(raw: u16) -> i16 {
    raw as i16
}

/// Two's-complement reinterpretation of a raw 8-bit value: anything above
/// `0x7F` maps to `raw - 0x100`.
pub fn u8_to_i8(raw: u8) -> i8 {
    raw as i8
}

/// A presented, human-readable value.
#[derive(Debug, PartialEq)]
pub enum Presented {
    Int(i64),
    Float(f32),
    String(String),
    List(Vec<Presented>),
    /// Nested record: field names and presented values, in declared order.
    Record(Vec<(String, Presented)>),
}

/// Implemented by each concrete record type. The export layer calls
/// [`present`](Presentable::present) explicitly after cleanup; a record
/// decides per field which cast applies.
pub trait Presentable {
    fn present(&self) -> Presented;
}

/// Presents a raw value without any numeric reinterpretation. Record types
/// use this for the fields that are genuinely unsigned.
pub fn present_value(value: &Value) -> Presented {
    match value {
        Value::U32(raw) => Presented::Int(i64::from(*raw)),
        Value::String(text) => Presented::String(text.clone()),
        Value::List(items) => Presented::List(items.iter().map(present_value).collect()),
        Value::Record(schema) => present_record(schema),
    }
}

/// Presents every populated field of a record, in declared order.
pub fn present_record(schema: &Schema) -> Presented {
    Presented::Record(
        schema
            .values()
            .map(|(name, value)| (name.to_string(), present_value(value)))
            .collect(),
    )
}
