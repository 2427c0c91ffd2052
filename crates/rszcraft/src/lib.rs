//! # rszcraft
//!
//! Schema layer for a binary game-data deserializer.
//!
//! Declare the fields of a record in their on-disk order, run the padding
//! inference pass to mark where the file format packs narrow fields tightly,
//! then hand the schema to a byte-stream reader that pulls values and fills
//! them in. After population, strip the alignment-marker fields that only
//! existed to move the read cursor.
//!
//! ## Example
//!
//! ```
//! use rszcraft::schema::Schema;
//! use rszcraft::field::{Descriptor, Width};
//!
//! let mut schema = Schema::new("GemColorData");
//! schema.declare("red", Descriptor::scalar(Width::U8)).unwrap();
//! schema.declare("green", Descriptor::scalar(Width::U8)).unwrap();
//! schema.declare("rarity", Descriptor::scalar(Width::U16)).unwrap();
//! schema.declare("value", Descriptor::scalar(Width::U32)).unwrap();
//! schema.infer_padding();
//!
//! // The two u8 fields and the u16 run pack tightly; "rarity" is padded
//! // out to the next 32-bit boundary before "value".
//! assert_eq!(
//!     schema.get("red").unwrap().descriptor,
//!     Descriptor::Scalar { width: Width::U8, no_pad: true },
//! );
//! assert_eq!(
//!     schema.get("rarity").unwrap().descriptor,
//!     Descriptor::Scalar { width: Width::U16, no_pad: false },
//! );
//! ```

pub mod errors;
pub mod field;
pub mod padding;
pub mod schema;
#[cfg(feature = "serde")]
pub mod serde;
pub mod type_map;
pub mod value;
