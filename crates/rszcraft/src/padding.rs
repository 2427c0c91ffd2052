//! Adjacency-based inference of where the file format omits field padding.
//!
//! The format lays data out in 32-bit chunks: a field narrower than 32 bits
//! is padded out to the next boundary by default. The observed exception is
//! a run of consecutive narrow fields, where only the last one is padded.
//! This pass looks at each declared field and its successor and marks
//! `no_pad` where the adjacency implies tight packing. It never inspects
//! byte contents, and it covers almost all layouts seen in game data; the
//! rare leftovers are handled by hand-set `no_pad` marks in the concrete
//! record definitions, which this pass never unsets.

use crate::field::{Descriptor, Field, Width};

/// Runs the inference once, left to right, over the declared field order.
/// Only reads field `i` and field `i + 1`; the last field is never modified.
pub fn infer(fields: &mut [Field]) {
    for i in 0..fields.len().saturating_sub(1) {
        if !packs_tightly(&fields[i].descriptor, &fields[i + 1].descriptor) {
            continue;
        }
        match &mut fields[i].descriptor {
            Descriptor::Scalar { no_pad, .. } | Descriptor::List { no_pad, .. } => {
                *no_pad = true;
            }
            _ => {}
        }
    }
}

fn packs_tightly(current: &Descriptor, next: &Descriptor) -> bool {
    match (current, next) {
        (Descriptor::Scalar { width, .. }, Descriptor::Scalar { width: next, .. }) => {
            scalar_packs(*width, *next)
        }
        // Lists pack only against a following list of the same element
        // width; list-vs-scalar adjacency keeps the default.
        (Descriptor::List { width, .. }, Descriptor::List { width: next, .. }) => {
            matches!(width, Width::U8 | Width::U16) && width == next
        }
        _ => false,
    }
}

/// The table is asymmetric on purpose: u8 packs before u8 or u16, but u16
/// only packs before u16. This matches observed game-file layouts and must
/// not be "corrected" to a symmetric rule.
fn scalar_packs(width: Width, next: Width) -> bool {
    match width {
        Width::U8 => matches!(next, Width::U8 | Width::U16),
        Width::U16 => next == Width::U16,
        // u32 already sits on the boundary; strings are length-prefixed and
        // never participate.
        Width::U32 | Width::String => false,
    }
}
