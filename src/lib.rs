//! Emulation of vector bit-manipulation instructions on top of base
//! shift/logic SIMD primitives.
//!
//! The vector bit-manipulation extensions (rotates, and-not, bit/byte
//! reversal) and the element-pairing and packed-dot-product extensions
//! are not part of the base vector instruction set. This crate emulates
//! them with the primitives the base set does have — shifts, bitwise
//! or/and/xor, reverse-subtract — over the `wide` crate's register
//! types, at every element width (8/16/32/64-bit) and register class
//! (128- and 256-bit groups).
//!
//! The core is the rotate layer: `rotate_right(x, n)` as
//! `(x >> n') | (x << ((W - n') mod W))` with `n' = n mod W`, written
//! once per rotate direction and monomorphized over every register type
//! and addressing mode, so the formula cannot drift between widths.
//!
//! # Module Organization
//!
//! - [`rotate`] - **Core**: rotate right/left in vector-vector,
//!   vector-scalar, and vector-immediate forms, plus in-place slice
//!   functions
//! - [`bits`] - and-not, per-byte bit reversal, per-element byte reversal
//! - [`zip`] - even/odd element pairing (building block for block
//!   transposes)
//! - [`dot`] - packed 4×u8 dot-product accumulate into u32 lanes
//! - [`reg`] - the register model and base primitives everything above
//!   is built from
//! - [`scalar`] - scalar reference implementations (slice remainders and
//!   the test oracle)
//!
//! # Quick Start
//!
//! ```rust
//! use zvbb_emu::reg::u32x8;
//! use zvbb_emu::{ror_vi, ror_vx};
//!
//! let data = u32x8::splat(0x1234_5678);
//!
//! // Every lane rotated right by a runtime amount (reduced mod 32).
//! let rotated: [u32; 8] = ror_vx(data, 8).into();
//! assert_eq!(rotated, [0x7812_3456; 8]);
//!
//! // Same with a compile-time immediate; the complementary shift
//! // amount folds to a constant, and immediates >= 32 do not compile.
//! let rotated: [u32; 8] = ror_vi::<u32x8, 8>(data).into();
//! assert_eq!(rotated, [0x7812_3456; 8]);
//! ```
//!
//! # Slices
//!
//! Slice functions process full register chunks and hand the remainder
//! to the scalar reference, so any length works:
//!
//! ```rust
//! use zvbb_emu::rotate::ror_vx_slice_u32;
//!
//! let mut values = vec![0x1234_5678u32; 100];
//! ror_vx_slice_u32(&mut values, 8);
//! assert!(values.iter().all(|&v| v == 0x7812_3456));
//! ```
//!
//! # Per-lane amounts
//!
//! ```rust
//! use zvbb_emu::reg::u32x4;
//! use zvbb_emu::ror_vv;
//!
//! let data = u32x4::splat(0x1234_5678);
//! let amounts = u32x4::from([0, 4, 8, 40]); // 40 reduces to 8
//! let rotated: [u32; 4] = ror_vv(data, amounts).into();
//! assert_eq!(rotated, [0x1234_5678, 0x8123_4567, 0x7812_3456, 0x7812_3456]);
//! ```
//!
//! # Choosing the Right Form
//!
//! | Rotation amount | Function |
//! |-----------------|----------|
//! | differs per lane | [`ror_vv`] / [`rol_vv`] |
//! | one runtime scalar | [`ror_vx`] / [`rol_vx`] |
//! | compile-time constant | [`ror_vi`] / [`rol_vi`] |
//! | whole slice, one scalar | [`rotate::ror_vx_slice_u32`] and friends |
//! | whole slice, per element | [`rotate::ror_vv_slice_u32`] and friends |
//!
//! # Feature Flags
//!
//! - `alt`: parity variants reproducing the upstream emulation's exact
//!   dataflow (unreduced complementary shift amounts), for comparison
//!   benches and differential tests.

#![warn(missing_docs)]

// ============================================================================
// Public modules
// ============================================================================

/// Register model: the `VReg` trait and its impls for `wide`'s
/// unsigned lane types.
pub mod reg;

/// Rotate emulation (the core layer).
pub mod rotate;

/// And-not, per-byte bit reversal, per-element byte reversal.
pub mod bits;

/// Even/odd element pairing.
pub mod zip;

/// Packed 4×u8 dot-product accumulate.
pub mod dot;

/// Scalar reference implementations.
pub mod scalar;

/// Parity variants of the rotate emulation (see module docs).
///
/// Requires the `alt` feature.
#[cfg(feature = "alt")]
pub mod alt;

// ============================================================================
// Internal modules
// ============================================================================

// Dispatch target macros (exported at crate root via #[macro_export]).
mod targets;

// ============================================================================
// Root re-exports
// ============================================================================

pub use bits::{andn_vv, andn_vx, brev8_v, rev8_v};
pub use dot::{Dot4, dot4au_vv, dot4au_vx};
pub use reg::VReg;
pub use rotate::{rol_vi, rol_vv, rol_vx, ror_vi, ror_vv, ror_vx};
pub use zip::{Pair, paire_vv, pairo_vv};

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::u32x8;

    #[test]
    fn register_and_slice_paths_are_consistent() {
        let data: Vec<u32> = (0..64u32).map(|i| 0x0101_0101u32.wrapping_mul(i)).collect();

        let mut via_slice = data.clone();
        rotate::ror_vx_slice_u32(&mut via_slice, 13);

        for (chunk, out) in data.chunks_exact(8).zip(via_slice.chunks_exact(8)) {
            let mut lanes = [0u32; 8];
            lanes.copy_from_slice(chunk);
            let reg: [u32; 8] = ror_vx(u32x8::from(lanes), 13).into();
            assert_eq!(&reg[..], out, "slice and register paths disagree");
        }
    }
}
