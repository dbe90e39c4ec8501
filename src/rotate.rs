//! Element-wise rotate emulation built from base shift and or primitives.
//!
//! The target instructions (`vror`/`vrol` in the vector bit-manipulation
//! extension) do not exist in the base instruction set; each is emulated
//! as two shifts and an or:
//!
//! ```text
//! n    = amount mod W
//! comp = (W - n) mod W
//! ror  = (x >> n) | (x << comp)
//! ```
//!
//! The formula is written exactly once per rotate direction and
//! monomorphized over every register type, so it cannot drift between
//! element widths or grouping classes. Both shift amounts are reduced
//! modulo the lane width in all three addressing modes, which makes
//! rotating by 0, by W, or by any larger amount well defined without
//! special cases (at `n = 0` the complement reduces to 0 and the left
//! term is `x << 0`).
//!
//! Three addressing modes per direction:
//!
//! - `*_vv` — per-lane rotation amounts in a second register
//! - `*_vx` — one scalar amount for every lane
//! - `*_vi` — a const-generic immediate, range-checked at compile time,
//!   with the complementary shift amount folded to a constant
//!
//! Slice-level functions (`ror_vx_slice_u32` and friends) process full
//! register chunks and hand the remainder to the scalar reference,
//! so any slice length is accepted.

use crate::reg::{VReg, u16x16, u32x8, u64x4, u8x16};
use crate::scalar;

// ============================================================================
// Register-level operations (generic core)
// ============================================================================

/// Rotate each lane of `vs2` right by the corresponding lane of `vs1`.
///
/// Amounts are taken modulo the lane width; any lane value is accepted.
#[inline]
pub fn ror_vv<V: VReg>(vs2: V, vs1: V) -> V {
    let mask = V::splat_of((V::LANE_BITS - 1) as u64);
    let n = vs1 & mask;
    let comp = n.rsub_vx(V::LANE_BITS) & mask;
    vs2.srl_vv(n) | vs2.sll_vv(comp)
}

/// Rotate each lane of `vs2` left by the corresponding lane of `vs1`.
#[inline]
pub fn rol_vv<V: VReg>(vs2: V, vs1: V) -> V {
    let mask = V::splat_of((V::LANE_BITS - 1) as u64);
    let n = vs1 & mask;
    let comp = n.rsub_vx(V::LANE_BITS) & mask;
    vs2.sll_vv(n) | vs2.srl_vv(comp)
}

/// Rotate every lane of `vs2` right by `rs1 mod W`.
#[inline]
pub fn ror_vx<V: VReg>(vs2: V, rs1: V::Scalar) -> V {
    let n = (V::scalar_to_u64(rs1) & (V::LANE_BITS as u64 - 1)) as u32;
    let comp = (V::LANE_BITS - n) & (V::LANE_BITS - 1);
    vs2.srl_vx(n) | vs2.sll_vx(comp)
}

/// Rotate every lane of `vs2` left by `rs1 mod W`.
#[inline]
pub fn rol_vx<V: VReg>(vs2: V, rs1: V::Scalar) -> V {
    let n = (V::scalar_to_u64(rs1) & (V::LANE_BITS as u64 - 1)) as u32;
    let comp = (V::LANE_BITS - n) & (V::LANE_BITS - 1);
    vs2.sll_vx(n) | vs2.srl_vx(comp)
}

/// Rotate every lane of `vs2` right by the immediate `IMM`.
///
/// `IMM` must be less than the lane width; out-of-range immediates are
/// rejected when the function is instantiated. The complementary shift
/// amount `(W - IMM) mod W` is a compile-time constant.
#[inline]
pub fn ror_vi<V: VReg, const IMM: u32>(vs2: V) -> V {
    const {
        assert!(IMM < V::LANE_BITS, "rotate immediate must be less than the lane width");
    }
    let comp = (V::LANE_BITS - IMM) & (V::LANE_BITS - 1);
    vs2.srl_vx(IMM) | vs2.sll_vx(comp)
}

/// Rotate every lane of `vs2` left by the immediate `IMM`.
///
/// Range rules as for [`ror_vi`].
#[inline]
pub fn rol_vi<V: VReg, const IMM: u32>(vs2: V) -> V {
    const {
        assert!(IMM < V::LANE_BITS, "rotate immediate must be less than the lane width");
    }
    let comp = (V::LANE_BITS - IMM) & (V::LANE_BITS - 1);
    vs2.sll_vx(IMM) | vs2.srl_vx(comp)
}

// ============================================================================
// Slice-level operations (full chunks through the register path,
// remainder through the scalar reference)
// ============================================================================

macro_rules! impl_rotate_slices {
    ($vec:ty, $elem:ty, $lanes:expr, $ror_vx:ident, $rol_vx:ident, $ror_vv:ident, $rol_vv:ident) => {
        crate::simd_multiversion! {
            #[doc = concat!("Rotate every element of `values` right by `amount mod ", stringify!($elem), "::BITS`, in place.")]
            #[inline]
            pub fn $ror_vx(values: &mut [$elem], amount: $elem) {
                let (chunks, remainder) = values.as_chunks_mut::<$lanes>();
                for chunk in chunks {
                    let v = <$vec>::from(*chunk);
                    *chunk = ror_vx(v, amount).into();
                }
                for v in remainder {
                    *v = scalar::ror(*v, amount as u32);
                }
            }
        }

        crate::simd_multiversion! {
            #[doc = concat!("Rotate every element of `values` left by `amount mod ", stringify!($elem), "::BITS`, in place.")]
            #[inline]
            pub fn $rol_vx(values: &mut [$elem], amount: $elem) {
                let (chunks, remainder) = values.as_chunks_mut::<$lanes>();
                for chunk in chunks {
                    let v = <$vec>::from(*chunk);
                    *chunk = rol_vx(v, amount).into();
                }
                for v in remainder {
                    *v = scalar::rol(*v, amount as u32);
                }
            }
        }

        crate::simd_multiversion! {
            #[doc = concat!("Rotate each element of `values` right by the matching element of `amounts`, in place.")]
            #[inline]
            pub fn $ror_vv(values: &mut [$elem], amounts: &[$elem]) {
                assert_eq!(values.len(), amounts.len());

                let (chunks, remainder) = values.as_chunks_mut::<$lanes>();
                let (amount_chunks, amount_remainder) = amounts.as_chunks::<$lanes>();

                for (chunk, amount) in chunks.iter_mut().zip(amount_chunks.iter()) {
                    let v = <$vec>::from(*chunk);
                    let a = <$vec>::from(*amount);
                    *chunk = ror_vv(v, a).into();
                }

                for (v, a) in remainder.iter_mut().zip(amount_remainder.iter()) {
                    *v = scalar::ror(*v, *a as u32);
                }
            }
        }

        crate::simd_multiversion! {
            #[doc = concat!("Rotate each element of `values` left by the matching element of `amounts`, in place.")]
            #[inline]
            pub fn $rol_vv(values: &mut [$elem], amounts: &[$elem]) {
                assert_eq!(values.len(), amounts.len());

                let (chunks, remainder) = values.as_chunks_mut::<$lanes>();
                let (amount_chunks, amount_remainder) = amounts.as_chunks::<$lanes>();

                for (chunk, amount) in chunks.iter_mut().zip(amount_chunks.iter()) {
                    let v = <$vec>::from(*chunk);
                    let a = <$vec>::from(*amount);
                    *chunk = rol_vv(v, a).into();
                }

                for (v, a) in remainder.iter_mut().zip(amount_remainder.iter()) {
                    *v = scalar::rol(*v, *a as u32);
                }
            }
        }
    };
}

impl_rotate_slices!(u8x16, u8, 16, ror_vx_slice_u8, rol_vx_slice_u8, ror_vv_slice_u8, rol_vv_slice_u8);
impl_rotate_slices!(u16x16, u16, 16, ror_vx_slice_u16, rol_vx_slice_u16, ror_vv_slice_u16, rol_vv_slice_u16);
impl_rotate_slices!(u32x8, u32, 8, ror_vx_slice_u32, rol_vx_slice_u32, ror_vv_slice_u32, rol_vv_slice_u32);
impl_rotate_slices!(u64x4, u64, 4, ror_vx_slice_u64, rol_vx_slice_u64, ror_vv_slice_u64, rol_vv_slice_u64);
