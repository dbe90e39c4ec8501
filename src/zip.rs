//! Element-pairing emulation: even/odd interleave of two register groups.
//!
//! `paire` takes the even-indexed lanes of both operands, `pairo` the
//! odd-indexed ones:
//!
//! ```text
//! paire(a, b) = [a0, b0, a2, b2, ...]
//! pairo(a, b) = [a1, b1, a3, b3, ...]
//! ```
//!
//! Two pairing rounds — the second at doubled element width — transpose
//! 4×4 element blocks; `demos/transpose.rs` walks through it.
//!
//! For lanes narrower than 64 bits the emulation reinterprets the
//! register at twice the element width and works with mask/shift/or at
//! that width: one output double-lane is `b_even:a_even` (`paire`) or
//! `b_odd:a_odd` (`pairo`). The reinterpretation assumes little-endian
//! lane layout, like the memory model the pairing instructions are
//! specified against. 64-bit lanes have no wider register to borrow, so
//! they take a lane-indexed path instead.

use bytemuck::cast;

use crate::reg::{VReg, u16x16, u16x8, u32x4, u32x8, u64x2, u64x4, u8x16};

/// Register types that support even/odd element pairing.
pub trait Pair: VReg {
    /// Even pairing: `[self0, other0, self2, other2, ...]`.
    fn paire(self, other: Self) -> Self;

    /// Odd pairing: `[self1, other1, self3, other3, ...]`.
    fn pairo(self, other: Self) -> Self;
}

/// Pair the even-indexed lanes of `vs2` and `vs1`.
#[inline]
pub fn paire_vv<V: Pair>(vs2: V, vs1: V) -> V {
    vs2.paire(vs1)
}

/// Pair the odd-indexed lanes of `vs2` and `vs1`.
#[inline]
pub fn pairo_vv<V: Pair>(vs2: V, vs1: V) -> V {
    vs2.pairo(vs1)
}

// Lanes narrower than 64 bits: work in the register reinterpreted at
// twice the element width.
macro_rules! impl_pair_widened {
    ($vec:ty, $wide:ty, $half_bits:expr) => {
        impl Pair for $vec {
            #[inline]
            fn paire(self, other: Self) -> Self {
                let a: $wide = cast(self);
                let b: $wide = cast(other);
                let lo = <$wide as VReg>::splat_of(u64::MAX >> (64 - $half_bits));
                cast((a & lo) | (b & lo).sll_vx($half_bits))
            }

            #[inline]
            fn pairo(self, other: Self) -> Self {
                let a: $wide = cast(self);
                let b: $wide = cast(other);
                let hi = <$wide as VReg>::splat_of((u64::MAX >> (64 - $half_bits)) << $half_bits);
                cast(a.srl_vx($half_bits) | (b & hi))
            }
        }
    };
}

// 64-bit lanes (no wider register exists): index the lanes directly.
macro_rules! impl_pair_lanes {
    ($vec:ty, $elem:ty, $lanes:expr) => {
        impl Pair for $vec {
            #[inline]
            fn paire(self, other: Self) -> Self {
                let a: [$elem; $lanes] = self.into();
                let b: [$elem; $lanes] = other.into();
                <$vec>::from(core::array::from_fn(|i| {
                    if i % 2 == 0 { a[i] } else { b[i - 1] }
                }))
            }

            #[inline]
            fn pairo(self, other: Self) -> Self {
                let a: [$elem; $lanes] = self.into();
                let b: [$elem; $lanes] = other.into();
                <$vec>::from(core::array::from_fn(|i| {
                    if i % 2 == 0 { a[i + 1] } else { b[i] }
                }))
            }
        }
    };
}

impl_pair_widened!(u8x16, u16x8, 8);
impl_pair_widened!(u16x8, u32x4, 16);
impl_pair_widened!(u16x16, u32x8, 16);
impl_pair_widened!(u32x4, u64x2, 32);
impl_pair_widened!(u32x8, u64x4, 32);
impl_pair_lanes!(u64x2, u64, 2);
impl_pair_lanes!(u64x4, u64, 4);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::{paire_ref, pairo_ref};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    macro_rules! pair_suite {
        ($name:ident, $vec:ty, $elem:ty, $lanes:expr) => {
            mod $name {
                use super::*;

                #[test]
                fn matches_reference() {
                    let mut rng = StdRng::seed_from_u64(0x21B | (<$elem>::BITS as u64) << 16);
                    for _ in 0..100 {
                        let a: [$elem; $lanes] = core::array::from_fn(|_| rng.gen());
                        let b: [$elem; $lanes] = core::array::from_fn(|_| rng.gen());

                        let even: [$elem; $lanes] =
                            paire_vv(<$vec>::from(a), <$vec>::from(b)).into();
                        let odd: [$elem; $lanes] =
                            pairo_vv(<$vec>::from(a), <$vec>::from(b)).into();

                        assert_eq!(&even[..], &paire_ref(&a, &b)[..]);
                        assert_eq!(&odd[..], &pairo_ref(&a, &b)[..]);
                    }
                }
            }
        };
    }

    pair_suite!(u8x16_suite, u8x16, u8, 16);
    pair_suite!(u16x8_suite, u16x8, u16, 8);
    pair_suite!(u16x16_suite, u16x16, u16, 16);
    pair_suite!(u32x4_suite, u32x4, u32, 4);
    pair_suite!(u32x8_suite, u32x8, u32, 8);
    pair_suite!(u64x2_suite, u64x2, u64, 2);
    pair_suite!(u64x4_suite, u64x4, u64, 4);

    #[test]
    fn two_rounds_transpose_a_4x4_block() {
        // Rows of one 4x4 block, one register each.
        let r0 = u32x4::from([11, 12, 13, 14]);
        let r1 = u32x4::from([21, 22, 23, 24]);
        let r2 = u32x4::from([31, 32, 33, 34]);
        let r3 = u32x4::from([41, 42, 43, 44]);

        // Round 1: pair adjacent elements.
        let e01 = paire_vv(r0, r1);
        let o01 = pairo_vv(r0, r1);
        let e23 = paire_vv(r2, r3);
        let o23 = pairo_vv(r2, r3);

        // Round 2: pair adjacent 64-bit groups.
        let c0: [u32; 4] = bytemuck::cast::<u64x2, u32x4>(paire_vv(
            bytemuck::cast::<u32x4, u64x2>(e01),
            bytemuck::cast::<u32x4, u64x2>(e23),
        ))
        .into();
        let c1: [u32; 4] = bytemuck::cast::<u64x2, u32x4>(paire_vv(
            bytemuck::cast::<u32x4, u64x2>(o01),
            bytemuck::cast::<u32x4, u64x2>(o23),
        ))
        .into();
        let c2: [u32; 4] = bytemuck::cast::<u64x2, u32x4>(pairo_vv(
            bytemuck::cast::<u32x4, u64x2>(e01),
            bytemuck::cast::<u32x4, u64x2>(e23),
        ))
        .into();
        let c3: [u32; 4] = bytemuck::cast::<u64x2, u32x4>(pairo_vv(
            bytemuck::cast::<u32x4, u64x2>(o01),
            bytemuck::cast::<u32x4, u64x2>(o23),
        ))
        .into();

        assert_eq!(c0, [11, 21, 31, 41]);
        assert_eq!(c1, [12, 22, 32, 42]);
        assert_eq!(c2, [13, 23, 33, 43]);
        assert_eq!(c3, [14, 24, 34, 44]);
    }
}
