//! Packed 4×u8 dot-product accumulate emulation.
//!
//! Each 32-bit lane of the multiplicand register holds four u8 values
//! (little-endian); the instruction multiplies them pairwise with four
//! packed u8 values from the other operand and adds the four products
//! into the accumulator lane, wrapping:
//!
//! ```text
//! out[i] = acc[i] + Σ_{l=0..3} lhs_byte[i][l] · rhs_byte[l]
//! ```
//!
//! The base set has no byte dot product, so bytes are extracted with
//! shift/mask and combined with lane multiply-adds. Destination lanes
//! are 32-bit by construction, so the operation exists only on the u32
//! register types. `demos/matmul.rs` uses the `vx` form for an 8-bit
//! integer matrix multiply.

use crate::reg::{VReg, u32x4, u32x8};

/// u32 register types supporting the packed-byte dot product.
pub trait Dot4: VReg<Scalar = u32> {
    /// Accumulate byte dot products; `vs1` supplies four bytes per lane.
    fn dot4au_vv(self, vs2: Self, vs1: Self) -> Self;

    /// Accumulate byte dot products against one packed scalar.
    #[inline]
    fn dot4au_vx(self, vs2: Self, rs1: u32) -> Self {
        self.dot4au_vv(vs2, Self::splat(rs1))
    }
}

/// `acc + Σ lhs_byte·rhs_byte` per lane, both operands vectors.
#[inline]
pub fn dot4au_vv<V: Dot4>(acc: V, vs2: V, vs1: V) -> V {
    acc.dot4au_vv(vs2, vs1)
}

/// `acc + Σ lhs_byte·rhs_byte` per lane, right-hand bytes from a scalar.
#[inline]
pub fn dot4au_vx<V: Dot4>(acc: V, vs2: V, rs1: u32) -> V {
    acc.dot4au_vx(vs2, rs1)
}

macro_rules! impl_dot4 {
    ($vec:ty) => {
        impl Dot4 for $vec {
            #[inline]
            fn dot4au_vv(self, vs2: Self, vs1: Self) -> Self {
                let m = <$vec>::splat(0xFF);
                let mut acc = self;
                for l in 0..4u32 {
                    let a = vs2.srl_vx(8 * l) & m;
                    let b = vs1.srl_vx(8 * l) & m;
                    acc = acc + a * b;
                }
                acc
            }
        }
    };
}

impl_dot4!(u32x4);
impl_dot4!(u32x8);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::dot4au_ref;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn vx_matches_reference() {
        let mut rng = StdRng::seed_from_u64(0xD074);
        for _ in 0..200 {
            let acc: [u32; 8] = core::array::from_fn(|_| rng.gen());
            let lhs: [u32; 8] = core::array::from_fn(|_| rng.gen());
            let rs1: u32 = rng.gen();

            let got: [u32; 8] = dot4au_vx(u32x8::from(acc), u32x8::from(lhs), rs1).into();
            for i in 0..8 {
                assert_eq!(
                    got[i],
                    dot4au_ref(acc[i], lhs[i], rs1),
                    "lane {}: acc={:#x} lhs={:#x} rs1={:#x}",
                    i,
                    acc[i],
                    lhs[i],
                    rs1
                );
            }
        }
    }

    #[test]
    fn vv_matches_reference() {
        let mut rng = StdRng::seed_from_u64(0xD075);
        for _ in 0..200 {
            let acc: [u32; 4] = core::array::from_fn(|_| rng.gen());
            let lhs: [u32; 4] = core::array::from_fn(|_| rng.gen());
            let rhs: [u32; 4] = core::array::from_fn(|_| rng.gen());

            let got: [u32; 4] =
                dot4au_vv(u32x4::from(acc), u32x4::from(lhs), u32x4::from(rhs)).into();
            for i in 0..4 {
                assert_eq!(got[i], dot4au_ref(acc[i], lhs[i], rhs[i]), "lane {}", i);
            }
        }
    }

    #[test]
    fn accumulator_wraps() {
        let acc = u32x8::splat(u32::MAX);
        let lhs = u32x8::splat(u32::from_le_bytes([1, 0, 0, 0]));
        let got: [u32; 8] = dot4au_vx(acc, lhs, u32::from_le_bytes([1, 0, 0, 0])).into();
        assert_eq!(got, [0; 8]);
    }
}
