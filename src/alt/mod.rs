//! Parity variants of the rotate emulation for comparison benchmarking
//! and differential testing. Not part of the stable API.
//!
//! The functions here keep the upstream emulation's exact dataflow: the
//! `vx` form never reduces its amount, the `vv` form derives the
//! complementary shift amount with a reverse-subtract on the *unreduced*
//! amounts (which wraps for amounts above the lane width), and the `vi`
//! form masks the immediate but not its complement. All of it is still
//! bit-exact because the primitive shifts use only the low log2(W) bits
//! of their amount; the tests pin that equivalence against the main
//! path. The main path in [`crate::rotate`] reduces both shift amounts
//! up front instead and does not depend on the primitives' amount
//! handling.
//!
//! Enable with the `alt` feature flag.

use crate::reg::VReg;

/// [`crate::rotate::ror_vv`] with the complement taken from unreduced amounts.
#[inline]
pub fn ror_vv<V: VReg>(vs2: V, vs1: V) -> V {
    let shift_right = vs2.srl_vv(vs1);
    let width_minus_n = vs1.rsub_vx(V::LANE_BITS);
    let shift_left = vs2.sll_vv(width_minus_n);
    shift_right | shift_left
}

/// [`crate::rotate::rol_vv`] with the complement taken from unreduced amounts.
#[inline]
pub fn rol_vv<V: VReg>(vs2: V, vs1: V) -> V {
    let shift_left = vs2.sll_vv(vs1);
    let width_minus_n = vs1.rsub_vx(V::LANE_BITS);
    let shift_right = vs2.srl_vv(width_minus_n);
    shift_left | shift_right
}

/// [`crate::rotate::ror_vx`] without amount reduction.
#[inline]
pub fn ror_vx<V: VReg>(vs2: V, rs1: V::Scalar) -> V {
    let n = V::scalar_to_u64(rs1);
    let shift_right = vs2.srl_vx(n as u32);
    let shift_left = vs2.sll_vx((V::LANE_BITS as u64).wrapping_sub(n) as u32);
    shift_right | shift_left
}

/// [`crate::rotate::rol_vx`] without amount reduction.
#[inline]
pub fn rol_vx<V: VReg>(vs2: V, rs1: V::Scalar) -> V {
    let n = V::scalar_to_u64(rs1);
    let shift_left = vs2.sll_vx(n as u32);
    let shift_right = vs2.srl_vx((V::LANE_BITS as u64).wrapping_sub(n) as u32);
    shift_left | shift_right
}

/// [`crate::rotate::ror_vi`] with a masked immediate but unreduced complement.
#[inline]
pub fn ror_vi<V: VReg, const IMM: u32>(vs2: V) -> V {
    let imm = IMM & (V::LANE_BITS - 1);
    vs2.srl_vx(imm) | vs2.sll_vx(V::LANE_BITS - imm)
}
