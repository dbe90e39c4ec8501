//! Bit-manipulation emulation: and-not, byte-wise bit reversal, and
//! element-wise byte reversal.
//!
//! Like the rotates, none of these exist in the base instruction set;
//! each is a short fixed sequence of base shifts, masks, and ors. Every
//! function is one generic body monomorphized over the register types,
//! with width differences expressed through `LANE_BITS` alone (repeating
//! masks truncate to the lane width; swap rounds that exceed the lane
//! width drop out as constant-false branches).

use crate::reg::VReg;

/// `vs2 & !vs1` in every lane.
///
/// The base set has no and-not, so the complement is formed by xor with
/// all-ones and combined with a plain and.
#[inline]
pub fn andn_vv<V: VReg>(vs2: V, vs1: V) -> V {
    vs2 & (vs1 ^ V::ones())
}

/// `vs2 & !rs1` in every lane.
#[inline]
pub fn andn_vx<V: VReg>(vs2: V, rs1: V::Scalar) -> V {
    andn_vv(vs2, V::splat(rs1))
}

/// Reverse the bit order inside every byte of every lane.
///
/// Three swap rounds: nibbles, bit pairs, single bits. The repeating
/// masks are truncated to the lane width, so one body serves all widths.
#[inline]
pub fn brev8_v<V: VReg>(vs2: V) -> V {
    let m4 = V::splat_of(0x0F0F_0F0F_0F0F_0F0F);
    let x = (vs2 & m4).sll_vx(4) | (vs2.srl_vx(4) & m4);

    let m2 = V::splat_of(0x3333_3333_3333_3333);
    let x = (x & m2).sll_vx(2) | (x.srl_vx(2) & m2);

    let m1 = V::splat_of(0x5555_5555_5555_5555);
    (x & m1).sll_vx(1) | (x.srl_vx(1) & m1)
}

/// Reverse the byte order of every lane.
///
/// Swap rounds at 32-, 16-, and 8-bit granularity, each applied only
/// when the lane is wide enough. At 8-bit lanes this is the identity.
#[inline]
pub fn rev8_v<V: VReg>(vs2: V) -> V {
    let mut x = vs2;
    if V::LANE_BITS > 32 {
        let m = V::splat_of(0x0000_0000_FFFF_FFFF);
        x = (x & m).sll_vx(32) | (x.srl_vx(32) & m);
    }
    if V::LANE_BITS > 16 {
        let m = V::splat_of(0x0000_FFFF_0000_FFFF);
        x = (x & m).sll_vx(16) | (x.srl_vx(16) & m);
    }
    if V::LANE_BITS > 8 {
        let m = V::splat_of(0x00FF_00FF_00FF_00FF);
        x = (x & m).sll_vx(8) | (x.srl_vx(8) & m);
    }
    x
}
