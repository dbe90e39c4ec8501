//! 8-bit integer matrix multiply through the packed dot-product
//! accumulate, checked against a scalar reference.
//!
//! `out = acc + lhs · rhs` with `lhs: M×K` u8, `rhs: K×N` u8, and u32
//! accumulators. The vector path walks eight output rows at a time: the
//! lanes hold four packed lhs bytes per row, the scalar operand holds
//! four rhs bytes of one column, and one accumulate step retires four k
//! iterations for all eight rows.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zvbb_emu::dot4au_vx;
use zvbb_emu::reg::u32x8;

const M: usize = 64;
const N: usize = 32;
const K: usize = 32;

fn matmul_ref(out: &mut [u32], acc: &[u32], lhs: &[u8], rhs: &[u8]) {
    for i in 0..M {
        for j in 0..N {
            let mut sum = acc[i * N + j];
            for k in 0..K {
                sum = sum.wrapping_add(lhs[i * K + k] as u32 * rhs[k * N + j] as u32);
            }
            out[i * N + j] = sum;
        }
    }
}

fn matmul_dot4(out: &mut [u32], acc: &[u32], lhs: &[u8], rhs: &[u8]) {
    // Rows are a whole number of u32 groups (K % 4 == 0), so the lhs
    // matrix can be viewed as packed little-endian u32s up front.
    let packed: Vec<u32> = bytemuck::pod_collect_to_vec(lhs);
    let groups_per_row = K / 4;

    for j in 0..N {
        for i in (0..M).step_by(8) {
            let mut vout =
                u32x8::from(core::array::from_fn(|l| acc[(i + l) * N + j]));

            for g in 0..groups_per_row {
                let vlhs = u32x8::from(core::array::from_fn(|l| {
                    packed[(i + l) * groups_per_row + g]
                }));
                let k = 4 * g;
                let rhs4 = u32::from_le_bytes([
                    rhs[k * N + j],
                    rhs[(k + 1) * N + j],
                    rhs[(k + 2) * N + j],
                    rhs[(k + 3) * N + j],
                ]);
                vout = dot4au_vx(vout, vlhs, rhs4);
            }

            let lanes: [u32; 8] = vout.into();
            for (l, &v) in lanes.iter().enumerate() {
                out[(i + l) * N + j] = v;
            }
        }
    }
}

fn main() {
    let mut rng = StdRng::seed_from_u64(0x4D4D);

    let lhs: Vec<u8> = (0..M * K).map(|_| rng.gen()).collect();
    let rhs: Vec<u8> = (0..K * N).map(|_| rng.gen()).collect();
    let acc: Vec<u32> = (0..M * N).map(|_| rng.gen()).collect();

    let mut out_ref = vec![0u32; M * N];
    let mut out_emu = vec![0u32; M * N];

    matmul_ref(&mut out_ref, &acc, &lhs, &rhs);
    matmul_dot4(&mut out_emu, &acc, &lhs, &rhs);

    let mut mismatches = 0;
    for i in 0..M {
        for j in 0..N {
            if out_ref[i * N + j] != out_emu[i * N + j] {
                if mismatches < 10 {
                    println!(
                        "Mismatch at ({}, {}): expected {}, got {}",
                        i,
                        j,
                        out_ref[i * N + j],
                        out_emu[i * N + j]
                    );
                }
                mismatches += 1;
            }
        }
    }

    println!("{}x{}x{} u8 matmul: {} mismatches", M, K, N, mismatches);
    if mismatches > 0 {
        std::process::exit(1);
    }
    println!("PASS");
}
