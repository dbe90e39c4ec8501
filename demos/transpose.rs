//! Transpose 4×4 u32 blocks with two element-pairing rounds.
//!
//! Four rows of N elements hold N/4 consecutive 4×4 matrices row-major.
//! Round one pairs adjacent 32-bit elements; round two pairs adjacent
//! 64-bit groups (the register reinterpreted at the doubled width).
//! After both rounds the four rows hold the four columns.

use zvbb_emu::reg::{VReg, u32x4, u64x2};
use zvbb_emu::{paire_vv, pairo_vv};

const N: usize = 16; // four 4x4 blocks

fn transpose_blocks(row0: &mut [u32], row1: &mut [u32], row2: &mut [u32], row3: &mut [u32]) {
    for k in (0..N).step_by(4) {
        let v1 = <u32x4 as VReg>::load(&row0[k..]);
        let v2 = <u32x4 as VReg>::load(&row1[k..]);
        let v3 = <u32x4 as VReg>::load(&row2[k..]);
        let v4 = <u32x4 as VReg>::load(&row3[k..]);

        // Round 1 - pair adjacent 32-bit elements
        let v5 = paire_vv(v1, v2);
        let v6 = pairo_vv(v1, v2);
        let v7 = paire_vv(v3, v4);
        let v8 = pairo_vv(v3, v4);

        // Round 2 - pair adjacent 64-bit groups
        let w5: u64x2 = bytemuck::cast(v5);
        let w6: u64x2 = bytemuck::cast(v6);
        let w7: u64x2 = bytemuck::cast(v7);
        let w8: u64x2 = bytemuck::cast(v8);

        let c0: u32x4 = bytemuck::cast(paire_vv(w5, w7));
        let c1: u32x4 = bytemuck::cast(paire_vv(w6, w8));
        let c2: u32x4 = bytemuck::cast(pairo_vv(w5, w7));
        let c3: u32x4 = bytemuck::cast(pairo_vv(w6, w8));

        c0.store(&mut row0[k..]);
        c1.store(&mut row1[k..]);
        c2.store(&mut row2[k..]);
        c3.store(&mut row3[k..]);
    }
}

fn print_row(label: &str, row: &[u32]) {
    print!("  {}:", label);
    for v in row {
        print!(" {:3}", v);
    }
    println!();
}

fn main() {
    // Block b holds values 100*b + 10*row + col.
    let make_row = |r: usize| -> Vec<u32> {
        (0..N)
            .map(|i| (100 * (i / 4) + 10 * r + i % 4) as u32)
            .collect()
    };

    let mut rows = [make_row(0), make_row(1), make_row(2), make_row(3)];

    println!("=== Input (row-major 4x4 blocks) ===");
    for (r, row) in rows.iter().enumerate() {
        print_row(&format!("row{}", r), row);
    }

    // Scalar reference: transpose each 4x4 block independently.
    let expected: Vec<Vec<u32>> = (0..4usize)
        .map(|r| {
            (0..N)
                .map(|i| {
                    let block = i / 4;
                    let col = i % 4;
                    rows[col][block * 4 + r]
                })
                .collect()
        })
        .collect();

    let [ref mut r0, ref mut r1, ref mut r2, ref mut r3] = rows;
    transpose_blocks(r0, r1, r2, r3);

    println!("\n=== Transposed (column-major 4x4 blocks) ===");
    for (r, row) in rows.iter().enumerate() {
        print_row(&format!("row{}", r), row);
    }

    let mut mismatches = 0;
    for (r, (got, want)) in rows.iter().zip(expected.iter()).enumerate() {
        if got != want {
            println!("MISMATCH in row{}", r);
            print_row("expected", want);
            print_row("     got", got);
            mismatches += 1;
        }
    }

    if mismatches == 0 {
        println!("\nAll {} blocks transposed correctly", N / 4);
    } else {
        println!("\n{} row(s) wrong", mismatches);
        std::process::exit(1);
    }
}
