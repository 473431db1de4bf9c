#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn isb(channels: u8, bits: u8, order: u8, width: u32, height: u32, primitive: u8) -> Vec<u8> {
    let mut out = b"ISB\x01".to_vec();
    out.extend_from_slice(&[channels, primitive, bits, order]);
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    let len = width as usize * height as usize * channels as usize * (bits / 8) as usize;
    out.extend((0..len).map(|i| (i * 37) as u8));
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    fs::write(format!("{dir}/bgr8_2x1.isb"), isb(3, 8, 0x03, 2, 1, 0)).unwrap();
    fs::write(format!("{dir}/bgra8_3x2.isb"), isb(4, 8, 0x05, 3, 2, 0)).unwrap();
    fs::write(format!("{dir}/argb8_2x2.isb"), isb(4, 8, 0x06, 2, 2, 0)).unwrap();
    fs::write(format!("{dir}/abgr16_2x2.isb"), isb(4, 16, 0x07, 2, 2, 0)).unwrap();
    fs::write(format!("{dir}/gray16_4x1.isb"), isb(1, 16, 0x00, 4, 1, 0)).unwrap();
    fs::write(format!("{dir}/rgb24bit_1x1.isb"), isb(3, 24, 0x02, 1, 1, 0)).unwrap();
    fs::write(format!("{dir}/two_channel_1x1.isb"), isb(2, 8, 0x00, 1, 1, 0)).unwrap();
    fs::write(format!("{dir}/signed_1x1.isb"), isb(3, 8, 0x03, 1, 1, 1)).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_magic.bin"), b"ISB").unwrap();
    fs::write(format!("{dir}/bad_version.bin"), b"ISB\x02\x03\x00\x08\x03\x01\x00\x00\x00\x01\x00\x00\x00").unwrap();
    let mut short = isb(3, 8, 0x03, 2, 2, 0);
    short.pop();
    fs::write(format!("{dir}/short_payload.bin"), short).unwrap();

    println!("Generated seed corpus in {dir}/");
}
