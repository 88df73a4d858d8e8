#![no_main]
use bitvec::prelude::*;
use huffman::{build_code, decode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (String, Vec<u8>)| {
    let (text, noise) = data;

    if text.is_empty() {
        return;
    }

    let (tree, table) = build_code(&text).unwrap();

    // Lossless round-trip for any non-empty text.
    let labels = table.encode(&text).unwrap();
    let decoded = decode(&tree, &labels).unwrap();
    assert_eq!(text, decoded);

    // Arbitrary label sequences must decode or fail, never panic.
    let mut garbage = BitVec::new();
    for byte in noise {
        for shift in 0..8 {
            garbage.push((byte >> shift) & 1 == 1);
        }
    }
    let _ = decode(&tree, &garbage);
});
