#![no_main]
use huffman::{build_codes, decode, encode, BitString};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<u8>, Vec<bool>)| {
    let (input, noise) = data;

    let table = build_codes(&input);
    let bits = encode(&input, table.codes()).expect("table built from input");
    let output = decode(&bits, table.reverse_codes()).expect("own encoding decodes");
    assert_eq!(input, output);
    assert!(table.is_prefix_free());

    // Arbitrary bits must either decode or be rejected, never panic.
    let noise = BitString::from(noise);
    if let Ok(symbols) = decode(&noise, table.reverse_codes()) {
        let reencoded = encode(&symbols, table.codes()).expect("decoded symbols have codes");
        assert_eq!(reencoded, noise);
    }
});
