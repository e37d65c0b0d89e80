use huffman::{build_codes, decode, encode};

fn main() {
    let input = (0..10000).map(|i| (i * i % 17) as u8).collect::<Vec<_>>();

    for _ in 0..1000 {
        let table = build_codes(&input);
        let bits = match encode(&input, table.codes()) {
            Ok(bits) => bits,
            Err(e) => {
                eprintln!("encode failed: {e}");
                return;
            }
        };
        match decode(&bits, table.reverse_codes()) {
            Ok(output) => assert_eq!(output.len(), input.len()),
            Err(e) => {
                eprintln!("decode failed: {e}");
                return;
            }
        }
    }
}
