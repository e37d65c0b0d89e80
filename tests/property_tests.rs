use huffman::{
    build_codes, build_codes_with, decode, encode, BitString, FrequencyTable, HuffmanTree,
    PriorityQueue, TieBreak, TreeBuilder,
};
use proptest::prelude::*;

fn fixed_width_bits(alphabet: usize, len: usize) -> usize {
    let width = usize::BITS - alphabet.saturating_sub(1).leading_zeros();
    width.max(1) as usize * len
}

proptest! {
    #[test]
    fn test_roundtrip(input in prop::collection::vec(0..12u8, 0..300)) {
        let table = build_codes(&input);
        let bits = encode(&input, table.codes()).unwrap();
        let output = decode(&bits, table.reverse_codes()).unwrap();
        prop_assert_eq!(input, output);
    }

    #[test]
    fn test_roundtrip_text(text in "\\PC{0,200}") {
        let message: Vec<char> = text.chars().collect();
        let table = build_codes(&message);
        let bits = encode(&message, table.codes()).unwrap();
        let output: String = decode(&bits, table.reverse_codes()).unwrap().into_iter().collect();
        prop_assert_eq!(text, output);
    }

    #[test]
    fn test_prefix_free_and_kraft(input in prop::collection::vec(any::<u8>(), 1..400)) {
        let table = build_codes(&input);
        prop_assert!(table.is_prefix_free());
        for (a, code_a) in table.iter() {
            prop_assert!(!code_a.is_empty());
            for (b, code_b) in table.iter() {
                if a != b {
                    prop_assert!(!code_b.starts_with(code_a));
                }
            }
        }
        let kraft = table.kraft_sum();
        prop_assert!(kraft <= 1.0 + 1e-12);
        if table.len() > 1 {
            prop_assert!((kraft - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_weight_conservation(input in prop::collection::vec(0..40u16, 1..300)) {
        let freqs = FrequencyTable::count(input.iter().copied());
        let tree = HuffmanTree::from_frequencies(&freqs).unwrap();
        prop_assert_eq!(tree.weight(), input.len() as u64);
        prop_assert_eq!(tree.leaf_count(), freqs.len());
    }

    #[test]
    fn test_never_worse_than_fixed_width(input in prop::collection::vec(0..20u8, 1..300)) {
        let freqs = FrequencyTable::count(input.iter().copied());
        let table = build_codes(&input);
        let bits = encode(&input, table.codes()).unwrap();
        prop_assert_eq!(Some(bits.len() as u64), table.encoded_len(&freqs));
        prop_assert!(bits.len() <= fixed_width_bits(freqs.len(), input.len()));
    }

    #[test]
    fn test_tie_break_does_not_change_cost(input in prop::collection::vec(0..8u8, 1..200)) {
        let freqs = FrequencyTable::count(input.iter().copied());
        let canonical = build_codes(&input);
        let builder = TreeBuilder::new().tie_break(TieBreak::FrequencyOnly);
        let heap_order = build_codes_with(&input, &builder);
        prop_assert_eq!(canonical.encoded_len(&freqs), heap_order.encoded_len(&freqs));
    }

    #[test]
    fn test_heap_ordering(priorities in prop::collection::vec(any::<u32>(), 0..300)) {
        let mut pq = PriorityQueue::new();
        for &p in &priorities {
            pq.enqueue(p, ());
        }
        let mut last = None;
        let mut count = 0;
        while let Some((p, ())) = pq.dequeue() {
            if let Some(prev) = last {
                prop_assert!(prev <= p);
            }
            last = Some(p);
            count += 1;
        }
        prop_assert_eq!(count, priorities.len());
    }

    #[test]
    fn test_truncation_is_detected(input in prop::collection::vec(0..6u8, 2..100)) {
        let table = build_codes(&input);
        let mut bits = encode(&input, table.codes()).unwrap();
        // a proper prefix of a code is never itself a code
        let last_len = table.get(input.last().unwrap()).unwrap().len();
        prop_assume!(last_len > 1);
        bits.pop();
        prop_assert!(decode(&bits, table.reverse_codes()).is_err());
    }
}

#[test]
fn test_empty_message_contract() {
    let table = build_codes::<char>(&[]);
    assert!(table.is_empty());
    assert_eq!(encode(&[], table.codes()).unwrap(), BitString::new());
    assert!(decode(&BitString::new(), table.reverse_codes()).unwrap().is_empty());
}
