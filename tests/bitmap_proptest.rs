use katomic::compat::{
    bitmap_weight, find_first_bit, find_first_zero_bit, find_next_bit, find_next_zero_bit,
};
use katomic::AtomicBitmap;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    Set(usize),
    Clear(usize),
    Change(usize),
    TestAndSet(usize),
    TestAndClear(usize),
}

fn model_find(model: &[bool], offset: usize, want: bool) -> usize {
    (offset..model.len()).find(|&i| model[i] == want).unwrap_or(model.len())
}

proptest! {
    #[test]
    fn bitmap_matches_bool_vec(
        (bits, ops) in (1usize..200).prop_flat_map(|bits| {
            let op = prop_oneof![
                (0..bits).prop_map(Operation::Set),
                (0..bits).prop_map(Operation::Clear),
                (0..bits).prop_map(Operation::Change),
                (0..bits).prop_map(Operation::TestAndSet),
                (0..bits).prop_map(Operation::TestAndClear),
            ];
            (Just(bits), proptest::collection::vec(op, 0..300))
        })
    ) {
        let map = AtomicBitmap::new(bits);
        let mut model = vec![false; bits];

        for op in ops {
            match op {
                Operation::Set(b) => {
                    map.set(b);
                    model[b] = true;
                }
                Operation::Clear(b) => {
                    map.clear(b);
                    model[b] = false;
                }
                Operation::Change(b) => {
                    map.change(b);
                    model[b] = !model[b];
                }
                Operation::TestAndSet(b) => {
                    prop_assert_eq!(map.test_and_set(b), model[b]);
                    model[b] = true;
                }
                Operation::TestAndClear(b) => {
                    prop_assert_eq!(map.test_and_clear(b), model[b]);
                    model[b] = false;
                }
            }
        }

        for (i, &expected) in model.iter().enumerate() {
            prop_assert_eq!(map.is_set(i), expected, "bit {} mismatch", i);
        }
        prop_assert_eq!(map.count_ones(), model.iter().filter(|&&b| b).count());
        prop_assert_eq!(map.find_first_zero(), model_find(&model, 0, false));
        prop_assert_eq!(map.find_first_set(), model_find(&model, 0, true));
    }

    #[test]
    fn scans_match_model(
        words in proptest::collection::vec(any::<usize>(), 0..5),
        size_cut in 0usize..usize::BITS as usize,
        offset in 0usize..400,
    ) {
        let word_bits = usize::BITS as usize;
        let size = (words.len() * word_bits).saturating_sub(size_cut);
        let model: Vec<bool> = (0..size)
            .map(|i| words[i / word_bits] >> (i % word_bits) & 1 == 1)
            .collect();
        let addr: Vec<_> = words.iter().map(|&w| core::sync::atomic::AtomicUsize::new(w)).collect();

        prop_assert_eq!(find_first_zero_bit(&addr, size), model_find(&model, 0, false));
        prop_assert_eq!(find_first_bit(&addr, size), model_find(&model, 0, true));
        prop_assert_eq!(find_next_zero_bit(&addr, size, offset), model_find(&model, offset, false));
        prop_assert_eq!(find_next_bit(&addr, size, offset), model_find(&model, offset, true));
        prop_assert_eq!(bitmap_weight(&addr, size), model.iter().filter(|&&b| b).count());
    }
}
