use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Barrier;
use std::thread;

use katomic::compat::*;
use katomic::{AtomicBitmap, BitRangeError};

fn bitmap(nbits: usize) -> Vec<AtomicUsize> {
    (0..bits_to_longs(nbits)).map(|_| AtomicUsize::new(0)).collect()
}

#[test]
fn bits_to_longs_boundaries() {
    assert_eq!(bits_to_longs(0), 0);
    assert_eq!(bits_to_longs(1), 1);
    assert_eq!(bits_to_longs(BITS_PER_LONG), 1);
    assert_eq!(bits_to_longs(BITS_PER_LONG + 1), 2);
    assert_eq!(BITS_PER_LONG, usize::BITS as usize);
}

#[test]
fn test_and_set_bit_has_one_winner() {
    const THREADS: usize = 8;
    const ROUNDS: usize = 200;

    for _ in 0..ROUNDS {
        let map = bitmap(2 * BITS_PER_LONG);
        let barrier = Barrier::new(THREADS);
        let nr = BITS_PER_LONG + 7;

        let winners: usize = thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    let (map, barrier) = (&map, &barrier);
                    s.spawn(move || {
                        barrier.wait();
                        usize::from(!test_and_set_bit(nr, map))
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).sum()
        });

        assert_eq!(winners, 1);
        assert!(test_bit(nr, &map));
        assert_eq!(bitmap_weight(&map, 2 * BITS_PER_LONG), 1);
    }
}

#[test]
fn neighbouring_bits_do_not_interfere() {
    let map = bitmap(BITS_PER_LONG);
    thread::scope(|s| {
        for bit in 0..BITS_PER_LONG {
            let map = &map;
            s.spawn(move || {
                for _ in 0..100 {
                    set_bit(bit, map);
                    clear_bit(bit, map);
                }
                set_bit(bit, map);
            });
        }
    });
    assert_eq!(map[0].load(Ordering::SeqCst), !0);
    assert_eq!(find_first_zero_bit(&map, BITS_PER_LONG), BITS_PER_LONG);
}

#[test]
fn find_first_zero_bit_without_writers() {
    let size = 3 * BITS_PER_LONG;
    let map = bitmap(size);
    assert_eq!(find_first_zero_bit(&map, size), 0);

    for bit in 0..(BITS_PER_LONG + 9) {
        set_bit(bit, &map);
    }
    assert_eq!(find_first_zero_bit(&map, size), BITS_PER_LONG + 9);

    set_bit(BITS_PER_LONG + 10, &map);
    assert_eq!(find_next_zero_bit(&map, size, BITS_PER_LONG + 10), BITS_PER_LONG + 11);
    assert_eq!(find_first_bit(&map, size), 0);
    assert_eq!(find_next_bit(&map, size, BITS_PER_LONG + 9), BITS_PER_LONG + 10);

    bitmap_fill(&map, size);
    assert_eq!(find_first_zero_bit(&map, size), size);
    bitmap_zero(&map, size);
    assert_eq!(find_first_bit(&map, size), size);
}

#[test]
fn find_and_claim_hands_out_unique_slots() {
    const SLOTS: usize = 100;
    const THREADS: usize = 4;

    let map = AtomicBitmap::new(SLOTS);
    let mut claimed: Vec<usize> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let map = &map;
                s.spawn(move || {
                    let mut mine = Vec::new();
                    loop {
                        let slot = map.find_first_zero();
                        if slot == SLOTS {
                            break mine;
                        }
                        // The scan can be stale; the RMW decides ownership.
                        if !map.test_and_set(slot) {
                            mine.push(slot);
                        }
                    }
                })
            })
            .collect();
        handles.into_iter().flat_map(|h| h.join().unwrap()).collect()
    });

    claimed.sort_unstable();
    assert_eq!(claimed, (0..SLOTS).collect::<Vec<_>>());
    assert_eq!(map.count_ones(), SLOTS);
}

#[test]
fn change_bit_round_trips() {
    let map = bitmap(10);
    change_bit(4, &map);
    assert!(test_and_change_bit(4, &map));
    assert!(!test_bit(4, &map));
    set_bit(4, &map);
    assert!(test_and_clear_bit(4, &map));
    assert_eq!(map[0].load(Ordering::SeqCst), 0);
    assert_eq!(bit_word(4), 0);
    assert_eq!(bit_mask(4), 1 << 4);
}

#[test]
fn checked_bitmap_access() -> anyhow::Result<()> {
    let map = AtomicBitmap::new(65);
    map.try_set(64)?;
    assert!(map.try_is_set(64)?);
    assert!(map.try_test_and_set(64)?);
    assert!(map.try_test_and_clear(64)?);
    map.try_clear(0)?;

    let err = map.try_set(65).unwrap_err();
    assert_eq!(err, BitRangeError { bit: 65, len: 65 });
    assert_eq!(err.to_string(), "bit 65 out of range for bitmap of 65 bits");

    assert!(probe(&map, 100).is_err());
    Ok(())
}

fn probe(map: &AtomicBitmap, bit: usize) -> anyhow::Result<bool> {
    Ok(map.try_is_set(bit)?)
}
