//! Mirrored fill and compare
//!
//! The buffer is split at its midpoint into two halves of equal length.
//! A fill writes a pattern value into each first-half word and the
//! matching value into the word at the same index of the second half; a
//! compare then reads both halves back and checks every pair.
//!
//! ## Access order
//!
//! The fill walks the first half with a stride of one page: the outer loop
//! is the word offset within a page, the inner loop the page index. Two
//! consecutive writes never land in the same page, which keeps caches and
//! page-level OS optimizations from hiding faults. The compare runs after the
//! fill has already scattered locality, so it reads linearly.

use memtest_core::limits::{is_page_multiple, on_progress_tick, words_per_page};
use memtest_core::{load, store, MemoryFault, Pattern, ProgressReporter, Word, COMPARE_SYMBOL};
use rand::RngCore;

fn assert_page_multiple<W: Word>(memory: &[W]) {
    assert!(
        is_page_multiple(memory.len() * W::SIZE),
        "test buffer of {} bytes is not a whole number of pages",
        memory.len() * W::SIZE
    );
}

/// Fill both halves of `memory` with `pattern` in page-strided order.
///
/// Random patterns draw one value per step from `rng` and store it in both
/// halves. Progress ticks carry the pattern symbol and count first-half words.
///
/// # Panics
///
/// If `memory` is not a whole number of pages long.
pub fn fill<W, R, P>(memory: &mut [W], pattern: Pattern, rng: &mut R, progress: &mut P)
where
    W: Word,
    R: RngCore + ?Sized,
    P: ProgressReporter + ?Sized,
{
    assert_page_multiple(memory);
    let step = words_per_page(W::SIZE);
    let half = memory.len() / 2;
    let (first, second) = memory.split_at_mut(half);

    let mut done = 0usize;
    for offset in 0..step.min(half) {
        let mut index = offset;
        while index < half {
            let descriptor = pattern.next_descriptor::<W, R>(rng);
            store(&mut first[index], descriptor.first);
            store(&mut second[index], descriptor.second);

            if on_progress_tick(done) {
                progress.step(done, half, descriptor.symbol);
            }
            done += 1;
            index += step;
        }
    }
    debug_assert_eq!(done, half);
}

/// Compare the two halves of `memory` word by word against `pattern`.
///
/// Stops at the first pair the pattern could not have produced and reports
/// both addresses and both observed values.
///
/// # Panics
///
/// If `memory` is not a whole number of pages long.
pub fn compare<W, P>(memory: &[W], pattern: Pattern, progress: &mut P) -> Result<(), MemoryFault>
where
    W: Word,
    P: ProgressReporter + ?Sized,
{
    assert_page_multiple(memory);
    let half = memory.len() / 2;
    let (first, second) = memory.split_at(half);

    for (index, (slot1, slot2)) in first.iter().zip(second.iter()).enumerate() {
        let value1 = load(slot1);
        let value2 = load(slot2);
        if !pattern.pair_holds(value1, value2) {
            return Err(MemoryFault::Mismatch {
                index,
                address1: W::address_of(slot1),
                address2: W::address_of(slot2),
                value1: value1.to_u64(),
                value2: value2.to_u64(),
            });
        }
        if on_progress_tick(index) {
            progress.step(index, half, COMPARE_SYMBOL);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{flip_bit, RecordingProgress};
    use memtest_core::{random_word, NoopProgress, PAGE_SIZE};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pages<W: Word>(count: usize) -> Vec<W> {
        vec![W::ZERO; count * PAGE_SIZE / W::SIZE]
    }

    #[test]
    fn test_solid_single_page_compares_clean() {
        let mut memory = pages::<u64>(1);
        let mut rng = StdRng::seed_from_u64(1);
        fill(&mut memory, Pattern::Solid, &mut rng, &mut NoopProgress);

        let (first, second) = memory.split_at(256);
        assert!(first.iter().all(|&w| w == 0));
        assert!(second.iter().all(|&w| w == u64::MAX));
        assert_eq!(compare(&memory, Pattern::Solid, &mut NoopProgress), Ok(()));
    }

    #[test]
    fn test_checkerboard_halves_are_complements() {
        let mut memory = pages::<u32>(3);
        let mut rng = StdRng::seed_from_u64(1);
        fill(&mut memory, Pattern::Checkerboard, &mut rng, &mut NoopProgress);

        let half = memory.len() / 2;
        for i in 0..half {
            assert_eq!(memory[i], 0xaaaa_aaaa);
            assert_eq!(memory[i], !memory[i + half]);
        }
    }

    #[test]
    fn test_random_fill_mirrors_halves() {
        let mut memory = pages::<u64>(4);
        let mut rng = StdRng::seed_from_u64(99);
        fill(&mut memory, Pattern::Random, &mut rng, &mut NoopProgress);

        let half = memory.len() / 2;
        assert_eq!(memory[..half], memory[half..]);
        assert!(memory.iter().any(|&w| w != 0));
        assert_eq!(compare(&memory, Pattern::Random, &mut NoopProgress), Ok(()));
    }

    #[test]
    fn test_random_fill_is_page_strided() {
        // With a fixed seed, the k-th drawn value lands at offset-major order.
        let mut memory = pages::<u64>(4);
        fill(
            &mut memory,
            Pattern::Random,
            &mut StdRng::seed_from_u64(5),
            &mut NoopProgress,
        );

        let mut replay = StdRng::seed_from_u64(5);
        let step = PAGE_SIZE / 8;
        let half = memory.len() / 2;
        let first = random_word::<u64, _>(&mut replay);
        let second = random_word::<u64, _>(&mut replay);
        assert_eq!(memory[0], first);
        assert_eq!(memory[step], second);
        assert_eq!(memory[half + step], second);
    }

    #[test]
    fn test_compare_reports_first_mismatch() {
        let mut memory = pages::<u64>(2);
        let mut rng = StdRng::seed_from_u64(3);
        fill(&mut memory, Pattern::Random, &mut rng, &mut NoopProgress);

        let half = memory.len() / 2;
        flip_bit(&mut memory, half + 10, 0);
        flip_bit(&mut memory, 20, 5);

        let fault = compare(&memory, Pattern::Random, &mut NoopProgress).unwrap_err();
        match fault {
            MemoryFault::Mismatch {
                index,
                address1,
                address2,
                value1,
                value2,
            } => {
                assert_eq!(index, 10);
                assert_eq!(address1, u64::address_of(&memory[10]));
                assert_eq!(address2, u64::address_of(&memory[half + 10]));
                assert_eq!(value1, memory[10]);
                assert_eq!(value2, memory[half + 10]);
                assert_eq!(value1 ^ value2, 1);
            }
            other => panic!("unexpected fault: {other:?}"),
        }
    }

    #[test]
    fn test_compare_is_repeatable() {
        let mut memory = pages::<u64>(2);
        let mut rng = StdRng::seed_from_u64(8);
        fill(&mut memory, Pattern::Checkerboard, &mut rng, &mut NoopProgress);
        for _ in 0..4 {
            assert_eq!(compare(&memory, Pattern::Checkerboard, &mut NoopProgress), Ok(()));
        }
    }

    #[test]
    fn test_solid_compare_rejects_swapped_halves() {
        let mut memory = pages::<u64>(1);
        let half = memory.len() / 2;
        for w in &mut memory[..half] {
            *w = u64::MAX;
        }
        let fault = compare(&memory, Pattern::Solid, &mut NoopProgress).unwrap_err();
        assert!(matches!(fault, MemoryFault::Mismatch { index: 0, .. }));
    }

    #[test]
    fn test_progress_cadence() {
        // 2 MiB of u64: 131072 words per half, ticks at 0 and 65536.
        let mut memory = pages::<u64>(512);
        let mut rng = StdRng::seed_from_u64(0);
        let mut progress = RecordingProgress::default();

        fill(&mut memory, Pattern::Solid, &mut rng, &mut progress);
        compare(&memory, Pattern::Solid, &mut progress).unwrap();

        let half = memory.len() / 2;
        assert_eq!(
            progress.steps,
            vec![
                (0, half, 'S'),
                (65536, half, 'S'),
                (0, half, '='),
                (65536, half, '='),
            ]
        );
    }

    #[test]
    #[should_panic(expected = "not a whole number of pages")]
    fn test_fill_rejects_partial_page() {
        let mut memory = vec![0u64; 100];
        fill(
            &mut memory,
            Pattern::Solid,
            &mut StdRng::seed_from_u64(0),
            &mut NoopProgress,
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn any_single_flip_is_found_at_its_pair(
                seed in any::<u64>(),
                pages_count in 1usize..6,
                slot in any::<prop::sample::Index>(),
                bit in 0u32..64,
                pattern in prop::sample::select(Pattern::ALL.to_vec()),
            ) {
                let mut memory = pages::<u64>(pages_count);
                let half = memory.len() / 2;
                fill(&mut memory, pattern, &mut StdRng::seed_from_u64(seed), &mut NoopProgress);
                prop_assert_eq!(compare(&memory, pattern, &mut NoopProgress), Ok(()));

                let target = slot.index(memory.len());
                flip_bit(&mut memory, target, bit);
                let fault = compare(&memory, pattern, &mut NoopProgress).unwrap_err();
                match fault {
                    MemoryFault::Mismatch { index, .. } => prop_assert_eq!(index, target % half),
                    other => prop_assert!(false, "unexpected fault: {:?}", other),
                }
            }
        }
    }
}
