//! Pass sequencing through the public API

use super::*;
use memtest::{NoopProgress, Pattern, ADDRESSING_TITLE, COMPARE_REPEATS, COMPARE_TITLE};

#[test]
fn test_single_pass_u64() {
    let mut memtest = small_memtest::<u64>(16, PassLimit::Finite(1));
    let summary = memtest.run(&mut NoopProgress).unwrap();
    assert_eq!(summary.passes, 1);
    assert_eq!(summary.bytes, 16 * PAGE_SIZE);
}

#[test]
fn test_single_pass_u32() {
    let mut memtest = small_memtest::<u32>(16, PassLimit::Finite(1));
    assert_eq!(memtest.run(&mut NoopProgress).unwrap().passes, 1);
}

#[test]
fn test_multiple_passes_reuse_buffer() {
    let mut memtest = small_memtest::<u64>(4, PassLimit::Finite(4));
    let summary = memtest.run(&mut NoopProgress).unwrap();
    assert_eq!(summary.passes, 4);
}

#[test]
fn test_pass_leaves_checkerboard_in_place() {
    let mut memtest = small_memtest::<u64>(2, PassLimit::Finite(1));
    memtest.run(&mut NoopProgress).unwrap();

    let words = memtest.buffer().as_slice();
    let half = words.len() / 2;
    assert!(words[..half].iter().all(|&w| w == 0xaaaa_aaaa_aaaa_aaaa));
    assert!(words[half..].iter().all(|&w| w == 0x5555_5555_5555_5555));
}

#[test]
fn test_phase_titles_per_pass() {
    let mut memtest = small_memtest::<u64>(4, PassLimit::Finite(1));
    let progress = record_pass(&mut memtest, 7);

    let titles = progress.titles();
    assert_eq!(titles.len(), 1 + Pattern::ALL.len() * (1 + COMPARE_REPEATS));
    assert_eq!(titles[0], ADDRESSING_TITLE);
    assert_eq!(titles[1], "Random fill");
    assert_eq!(titles[2 + COMPARE_REPEATS], "Solid fill");
    assert_eq!(titles[3 + 2 * COMPARE_REPEATS], "Checkerboard fill");
    assert_eq!(
        titles.iter().filter(|&&t| t == COMPARE_TITLE).count(),
        3 * COMPARE_REPEATS
    );
    assert!(progress.phases.iter().all(|&(_, pass)| pass == 7));
}

#[test]
fn test_same_seed_same_summary() {
    let mut a = small_memtest::<u64>(4, PassLimit::Finite(2));
    let mut b = small_memtest::<u64>(4, PassLimit::Finite(2));
    assert_eq!(a.seed(), b.seed());
    let first = a.run(&mut NoopProgress).unwrap();
    let second = b.run(&mut NoopProgress).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.seed, 0x5eed);
}

#[test]
fn test_forever_limit_is_not_run_to_completion() {
    let memtest = small_memtest::<u64>(1, PassLimit::from_count(0));
    assert_eq!(memtest.limit(), PassLimit::Forever);
    assert!(memtest.limit().allows(1_000_000));
}
