//! Fault scenarios driven through the re-exported phase functions

use memtest::testing::flip_bit;
use memtest::{compare, fill, verify_addressing, Error, MemoryFault, NoopProgress, Pattern};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;

#[test]
fn test_one_page_solid_has_no_mismatch() {
    let mut buffer = TestBuffer::<u64>::with_bytes(PAGE_SIZE).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    fill(buffer.as_mut_slice(), Pattern::Solid, &mut rng, &mut NoopProgress);

    assert_eq!(buffer.half_words(), 256);
    assert_eq!(
        compare(buffer.as_slice(), Pattern::Solid, &mut NoopProgress),
        Ok(())
    );
}

#[test]
fn test_checkerboard_flip_reports_index() {
    let mut buffer = TestBuffer::<u64>::with_bytes(8 * PAGE_SIZE).unwrap();
    let half = buffer.half_words();
    let k = 1234;
    let mut rng = StdRng::seed_from_u64(0);
    fill(buffer.as_mut_slice(), Pattern::Checkerboard, &mut rng, &mut NoopProgress);
    flip_bit(buffer.as_mut_slice(), half + k, 62);

    let fault = compare(buffer.as_slice(), Pattern::Checkerboard, &mut NoopProgress).unwrap_err();
    match fault {
        MemoryFault::Mismatch {
            index,
            value1,
            value2,
            ..
        } => {
            assert_eq!(index, k);
            assert_eq!(value1, 0xaaaa_aaaa_aaaa_aaaa);
            assert_eq!(value2, 0x5555_5555_5555_5555 ^ (1 << 62));
        }
        other => panic!("unexpected fault: {other:?}"),
    }
}

#[test]
fn test_addressing_on_fresh_buffer() {
    for pages in [1, 7, 32] {
        let mut buffer = TestBuffer::<u64>::with_bytes(pages * PAGE_SIZE).unwrap();
        assert_eq!(
            verify_addressing(buffer.as_mut_slice(), &mut NoopProgress),
            Ok(())
        );
    }
}

#[test]
fn test_fault_converts_to_error_with_exit_code_one() {
    let mut buffer = TestBuffer::<u32>::with_bytes(PAGE_SIZE).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    fill(buffer.as_mut_slice(), Pattern::Random, &mut rng, &mut NoopProgress);
    flip_bit(buffer.as_mut_slice(), 0, 0);

    let err: Error = compare(buffer.as_slice(), Pattern::Random, &mut NoopProgress)
        .unwrap_err()
        .into();
    assert_eq!(err.exit_code(), 1);
    assert!(err.as_fault().is_some());
}

#[test]
fn test_allocation_failure_is_reported() {
    let err = TestBuffer::<u64>::allocate(usize::MAX / (1024 * 1024)).unwrap_err();
    assert!(matches!(err, Error::AllocationFailure { .. }));
    assert!(err.to_string().starts_with("Unable to allocate"));
    assert_eq!(err.exit_code(), 1);
}
