//! Addressing test
//!
//! Writes each word's own address into it across the whole buffer, then
//! reads everything back. Both passes are plain linear walks with no halving
//! and no page stride: the target is stuck address lines, which show up as
//! a word holding some other word's address.

use memtest_core::limits::on_progress_tick;
use memtest_core::{
    addressing_value, load, store, MemoryFault, ProgressReporter, Word, ADDRESSING_SYMBOL,
};

/// Store every word's address into itself.
///
/// Progress counts against twice the word count, since the check pass that
/// follows reports the second half of the phase.
pub fn fill_addressing<W, P>(memory: &mut [W], progress: &mut P)
where
    W: Word,
    P: ProgressReporter + ?Sized,
{
    let words = memory.len();
    let total = words * 2;
    for (index, slot) in memory.iter_mut().enumerate() {
        let value = addressing_value::<W>(W::address_of(slot));
        store(slot, value);
        if on_progress_tick(index) {
            progress.step(index, total, ADDRESSING_SYMBOL);
        }
    }
}

/// Re-read every word and confirm it still holds its own address.
pub fn check_addressing<W, P>(memory: &[W], progress: &mut P) -> Result<(), MemoryFault>
where
    W: Word,
    P: ProgressReporter + ?Sized,
{
    let words = memory.len();
    let total = words * 2;
    for (index, slot) in memory.iter().enumerate() {
        let address = W::address_of(slot);
        let value = load(slot);
        if value != addressing_value::<W>(address) {
            return Err(MemoryFault::Addressing {
                address,
                value: value.to_u64(),
            });
        }
        if on_progress_tick(index) {
            progress.step(index + words, total, ADDRESSING_SYMBOL);
        }
    }
    Ok(())
}

/// Run the full addressing test: fill, then check.
pub fn verify_addressing<W, P>(memory: &mut [W], progress: &mut P) -> Result<(), MemoryFault>
where
    W: Word,
    P: ProgressReporter + ?Sized,
{
    fill_addressing(memory, progress);
    check_addressing(memory, progress)
}
