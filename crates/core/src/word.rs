//! The machine word every test phase reads and writes
//!
//! All masks, fills and address-as-value writes happen at one width per test
//! run. The width is a type parameter bounded by [`Word`]; binaries pick
//! [`NativeWord`], which matches the pointer width of the build target.

use std::fmt;

/// An unsigned integer usable as the unit of fill and compare.
///
/// Implemented for `u32` and `u64`.
pub trait Word: Copy + Eq + fmt::Debug + fmt::LowerHex + Send + Sync + 'static {
    /// Width in bits.
    const BITS: u32;

    /// Width in bytes.
    const SIZE: usize;

    /// All bits clear.
    const ZERO: Self;

    /// All bits set (the unsigned maximum).
    const ALL_ONES: Self;

    /// Alternating bits starting with the high bit set: `1010...`.
    const ONE_ZERO: Self;

    /// Alternating bits starting with the high bit clear: `0101...`.
    const ZERO_ONE: Self;

    /// Pointer-to-integer cast, truncated to this width.
    fn from_address(address: usize) -> Self;

    /// Truncating conversion from a 64-bit value.
    fn from_u64(value: u64) -> Self;

    /// Widening conversion used by fault reports.
    fn to_u64(self) -> u64;

    /// Address of a word slot.
    #[inline]
    fn address_of(slot: &Self) -> usize {
        slot as *const Self as usize
    }
}

macro_rules! impl_word {
    ($ty:ty, $one_zero:expr, $zero_one:expr) => {
        impl Word for $ty {
            const BITS: u32 = <$ty>::BITS;
            const SIZE: usize = std::mem::size_of::<$ty>();
            const ZERO: Self = 0;
            const ALL_ONES: Self = <$ty>::MAX;
            const ONE_ZERO: Self = $one_zero;
            const ZERO_ONE: Self = $zero_one;

            #[inline]
            fn from_address(address: usize) -> Self {
                address as $ty
            }

            #[inline]
            fn from_u64(value: u64) -> Self {
                value as $ty
            }

            #[inline]
            fn to_u64(self) -> u64 {
                self as u64
            }
        }
    };
}

impl_word!(u32, 0xaaaa_aaaa, 0x5555_5555);
impl_word!(u64, 0xaaaa_aaaa_aaaa_aaaa, 0x5555_5555_5555_5555);

/// Word type matching the pointer width of the target.
#[cfg(target_pointer_width = "64")]
pub type NativeWord = u64;

/// Word type matching the pointer width of the target.
#[cfg(target_pointer_width = "32")]
pub type NativeWord = u32;

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("memtest supports only 32-bit and 64-bit targets");

/// Write a word so that the store cannot be elided or merged.
#[inline(always)]
pub fn store<W: Word>(slot: &mut W, value: W) {
    // SAFETY: `slot` is a live, aligned, exclusive reference.
    unsafe { std::ptr::write_volatile(slot, value) }
}

/// Read a word so that the load is actually issued against memory.
#[inline(always)]
pub fn load<W: Word>(slot: &W) -> W {
    // SAFETY: `slot` is a live, aligned reference.
    unsafe { std::ptr::read_volatile(slot) }
}
