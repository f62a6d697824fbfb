//! Pattern engine
//!
//! Produces the values written by each test phase. Nothing here touches
//! memory; the engine crate drives the actual fills.
//!
//! ## Patterns
//!
//! - **Addressing**: every word holds its own address.
//! - **Random**: one fresh value per fill step, written to both halves.
//! - **Solid**: first half all zero bits, second half all one bits.
//! - **Checkerboard**: first half `1010...`, second half `0101...`, so every
//!   adjacent bit pair differs and each mirrored pair is a bitwise complement.

use rand::RngCore;

use crate::word::Word;

/// Progress symbol of the addressing phase.
pub const ADDRESSING_SYMBOL: char = 'A';

/// Progress symbol of a compare phase.
pub const COMPARE_SYMBOL: char = '=';

/// Width of one pseudo-random draw that is actually used.
const CHUNK_BITS: u32 = 16;
const CHUNK_MASK: u32 = 0xffff;

/// Values for one fill step: what goes into the first-half word, what goes
/// into its mirror in the second half, and the progress symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternDescriptor<W> {
    /// Value stored in the first half.
    pub first: W,
    /// Value stored at the mirrored position in the second half.
    pub second: W,
    /// Progress symbol of the fill phase.
    pub symbol: char,
}

/// Fill strategies run in every pass, after the addressing test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Pseudo-random words, identical in both halves.
    Random,
    /// Zero bits in the first half, one bits in the second.
    Solid,
    /// `1010...` in the first half, `0101...` in the second.
    Checkerboard,
}

impl Pattern {
    /// All fill patterns in pass order.
    pub const ALL: [Pattern; 3] = [Pattern::Random, Pattern::Solid, Pattern::Checkerboard];

    /// Progress symbol of this pattern's fill phase.
    pub fn symbol(self) -> char {
        match self {
            Pattern::Random => 'R',
            Pattern::Solid => 'S',
            Pattern::Checkerboard => 'C',
        }
    }

    /// Phase title shown by progress reporters.
    pub fn title(self) -> &'static str {
        match self {
            Pattern::Random => "Random fill",
            Pattern::Solid => "Solid fill",
            Pattern::Checkerboard => "Checkerboard fill",
        }
    }

    /// Short lowercase name used in log fields.
    pub fn name(self) -> &'static str {
        match self {
            Pattern::Random => "random",
            Pattern::Solid => "solid",
            Pattern::Checkerboard => "checkerboard",
        }
    }

    /// Descriptor of a fixed-value pattern; `None` for [`Pattern::Random`].
    pub fn fixed_descriptor<W: Word>(self) -> Option<PatternDescriptor<W>> {
        let (first, second) = match self {
            Pattern::Random => return None,
            Pattern::Solid => (W::ZERO, W::ALL_ONES),
            Pattern::Checkerboard => (W::ONE_ZERO, W::ZERO_ONE),
        };
        Some(PatternDescriptor {
            first,
            second,
            symbol: self.symbol(),
        })
    }

    /// Descriptor for the next fill step.
    ///
    /// Random draws a fresh value and puts it in both halves; the fixed
    /// patterns never touch `rng`.
    pub fn next_descriptor<W: Word, R: RngCore + ?Sized>(self, rng: &mut R) -> PatternDescriptor<W> {
        match self.fixed_descriptor() {
            Some(descriptor) => descriptor,
            None => {
                let value = random_word(rng);
                PatternDescriptor {
                    first: value,
                    second: value,
                    symbol: self.symbol(),
                }
            }
        }
    }

    /// Whether a first-half word and its mirror are what this pattern wrote.
    ///
    /// Random only requires the two to be equal. Fixed patterns require the
    /// exact descriptor values on each side.
    #[inline]
    pub fn pair_holds<W: Word>(self, first: W, second: W) -> bool {
        match self.fixed_descriptor::<W>() {
            None => first == second,
            Some(expected) => first == expected.first && second == expected.second,
        }
    }
}

/// Assemble a word from 16-bit pseudo-random chunks.
///
/// Each draw is masked to its low 16 bits and OR-ed into the next quadrant,
/// lowest first: four draws for a 64-bit word, two for a 32-bit word.
pub fn random_word<W: Word, R: RngCore + ?Sized>(rng: &mut R) -> W {
    let mut value: u64 = 0;
    let mut shift = 0;
    while shift < W::BITS {
        value |= u64::from(rng.next_u32() & CHUNK_MASK) << shift;
        shift += CHUNK_BITS;
    }
    W::from_u64(value)
}

/// Value the addressing test stores at `address`.
#[inline]
pub fn addressing_value<W: Word>(address: usize) -> W {
    W::from_address(address)
}
