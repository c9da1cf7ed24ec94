//! Tuning constants and digit-unit aliases shared across the crate.

/// One storage digit. The internal base is [`BASE`].
pub type Digit = u8;

/// Unsigned accumulator twice as wide as [`Digit`], wide enough that a
/// digit-wise product or sum plus carry never overflows.
pub type Wide = u16;

/// Signed counterpart of [`Wide`], used for borrow propagation.
pub type SignedWide = i16;

/// Largest value a single digit can hold.
pub const UNIT_MAX: Wide = Digit::MAX as Wide;

/// The internal base, `UNIT_MAX + 1`.
pub const BASE: Wide = UNIT_MAX + 1;

/// Digit storage grows to the next multiple of this increment.
pub const INCREMENT: usize = 2;

/// Largest magnitude served out of the constant caches.
pub const MAX_CONSTANT: usize = 16;

/// Glyphs for rendered decimal digits.
pub const DIGITS: [char; 10] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];
