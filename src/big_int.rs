//! # BigInt
//! Growable arbitrary-precision signed integers stored as base-256 digits.
//!
//! A value owns its digit buffer exclusively; addition mutates the left
//! operand in place and grows storage on demand, one increment at a time.

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use crate::big_int_cache::{NEG_CACHE, POS_CACHE};
use crate::big_int_constants::*;
use crate::error::{Error, Result};

/// An arbitrary-precision signed integer.
///
/// # Example
/// ```
/// use bignum::BigInt;
///
/// let mut a: BigInt = "999".parse()?;
/// a.try_add(&"1".parse()?)?;
/// assert_eq!(a.to_string(), "1000");
/// # Ok::<(), bignum::Error>(())
/// ```
#[derive(Clone)]
pub struct BigInt {
    /// Base-256 digits, least significant first. `digits.len()` is the
    /// allocated capacity; every slot at index `length` and above is zero.
    digits: Vec<Digit>,
    /// Count of significant digits, at least 1. Zero is `length == 1` with
    /// `digits[0] == 0`.
    length: usize,
    /// `+1` or `-1`. A zero magnitude always carries `+1`.
    sign: i8,
}

// construction
impl BigInt {
    /// The value zero, with one increment of digit storage preallocated.
    pub fn new() -> BigInt {
        BigInt {
            digits: vec![0; INCREMENT],
            length: 1,
            sign: 1,
        }
    }

    /// Single-digit constant used to seed the caches.
    pub(crate) fn small(value: Digit, sign: i8) -> BigInt {
        let mut digits = vec![0; INCREMENT];
        digits[0] = value;
        BigInt {
            digits,
            length: 1,
            sign: if value == 0 { 1 } else { sign },
        }
    }

    fn value_of(magnitude: u64, sign: i8) -> Result<BigInt> {
        if magnitude == 0 {
            return Ok(BigInt::new());
        }
        if magnitude <= MAX_CONSTANT as u64 {
            if sign < 0 {
                return Ok(NEG_CACHE[magnitude as usize].clone());
            }
            return Ok(POS_CACHE[magnitude as usize].clone());
        }

        let mut value = BigInt::new();
        let mut rest = magnitude;
        let mut idx = 0;
        while rest != 0 {
            value.grow_to(idx)?;
            value.digits[idx] = (rest % BASE as u64) as Digit;
            rest /= BASE as u64;
            idx += 1;
        }
        value.length = idx;
        value.sign = sign;
        Ok(value)
    }
}

impl Default for BigInt {
    fn default() -> BigInt {
        BigInt::new()
    }
}

macro_rules! impl_try_from_signed {
    ($($t: ty),*) => {
    $(
    impl TryFrom<$t> for BigInt {
        type Error = Error;

        fn try_from(val: $t) -> Result<BigInt> {
            // unsigned_abs widens the most-negative value without overflow
            let sign = if val < 0 { -1 } else { 1 };
            BigInt::value_of(val.unsigned_abs() as u64, sign)
        }
    }
    )*
    };
}

macro_rules! impl_try_from_unsigned {
    ($($t: ty),*) => {
    $(
    impl TryFrom<$t> for BigInt {
        type Error = Error;

        fn try_from(val: $t) -> Result<BigInt> {
            BigInt::value_of(val as u64, 1)
        }
    }
    )*
    };
}

impl_try_from_signed!(i8, i16, i32, i64, isize);
impl_try_from_unsigned!(u8, u16, u32, u64, usize);

// storage
impl BigInt {
    /// Makes `digits[index]` addressable, growing the buffer to the next
    /// multiple of [`INCREMENT`] above `index`.
    ///
    /// Digits in `[0, length)` are carried over and every new slot is
    /// zeroed. On failure the value is left exactly as it was; callers must
    /// abandon the operation rather than write past a failed growth.
    fn grow_to(&mut self, index: usize) -> Result<()> {
        if index < self.digits.len() {
            return Ok(());
        }
        let capacity = index / INCREMENT * INCREMENT + INCREMENT;
        let mut grown: Vec<Digit> = Vec::new();
        grown
            .try_reserve_exact(capacity)
            .map_err(|source| Error::AllocationFailure {
                digits: capacity,
                source,
            })?;
        grown.extend_from_slice(&self.digits[..self.length]);
        grown.resize(capacity, 0);
        self.digits = grown;
        Ok(())
    }

    /// Digit at `index`, reading past the significant length as zero.
    fn digit(&self, index: usize) -> Digit {
        if index < self.length {
            self.digits[index]
        } else {
            0
        }
    }

    pub fn is_zero(&self) -> bool {
        self.length == 1 && self.digits[0] == 0
    }

    /// Resets to canonical zero, keeping the allocated buffer.
    fn set_zero(&mut self) {
        self.digits[..self.length].fill(0);
        self.length = 1;
        self.sign = 1;
    }

    /// Drops trailing zero digits after a subtraction, never below one digit.
    fn trim(&mut self) {
        while self.length > 1 && self.digits[self.length - 1] == 0 {
            self.length -= 1;
        }
    }
}

// parsing
impl FromStr for BigInt {
    type Err = Error;

    /// Parses an optionally signed decimal numeral, `[+-]?[0-9]+`.
    ///
    /// Anything else is rejected with [`Error::InvalidFormat`] and no value
    /// is produced. `"-0"` parses to canonical zero.
    fn from_str(literal: &str) -> Result<BigInt> {
        let (sign, magnitude) = match literal.as_bytes() {
            [b'+', rest @ ..] => (1, rest),
            [b'-', rest @ ..] => (-1, rest),
            rest => (1, rest),
        };
        if magnitude.is_empty() {
            return Err(Error::invalid_format(literal, "no digits"));
        }

        let mut value = BigInt::new();
        for &ch in magnitude {
            if !ch.is_ascii_digit() {
                return Err(Error::invalid_format(literal, "not a decimal digit"));
            }
            value.times_ten()?;
            value.absorb_decimal_digit((ch - b'0') as Wide)?;
        }
        if !value.is_zero() {
            value.sign = sign;
        }
        Ok(value)
    }
}

impl BigInt {
    /// Multiplies the magnitude by 10 in place, letting the carry spill into
    /// new high digits.
    fn times_ten(&mut self) -> Result<()> {
        let mut carry: Wide = 0;
        let mut idx = 0;
        while idx < self.length || carry > 0 {
            self.grow_to(idx)?;
            let product = self.digits[idx] as Wide * 10 + carry;
            self.digits[idx] = (product % BASE) as Digit;
            carry = product / BASE;
            if self.length <= idx {
                self.length = idx + 1;
            }
            idx += 1;
        }
        Ok(())
    }

    /// Adds one decimal digit's value into position 0, rippling the carry
    /// upward. The carry condition differs from [`BigInt::times_ten`], which
    /// is why the two loops stay separate.
    fn absorb_decimal_digit(&mut self, value: Wide) -> Result<()> {
        let mut carry = value;
        let mut idx = 0;
        while carry > 0 {
            self.grow_to(idx)?;
            let sum = self.digits[idx] as Wide + carry;
            self.digits[idx] = (sum % BASE) as Digit;
            carry = sum / BASE;
            if self.length <= idx {
                self.length = idx + 1;
            }
            idx += 1;
        }
        Ok(())
    }
}

// magnitude comparison
impl BigInt {
    /// Compares absolute values: by significant length first, then digit by
    /// digit from the most significant end.
    fn cmp_magnitude(&self, rhs: &BigInt) -> Ordering {
        match self.length.cmp(&rhs.length) {
            Ordering::Equal => {
                let these = self.digits[..self.length].iter().rev();
                let those = rhs.digits[..rhs.length].iter().rev();
                these.cmp(those)
            }
            unequal => unequal,
        }
    }
}

// addition
impl BigInt {
    /// In-place addition: `self` becomes `self + rhs` and is handed back.
    ///
    /// `rhs` is untouched. Doubling a value goes through a snapshot, which
    /// the borrow checker insists on anyway:
    ///
    /// ```
    /// use bignum::BigInt;
    ///
    /// let mut a: BigInt = "21".parse()?;
    /// let snapshot = a.clone();
    /// a.try_add(&snapshot)?;
    /// assert_eq!(a.to_string(), "42");
    /// # Ok::<(), bignum::Error>(())
    /// ```
    pub fn try_add(&mut self, rhs: &BigInt) -> Result<&mut BigInt> {
        if rhs.is_zero() {
            return Ok(self);
        }
        if self.is_zero() {
            self.clone_from(rhs);
            return Ok(self);
        }

        if self.sign == rhs.sign {
            self.add_magnitude(rhs)?;
            return Ok(self);
        }

        match self.cmp_magnitude(rhs) {
            Ordering::Equal => self.set_zero(),
            Ordering::Greater => {
                self.subtract_smaller(rhs);
                self.trim();
            }
            Ordering::Less => self.replace_with_difference(rhs)?,
        }
        Ok(self)
    }

    /// Digit-wise addition of `rhs`'s magnitude into `self`, carrying across
    /// `max(length)` positions and spilling into fresh high digits.
    fn add_magnitude(&mut self, rhs: &BigInt) -> Result<()> {
        let common = self.length.max(rhs.length);
        let mut carry: Wide = 0;
        for idx in 0..common {
            self.grow_to(idx)?;
            let sum = self.digit(idx) as Wide + rhs.digit(idx) as Wide + carry;
            self.digits[idx] = (sum % BASE) as Digit;
            carry = sum / BASE;
        }
        let mut idx = common;
        while carry > 0 {
            self.grow_to(idx)?;
            let sum = self.digits[idx] as Wide + carry;
            self.digits[idx] = (sum % BASE) as Digit;
            carry = sum / BASE;
            idx += 1;
        }
        self.length = idx;
        Ok(())
    }

    /// Subtracts `rhs`'s strictly smaller magnitude out of `self`'s digits,
    /// borrow rippling upward. The caller trims afterwards.
    fn subtract_smaller(&mut self, rhs: &BigInt) {
        let mut diff: SignedWide = 0;
        for idx in 0..rhs.length {
            diff = self.digits[idx] as SignedWide - rhs.digits[idx] as SignedWide
                + (diff >> Digit::BITS);
            self.digits[idx] = diff as Digit;
        }

        // |self| > |rhs|, so the ripple runs out of borrow before it runs
        // out of digits
        let mut borrow = (diff >> Digit::BITS) != 0;
        let mut idx = rhs.length;
        while borrow {
            let val = self.digits[idx].wrapping_sub(1);
            self.digits[idx] = val;
            borrow = val == Digit::MAX;
            idx += 1;
        }
    }

    /// Handles `|self| < |rhs|`: computes `rhs - self` into a freshly sized
    /// buffer, installs it as `self`'s storage and adopts `rhs`'s sign.
    fn replace_with_difference(&mut self, rhs: &BigInt) -> Result<()> {
        let capacity = rhs.length + INCREMENT;
        let mut buffer: Vec<Digit> = Vec::new();
        buffer
            .try_reserve_exact(capacity)
            .map_err(|source| Error::AllocationFailure {
                digits: capacity,
                source,
            })?;
        buffer.resize(capacity, 0);

        let mut diff: SignedWide = 0;
        for idx in 0..rhs.length {
            diff = rhs.digits[idx] as SignedWide - self.digit(idx) as SignedWide
                + (diff >> Digit::BITS);
            buffer[idx] = diff as Digit;
        }

        self.digits = buffer;
        self.length = rhs.length;
        self.sign = rhs.sign;
        self.trim();
        Ok(())
    }
}

impl AddAssign<&BigInt> for BigInt {
    /// Panics when digit storage cannot be grown; use [`BigInt::try_add`] to
    /// observe allocation failure instead.
    fn add_assign(&mut self, rhs: &BigInt) {
        if let Err(err) = self.try_add(rhs) {
            panic!("big integer addition failed: {err}");
        }
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, rhs: BigInt) {
        *self += &rhs;
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: Self) -> Self::Output {
        let mut sum = self.clone();
        sum += rhs;
        sum
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(mut self, rhs: BigInt) -> BigInt {
        self += &rhs;
        self
    }
}

// rendering
impl BigInt {
    /// Renders in an explicitly requested base.
    ///
    /// Only decimal is implemented; every other radix is refused with
    /// [`Error::UnsupportedOperation`] instead of guessing.
    pub fn to_string_radix(&self, radix: u32) -> Result<String> {
        if radix != 10 {
            return Err(Error::UnsupportedOperation(
                "only decimal rendering is implemented",
            ));
        }
        Ok(self.to_decimal())
    }

    /// Canonical decimal form: `-?(0|[1-9][0-9]*)`.
    ///
    /// Walks the base-256 digits most significant first, keeping an
    /// accumulator of decimal digits (least significant first): scale the
    /// accumulator by the base, then absorb the unit.
    fn to_decimal(&self) -> String {
        if self.is_zero() {
            return String::from("0");
        }

        let mut decimal: Vec<Digit> = vec![0];
        for &unit in self.digits[..self.length].iter().rev() {
            let mut carry: Wide = 0;
            for d in decimal.iter_mut() {
                let product = *d as Wide * BASE + carry;
                *d = (product % 10) as Digit;
                carry = product / 10;
            }
            while carry > 0 {
                decimal.push((carry % 10) as Digit);
                carry /= 10;
            }

            let mut carry = unit as Wide;
            let mut idx = 0;
            while carry > 0 {
                if idx == decimal.len() {
                    decimal.push(0);
                }
                let sum = decimal[idx] as Wide + carry;
                decimal[idx] = (sum % 10) as Digit;
                carry = sum / 10;
                idx += 1;
            }
        }

        let mut rendered = String::with_capacity(decimal.len() + 1);
        if self.sign < 0 {
            rendered.push('-');
        }
        for &d in decimal.iter().rev() {
            rendered.push(DIGITS[d as usize]);
        }
        rendered
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal())
    }
}

impl fmt::Debug for BigInt {
    /// Polynomial form of the raw digits (`1*256**1+2`), negative values
    /// parenthesized, pasteable into a calculator to check the
    /// representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign < 0 {
            f.write_str("-(")?;
        }
        for idx in (1..self.length).rev() {
            write!(f, "{}*{}**{}+", self.digits[idx], BASE, idx)?;
        }
        write!(f, "{}", self.digits[0])?;
        if self.sign < 0 {
            f.write_str(")")?;
        }
        Ok(())
    }
}

#[cfg(test)]
fn big(literal: &str) -> BigInt {
    literal.parse().unwrap()
}

#[test]
fn test_parse_and_render() {
    let n = big("12345678909876523784950683472613487560983287654321");
    assert_eq!(n.to_string(), "12345678909876523784950683472613487560983287654321");

    let n = big("-98765432101234567890");
    assert_eq!(n.to_string(), "-98765432101234567890");

    // an explicit plus and leading zeros are absorbed
    let n = big("+000123");
    assert_eq!(n.to_string(), "123");

    let n = big("-0");
    assert_eq!(n.to_string(), "0");
    assert_eq!(n.sign, 1);
}

#[test]
fn test_parse_rejects_garbage() {
    assert!("".parse::<BigInt>().is_err());
    assert!("+".parse::<BigInt>().is_err());
    assert!("-".parse::<BigInt>().is_err());
    assert!(" 123".parse::<BigInt>().is_err());
    assert!("12.3".parse::<BigInt>().is_err());
    assert!("0x1f".parse::<BigInt>().is_err());
    assert!("١٢٣".parse::<BigInt>().is_err());

    let err = "12a3".parse::<BigInt>().unwrap_err();
    assert!(matches!(err, Error::InvalidFormat { .. }));
}

#[test]
fn test_from_native() {
    let n = BigInt::try_from(0i64).unwrap();
    assert_eq!(n.to_string(), "0");
    assert_eq!(n.sign, 1);

    let n = BigInt::try_from(-5i8).unwrap();
    assert_eq!(n.to_string(), "-5");

    let n = BigInt::try_from(65536u32).unwrap();
    assert_eq!(n.to_string(), "65536");
    assert_eq!(&n.digits[..n.length], &[0, 0, 1]);

    // the naive negate would overflow here
    let n = BigInt::try_from(i64::MIN).unwrap();
    assert_eq!(n.to_string(), "-9223372036854775808");

    let n = BigInt::try_from(u64::MAX).unwrap();
    assert_eq!(n.to_string(), "18446744073709551615");

    // cached constants come out as independent copies
    let a = BigInt::try_from(7u8).unwrap();
    let b = BigInt::try_from(-7i32).unwrap();
    assert_eq!(a.to_string(), "7");
    assert_eq!(b.to_string(), "-7");
}

#[test]
fn test_digit_layout() {
    let n = big("258"); // 1*256 + 2
    assert_eq!(n.length, 2);
    assert_eq!(&n.digits[..2], &[2, 1]);
    assert_eq!(format!("{n:?}"), "1*256**1+2");

    let n = big("-258");
    assert_eq!(format!("{n:?}"), "-(1*256**1+2)");

    let n = BigInt::new();
    assert_eq!(n.length, 1);
    assert_eq!(format!("{n:?}"), "0");
}

#[test]
fn test_storage_growth() {
    let mut n = BigInt::new();
    assert_eq!(n.digits.len(), INCREMENT);

    n.grow_to(4).unwrap();
    assert_eq!(n.digits.len(), 6);
    assert_eq!(n.length, 1);
    assert!(n.digits.iter().all(|&d| d == 0));

    // already-covered indices leave the buffer alone
    n.grow_to(3).unwrap();
    assert_eq!(n.digits.len(), 6);
}

#[test]
fn test_add_examples() {
    // the carry ripples across every digit
    let mut a = big("999");
    a.try_add(&big("1")).unwrap();
    assert_eq!(a.to_string(), "1000");

    assert_eq!((&big("-5") + &big("3")).to_string(), "-2");
    assert_eq!((&big("5") + &big("-3")).to_string(), "2");
    assert_eq!((&big("0") + &big("0")).to_string(), "0");
}

#[test]
fn test_add_identity() {
    let from_literal = big("0");
    let from_native = BigInt::try_from(0i32).unwrap();

    let mut a = big("123456789123456789");
    a.try_add(&from_literal).unwrap();
    a.try_add(&from_native).unwrap();
    assert_eq!(a.to_string(), "123456789123456789");

    let mut z = big("0");
    z.try_add(&big("-42")).unwrap();
    assert_eq!(z.to_string(), "-42");
}

#[test]
fn test_add_commutes() {
    let pairs = [
        ("12345", "67890"),
        ("-12345", "67890"),
        ("12345", "-67890"),
        ("-12345", "-67890"),
        ("99999999999999999999", "1"),
        ("1", "99999999999999999999"),
    ];
    for (x, y) in pairs {
        let mut left = big(x);
        left.try_add(&big(y)).unwrap();
        let mut right = big(y);
        right.try_add(&big(x)).unwrap();
        assert_eq!(left.to_string(), right.to_string(), "{x} + {y}");
    }
}

#[test]
fn test_add_cancellation() {
    let mut a = big("123");
    a.try_add(&big("-123")).unwrap();
    assert_eq!(a.to_string(), "0");
    assert_eq!(a.length, 1);
    assert_eq!(a.sign, 1);

    // the larger magnitude wins the sign
    let mut a = big("3");
    a.try_add(&big("-1000000000000000000000000")).unwrap();
    assert_eq!(a.to_string(), "-999999999999999999999997");

    // borrow ripples down from the top digit, then the length trims
    let mut a = big("256");
    a.try_add(&big("-1")).unwrap();
    assert_eq!(a.to_string(), "255");
    assert_eq!(a.length, 1);
}

#[test]
fn test_self_doubling() {
    let mut a = big("123456789012345678901234567890");
    let snapshot = a.clone();
    a.try_add(&snapshot).unwrap();
    assert_eq!(a.to_string(), "246913578024691357802469135780");

    let mut b = snapshot.clone();
    b += snapshot;
    assert_eq!(b.to_string(), "246913578024691357802469135780");
}

#[test]
fn test_agrees_with_native() {
    let pairs = [
        (0i64, 0i64),
        (1, -1),
        (123456, 654321),
        (-9999999, 12),
        (i64::MAX, i64::MAX),
        (i64::MAX, i64::MIN),
        (i64::MIN, -1),
    ];
    for (x, y) in pairs {
        let mut a = BigInt::try_from(x).unwrap();
        a.try_add(&BigInt::try_from(y).unwrap()).unwrap();
        assert_eq!(a.to_string(), (x as i128 + y as i128).to_string(), "{x} + {y}");
    }
}

#[test]
fn test_growth_across_increments() {
    // 50 decimal digits span about 21 base-256 digits, crossing many
    // reallocation boundaries on the way up
    let fifty = "99999999999999999999999999999999999999999999999999";
    let mut a = big(fifty);
    a.try_add(&big(fifty)).unwrap();
    assert_eq!(
        a.to_string(),
        "199999999999999999999999999999999999999999999999998"
    );
}

#[test]
fn test_radix_parameter() {
    let n = big("255");
    assert_eq!(n.to_string_radix(10).unwrap(), "255");
    assert!(matches!(
        n.to_string_radix(16),
        Err(Error::UnsupportedOperation(_))
    ));
    assert!(matches!(
        n.to_string_radix(8),
        Err(Error::UnsupportedOperation(_))
    ));
}

#[cfg(test)]
mod props {
    use num_bigint::BigInt as Reference;
    use proptest::prelude::*;

    use super::BigInt;

    fn reference(literal: &str) -> Reference {
        literal.parse().unwrap()
    }

    proptest! {
        #[test]
        fn prop_decimal_round_trip(s in "(0|[1-9][0-9]{0,64})") {
            let n: BigInt = s.parse().unwrap();
            prop_assert_eq!(n.to_string(), s);
        }

        #[test]
        fn prop_negative_round_trip(s in "-[1-9][0-9]{0,64}") {
            let n: BigInt = s.parse().unwrap();
            prop_assert_eq!(n.to_string(), s);
        }

        #[test]
        fn prop_addition_matches_reference(a in "[+-]?[0-9]{1,72}", b in "[+-]?[0-9]{1,72}") {
            let mut sum: BigInt = a.parse().unwrap();
            sum.try_add(&b.parse().unwrap()).unwrap();
            prop_assert_eq!(sum.to_string(), (reference(&a) + reference(&b)).to_string());
        }

        #[test]
        fn prop_doubling_matches_reference(a in "[+-]?[0-9]{1,72}") {
            let mut doubled: BigInt = a.parse().unwrap();
            let snapshot = doubled.clone();
            doubled.try_add(&snapshot).unwrap();
            prop_assert_eq!(doubled.to_string(), (reference(&a) + reference(&a)).to_string());
        }
    }
}
