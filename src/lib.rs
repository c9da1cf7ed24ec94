//! Bignum \
//! This crate provides:
//! - [`BigInt`]: Growable arbitrary-precision signed integers. A value is a
//!   little-endian sequence of base-256 digits plus a sign; addition mutates
//!   the left operand in place, growing digit storage on demand.
//! - [`Error`] / [`Result`]: how rejected numerals and failed storage growth
//!   are reported.
//!
//! # Example
//! ```
//! use bignum::BigInt;
//!
//! let mut a: BigInt = "10000000000000".parse()?;
//! let b: BigInt = "-900000000000".parse()?;
//! a.try_add(&b)?;
//! assert_eq!(a.to_string(), "9100000000000");
//! # Ok::<(), bignum::Error>(())
//! ```

mod big_int;
mod big_int_cache;
mod big_int_constants;
mod error;

pub use big_int::BigInt;
pub use error::{Error, Result};

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "900000000000".parse().unwrap();
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&b + &a).to_string(), "10900000000000");
        assert_eq!((a + b).to_string(), "10900000000000");
    }

    #[test]
    fn mixed_construction() {
        let parsed: BigInt = "-9223372036854775808".parse().unwrap();
        let converted = BigInt::try_from(i64::MIN).unwrap();
        assert_eq!(parsed.to_string(), converted.to_string());
    }
}
