use lazy_static::lazy_static;

use crate::big_int::BigInt;
use crate::big_int_constants::{Digit, MAX_CONSTANT};

lazy_static! {
    /// Constants `0..=MAX_CONSTANT`, handed out as clones by integer
    /// conversion so small values skip the digit-extraction loop.
    pub(crate) static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] = constant_cache(1);
    pub(crate) static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] = constant_cache(-1);
}

fn constant_cache(sign: i8) -> [BigInt; MAX_CONSTANT + 1] {
    std::array::from_fn(|value| BigInt::small(value as Digit, sign))
}
