use lazy_static::*;

use crate::big_int::{BigInt, Sign};
use crate::big_int_constants::*;

lazy_static! {
    pub static ref POS_CACHE: Vec<BigInt> = (0..=MAX_CONSTANT as u64)
        .map(|val| BigInt::from_magnitude(val, Sign::Positive))
        .collect();
    pub static ref NEG_CACHE: Vec<BigInt> = (0..=MAX_CONSTANT as u64)
        .map(|val| BigInt::from_magnitude(val, Sign::Negative))
        .collect();
}

#[test]
fn test_cache() {
    assert_eq!(POS_CACHE.len(), MAX_CONSTANT + 1);
    assert_eq!(POS_CACHE[0].to_string(), "0");
    assert!(!NEG_CACHE[0].is_negative());
    assert_eq!(POS_CACHE[16].to_string(), "16");
    assert_eq!(NEG_CACHE[7].to_string(), "-7");
}
