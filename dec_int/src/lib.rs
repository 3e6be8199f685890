//! Dec Int \
//! This crate provides:
//! - [`BigInt`]: arbitrary-precision signed integers stored as decimal digits, least significant first.
//! - [`BigIntError`]: the errors raised by conversions, strict parsing and unsupported operations.

mod big_int;
mod big_int_cache;
mod big_int_constants;
mod error;

pub use big_int::{BigInt, Sign};
pub use error::{BigIntError, Result};

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".into();
        let b: BigInt = "900000000000".into();
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&b - &a).to_string(), "-9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert!(a > b);
    }
}
