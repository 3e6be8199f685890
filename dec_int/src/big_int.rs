//! # BigInt
//! Arbitrary-precision signed integers stored as base-10 digits, least significant digit first.
//! Every operation leaves the value canonical: no leading zero digits, and zero is always positive.
//! # Example
//! ```
//! use dec_int::BigInt;
//!
//! let a: BigInt = "10000000000000".into();
//! let b: BigInt = "900000000000".into();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! assert!(a > b);
//! ```
//!

use std::fmt::{self, Display};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Neg,
};
use std::cmp::{Ord, Eq, PartialEq, PartialOrd, Ordering};
use std::str::FromStr;

use tracing::{debug, warn};

use crate::big_int_constants::*;
use crate::big_int_cache::*;
use crate::error::{BigIntError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    fn flip(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

#[derive(Debug, Clone, Hash)]
pub struct BigInt {
    sign: Sign,
    digits: Vec<u8>,
}

// 杂项辅助函数
impl BigInt {
    /// Pops most significant zeros; a lone zero digit is forced positive.
    fn normalize(&mut self) {
        while self.digits.len() > 1 && self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.digits.push(0);
        }
        if self.is_zero() {
            self.sign = Sign::Positive;
        }
    }
    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 0
    }
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }
    pub fn sign(&self) -> Sign {
        self.sign
    }
    /// Digits least significant first, each in `0..=9`.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }
    /// Sum of the decimal digits, ignoring the sign.
    pub fn digit_sum(&self) -> u64 {
        self.digits.iter().map(|&d| d as u64).sum()
    }
}

// 实现构造
impl BigInt {
    pub fn zero() -> Self {
        BigInt { sign: Sign::Positive, digits: vec![0] }
    }
    pub(crate) fn from_magnitude(mut val: u64, sign: Sign) -> Self {
        let radix = RADIX as u64;
        let mut digits = Vec::with_capacity(20);
        if val == 0 {
            digits.push(0);
        }
        while val != 0 {
            digits.push((val % radix) as u8);
            val /= radix;
        }
        let mut result = BigInt { sign, digits };
        result.normalize();
        result
    }
    fn value_of(val: u64, sign: Sign) -> Self {
        if val <= MAX_CONSTANT as u64 {
            match sign {
                Sign::Positive => POS_CACHE[val as usize].clone(),
                Sign::Negative => NEG_CACHE[val as usize].clone(),
            }
        } else {
            BigInt::from_magnitude(val, sign)
        }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u64, Sign::Positive)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            let sign = if val < 0 { Sign::Negative } else { Sign::Positive };
            BigInt::value_of((val as i64).unsigned_abs(), sign)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64);
impl_signed_to_big_int!(i8, i16, i32, isize, i64);

// 实现打印
impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.digits
            .iter()
            .rev()
            .map(|&d| DIGITS[d as usize])
            .collect();
        f.pad_integral(!self.is_negative(), "", &s)
    }
}

// 实现解析
/// Permissive parsing: a leading `-` makes the value negative, every other
/// non-digit character is skipped, and input without digits is zero.
impl From<&str> for BigInt {
    fn from(val: &str) -> Self {
        let (sign, body) = match val.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, val),
        };
        let digits: Vec<u8> = body
            .chars()
            .rev()
            .filter_map(|c| c.to_digit(RADIX as u32))
            .map(|d| d as u8)
            .collect();
        let mut result = BigInt { sign, digits };
        result.normalize();
        result
    }
}

impl From<String> for BigInt {
    fn from(val: String) -> Self {
        BigInt::from(val.as_str())
    }
}

/// Strict parsing: an optional sign followed by at least one ASCII digit.
impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(val: &str) -> Result<Self> {
        let malformed = |position| BigIntError::Malformed { input: val.to_string(), position };
        let (sign, cursor) = match val.as_bytes().first() {
            Some(b'-') => (Sign::Negative, 1),
            Some(b'+') => (Sign::Positive, 1),
            _ => (Sign::Positive, 0),
        };
        if cursor == val.len() {
            return Err(malformed(val.len()));
        }
        if let Some((pos, _)) = val[cursor..].char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(malformed(cursor + pos));
        }
        let digits = val[cursor..].bytes().rev().map(|b| b - b'0').collect();
        let mut result = BigInt { sign, digits };
        result.normalize();
        Ok(result)
    }
}

// 实现转换
impl BigInt {
    /// Converts to the widest native signed integer.
    pub fn to_int(&self) -> Result<i64> {
        i64::try_from(self)
    }
    /// Only valid once the caller has bounds-checked against a 64-bit target.
    fn magnitude_i128(&self) -> i128 {
        let mut result: i128 = 0;
        let mut power: i128 = 1;
        for &d in &self.digits {
            result += d as i128 * power;
            power *= RADIX as i128;
        }
        result
    }
}

macro_rules! impl_big_int_to_primitive {
    ($($t: ty),*) => {
    $(
    impl TryFrom<&BigInt> for $t {
        type Error = BigIntError;

        fn try_from(val: &BigInt) -> Result<$t> {
            let out_of_range = || BigIntError::OutOfRange {
                value: val.to_string(),
                target: stringify!($t),
            };
            if *val > BigInt::from(<$t>::MAX) || *val < BigInt::from(<$t>::MIN) {
                debug!(value = %val, target = stringify!($t), "integer conversion out of range");
                return Err(out_of_range());
            }
            let mag = val.magnitude_i128();
            let signed = if val.is_negative() { -mag } else { mag };
            <$t>::try_from(signed).map_err(|_| out_of_range())
        }
    }

    impl TryFrom<BigInt> for $t {
        type Error = BigIntError;

        fn try_from(val: BigInt) -> Result<$t> {
            <$t>::try_from(&val)
        }
    }
    )*
    };
}
impl_big_int_to_primitive!(u8, u16, u32, usize, u64, i8, i16, i32, isize, i64);

// 实现大小比较
impl BigInt {
    fn compare_mag(&self, other: &BigInt) -> Ordering {
        let self_len = self.digits.len();
        let other_len = other.digits.len();

        if self_len != other_len {
            return self_len.cmp(&other_len);
        }

        for pos in (0..self_len).rev() {
            let a = self.digits[pos];
            let b = other.digits[pos];
            if a != b {
                return a.cmp(&b);
            }
        }

        Ordering::Equal
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign && self.compare_mag(other).is_eq()
    }
}
impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => self.compare_mag(other),
            (Sign::Negative, Sign::Negative) => self.compare_mag(other).reverse(),
        }
    }
}

// 实现绝对值
impl BigInt {
    pub fn abs(&self) -> BigInt {
        let mut result = self.clone();
        result.sign = Sign::Positive;
        result
    }
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> Self::Output {
        if !self.is_zero() {
            self.sign = self.sign.flip();
        }
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现加法
impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        if rhs.is_zero() {
            return;
        }
        // a + (-b) == a - b
        if self.sign != rhs.sign {
            *self -= &(-rhs);
            return;
        }
        BigInt::add_digits(&mut self.digits, &rhs.digits);
        self.normalize();
    }
}

impl BigInt {
    fn add_digits(x: &mut Vec<u8>, y: &[u8]) {
        if x.len() < y.len() {
            x.resize(y.len(), 0);
        }

        let mut carry = 0;
        for (a, &b) in x.iter_mut().zip(y) {
            let sum = carry + *a + b;
            *a = sum % RADIX;
            carry = sum / RADIX;
        }

        for a in x.iter_mut().skip(y.len()) {
            if carry == 0 {
                break;
            }
            let sum = *a + carry;
            *a = sum % RADIX;
            carry = sum / RADIX;
        }

        if carry != 0 {
            x.push(carry);
        }
    }
}

// 实现减法
impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        if rhs.is_zero() {
            return;
        }
        // a - (-b) == a + b
        if self.sign != rhs.sign {
            *self += &(-rhs);
            return;
        }
        // a - b == -(b - a)
        if self.compare_mag(rhs).is_lt() {
            let mut result = rhs.clone();
            result -= &*self;
            result.sign = result.sign.flip();
            result.normalize();
            *self = result;
            return;
        }
        BigInt::sub_digits(&mut self.digits, &rhs.digits);
        self.normalize();
    }
}

impl BigInt {
    /// Requires `x >= y` as magnitudes.
    fn sub_digits(x: &mut [u8], y: &[u8]) {
        for (pos, &b) in y.iter().enumerate() {
            if x[pos] < b {
                BigInt::borrow(x, pos);
            }
            x[pos] -= b;
        }
    }

    /// Takes one from the nearest non-zero digit above `pos`, leaving nines in between.
    /// The caller guarantees such a digit exists.
    fn borrow(digits: &mut [u8], pos: usize) {
        let lender = match digits[pos + 1..].iter().position(|&d| d != 0) {
            Some(offset) => pos + 1 + offset,
            None => panic!("no digit to borrow from above position {}", pos),
        };
        digits[lender] -= 1;
        digits[pos + 1..lender].iter_mut().for_each(|d| *d = RADIX - 1);
        digits[pos] += RADIX;
    }
}

// 实现乘法
impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        self.sign = if self.sign == rhs.sign { Sign::Positive } else { Sign::Negative };

        let mut result = BigInt::zero();
        for (shift, &factor) in rhs.digits.iter().enumerate() {
            result += &BigInt::mul_by_digit(&self.digits, factor, shift);
        }

        // keep the sign decided above, the accumulator is always positive
        self.digits = result.digits;
        self.normalize();
    }
}

impl BigInt {
    /// `x * factor * 10^shift` as a positive value.
    fn mul_by_digit(x: &[u8], factor: u8, shift: usize) -> BigInt {
        let mut digits = Vec::with_capacity(shift + x.len() + 1);
        digits.resize(shift, 0);

        let mut carry = 0;
        for &d in x {
            let product = d * factor + carry;
            digits.push(product % RADIX);
            carry = product / RADIX;
        }
        if carry != 0 {
            digits.push(carry);
        }

        let mut partial = BigInt { sign: Sign::Positive, digits };
        partial.normalize();
        partial
    }
}

macro_rules! forward_binop {
    ($($imp: ident, $method: ident, $imp_assign: ident, $method_assign: ident);*) => {
    $(
    impl $imp_assign for BigInt {
        fn $method_assign(&mut self, rhs: BigInt) {
            <BigInt as $imp_assign<&BigInt>>::$method_assign(self, &rhs);
        }
    }

    impl $imp<&BigInt> for BigInt {
        type Output = BigInt;

        fn $method(mut self, rhs: &BigInt) -> Self::Output {
            <BigInt as $imp_assign<&BigInt>>::$method_assign(&mut self, rhs);
            self
        }
    }

    impl $imp for BigInt {
        type Output = BigInt;

        fn $method(self, rhs: BigInt) -> Self::Output {
            <BigInt as $imp<&BigInt>>::$method(self, &rhs)
        }
    }

    impl $imp<&BigInt> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: &BigInt) -> Self::Output {
            <BigInt as $imp<&BigInt>>::$method(self.clone(), rhs)
        }
    }

    impl $imp<BigInt> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: BigInt) -> Self::Output {
            <BigInt as $imp<&BigInt>>::$method(self.clone(), &rhs)
        }
    }
    )*
    };
}
forward_binop!(
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign;
    Mul, mul, MulAssign, mul_assign
);

// 未实现的运算
impl BigInt {
    pub fn checked_div(&self, _rhs: &BigInt) -> Result<BigInt> {
        Err(BigInt::unsupported("division"))
    }
    pub fn checked_rem(&self, _rhs: &BigInt) -> Result<BigInt> {
        Err(BigInt::unsupported("modulus"))
    }
    pub fn pow(&self, _exp: u32) -> Result<BigInt> {
        Err(BigInt::unsupported("exponentiation"))
    }
    fn unsupported(op: &'static str) -> BigIntError {
        warn!(op, "unsupported BigInt operation requested");
        BigIntError::NotImplemented(op)
    }
}

#[test]
fn test_from_int() {
    let zero = BigInt::from(0);
    assert_eq!(zero.digits(), &[0]);
    assert_eq!(zero.sign(), Sign::Positive);

    let a = BigInt::from(12345);
    assert_eq!(a.digits(), &[5, 4, 3, 2, 1]);
    assert_eq!(a.sign(), Sign::Positive);

    let b = BigInt::from(-987_i64);
    assert_eq!(b.digits(), &[7, 8, 9]);
    assert_eq!(b.sign(), Sign::Negative);

    assert_eq!(BigInt::from(-7_i8).to_string(), "-7");
    assert_eq!(BigInt::from(16_u8).to_string(), "16");
    assert_eq!(BigInt::from(17_u16).to_string(), "17");
    assert_eq!(BigInt::from(i64::MIN).to_string(), "-9223372036854775808");
    assert_eq!(BigInt::from(u64::MAX).to_string(), "18446744073709551615");
    assert_eq!(BigInt::default(), BigInt::zero());
}

#[test]
fn test_from_str() {
    let a: BigInt = "123".into();
    assert_eq!(a.digits(), &[3, 2, 1]);

    let empty: BigInt = "".into();
    assert_eq!(empty.to_string(), "0");
    assert!(!empty.is_negative());

    let neg_zero: BigInt = "-0".into();
    assert_eq!(neg_zero.to_string(), "0");
    assert_eq!(neg_zero.sign(), Sign::Positive);

    let lone_minus: BigInt = "-".into();
    assert!(lone_minus.is_zero());

    let padded: BigInt = "-000120".into();
    assert_eq!(padded.to_string(), "-120");
    assert_eq!(padded.digit_count(), 3);

    // non-digits are skipped, not rejected
    let noisy: BigInt = "1,234 567".into();
    assert_eq!(noisy.to_string(), "1234567");
    let letters = BigInt::from(String::from("abc"));
    assert!(letters.is_zero());
}

#[test]
fn test_from_str_strict() {
    assert_eq!("-120".parse::<BigInt>().unwrap().to_string(), "-120");
    assert_eq!("+0042".parse::<BigInt>().unwrap().to_string(), "42");
    assert!("-0".parse::<BigInt>().unwrap().sign() == Sign::Positive);

    assert_eq!(
        "12a3".parse::<BigInt>(),
        Err(BigIntError::Malformed { input: "12a3".to_string(), position: 2 })
    );
    assert_eq!(
        "".parse::<BigInt>(),
        Err(BigIntError::Malformed { input: "".to_string(), position: 0 })
    );
    assert_eq!(
        "-".parse::<BigInt>(),
        Err(BigIntError::Malformed { input: "-".to_string(), position: 1 })
    );
    assert!("--1".parse::<BigInt>().is_err());
    assert!(" 1".parse::<BigInt>().is_err());
}

#[test]
fn test_to_string() {
    let a: BigInt = "12345678909876523784950683472613487560983287654321".into();
    assert_eq!(a.to_string(), "12345678909876523784950683472613487560983287654321");
    let b: BigInt = "-42".into();
    assert_eq!(b.to_string(), "-42");
    assert_eq!(format!("{:>5}", b), "  -42");
    assert_eq!(format!("{:+}", BigInt::from(7)), "+7");
}

#[test]
fn test_to_int() {
    assert_eq!(BigInt::from("123456789110").to_int(), Ok(123456789110));
    assert_eq!(BigInt::from("-9223372036854775808").to_int(), Ok(i64::MIN));
    assert_eq!(BigInt::from("9223372036854775807").to_int(), Ok(i64::MAX));
    assert_eq!(BigInt::from("0").to_int(), Ok(0));

    assert_eq!(
        BigInt::from("99999999999999999999").to_int(),
        Err(BigIntError::OutOfRange { value: "99999999999999999999".to_string(), target: "i64" })
    );
    assert!(BigInt::from("9223372036854775808").to_int().is_err());
    assert!(BigInt::from("-9223372036854775809").to_int().is_err());

    assert_eq!(u8::try_from(&BigInt::from(255)), Ok(255));
    assert!(u8::try_from(&BigInt::from(256)).is_err());
    assert!(u64::try_from(BigInt::from(-1)).is_err());
    assert_eq!(i32::try_from(BigInt::from(-2147483648_i64)), Ok(i32::MIN));
    assert!(i32::try_from(BigInt::from(2147483648_i64)).is_err());
}

#[test]
fn test_digit_sum_and_abs() {
    assert_eq!(BigInt::from("-98765").digit_sum(), 35);
    assert_eq!(BigInt::zero().digit_sum(), 0);
    let a = BigInt::from(-31);
    assert_eq!(a.abs(), BigInt::from(31));
    assert_eq!(a, BigInt::from(-31));
}

#[test]
fn test_normalize() {
    let mut a = BigInt { sign: Sign::Negative, digits: vec![0, 0, 0] };
    a.normalize();
    assert_eq!(a.digits(), &[0]);
    assert_eq!(a.sign(), Sign::Positive);

    let mut b = BigInt { sign: Sign::Negative, digits: vec![1, 0, 2, 0, 0] };
    b.normalize();
    assert_eq!(b.digits(), &[1, 0, 2]);
    assert_eq!(b.sign(), Sign::Negative);

    let mut c = BigInt { sign: Sign::Positive, digits: vec![] };
    c.normalize();
    assert!(c.is_zero());
}

#[test]
fn test_borrow() {
    // 1000: borrow into the units crosses two zeros
    let mut digits = vec![0, 0, 0, 1];
    BigInt::borrow(&mut digits, 0);
    assert_eq!(digits, vec![10, 9, 9, 0]);

    let mut digits = vec![3, 5];
    BigInt::borrow(&mut digits, 0);
    assert_eq!(digits, vec![13, 4]);
}

#[test]
fn test_add() {
    let a: BigInt = "123".into();
    let b: BigInt = "77".into();
    assert_eq!((&a + &b).to_string(), "200");
    assert_eq!((&b + &a).to_string(), "200");

    assert_eq!((BigInt::from(999) + BigInt::from(1)).to_string(), "1000");
    assert_eq!((BigInt::from(1) + BigInt::from(999)).to_string(), "1000");
    assert_eq!((BigInt::from(-5) + BigInt::from(-7)).to_string(), "-12");

    let sum = BigInt::from(-5) + BigInt::from(5);
    assert!(sum.is_zero());
    assert_eq!(sum.sign(), Sign::Positive);

    assert_eq!(BigInt::from(-3) + BigInt::zero(), BigInt::from(-3));
    assert_eq!(BigInt::zero() + BigInt::from(-3), BigInt::from(-3));
    assert_eq!(BigInt::from(10) + BigInt::from(-3), BigInt::from(7));
    assert_eq!(BigInt::from(3) + BigInt::from(-10), BigInt::from(-7));

    let mut c: BigInt = "999999999999999999999999999999".into();
    c += BigInt::from(1);
    assert_eq!(c.to_string(), "1000000000000000000000000000000");
}

#[test]
fn test_sub() {
    assert_eq!((BigInt::from(1000) - BigInt::from(1)).to_string(), "999");
    assert_eq!((BigInt::from(1) - BigInt::from(1000)).to_string(), "-999");
    assert_eq!((BigInt::from(-1000) - BigInt::from(-1)).to_string(), "-999");
    assert_eq!((BigInt::from(-1) - BigInt::from(-1000)).to_string(), "999");
    assert_eq!((BigInt::from(5) - BigInt::from(-5)).to_string(), "10");
    assert_eq!((BigInt::from(-5) - BigInt::from(5)).to_string(), "-10");
    assert_eq!((BigInt::zero() - BigInt::from(7)).to_string(), "-7");
    assert_eq!((BigInt::from(-7) - BigInt::zero()).to_string(), "-7");
    assert_eq!((BigInt::from(100000001) - BigInt::from(99999999)).to_string(), "2");

    let same = BigInt::from(-42) - BigInt::from(-42);
    assert!(same.is_zero());
    assert_eq!(same.sign(), Sign::Positive);

    let a: BigInt = "123456789012345678901234567890".into();
    let b: BigInt = "987654321098765432109876543210".into();
    assert_eq!((&a - &b).to_string(), "-864197532086419753208641975320");
    assert_eq!((&b - &a).to_string(), "864197532086419753208641975320");

    let mut c = BigInt::from(20);
    c -= &BigInt::from(25);
    assert_eq!(c, BigInt::from(-5));
}

#[test]
fn test_mul() {
    assert_eq!((BigInt::from(999) * BigInt::from(999)).to_string(), "998001");
    assert_eq!((BigInt::from(-12) * BigInt::from(12)).to_string(), "-144");
    assert_eq!((BigInt::from(12) * BigInt::from(-12)).to_string(), "-144");
    assert_eq!((BigInt::from(-12) * BigInt::from(-12)).to_string(), "144");
    assert_eq!((BigInt::from(105) * BigInt::from(10)).to_string(), "1050");

    for zero in [BigInt::from(-7) * BigInt::zero(), BigInt::zero() * BigInt::from(-7)] {
        assert!(zero.is_zero());
        assert_eq!(zero.sign(), Sign::Positive);
    }

    let a: BigInt = "12345678901234567890".into();
    let b: BigInt = "98765432109876543210".into();
    assert_eq!((&a * &b).to_string(), "1219326311370217952237463801111263526900");

    let mut c: BigInt = "-999999999999".into();
    c *= BigInt::from("1000000000001");
    assert_eq!(c.to_string(), "-999999999999999999999999");
}

#[test]
fn test_cmp() {
    let neg_big: BigInt = "-1000".into();
    let neg_small: BigInt = "-999".into();
    let zero = BigInt::zero();
    let pos_small: BigInt = "999".into();
    let pos_big: BigInt = "1000".into();

    let ordered = [&neg_big, &neg_small, &zero, &pos_small, &pos_big];
    for (i, a) in ordered.iter().enumerate() {
        for (j, b) in ordered.iter().enumerate() {
            assert_eq!(a.cmp(b), i.cmp(&j), "{} vs {}", a, b);
        }
    }

    assert!(BigInt::from(-123) < BigInt::from(-122));
    assert!(BigInt::from(123) > BigInt::from(122));
    assert!(BigInt::from(5) <= BigInt::from(5));
    assert!(BigInt::from(5) >= BigInt::from(5));
    assert_ne!(BigInt::from(5), BigInt::from(-5));
}

#[test]
fn test_neg() {
    assert_eq!(-BigInt::from(5), BigInt::from(-5));
    assert_eq!(-&BigInt::from(-5), BigInt::from(5));
    assert_eq!((-BigInt::zero()).sign(), Sign::Positive);
}

#[test]
fn test_unsupported() {
    let a = BigInt::from(12);
    let b = BigInt::from(4);
    assert_eq!(a.checked_div(&b), Err(BigIntError::NotImplemented("division")));
    assert_eq!(a.checked_rem(&b), Err(BigIntError::NotImplemented("modulus")));
    assert_eq!(a.pow(2), Err(BigIntError::NotImplemented("exponentiation")));
}
