use dec_int::{BigInt, Sign};
use proptest::prelude::*;

fn canonical(value: &BigInt) -> bool {
    let digits = value.digits();
    !digits.is_empty()
        && digits.iter().all(|&d| d <= 9)
        && (digits.len() == 1 || *digits.last().unwrap() != 0)
        && !(value.is_zero() && value.sign() == Sign::Negative)
}

fn big_decimal() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("0".to_string()),
        "-?[1-9][0-9]{0,40}",
    ]
}

proptest! {
    #[test]
    fn arithmetic_matches_native(a in any::<i64>(), b in any::<i64>()) {
        let (x, y) = (BigInt::from(a), BigInt::from(b));
        let (a, b) = (a as i128, b as i128);
        prop_assert_eq!((&x + &y).to_string(), (a + b).to_string());
        prop_assert_eq!((&x - &y).to_string(), (a - b).to_string());
        prop_assert_eq!((&x * &y).to_string(), (a * b).to_string());
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
    }

    #[test]
    fn int_round_trip(n in any::<i64>()) {
        prop_assert_eq!(BigInt::from(n).to_int(), Ok(n));
    }

    #[test]
    fn string_round_trip(s in big_decimal()) {
        let value = BigInt::from(s.as_str());
        prop_assert!(canonical(&value));
        prop_assert_eq!(value.to_string(), s.clone());
        prop_assert_eq!(s.parse::<BigInt>().unwrap(), value);
    }

    #[test]
    fn results_stay_canonical(a in big_decimal(), b in big_decimal()) {
        let (x, y) = (BigInt::from(a.as_str()), BigInt::from(b.as_str()));
        prop_assert!(canonical(&(&x + &y)));
        prop_assert!(canonical(&(&x - &y)));
        prop_assert!(canonical(&(&y - &x)));
        prop_assert!(canonical(&(&x * &y)));
    }

    #[test]
    fn additive_laws(a in big_decimal(), b in big_decimal()) {
        let (x, y) = (BigInt::from(a.as_str()), BigInt::from(b.as_str()));
        prop_assert_eq!(&x + &BigInt::zero(), x.clone());
        prop_assert_eq!(&x + &y, &y + &x);
        prop_assert_eq!(&(&x + &y) - &y, x.clone());
    }

    #[test]
    fn subtraction_laws(a in big_decimal(), b in big_decimal()) {
        let (x, y) = (BigInt::from(a.as_str()), BigInt::from(b.as_str()));
        let diff = &x - &x;
        prop_assert!(diff.is_zero());
        prop_assert_eq!(diff.sign(), Sign::Positive);
        prop_assert_eq!(&x - &y, -(&y - &x));
    }

    #[test]
    fn multiplication_laws(a in big_decimal(), b in big_decimal()) {
        let (x, y) = (BigInt::from(a.as_str()), BigInt::from(b.as_str()));
        prop_assert_eq!(&x * &BigInt::from(1), x.clone());
        prop_assert_eq!(&x * &y, &y * &x);
        let product = &x * &y;
        if !product.is_zero() {
            prop_assert_eq!(product.is_negative(), x.is_negative() != y.is_negative());
        }
    }

    #[test]
    fn ordering_is_total_and_translation_invariant(
        a in big_decimal(),
        b in big_decimal(),
        c in big_decimal(),
    ) {
        let (x, y, z) = (
            BigInt::from(a.as_str()),
            BigInt::from(b.as_str()),
            BigInt::from(c.as_str()),
        );
        let holds = [x < y, x == y, x > y].iter().filter(|&&h| h).count();
        prop_assert_eq!(holds, 1);
        if x < y {
            prop_assert!(&x + &z < &y + &z);
        }
    }
}
