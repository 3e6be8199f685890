//! Test-case runner for [`dec_int::BigInt`].
//!
//! A test file holds records of the form
//! `{ label num1 num2 flag { r1 r2 r3 r4 r5 r6 } }`. With `flag == 0` the six
//! expected results are listed in the order `num1+num2`, `num2+num1`,
//! `num1-num2`, `num2-num1`, `num1*num2`, `num2*num1`; with `flag == 1` the
//! inner braces are empty and the expectations come from native `i64`
//! arithmetic.

mod error;
mod parser;
mod runner;
mod tokenizer;

pub use crate::error::HarnessError;
pub use crate::parser::{parse_cases, Operator, TestCase, AMOUNT_OF_RESULTS, RESULT_ORDER};
pub use crate::runner::{run_case, run_file, Mismatch, Report};

#[cfg(test)]
mod tests {
    use crate::{parse_cases, Report};

    #[test]
    fn it_works() {
        let cases = parse_cases("{ x 123 77 1 { } } { y 1000 1 0 { 1001 1001 999 -999 1000 1000 } }").unwrap();
        let report = Report::run(&cases).unwrap();
        assert_eq!(report.cases(), 2);
        assert!(report.is_clean(), "{}", report);
    }
}
