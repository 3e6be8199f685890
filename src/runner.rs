use std::fmt::{self, Display};
use std::fs;
use std::path::Path;

use dec_int::BigInt;
use tracing::{debug, info};

use crate::error::HarnessError;
use crate::parser::{parse_cases, Operator, TestCase, AMOUNT_OF_RESULTS, RESULT_ORDER};

impl Operator {
    fn apply(self, a: &BigInt, b: &BigInt) -> BigInt {
        match self {
            Operator::Add => a + b,
            Operator::Sub => a - b,
            Operator::Mul => a * b,
        }
    }
    fn apply_native(self, a: i64, b: i64) -> Option<i64> {
        match self {
            Operator::Add => a.checked_add(b),
            Operator::Sub => a.checked_sub(b),
            Operator::Mul => a.checked_mul(b),
        }
    }
}

impl TestCase {
    /// The results produced by [`BigInt`], in [`RESULT_ORDER`].
    pub fn results(&self) -> Vec<String> {
        RESULT_ORDER
            .iter()
            .map(|&(op, swapped)| {
                let (a, b) = self.operands(swapped);
                op.apply(&BigInt::from(a), &BigInt::from(b)).to_string()
            })
            .collect()
    }
    /// The results native `i64` arithmetic produces, used for auto-checked cases.
    pub fn native_results(&self) -> Result<Vec<String>, HarnessError> {
        let parse = |s: &str| {
            s.parse::<i64>()
                .map_err(|_| self.auto_check_error(format!("`{}` is not a native integer", s)))
        };
        RESULT_ORDER
            .iter()
            .map(|&(op, swapped)| {
                let (a, b) = self.operands(swapped);
                let (a, b) = (parse(a)?, parse(b)?);
                op.apply_native(a, b)
                    .map(|r| r.to_string())
                    .ok_or_else(|| self.auto_check_error(format!("{} {} {} overflows i64", a, op, b)))
            })
            .collect()
    }
    pub fn expected_results(&self) -> Result<Vec<String>, HarnessError> {
        if self.auto_checked {
            return self.native_results();
        }
        if self.expected.len() != AMOUNT_OF_RESULTS {
            return Err(HarnessError::ResultCount { label: self.label.clone(), found: self.expected.len() });
        }
        Ok(self.expected.clone())
    }
    fn auto_check_error(&self, reason: String) -> HarnessError {
        HarnessError::AutoCheck { label: self.label.clone(), reason }
    }
}

/// One result that differs from its expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub label: String,
    pub index: usize,
    pub expected: String,
    pub got: String,
}

impl Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Test not passed: {}, {}\n\tExpected: {}, got {}\n",
            self.label, self.index, self.expected, self.got
        )
    }
}

pub fn run_case(case: &TestCase) -> Result<Vec<Mismatch>, HarnessError> {
    let expected = case.expected_results()?;
    let got = case.results();
    let mismatches: Vec<Mismatch> = expected
        .into_iter()
        .zip(got)
        .enumerate()
        .filter(|(_, (expected, got))| expected != got)
        .map(|(index, (expected, got))| Mismatch { label: case.label.clone(), index, expected, got })
        .collect();
    debug!(label = %case.label, mismatches = mismatches.len(), "test case finished");
    Ok(mismatches)
}

#[derive(Debug, Default)]
pub struct Report {
    cases: usize,
    mismatches: Vec<Mismatch>,
}

impl Report {
    pub fn run(cases: &[TestCase]) -> Result<Report, HarnessError> {
        let mut report = Report::default();
        for case in cases {
            info!("Testing: {} {} {} {}", case.label, case.num1, case.num2, case.auto_checked as u8);
            report.mismatches.extend(run_case(case)?);
            report.cases += 1;
        }
        Ok(report)
    }
    pub fn cases(&self) -> usize {
        self.cases
    }
    pub fn mismatches(&self) -> &[Mismatch] {
        &self.mismatches
    }
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mismatch in &self.mismatches {
            write!(f, "{}", mismatch)?;
        }
        Ok(())
    }
}

/// Reads the cases in `input`, runs them and writes the report to `output`.
pub fn run_file(input: &Path, output: &Path) -> Result<Report, HarnessError> {
    let source = fs::read_to_string(input)
        .map_err(|source| HarnessError::Io { path: input.to_path_buf(), source })?;
    let cases = parse_cases(&source)?;
    let report = Report::run(&cases)?;
    fs::write(output, report.to_string())
        .map_err(|source| HarnessError::Io { path: output.to_path_buf(), source })?;
    Ok(report)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_results() {
        let case = TestCase::new("carry", "123", "77");
        assert_eq!(case.results(), vec!["200", "200", "46", "-46", "9471", "9471"]);
        assert_eq!(case.native_results().unwrap(), case.results());

        let big = TestCase::new("big", "99999999999999999999", "1");
        assert_eq!(big.results(), vec![
            "100000000000000000000",
            "100000000000000000000",
            "99999999999999999998",
            "-99999999999999999998",
            "99999999999999999999",
            "99999999999999999999",
        ]);
    }

    #[test]
    fn test_auto_check_errors() {
        let too_big = TestCase::new("big", "99999999999999999999", "1");
        assert!(matches!(too_big.native_results(), Err(HarnessError::AutoCheck { .. })));

        let overflow = TestCase::new("overflow", "9223372036854775807", "2");
        let err = overflow.native_results().unwrap_err();
        assert_eq!(
            err.to_string(),
            "test `overflow`: cannot auto-check, 9223372036854775807 + 2 overflows i64"
        );

        let short = TestCase::new("short", "1", "2").with_expected(&["3"]);
        assert!(matches!(run_case(&short), Err(HarnessError::ResultCount { found: 1, .. })));
    }

    #[test]
    fn test_report() {
        let cases = vec![
            TestCase::new("auto", "-5", "5"),
            TestCase::new("wrong", "2", "3").with_expected(&["5", "5", "-1", "1", "7", "6"]),
        ];
        let report = Report::run(&cases).unwrap();
        assert_eq!(report.cases(), 2);
        assert!(!report.is_clean());
        assert_eq!(report.mismatches(), &[Mismatch {
            label: "wrong".to_string(),
            index: 4,
            expected: "7".to_string(),
            got: "6".to_string(),
        }]);
        assert_eq!(report.to_string(), "Test not passed: wrong, 4\n\tExpected: 7, got 6\n");
    }

    #[test]
    fn test_run_file() {
        let dir = std::env::temp_dir().join(format!("dec_int_check_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let input = dir.join("BigIntTestCases.txt");
        let output = dir.join("TestOutput.txt");
        fs::write(&input, "{ borrow 1000 1 0{ 1001 1001 999 -999 1000 1000 }}\n{ zero 0 -0 1 { } }\n").unwrap();

        let report = run_file(&input, &output).unwrap();
        assert_eq!(report.cases(), 2);
        assert!(report.is_clean());
        assert_eq!(fs::read_to_string(&output).unwrap(), "");

        let missing = dir.join("missing.txt");
        assert!(matches!(run_file(&missing, &output), Err(HarnessError::Io { .. })));
        fs::remove_dir_all(&dir).unwrap();
    }
}
