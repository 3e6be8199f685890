use std::fmt::Display;

/// Every test case yields exactly this many results.
pub const AMOUNT_OF_RESULTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
        };
        f.write_str(symbol)
    }
}

/// Result order: `num1 + num2`, `num2 + num1`, `num1 - num2`, `num2 - num1`,
/// `num1 * num2`, `num2 * num1`. The flag marks the swapped operand order.
pub const RESULT_ORDER: [(Operator, bool); AMOUNT_OF_RESULTS] = [
    (Operator::Add, false),
    (Operator::Add, true),
    (Operator::Sub, false),
    (Operator::Sub, true),
    (Operator::Mul, false),
    (Operator::Mul, true),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub label: String,
    pub num1: String,
    pub num2: String,
    /// Expected results are derived from native integer arithmetic.
    pub auto_checked: bool,
    /// Empty when `auto_checked`, otherwise `AMOUNT_OF_RESULTS` entries.
    pub expected: Vec<String>,
}

impl TestCase {
    pub fn new(label: &str, num1: &str, num2: &str) -> Self {
        TestCase {
            label: label.to_string(),
            num1: num1.to_string(),
            num2: num2.to_string(),
            auto_checked: true,
            expected: Vec::new(),
        }
    }
    pub fn with_expected(mut self, expected: &[&str]) -> Self {
        self.auto_checked = false;
        self.expected = expected.iter().map(|s| s.to_string()).collect();
        self
    }
    /// Operands in evaluation order; `swapped` puts `num2` first.
    pub fn operands(&self, swapped: bool) -> (&str, &str) {
        if swapped {
            (&self.num2, &self.num1)
        } else {
            (&self.num1, &self.num2)
        }
    }
}

#[test]
fn test_operands() {
    let case = TestCase::new("t", "3", "4");
    assert_eq!(case.operands(false), ("3", "4"));
    assert_eq!(case.operands(true), ("4", "3"));
    let descr: Vec<String> = RESULT_ORDER
        .iter()
        .map(|&(op, swapped)| {
            let (a, b) = case.operands(swapped);
            format!("{} {} {}", a, op, b)
        })
        .collect();
    assert_eq!(descr, vec!["3 + 4", "4 + 3", "3 - 4", "4 - 3", "3 * 4", "4 * 3"]);
}
