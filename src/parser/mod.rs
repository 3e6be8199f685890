pub mod case;
pub mod parser;

pub use crate::parser::case::{Operator, TestCase, AMOUNT_OF_RESULTS, RESULT_ORDER};
pub use crate::parser::parser::parse_cases;
