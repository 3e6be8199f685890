use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::error::HarnessError;
use crate::tokenizer::{tokenize, CaseTokenType, Token};
use super::case::{TestCase, AMOUNT_OF_RESULTS};

// 文法
// Cases  -> Case Cases | #
// Case   -> { label num1 num2 flag Body }
// Body   -> { } }                       (flag == 1)
//         | { r1 r2 r3 r4 r5 r6 } }     (flag == 0)
//
// 遇到非 `{` 的顶层 token 即停止读取

struct Parser {
    tokens: VecDeque<Token>,
}

impl Parser {
    fn new(origin: &str) -> Self {
        Parser { tokens: tokenize(origin) }
    }
    fn get_next_token(&mut self, expected: &'static str) -> Result<Token, HarnessError> {
        self.tokens.pop_front().ok_or(HarnessError::UnexpectedEnd { expected })
    }
    fn watch_next_token(&self) -> Option<&Token> {
        self.tokens.front()
    }
    fn expect(&mut self, ty: CaseTokenType, expected: &'static str) -> Result<Token, HarnessError> {
        let token = self.get_next_token(expected)?;
        if token.ty != ty {
            return Err(HarnessError::UnexpectedToken { line: token.line, expected, found: token.val });
        }
        Ok(token)
    }
    fn parse(&mut self) -> Result<Vec<TestCase>, HarnessError> {
        let mut cases = Vec::new();
        while let Some(token) = self.watch_next_token() {
            if token.ty != CaseTokenType::LeftBrace {
                warn!(line = token.line, token = %token.val, remaining = self.tokens.len(), "stopped reading test cases at non-brace token");
                break;
            }
            let case = self.parse_case()?;
            debug!(label = %case.label, auto_checked = case.auto_checked, "parsed test case");
            cases.push(case);
        }
        Ok(cases)
    }
    fn parse_case(&mut self) -> Result<TestCase, HarnessError> {
        self.expect(CaseTokenType::LeftBrace, "`{`")?;
        let label = self.expect(CaseTokenType::Word, "a test label")?.val;
        let num1 = self.expect(CaseTokenType::Word, "the first number")?.val;
        let num2 = self.expect(CaseTokenType::Word, "the second number")?.val;
        let auto_checked = self.parse_flag()?;
        self.expect(CaseTokenType::LeftBrace, "`{` opening the expected results")?;

        let expected = if auto_checked {
            Vec::new()
        } else {
            self.parse_results(&label)?
        };

        self.expect(CaseTokenType::RightBrace, "`}` closing the expected results")?;
        self.expect(CaseTokenType::RightBrace, "`}` closing the test case")?;

        Ok(TestCase { label, num1, num2, auto_checked, expected })
    }
    fn parse_flag(&mut self) -> Result<bool, HarnessError> {
        let token = self.expect(CaseTokenType::Word, "the auto-check flag")?;
        match token.val.as_str() {
            "0" => Ok(false),
            "1" => Ok(true),
            _ => Err(HarnessError::InvalidFlag { line: token.line, found: token.val }),
        }
    }
    fn parse_results(&mut self, label: &str) -> Result<Vec<String>, HarnessError> {
        let mut results = Vec::with_capacity(AMOUNT_OF_RESULTS);
        while results.len() < AMOUNT_OF_RESULTS {
            let next_ty = self.watch_next_token().map(|token| token.ty);
            match next_ty {
                Some(CaseTokenType::Word) => {
                    results.push(self.get_next_token("an expected result")?.val);
                },
                Some(_) => {
                    return Err(HarnessError::ResultCount { label: label.to_string(), found: results.len() });
                },
                None => return Err(HarnessError::UnexpectedEnd { expected: "an expected result" }),
            }
        }
        Ok(results)
    }
}

/// Parses every test case in `origin`.
pub fn parse_cases(origin: &str) -> Result<Vec<TestCase>, HarnessError> {
    Parser::new(origin).parse()
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse() {
        let origin = "\
            { carry 123 77 0{ 200 200 46 -46 9471 9471 }}\n\
            { small -5 5 1 { } }\n";
        let cases = parse_cases(origin).unwrap();
        assert_eq!(cases, vec![
            TestCase::new("carry", "123", "77")
                .with_expected(&["200", "200", "46", "-46", "9471", "9471"]),
            TestCase::new("small", "-5", "5"),
        ]);
    }

    #[test]
    fn test_parse_stops_at_garbage() {
        let cases = parse_cases("{ a 1 2 1 { } }\n# trailing notes").unwrap();
        assert_eq!(cases.len(), 1);
        assert!(parse_cases("").unwrap().is_empty());
        assert!(parse_cases("notes only").unwrap().is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_cases("{ a 1 2 0 { 3 3 -1 1 }}"),
            Err(HarnessError::ResultCount { found: 4, .. })
        ));
        assert!(matches!(
            parse_cases("{ a 1 2 yes { } }"),
            Err(HarnessError::InvalidFlag { line: 1, .. })
        ));
        assert!(matches!(
            parse_cases("{ a 1 2 1 { 3 } }"),
            Err(HarnessError::UnexpectedToken { .. })
        ));
        assert!(matches!(
            parse_cases("{ a 1 2 0 { 3 3 -1 1 2 2 7 } }"),
            Err(HarnessError::UnexpectedToken { .. })
        ));
        assert!(matches!(
            parse_cases("{ a 1 2 1 }"),
            Err(HarnessError::UnexpectedToken { .. })
        ));
        assert!(matches!(
            parse_cases("{ a 1 2 1 {"),
            Err(HarnessError::UnexpectedEnd { .. })
        ));
        assert!(matches!(
            parse_cases("{ a 1 2 0 { 3 3"),
            Err(HarnessError::UnexpectedEnd { .. })
        ));
    }
}
