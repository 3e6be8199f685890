use std::collections::VecDeque;

use super::token::{CaseTokenType, Token};

/// Splits a test-case file into brace and word tokens. Braces never glue to
/// a neighbouring word, so `1{` yields the word `1` and then `{`.
pub fn tokenize(origin: &str) -> VecDeque<Token> {
    let mut result = VecDeque::new();
    let mut val = String::new();
    let mut line = 1;
    let mut word_line = 1;

    for symbol in origin.chars() {
        match symbol {
            '{' | '}' => {
                flush_word(&mut result, &mut val, word_line);
                let ty = if symbol == '{' { CaseTokenType::LeftBrace } else { CaseTokenType::RightBrace };
                result.push_back(Token::new(symbol.to_string(), ty, line));
            },
            _ if symbol.is_whitespace() => {
                flush_word(&mut result, &mut val, word_line);
                if symbol == '\n' {
                    line += 1;
                }
            },
            _ => {
                if val.is_empty() {
                    word_line = line;
                }
                val.push(symbol);
            },
        }
    }
    flush_word(&mut result, &mut val, word_line);

    result
}

fn flush_word(result: &mut VecDeque<Token>, val: &mut String, line: usize) {
    if !val.is_empty() {
        result.push_back(Token::new(std::mem::take(val), CaseTokenType::Word, line));
    }
}

#[test]
fn test_tokenizer() {
    let origin = "{ add 123 77 0{ 200 200\n-46 46 9471 9471 }}\n{ big -5 5 1 { } }";
    let tokens = tokenize(origin);
    let vals: Vec<&str> = tokens.iter().map(|t| t.val.as_str()).collect();
    assert_eq!(vals, vec![
        "{", "add", "123", "77", "0", "{", "200", "200",
        "-46", "46", "9471", "9471", "}", "}",
        "{", "big", "-5", "5", "1", "{", "}", "}",
    ]);
    assert_eq!(tokens[4].ty, CaseTokenType::Word);
    assert_eq!(tokens[5].ty, CaseTokenType::LeftBrace);
    assert_eq!(tokens[8].line, 2);
    assert_eq!(tokens[14].line, 3);
}

#[test]
fn test_tokenize_blank() {
    assert!(tokenize("").is_empty());
    assert!(tokenize(" \t\r\n ").is_empty());
}
