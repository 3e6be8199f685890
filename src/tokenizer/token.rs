#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaseTokenType {
    LeftBrace,
    RightBrace,
    /// Any run of characters that is neither whitespace nor a brace.
    Word,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub val: String,
    pub ty: CaseTokenType,
    /// 1-based line the token starts on.
    pub line: usize,
}

impl Token {
    pub fn new(val: String, ty: CaseTokenType, line: usize) -> Token {
        Token { val, ty, line }
    }
}
