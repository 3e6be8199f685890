pub mod token;
pub mod tokenizer;

pub use crate::tokenizer::tokenizer::tokenize;
pub use crate::tokenizer::token::{CaseTokenType, Token};
