pub mod stream;
pub mod token;
pub mod tokenize;
pub mod wrap;

pub use stream::TextStream;
pub use token::{Token, TokenKind};
pub use tokenize::{is_token_separator, join_tokens, tokenize_text};
pub use wrap::wrap_text;
