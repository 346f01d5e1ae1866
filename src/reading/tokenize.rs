use crate::reading::Token;

/// Characters that end a word and become tokens of their own.
pub fn is_token_separator(c: char) -> bool {
    c == ' ' || c == '\n' || c == '\t'
}

/// Splits text into words and single whitespace characters.
///
/// Lossless: `join_tokens(&tokenize_text(s)) == s` for every input.
pub fn tokenize_text(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current_word = String::new();

    for ch in text.chars() {
        if is_token_separator(ch) {
            if !current_word.is_empty() {
                tokens.push(Token::word(std::mem::take(&mut current_word)));
            }
            tokens.push(Token::whitespace(ch));
        } else {
            current_word.push(ch);
        }
    }

    if !current_word.is_empty() {
        tokens.push(Token::word(current_word));
    }

    tokens
}

pub fn join_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}
