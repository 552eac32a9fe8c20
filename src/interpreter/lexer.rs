use std::fmt;

use logos::Logos;

/// Represents a lexical token in the source input.
///
/// Every token is exactly one character wide: literals are single digits and
/// identifiers are single letters. Multi-digit numbers are not a thing in this
/// language, they are built with operators instead.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// A single decimal digit, such as `7`.
    #[regex(r"[0-9]", parse_digit)]
    Digit(u8),
    /// A single-letter identifier, such as `x`.
    #[regex(r"\p{L}", parse_letter)]
    Identifier(char),
    /// `$`
    #[token("$")]
    Dollar,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `.`
    #[token(".")]
    Dot,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `!`
    #[token("!")]
    Bang,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
    /// A character the language has no use for. Never produced by the
    /// derived lexer itself; the cursor builds it from lexing errors.
    Unknown(char),
    /// The end-of-input sentinel.
    End,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Identifier(c) | Self::Unknown(c) => write!(f, "{c}"),
            Self::End => write!(f, "end of data"),
            symbol => match symbol.symbol() {
                Some(c) => write!(f, "{c}"),
                None => write!(f, "{symbol:?}"),
            },
        }
    }
}

impl Token {
    /// Returns the source character of an operator or punctuation token.
    ///
    /// # Example
    /// ```
    /// use runic::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Percent.symbol(), Some('%'));
    /// assert_eq!(Token::Digit(3).symbol(), None);
    /// ```
    #[must_use]
    pub const fn symbol(self) -> Option<char> {
        match self {
            Self::Dollar => Some('$'),
            Self::Equals => Some('='),
            Self::Plus => Some('+'),
            Self::Minus => Some('-'),
            Self::Star => Some('*'),
            Self::Slash => Some('/'),
            Self::Percent => Some('%'),
            Self::Dot => Some('.'),
            Self::Less => Some('<'),
            Self::Greater => Some('>'),
            Self::Bang => Some('!'),
            Self::Ampersand => Some('&'),
            Self::Pipe => Some('|'),
            Self::LParen => Some('('),
            Self::RParen => Some(')'),
            Self::Semicolon => Some(';'),
            _ => None,
        }
    }
}

/// Parses a digit literal from the current token slice.
fn parse_digit(lex: &logos::Lexer<Token>) -> Option<u8> {
    lex.slice().parse().ok()
}

/// Extracts the identifier letter from the current token slice.
fn parse_letter(lex: &logos::Lexer<Token>) -> Option<char> {
    lex.slice().chars().next()
}

/// A forward-only token stream with exactly one token of lookahead.
///
/// Once the input is exhausted the cursor keeps returning [`Token::End`], so
/// advancing past the end is harmless.
pub struct Cursor<'src> {
    lexer:   logos::Lexer<'src, Token>,
    current: Token,
}

impl<'src> Cursor<'src> {
    /// Creates a cursor positioned at the first token of `source`.
    ///
    /// # Example
    /// ```
    /// use runic::interpreter::lexer::{Cursor, Token};
    ///
    /// let mut cursor = Cursor::new("1+a");
    /// assert_eq!(cursor.current(), Token::Digit(1));
    /// cursor.advance();
    /// cursor.advance();
    /// assert_eq!(cursor.current(), Token::Identifier('a'));
    /// cursor.advance();
    /// assert_eq!(cursor.current(), Token::End);
    /// ```
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut cursor = Self { lexer:   Token::lexer(source),
                                current: Token::End, };
        cursor.advance();
        cursor
    }

    /// Returns the current token without consuming it.
    #[must_use]
    pub const fn current(&self) -> Token {
        self.current
    }

    /// Consumes the current token.
    pub fn advance(&mut self) {
        self.current = match self.lexer.next() {
            Some(Ok(token)) => token,
            Some(Err(())) => {
                Token::Unknown(self.lexer.slice().chars().next().unwrap_or(char::REPLACEMENT_CHARACTER))
            },
            None => Token::End,
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn collect(source: &str) -> Vec<Token> {
        let mut cursor = Cursor::new(source);
        let mut tokens = Vec::new();
        while cursor.current() != Token::End {
            tokens.push(cursor.current());
            cursor.advance();
        }
        tokens
    }

    #[test]
    fn every_character_is_its_own_token() {
        assert_eq!(collect("$a=12"),
                   vec![Token::Dollar,
                        Token::Identifier('a'),
                        Token::Equals,
                        Token::Digit(1),
                        Token::Digit(2)]);
    }

    #[test]
    fn whitespace_is_skipped() {
        assert_eq!(collect(" 1 +\t2\n"),
                   vec![Token::Digit(1), Token::Plus, Token::Digit(2)]);
    }

    #[test]
    fn whitespace_only_input_is_empty() {
        assert_eq!(collect(" \t\r\n "), Vec::new());
        assert_eq!(Cursor::new("   ").current(), Token::End);
    }

    #[test]
    fn unicode_letters_are_identifiers() {
        assert_eq!(collect("λ"), vec![Token::Identifier('λ')]);
    }

    #[test]
    fn unknown_characters_are_kept() {
        assert_eq!(collect("1#"), vec![Token::Digit(1), Token::Unknown('#')]);
    }

    #[test]
    fn end_is_sticky() {
        let mut cursor = Cursor::new("");
        assert_eq!(cursor.current(), Token::End);
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.current(), Token::End);
    }

    #[test]
    fn display_names_end_of_data() {
        assert_eq!(Token::End.to_string(), "end of data");
        assert_eq!(Token::RParen.to_string(), ")");
        assert_eq!(Token::Digit(4).to_string(), "4");
    }
}
