//! Token stream wrapper for the hand-written parser.

use crate::error::ParseError;
use bake_ast::{SourceId, Span, Spanned};
use bake_lexer::Token;

/// Token stream with one token of lookahead.
///
/// Each token carries its byte span from the source, so errors point at the
/// offending position even at end of input.
pub struct TokenStream<'src> {
    tokens: &'src [Spanned<Token>],
    pos: usize,
    source: SourceId,
}

impl<'src> TokenStream<'src> {
    /// Create a new token stream over spanned tokens from one input text.
    pub fn new(tokens: &'src [Spanned<Token>], source: SourceId) -> Self {
        Self {
            tokens,
            pos: 0,
            source,
        }
    }

    /// Peek at the current token without consuming it.
    pub fn peek(&self) -> Option<&'src Token> {
        self.tokens.get(self.pos).map(|spanned| &spanned.item)
    }

    /// Advance to the next token and return the current one.
    pub fn advance(&mut self) -> Option<&'src Token> {
        let token = self.tokens.get(self.pos).map(|spanned| &spanned.item);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Check if the current token matches the expected token's variant.
    pub fn check(&self, expected: &Token) -> bool {
        matches!(self.peek(), Some(t) if std::mem::discriminant(t) == std::mem::discriminant(expected))
    }

    /// Expect a specific token and advance past it.
    ///
    /// Returns the consumed token's span, or an error if it doesn't match.
    pub fn expect(&mut self, expected: Token) -> Result<Span, ParseError> {
        if self.check(&expected) {
            let span = self.current_span();
            self.advance();
            Ok(span)
        } else {
            Err(ParseError::expected_token(
                &expected,
                self.peek(),
                self.current_span(),
            ))
        }
    }

    /// Check if we've reached the end of the token stream.
    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Span of the current token; at EOF, a zero-length span at the end of
    /// the last token (or the start of an empty input).
    pub fn current_span(&self) -> Span {
        if let Some(spanned) = self.tokens.get(self.pos) {
            spanned.span
        } else if let Some(last) = self.tokens.last() {
            Span::new(self.source, last.span.end, last.span.end)
        } else {
            Span::zero(self.source)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bake_ast::SourceId;
    use bake_lexer::lex;

    fn tokens(source: &str) -> Vec<Spanned<Token>> {
        lex(source, SourceId::Directions).expect("lexing should succeed")
    }

    #[test]
    fn test_peek_does_not_consume() {
        let tokens = tokens("mix fold");
        let mut stream = TokenStream::new(&tokens, SourceId::Directions);
        assert_eq!(stream.peek(), stream.peek());
        assert!(!stream.at_end());
    }

    #[test]
    fn test_advance_consumes() {
        let tokens = tokens("mix fold");
        let mut stream = TokenStream::new(&tokens, SourceId::Directions);
        assert!(stream.advance().is_some());
        assert!(stream.advance().is_some());
        assert!(stream.advance().is_none());
        assert!(stream.at_end());
    }

    #[test]
    fn test_check_matches_variant_not_payload() {
        let tokens = tokens("mix");
        let stream = TokenStream::new(&tokens, SourceId::Directions);
        assert!(stream.check(&Token::Ident("anything".into())));
        assert!(!stream.check(&Token::Comma));
    }

    #[test]
    fn test_expect_reports_found_token() {
        let tokens = tokens("mix");
        let mut stream = TokenStream::new(&tokens, SourceId::Directions);
        let err = stream.expect(Token::Comma).unwrap_err();
        assert_eq!(err.kind, crate::ParseErrorKind::UnexpectedToken);
        assert!(err.message.contains("','"));
    }

    #[test]
    fn test_eof_span_sits_after_last_token() {
        let tokens = tokens("mix");
        let mut stream = TokenStream::new(&tokens, SourceId::Directions);
        stream.advance();
        let span = stream.current_span();
        assert_eq!(span.start, 3);
        assert!(span.is_empty());
    }
}
