use crate::{
    ast::Token,
    error::{ParseError, Result},
};

/// Position-indexed cursor over an immutable token sequence.
///
/// Backtracking is done by saving [`position`](Self::position) before trying a
/// rule and handing it back to [`set_position`](Self::set_position) when the
/// rule does not match.
#[derive(Debug, Clone)]
pub struct TokenCursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenCursor {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenCursor { tokens, pos: 0 }
    }

    pub fn has_next(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Token at the cursor, without advancing.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the token at the cursor and advances past it.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned()?;
        self.pos += 1;
        Some(token)
    }

    /// Steps back over the token most recently returned by [`next`](Self::next).
    pub fn return_token(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos.min(self.tokens.len());
    }

    /// Like [`next`](Self::next), but running out of tokens is a syntax error
    /// carrying `message` and pointing at the last consumed token.
    pub fn require_next(&mut self, message: &str) -> Result<Token> {
        match self.next() {
            Some(token) => Ok(token),
            None => Err(ParseError::parser(message, self.last().cloned())),
        }
    }

    /// Tokens not consumed yet.
    pub fn remaining(&self) -> &[Token] {
        &self.tokens[self.pos..]
    }

    fn last(&self) -> Option<&Token> {
        self.pos.checked_sub(1).and_then(|i| self.tokens.get(i))
    }
}

impl From<Vec<Token>> for TokenCursor {
    fn from(tokens: Vec<Token>) -> Self {
        TokenCursor::new(tokens)
    }
}
