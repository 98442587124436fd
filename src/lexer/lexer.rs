use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::LexError, lexer_rule};

use super::tokens::{Token, TokenKind};

/// One entry of the rule table: a pattern anchored at the cursor and the
/// kind it produces. `kind: None` marks a skip rule.
pub struct TokenRule {
    pub regex: Regex,
    pub kind: Option<TokenKind>,
}

lazy_static! {
    /// The ordered rule table. Rules are tried in declaration order against
    /// the remaining input and the first match wins, so specific patterns
    /// (keywords, two-character operators) must precede general ones (bare
    /// identifiers, single-character operators).
    static ref TOKEN_RULES: Vec<TokenRule> = vec![
        // Whitespace and comments
        lexer_rule!(r"^\s+"),
        lexer_rule!(r"^//.*"),
        lexer_rule!(r"^/\*[\s\S]*?\*/"),

        // Single-character delimiters
        lexer_rule!(r"^;", Semicolon),
        lexer_rule!(r"^\{", OpenCurly),
        lexer_rule!(r"^\}", CloseCurly),
        lexer_rule!(r"^\(", OpenParen),
        lexer_rule!(r"^\)", CloseParen),
        lexer_rule!(r"^,", Comma),
        lexer_rule!(r"^\.", Dot),
        lexer_rule!(r"^\[", OpenBracket),
        lexer_rule!(r"^\]", CloseBracket),

        // Keywords, whole-word only: `ifx` is an identifier, not `if`
        lexer_rule!(r"^\blet\b", Let),
        lexer_rule!(r"^\bif\b", If),
        lexer_rule!(r"^\belse\b", Else),
        lexer_rule!(r"^\btrue\b", True),
        lexer_rule!(r"^\bfalse\b", False),
        lexer_rule!(r"^\bnull\b", Null),
        lexer_rule!(r"^\bsuper\b", Super),
        lexer_rule!(r"^\bwhile\b", While),
        lexer_rule!(r"^\bdo\b", Do),
        lexer_rule!(r"^\bfor\b", For),
        lexer_rule!(r"^\bdef\b", Def),
        lexer_rule!(r"^\breturn\b", Return),
        lexer_rule!(r"^\bclass\b", Class),
        lexer_rule!(r"^\bextends\b", Extends),

        // Equality before `!` and `=`
        lexer_rule!(r"^[=!]=", Equality),

        lexer_rule!(r"^&&", LogicalAnd),
        lexer_rule!(r"^\|\|", LogicalOr),
        lexer_rule!(r"^!", LogicalNot),

        // Assignment: compound forms before the additive/multiplicative rules
        lexer_rule!(r"^=", SimpleAssign),
        lexer_rule!(r"^[*/+\-]=", ComplexAssign),

        lexer_rule!(r"^[><]=?", Relational),
        lexer_rule!(r"^[+\-]", Additive),
        lexer_rule!(r"^[*/]", Multiplicative),

        lexer_rule!(r"^\d+", Number),

        // Strings keep their quotes; the parser strips them
        lexer_rule!(r#"^"[^"]*""#, String),
        lexer_rule!(r"^'[^']*'", String),

        // Identifier catch-all
        lexer_rule!(r"^\w+", Identifier),
    ];
}

/// Lazily pulls one token at a time from a source string.
///
/// The cursor advances by exactly the matched length on every successful
/// match. Only the caller's current token is ever alive; the tokenizer
/// retains no token list.
pub struct Tokenizer {
    source: String,
    cursor: usize,
}

impl Tokenizer {
    pub fn new(source: &str) -> Tokenizer {
        Tokenizer {
            source: source.to_string(),
            cursor: 0,
        }
    }

    pub fn has_more_tokens(&self) -> bool {
        self.cursor < self.source.len()
    }

    /// Returns the next significant token, `Ok(None)` at end of input, or
    /// a `LexError` when no rule matches the current character.
    pub fn get_next_token(&mut self) -> Result<Option<Token>, LexError> {
        loop {
            if !self.has_more_tokens() {
                return Ok(None);
            }

            let rest = &self.source[self.cursor..];

            let mut skipped = false;
            for rule in TOKEN_RULES.iter() {
                if let Some(matched) = rule.regex.find(rest) {
                    self.cursor += matched.end();

                    match rule.kind {
                        Some(kind) => {
                            return Ok(Some(Token {
                                kind,
                                value: matched.as_str().to_string(),
                            }))
                        }
                        // Skip rule: consume and rescan
                        None => {
                            skipped = true;
                            break;
                        }
                    }
                }
            }

            if !skipped {
                let Some(found) = rest.chars().next() else {
                    return Ok(None);
                };
                return Err(LexError {
                    found,
                    offset: self.cursor,
                });
            }
        }
    }
}
