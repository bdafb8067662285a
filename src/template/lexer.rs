//! Lexer for address templates using logos

use logos::Logos;

/// Byte range in template source
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token<'s> {
    /// `{fieldName}`, carrying the name without braces
    #[regex(r"\{[A-Za-z0-9_]+\}", |lex| {
        let slice = lex.slice();
        &slice[1..slice.len() - 1]
    })]
    Placeholder(&'s str),

    #[token("\n")]
    Newline,

    /// An opening brace that does not start a placeholder
    #[token("{")]
    StrayBrace,

    #[regex(r"[^{\n]+", |lex| lex.slice())]
    Text(&'s str),
}

/// Tokenize a template, keeping the span of every token
pub fn lex(source: &str) -> Vec<(Token<'_>, Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => push_unmatched(source, span, &mut tokens),
        }
    }
    tokens
}

/// An unclosed placeholder such as `{abc` fails the placeholder pattern as a
/// whole; split it into a stray brace and the text after it.
fn push_unmatched<'s>(source: &'s str, span: Span, tokens: &mut Vec<(Token<'s>, Span)>) {
    let slice = &source[span.clone()];
    match slice.strip_prefix('{') {
        Some(rest) => {
            tokens.push((Token::StrayBrace, span.start..span.start + 1));
            if !rest.is_empty() {
                tokens.push((Token::Text(rest), span.start + 1..span.end));
            }
        }
        None => tokens.push((Token::Text(slice), span)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token<'_>> {
        lex(source).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn test_lex_placeholder_line() {
        assert_eq!(
            tokens("{city}, {state} {postalCode}"),
            vec![
                Token::Placeholder("city"),
                Token::Text(", "),
                Token::Placeholder("state"),
                Token::Text(" "),
                Token::Placeholder("postalCode"),
            ]
        );
    }

    #[test]
    fn test_lex_newlines() {
        assert_eq!(
            tokens("{name}\n{company}"),
            vec![
                Token::Placeholder("name"),
                Token::Newline,
                Token::Placeholder("company"),
            ]
        );
    }

    #[test]
    fn test_lex_stray_brace() {
        assert_eq!(
            tokens("a { b}"),
            vec![Token::Text("a "), Token::StrayBrace, Token::Text(" b}")]
        );
    }

    #[test]
    fn test_lex_unclosed_placeholder() {
        let lexed = lex("{abc def");
        assert_eq!(lexed[0], (Token::StrayBrace, 0..1));
        let rest: String = lexed[1..]
            .iter()
            .map(|(token, _)| match token {
                Token::Text(text) => *text,
                other => panic!("unexpected token {:?}", other),
            })
            .collect();
        assert_eq!(rest, "abc def");

        assert_eq!(
            tokens("x {abc"),
            vec![Token::Text("x "), Token::StrayBrace, Token::Text("abc")]
        );
    }

    #[test]
    fn test_lex_spans() {
        let lexed = lex("Tax ID: {taxNumber}");
        assert_eq!(lexed[1].1, 8..19);
    }
}
