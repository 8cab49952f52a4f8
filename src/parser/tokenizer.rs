use std::iter::Peekable;
use std::str::Chars;

use anyhow::{anyhow, bail, Result};

/*************\
|* Tokenizer *|
\*************/
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    ParenStart,
    ParenEnd,
    Dash,
    Word(String),
    Quoted(String),
}

/// Split input text into tokens. Quoted text has its escapes resolved
/// here; words are validated later, when they are parsed.
pub fn tokenize(s: &str) -> Result<Vec<Token>> {
    let mut chars = s.chars().peekable();
    let mut tokens: Vec<Token> = vec![];

    while let Some(&c) = chars.peek() {
        match c {
            '(' => {
                chars.next();
                tokens.push(Token::ParenStart);
            },
            ')' => {
                chars.next();
                tokens.push(Token::ParenEnd);
            },
            // single- and double-quoted text are equivalent
            '\'' | '"' => {
                chars.next();
                tokens.push(Token::Quoted(lex_quoted(&mut chars, c)?));
            },
            // a dash at a token boundary marks a negative literal
            '-' => {
                chars.next();
                tokens.push(Token::Dash);
            },
            c if c.is_whitespace() => {
                chars.next();
            },
            _ => tokens.push(lex_word(&mut chars)),
        }
    }

    Ok(tokens)
}

/// Consume a word up to the next delimiter.
fn lex_word(chars: &mut Peekable<Chars>) -> Token {
    let mut word = String::new();

    while let Some(&c) = chars.peek() {
        if c == '(' || c == ')' || c == '\'' || c == '"' || c.is_whitespace()
        {
            break;
        }
        word.push(c);
        chars.next();
    }

    Token::Word(word)
}

/// Consume a quoted run up to the matching mark, resolving escapes.
fn lex_quoted(chars: &mut Peekable<Chars>, mark: char) -> Result<String> {
    let mut content = String::new();

    loop {
        let c = chars
            .next()
            .ok_or_else(|| anyhow!("input ended inside a quoted value"))?;

        if c == mark {
            return Ok(content);
        }

        if c == '\\' {
            let escaped = chars
                .next()
                .ok_or_else(|| anyhow!("input ended inside an escape"))?;
            match escaped {
                '\\' | '\'' | '"' => content.push(escaped),
                'n' => content.push('\n'),
                't' => content.push('\t'),
                other => bail!("unknown escape '\\{other}'"),
            }
        } else {
            content.push(c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Token::*;
    use super::*;

    #[test]
    fn test_one_quote() {
        assert_eq!(
            tokenize("(bee 'hi')").unwrap(),
            vec![
                ParenStart,
                Word("bee".to_string()),
                Quoted("hi".to_string()),
                ParenEnd
            ]
        )
    }

    #[test]
    fn test_escaped_quote() {
        assert_eq!(
            tokenize("'hi\\'hi\\n'").unwrap(),
            vec![Quoted("hi'hi\n".to_string())]
        )
    }

    #[test]
    fn test_unterminated_quote_is_an_error() {
        assert!(tokenize("'hi").is_err())
    }

    #[test]
    fn test_negative_numbers() {
        assert_eq!(
            tokenize("-4.31").unwrap(),
            vec![Dash, Word("4.31".to_string())]
        )
    }

    #[test]
    fn test_tokenize_all_the_things() {
        assert_eq!(
            tokenize(")(hello ( 3.2 he(\"yo\\\"yo\"y").unwrap(),
            vec![
                ParenEnd,
                ParenStart,
                Word("hello".to_string()),
                ParenStart,
                Word("3.2".to_string()),
                Word("he".to_string()),
                ParenStart,
                Quoted("yo\"yo".to_string()),
                Word("y".to_string())
            ]
        )
    }
}
