//! Statement boundary detection.
//!
//! The engine prepares only the first statement of a string but runs all of
//! them, so a trailing statement must be caught before anything executes.
//! Scanning follows SQLite's own `sqlite3_complete` rules: a `;` inside a
//! `CREATE TRIGGER ... BEGIN ... END` body does not end the statement.

/// Lexical classes that drive the boundary state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Semi,
    Space,
    Other,
    Explain,
    Create,
    Temp,
    Trigger,
    End,
}

impl Token {
    fn column(self) -> usize {
        match self {
            Token::Semi => 0,
            Token::Space => 1,
            Token::Other => 2,
            Token::Explain => 3,
            Token::Create => 4,
            Token::Temp => 5,
            Token::Trigger => 6,
            Token::End => 7,
        }
    }
}

const START: u8 = 1;

// Rows: invalid, start, normal, explain, create, trigger, semi, end.
const TRANSITIONS: [[u8; 8]; 8] = [
    [1, 0, 2, 3, 4, 2, 2, 2],
    [1, 1, 2, 3, 4, 2, 2, 2],
    [1, 2, 2, 2, 2, 2, 2, 2],
    [1, 3, 3, 2, 4, 2, 2, 2],
    [1, 4, 2, 2, 2, 4, 5, 2],
    [6, 5, 5, 5, 5, 5, 5, 5],
    [6, 6, 5, 5, 5, 5, 5, 7],
    [1, 7, 5, 5, 5, 5, 5, 5],
];

/// Returns true when `sql` holds at most one statement.
///
/// Whitespace, comments and stray semicolons after the first statement are
/// allowed.
pub fn is_single_statement(sql: &str) -> bool {
    let mut state = 0u8;
    let mut finished = false;

    for token in tokenize(sql) {
        if finished && !matches!(token, Token::Semi | Token::Space) {
            return false;
        }

        let next = TRANSITIONS[usize::from(state)][token.column()];
        if next == START && state > START {
            finished = true;
        }
        state = next;
    }

    true
}

/// Splits SQL into the token classes the state machine needs.
fn tokenize(sql: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = sql.chars().peekable();

    while let Some(c) = chars.next() {
        let token = match c {
            ';' => Token::Semi,
            c if c.is_whitespace() => Token::Space,
            '-' if chars.peek() == Some(&'-') => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        break;
                    }
                }
                Token::Space
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
                Token::Space
            }
            '\'' | '"' | '`' => {
                // A doubled quote is an escaped quote and reads as two strings.
                for next in chars.by_ref() {
                    if next == c {
                        break;
                    }
                }
                Token::Other
            }
            '[' => {
                for next in chars.by_ref() {
                    if next == ']' {
                        break;
                    }
                }
                Token::Other
            }
            c if is_word_char(c) => {
                let mut word = String::from(c);
                while let Some(&next) = chars.peek() {
                    if !is_word_char(next) {
                        break;
                    }
                    word.push(next);
                    chars.next();
                }
                keyword(&word)
            }
            _ => Token::Other,
        };
        tokens.push(token);
    }

    tokens
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$' || !c.is_ascii()
}

fn keyword(word: &str) -> Token {
    match word.to_ascii_uppercase().as_str() {
        "EXPLAIN" => Token::Explain,
        "CREATE" => Token::Create,
        "TEMP" | "TEMPORARY" => Token::Temp,
        "TRIGGER" => Token::Trigger,
        "END" => Token::End,
        _ => Token::Other,
    }
}
