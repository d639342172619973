//! Parsing of `CREATE TABLE` column-definition lists into [`TableSchema`].
//!
//! Both dialects share one grammar: the definition is split on top-level
//! commas, each segment is either a table-level clause or a column, and a
//! column's first two tokens are its name and type. The dialects differ only
//! in which table-level clauses exist and in MySQL's display-width integer
//! alias.

use std::borrow::Cow;
use tabula_core::{schema::TableSchema, Dialect, Error, Result};

/// Table-level clauses that carry no column or key information.
const SQLITE_IGNORED: &[&str] = &["CHECK", "FOREIGN", "UNIQUE"];

const MYSQL_IGNORED: &[&str] = &[
    "CHECK", "FOREIGN", "FULLTEXT", "INDEX", "KEY", "SPATIAL", "UNIQUE",
];

/// Parses a column-definition list written in `dialect`.
pub fn parse_schema(dialect: Dialect, raw: &str) -> Result<TableSchema> {
    let mut schema = TableSchema::new();
    let raw = strip_comments(raw);

    for segment in split_top_level(&raw, |ch| ch == ',') {
        let mut tokens = split_top_level(segment, char::is_whitespace);

        // `CONSTRAINT <name>` only names the clause that follows it.
        if is_keyword(tokens[0], "CONSTRAINT") {
            if tokens.len() < 3 {
                return Err(Error::invalid_schema(format!(
                    "constraint `{segment}` has no body"
                )));
            }
            tokens.drain(..2);
        }

        if is_keyword(tokens[0], "PRIMARY") {
            for name in key_columns(segment)? {
                schema.mark_primary_key(name);
            }
            continue;
        }

        let ignored = match dialect {
            Dialect::Sqlite => SQLITE_IGNORED,
            Dialect::Mysql => MYSQL_IGNORED,
        };

        if ignored.iter().any(|keyword| is_keyword(tokens[0], keyword)) {
            continue;
        }

        let [name, ty, modifiers @ ..] = &tokens[..] else {
            return Err(Error::invalid_schema(format!(
                "column definition `{segment}` needs a name and a type"
            )));
        };

        let name = unquote(name);
        let ty = match dialect {
            Dialect::Mysql if ty.eq_ignore_ascii_case("int(11)") => "INT",
            _ => *ty,
        };

        schema.push_field(name.clone(), ty);

        if has_phrase(modifiers, &["PRIMARY", "KEY"]) {
            schema.mark_primary_key(name);
        } else if has_phrase(modifiers, &["NOT", "NULL"]) {
            schema.mark_not_null(name);
        }
    }

    schema.verify()?;
    Ok(schema)
}

/// Returns the text between the first `(` and the last `)` of a
/// `CREATE TABLE` statement.
pub fn column_definitions(create_sql: &str) -> Option<&str> {
    let start = create_sql.find('(')?;
    let end = create_sql.rfind(')')?;

    (start < end).then(|| &create_sql[start + 1..end])
}

/// Names listed in a `PRIMARY KEY (a, b)` clause.
fn key_columns(segment: &str) -> Result<Vec<String>> {
    let Some(list) = column_definitions(segment) else {
        return Err(Error::invalid_schema(format!(
            "primary key clause `{segment}` lists no columns"
        )));
    };

    let names: Vec<_> = split_top_level(list, |ch| ch == ',')
        .into_iter()
        .map(|column| {
            // Drop ordering and prefix-length suffixes: `name`(10) DESC
            let column = split_top_level(column, char::is_whitespace)[0];
            let end = column.rfind(['`', '"', ']']).map_or_else(
                || column.find('(').unwrap_or(column.len()),
                |i| i + 1,
            );
            unquote(&column[..end])
        })
        .collect();

    if names.is_empty() {
        return Err(Error::invalid_schema(format!(
            "primary key clause `{segment}` lists no columns"
        )));
    }

    Ok(names)
}

/// Replaces `-- ...` and `/* ... */` comments outside quotes with
/// whitespace. SQLite keeps a table's definition exactly as it was written,
/// comments included.
fn strip_comments(src: &str) -> Cow<'_, str> {
    if !src.contains("--") && !src.contains("/*") {
        return Cow::Borrowed(src);
    }

    let mut out = String::with_capacity(src.len());
    let mut quote: Option<char> = None;
    let mut chars = src.chars();

    while let Some(ch) = chars.next() {
        if let Some(close) = quote {
            if ch == close {
                quote = None;
            }
            out.push(ch);
            continue;
        }

        let next = chars.clone().next();

        match (ch, next) {
            ('-', Some('-')) => {
                // Runs to the end of the line, which stays a separator
                for ch in chars.by_ref() {
                    if ch == '\n' {
                        break;
                    }
                }
                out.push('\n');
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = None;
                for ch in chars.by_ref() {
                    if prev == Some('*') && ch == '/' {
                        break;
                    }
                    prev = Some(ch);
                }
                out.push(' ');
            }
            ('\'' | '"' | '`', _) => {
                quote = Some(ch);
                out.push(ch);
            }
            ('[', _) => {
                quote = Some(']');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }

    Cow::Owned(out)
}

/// Splits `src` on separator characters that are outside parentheses and
/// quotes. Pieces are trimmed and empty pieces dropped, so the result of a
/// non-blank input is never empty.
fn split_top_level(src: &str, is_sep: impl Fn(char) -> bool) -> Vec<&str> {
    let mut parts = vec![];
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, ch) in src.char_indices() {
        match quote {
            Some(close) => {
                // A doubled quote closes and immediately reopens.
                if ch == close {
                    quote = None;
                }
            }
            None => match ch {
                '\'' | '"' | '`' => quote = Some(ch),
                '[' => quote = Some(']'),
                '(' => depth += 1,
                ')' => depth = depth.saturating_sub(1),
                _ if depth == 0 && is_sep(ch) => {
                    parts.push(&src[start..i]);
                    start = i + ch.len_utf8();
                }
                _ => {}
            },
        }
    }

    parts.push(&src[start..]);
    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// Strips identifier quoting: backticks, double quotes, or brackets.
fn unquote(token: &str) -> String {
    let mut chars = token.chars();

    let close = match (chars.next(), chars.next_back()) {
        (Some('`'), Some('`')) => '`',
        (Some('"'), Some('"')) => '"',
        (Some('['), Some(']')) => return chars.as_str().to_string(),
        _ => return token.to_string(),
    };

    let doubled: String = [close, close].iter().collect();
    chars.as_str().replace(&doubled, &close.to_string())
}

fn is_keyword(token: &str, keyword: &str) -> bool {
    // `KEY(...)` and `UNIQUE(...)` may be written without a space.
    let word = token.split('(').next().unwrap_or(token);
    word.eq_ignore_ascii_case(keyword)
}

fn has_phrase(tokens: &[&str], phrase: &[&str]) -> bool {
    tokens.windows(phrase.len()).any(|window| {
        window
            .iter()
            .zip(phrase)
            .all(|(token, word)| token.eq_ignore_ascii_case(word))
    })
}
