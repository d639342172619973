/// How a statement interacts with the implicit transaction.
///
/// SQLite runs each statement in its own transaction unless one is open.
/// Data changes open one so `commit` and `rollback` behave as they do on a
/// server with autocommit disabled, and schema changes commit it first the
/// way a server commits implicitly before DDL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatementKind {
    /// `INSERT`, `UPDATE`, `DELETE`, `REPLACE`
    Mutation,

    /// `CREATE`, `DROP`, `ALTER`
    Schema,

    Other,
}

impl StatementKind {
    pub(crate) fn of(sql: &str) -> Self {
        let keyword = sql
            .trim_start()
            .split(|ch: char| !ch.is_ascii_alphabetic())
            .next()
            .unwrap_or("");

        const MUTATIONS: &[&str] = &["INSERT", "UPDATE", "DELETE", "REPLACE"];
        const SCHEMA: &[&str] = &["CREATE", "DROP", "ALTER"];

        if MUTATIONS.iter().any(|kw| keyword.eq_ignore_ascii_case(kw)) {
            Self::Mutation
        } else if SCHEMA.iter().any(|kw| keyword.eq_ignore_ascii_case(kw)) {
            Self::Schema
        } else {
            Self::Other
        }
    }

    /// The statement to run first, given whether a transaction is open.
    pub(crate) fn prelude(self, in_transaction: bool) -> Option<&'static str> {
        match self {
            Self::Mutation if !in_transaction => Some("BEGIN"),
            Self::Schema if in_transaction => Some("COMMIT"),
            _ => None,
        }
    }
}
