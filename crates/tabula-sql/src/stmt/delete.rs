use super::Statement;

#[derive(Debug, Clone)]
pub struct Delete {
    pub table: String,

    /// Trailing clause appended verbatim. Empty deletes every row.
    pub condition: String,
}

impl Statement {
    pub fn delete(table: impl Into<String>, condition: impl Into<String>) -> Self {
        Delete {
            table: table.into(),
            condition: condition.into(),
        }
        .into()
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
