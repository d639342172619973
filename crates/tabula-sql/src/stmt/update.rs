use super::Statement;

use tabula_core::stmt::Value;

#[derive(Debug, Clone)]
pub struct Update {
    pub table: String,

    /// `column = value` pairs
    pub assignments: Vec<(String, Value)>,

    /// Trailing clause appended verbatim, e.g. `WHERE id = 5`
    pub condition: String,
}

impl Statement {
    pub fn update(
        table: impl Into<String>,
        assignments: Vec<(String, Value)>,
        condition: impl Into<String>,
    ) -> Self {
        Update {
            table: table.into(),
            assignments,
            condition: condition.into(),
        }
        .into()
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
