use super::Statement;

#[derive(Debug, Clone)]
pub struct Select {
    pub table: String,

    /// Selected columns, in result order
    pub fields: Vec<String>,

    /// Trailing clause appended verbatim, e.g. `ORDER BY id DESC`
    pub condition: String,
}

impl Statement {
    pub fn select(
        table: impl Into<String>,
        fields: Vec<String>,
        condition: impl Into<String>,
    ) -> Self {
        Select {
            table: table.into(),
            fields,
            condition: condition.into(),
        }
        .into()
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
