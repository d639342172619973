/// The columns a [`select`](super::Table::select) returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fields {
    /// Every column, in table order
    All,

    /// The named columns, in the given order
    Named(Vec<String>),
}

impl Fields {
    /// A list whose first entry is `*` selects every column.
    pub fn from_names<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        match names.first() {
            Some(first) if first == "*" => Self::All,
            _ => Self::Named(names),
        }
    }
}

impl From<&str> for Fields {
    fn from(value: &str) -> Self {
        Self::from_names([value])
    }
}

impl From<Vec<String>> for Fields {
    fn from(value: Vec<String>) -> Self {
        Self::from_names(value)
    }
}

impl From<Vec<&str>> for Fields {
    fn from(value: Vec<&str>) -> Self {
        Self::from_names(value)
    }
}

impl From<&[&str]> for Fields {
    fn from(value: &[&str]) -> Self {
        Self::from_names(value.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for Fields {
    fn from(value: [&str; N]) -> Self {
        Self::from_names(value)
    }
}
