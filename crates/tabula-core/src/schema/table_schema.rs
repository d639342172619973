use crate::{Error, Result};

/// In-memory representation of a table's columns and constraints.
///
/// Field order is significant: it is the order of positional inserts and of
/// the columns in rendered DDL. Primary-key and not-null names are kept
/// without duplicates (compared case-insensitively); a primary-key field is
/// always also not-null.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TableSchema {
    /// Fields in declaration order
    pub fields: Vec<Field>,

    /// Names of the primary-key fields
    pub primary_key: Vec<String>,

    /// Names of the fields that reject nulls
    pub not_null: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: String,
}

impl TableSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.push_field(name, ty);
        self
    }

    pub fn with_primary_key<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for name in names {
            self.mark_primary_key(name);
        }
        self
    }

    pub fn with_not_null<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for name in names {
            self.mark_not_null(name);
        }
        self
    }

    pub fn push_field(&mut self, name: impl Into<String>, ty: impl Into<String>) {
        self.fields.push(Field {
            name: name.into(),
            ty: ty.into(),
        });
    }

    /// Adds `name` to the primary key, and therefore to the not-null set.
    pub fn mark_primary_key(&mut self, name: impl Into<String>) {
        let name = name.into();
        push_unique(&mut self.not_null, &name);
        push_unique(&mut self.primary_key, &name);
    }

    pub fn mark_not_null(&mut self, name: impl Into<String>) {
        push_unique(&mut self.not_null, &name.into());
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }

    pub fn is_primary_key(&self, name: &str) -> bool {
        contains(&self.primary_key, name)
    }

    pub fn is_not_null(&self, name: &str) -> bool {
        contains(&self.not_null, name)
    }

    /// Checks the structural invariants: at least one field, unique field
    /// names, and every key/not-null name refers to a declared field.
    pub fn verify(&self) -> Result<()> {
        if self.fields.is_empty() {
            return Err(Error::invalid_schema("table declares no fields"));
        }

        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i]
                .iter()
                .any(|prev| prev.name.eq_ignore_ascii_case(&field.name))
            {
                return Err(Error::invalid_schema(format!(
                    "field `{}` is declared twice",
                    field.name
                )));
            }
        }

        for (what, names) in [("primary key", &self.primary_key), ("not-null", &self.not_null)] {
            if let Some(name) = names.iter().find(|name| self.field(name).is_none()) {
                return Err(Error::invalid_schema(format!(
                    "{what} field `{name}` is not declared"
                )));
            }
        }

        Ok(())
    }
}

fn contains(names: &[String], name: &str) -> bool {
    names.iter().any(|n| n.eq_ignore_ascii_case(name))
}

fn push_unique(names: &mut Vec<String>, name: &str) {
    if !contains(names, name) {
        names.push(name.to_string());
    }
}
