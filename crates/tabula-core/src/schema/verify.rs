use super::{ty::types_match, TableSchema};
use crate::{Error, Result};

impl TableSchema {
    /// Checks that `live`, the schema an existing table actually has, is
    /// equivalent to `self`.
    ///
    /// Primary-key and not-null sets are compared case-insensitively without
    /// regard to order. Fields are compared by position: names
    /// case-insensitively, types case-insensitively with integer and real
    /// types accepted as interchangeable.
    pub fn verify_matches(&self, live: &TableSchema) -> Result<()> {
        if !same_set(&self.primary_key, &live.primary_key) {
            return Err(Error::schema_conflict(format!(
                "primary key {:?} does not match existing {:?}",
                self.primary_key, live.primary_key
            )));
        }

        if !same_set(&self.not_null, &live.not_null) {
            return Err(Error::schema_conflict(format!(
                "not-null fields {:?} do not match existing {:?}",
                self.not_null, live.not_null
            )));
        }

        if self.fields.len() != live.fields.len() {
            return Err(Error::schema_conflict(format!(
                "expected {} fields, existing table has {}",
                self.fields.len(),
                live.fields.len()
            )));
        }

        for (i, (expected, actual)) in self.fields.iter().zip(&live.fields).enumerate() {
            if !expected.name.eq_ignore_ascii_case(&actual.name) {
                return Err(Error::schema_conflict(format!(
                    "field {i} is `{}`, existing table has `{}`",
                    expected.name, actual.name
                )));
            }

            if !types_match(&expected.ty, &actual.ty) {
                return Err(Error::schema_conflict(format!(
                    "field `{}` has type `{}`, existing table has `{}`",
                    expected.name, expected.ty, actual.ty
                )));
            }
        }

        Ok(())
    }
}

fn same_set(a: &[String], b: &[String]) -> bool {
    let covers = |x: &[String], y: &[String]| {
        x.iter()
            .all(|name| y.iter().any(|other| other.eq_ignore_ascii_case(name)))
    };
    covers(a, b) && covers(b, a)
}
