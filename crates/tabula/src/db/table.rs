use super::{Db, Fields};
use crate::Result;

use tabula_core::{
    bail,
    stmt::{Record, ValueRecord},
    Error,
};
use tabula_sql::Statement;

/// CRUD operations on one table of a [`Db`].
///
/// Values are always rendered as literals by the serializer. Conditions are
/// trailing SQL clauses (`WHERE ...`, `ORDER BY ...`) supplied by the caller
/// and appended verbatim.
#[derive(Debug)]
pub struct Table<'a> {
    db: &'a mut Db,
    name: String,
}

impl<'a> Table<'a> {
    pub(super) fn new(db: &'a mut Db, name: String) -> Self {
        Self { db, name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert one value per bound field, in field order. Null values are
    /// written as explicit `NULL`s.
    pub async fn insert(&mut self, values: impl Into<ValueRecord>) -> Result<u64> {
        let fields = self.bound_fields()?;
        let values = values.into().into_vec();

        if values.len() != fields.len() {
            return Err(Error::invalid_insert(format!(
                "table `{}` has {} fields, got {} values",
                self.name,
                fields.len(),
                values.len()
            )));
        }

        self.db
            .exec(&Statement::insert(self.name.clone(), fields, values))
            .await
    }

    /// Insert the named values. Fields that are unnamed or null are left out
    /// so the column takes its default.
    pub async fn insert_record(&mut self, record: Record) -> Result<u64> {
        let (columns, values): (Vec<_>, Vec<_>) = record
            .into_iter()
            .filter(|(name, value)| !name.is_empty() && !value.is_null())
            .unzip();

        if columns.is_empty() {
            return Err(Error::invalid_insert(format!(
                "no non-null fields to insert into `{}`",
                self.name
            )));
        }

        self.db
            .exec(&Statement::insert(self.name.clone(), columns, values))
            .await
    }

    /// Insert many positional rows as one batch.
    pub async fn insert_many(&mut self, rows: Vec<ValueRecord>) -> Result<u64> {
        let fields = self.bound_fields()?;

        if let Some(row) = rows.iter().find(|row| row.len() != fields.len()) {
            return Err(Error::invalid_insert(format!(
                "table `{}` has {} fields, got a row of {} values",
                self.name,
                fields.len(),
                row.len()
            )));
        }

        if rows.is_empty() {
            return Ok(0);
        }

        let stmt = Statement::insert_placeholders(self.name.clone(), fields);
        let sql = self.db.serializer.serialize(&stmt);
        let count = self.db.connection()?.exec_many(&sql, rows).await?;

        if self.db.autocommit {
            self.db.commit().await?;
        }

        Ok(count)
    }

    /// Set the record's fields on every row matching `condition`.
    pub async fn update(&mut self, record: Record, condition: &str) -> Result<u64> {
        let assignments: Vec<_> = record
            .into_iter()
            .filter(|(name, _)| !name.is_empty())
            .collect();

        if assignments.is_empty() {
            bail!("update of `{}` sets no fields", self.name);
        }

        self.db
            .exec(&Statement::update(self.name.clone(), assignments, condition))
            .await
    }

    /// Delete the rows matching `condition`; an empty condition deletes
    /// every row.
    pub async fn delete(&mut self, condition: &str) -> Result<u64> {
        self.db
            .exec(&Statement::delete(self.name.clone(), condition))
            .await
    }

    /// Read rows in the order the database returns them. Each record holds
    /// the requested fields in request order; [`Fields::All`] expands to
    /// every column in table order.
    pub async fn select(&mut self, fields: impl Into<Fields>, condition: &str) -> Result<Vec<Record>> {
        let names = match fields.into() {
            Fields::All => self
                .db
                .describe_table(&self.name)
                .await?
                .into_iter()
                .map(|column| column.name)
                .collect(),
            Fields::Named(names) => names,
        };

        let stmt = Statement::select(self.name.clone(), names.clone(), condition);
        let sql = self.db.serializer.serialize(&stmt);
        let rows = self.db.connection()?.query(&sql, names.len()).await?;

        Ok(rows
            .into_iter()
            .map(|row| names.iter().cloned().zip(row.into_vec()).collect())
            .collect())
    }

    fn bound_fields(&self) -> Result<Vec<String>> {
        self.db
            .bound_fields(&self.name)
            .map(<[String]>::to_vec)
            .ok_or_else(|| Error::missing_binding(format!("table `{}` is not bound", self.name)))
    }
}
