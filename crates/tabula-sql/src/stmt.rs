mod create_table;
pub use create_table::CreateTable;

mod delete;
pub use delete::Delete;

mod drop_table;
pub use drop_table::DropTable;

mod insert;
pub use insert::{Insert, InsertValues};

mod select;
pub use select::Select;

mod update;
pub use update::Update;

#[derive(Debug, Clone)]
pub enum Statement {
    CreateTable(CreateTable),
    Delete(Delete),
    DropTable(DropTable),
    Insert(Insert),
    Select(Select),
    Update(Update),
}

impl Statement {
    /// True for statements that change table contents (as opposed to DDL or
    /// queries).
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Statement::Delete(_) | Statement::Insert(_) | Statement::Update(_)
        )
    }
}
