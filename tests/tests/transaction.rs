use tabula::{Db, Value};
use tests::*;

const CLIENTS: &str = "id INT PRIMARY KEY, name CHAR(60)";

async fn count_rows(s: &impl Setup, table: &str) -> usize {
    let mut db = s.setup().await;
    let rows = db.table(table).select(["id"], "").await.unwrap();
    db.close().await.unwrap();
    rows.len()
}

async fn autocommit_persists_each_change(s: &impl Setup) {
    let clients = s.table_name("clients");

    let mut db = s.connect(Db::builder().autocommit(true)).await.unwrap();
    assert!(db.autocommit());

    db.bind_table(&clients, Some(CLIENTS.into())).await.unwrap();
    db.table(&clients)
        .insert([Value::from(1), Value::from("a")])
        .await
        .unwrap();
    db.close().await.unwrap();

    assert_eq!(count_rows(s, &clients).await, 1);
}

async fn close_discards_uncommitted_changes(s: &impl Setup) {
    let clients = s.table_name("clients");

    let mut db = s.setup().await;
    assert!(!db.autocommit());

    // Creating the table commits on its own
    db.bind_table(&clients, Some(CLIENTS.into())).await.unwrap();
    db.table(&clients)
        .insert([Value::from(1), Value::from("a")])
        .await
        .unwrap();
    db.close().await.unwrap();

    assert_eq!(count_rows(s, &clients).await, 0);
}

async fn rollback_discards_since_last_commit(s: &impl Setup) {
    let clients = s.table_name("clients");

    let mut db = s.setup().await;
    db.bind_table(&clients, Some(CLIENTS.into())).await.unwrap();

    let mut table = db.table(&clients);
    table.insert([Value::from(1), Value::from("a")]).await.unwrap();
    db.commit().await.unwrap();

    db.table(&clients)
        .insert([Value::from(2), Value::from("b")])
        .await
        .unwrap();
    db.rollback().await.unwrap();

    let rows = db.table(&clients).select(["id"], "").await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], Value::I64(1));

    // Nothing pending
    db.rollback().await.unwrap();
    db.commit().await.unwrap();

    db.close().await.unwrap();
}

async fn toggling_autocommit(s: &impl Setup) {
    let clients = s.table_name("clients");

    let mut db = s.setup().await;
    db.bind_table(&clients, Some(CLIENTS.into())).await.unwrap();

    db.set_autocommit(true);
    db.table(&clients)
        .insert([Value::from(1), Value::from("a")])
        .await
        .unwrap();
    db.rollback().await.unwrap();

    let rows = db.table(&clients).select(["id"], "").await.unwrap();
    assert_eq!(rows.len(), 1);

    db.close().await.unwrap();
}

async fn operations_need_an_open_connection(s: &impl Setup) {
    let mut db = s.setup().await;
    db.close().await.unwrap();

    // Closing twice is fine
    db.close().await.unwrap();

    let err = db.list_tables().await.unwrap_err();
    assert!(err.is_connection_closed());

    let err = db.commit().await.unwrap_err();
    assert!(err.is_connection_closed());
}

tests!(
    autocommit_persists_each_change,
    close_discards_uncommitted_changes,
    rollback_discards_since_last_commit,
    toggling_autocommit,
    operations_need_an_open_connection,
);
