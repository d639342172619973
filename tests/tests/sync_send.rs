use tabula::{migrate, Value};
use tests::*;

fn assert_send<T: Send>(val: T) -> T {
    val
}

async fn ensure_futures_send(s: &impl Setup) {
    let mut db = assert_send(s.setup()).await;
    let clients = s.table_name("clients");

    assert_send(db.bind_table(&clients, Some("id INT PRIMARY KEY".into())))
        .await
        .unwrap();

    let mut table = db.table(&clients);
    assert_send(table.insert([Value::from(1)])).await.unwrap();

    let rows = assert_send(table.select("*", "")).await.unwrap();
    assert_eq!(rows.len(), 1);

    assert_send(db.close()).await.unwrap();

    // Never polled
    let _ = assert_send(migrate::between("sqlite::memory:", "sqlite::memory:"));
}

tests!(ensure_futures_send);
