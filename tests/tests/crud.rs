use tabula::{Fields, Record, Value};
use tests::*;

const CLIENTS: &str = "id INT PRIMARY KEY, name CHAR(60)";

fn ids(records: &[Record]) -> Vec<Value> {
    records.iter().map(|record| record["id"].clone()).collect()
}

async fn clients_scenario(s: &impl Setup) {
    let mut db = s.setup().await;
    let clients = s.table_name("clients");

    db.bind_table(&clients, Some(CLIENTS.into())).await.unwrap();

    let mut table = db.table(&clients);
    table.insert([Value::from(5), Value::from("John")]).await.unwrap();
    table
        .insert_record(Record::new().with("id", 9).with("name", "LuLu"))
        .await
        .unwrap();

    let rows = table.select(["id"], "order by id desc").await.unwrap();
    assert_eq!(ids(&rows), [Value::I64(9), Value::I64(5)]);
    assert_eq!(rows[0].len(), 1);

    let deleted = table.delete("where id = 9").await.unwrap();
    assert_eq!(deleted, 1);

    let rows = table.select("*", "").await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], Value::I64(5));
    assert_eq!(rows[0]["name"], Value::from("John"));
    assert_eq!(rows[0].names().collect::<Vec<_>>(), ["id", "name"]);

    db.close().await.unwrap();
}

async fn null_fields_take_their_default(s: &impl Setup) {
    let mut db = s.setup().await;
    let people = s.table_name("people");

    db.create_table(
        &people,
        "id INT PRIMARY KEY, name CHAR(60) DEFAULT 'anonymous', age INT",
    )
    .await
    .unwrap();

    let mut table = db.table(&people);
    table
        .insert_record(
            Record::new()
                .with("id", 1)
                .with("name", Value::Null)
                .with("age", 42),
        )
        .await
        .unwrap();

    let rows = table.select(Fields::All, "").await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], Value::from("anonymous"));
    assert_eq!(rows[0]["age"], Value::I64(42));

    db.close().await.unwrap();
}

async fn text_with_quotes_survives(s: &impl Setup) {
    let mut db = s.setup().await;
    let notes = s.table_name("notes");

    db.bind_table(&notes, Some("id INT PRIMARY KEY, body TEXT".into()))
        .await
        .unwrap();

    let body = r#"it's "quoted", with a \ too"#;
    let mut table = db.table(&notes);
    table.insert([Value::from(1), Value::from(body)]).await.unwrap();

    let rows = table.select(["body"], "where id = 1").await.unwrap();
    assert_eq!(rows[0]["body"], Value::from(body));

    db.close().await.unwrap();
}

async fn empty_condition_deletes_every_row(s: &impl Setup) {
    let mut db = s.setup().await;
    let clients = s.table_name("clients");

    db.bind_table(&clients, Some(CLIENTS.into())).await.unwrap();

    let mut table = db.table(&clients);
    for id in 1..=3 {
        table.insert([Value::from(id), Value::from("x")]).await.unwrap();
    }

    assert_eq!(table.delete("").await.unwrap(), 3);
    assert!(table.select("*", "").await.unwrap().is_empty());

    db.close().await.unwrap();
}

async fn update_matching_rows(s: &impl Setup) {
    let mut db = s.setup().await;
    let clients = s.table_name("clients");

    db.bind_table(&clients, Some(CLIENTS.into())).await.unwrap();

    let mut table = db.table(&clients);
    table.insert([Value::from(1), Value::from("a")]).await.unwrap();
    table.insert([Value::from(2), Value::from("b")]).await.unwrap();

    let updated = table
        .update(Record::new().with("name", "renamed"), "where id = 2")
        .await
        .unwrap();
    assert_eq!(updated, 1);

    let rows = table.select(["name"], "order by id").await.unwrap();
    assert_eq!(rows[0]["name"], Value::from("a"));
    assert_eq!(rows[1]["name"], Value::from("renamed"));

    let err = table.update(Record::new(), "").await.unwrap_err();
    assert!(err.to_string().contains("sets no fields"), "{err}");

    db.close().await.unwrap();
}

async fn insert_many_rows(s: &impl Setup) {
    let mut db = s.setup().await;
    let clients = s.table_name("clients");

    db.bind_table(&clients, Some(CLIENTS.into())).await.unwrap();

    let mut table = db.table(&clients);
    assert_eq!(table.insert_many(vec![]).await.unwrap(), 0);

    let count = table
        .insert_many(vec![
            [Value::from(1), Value::from("a")].into(),
            [Value::from(2), Value::Null].into(),
            [Value::from(3), Value::from("c")].into(),
        ])
        .await
        .unwrap();
    assert_eq!(count, 3);

    let rows = table.select(Fields::All, "order by id").await.unwrap();
    assert_eq!(ids(&rows), [Value::I64(1), Value::I64(2), Value::I64(3)]);
    assert_eq!(rows[1]["name"], Value::Null);

    let err = table
        .insert_many(vec![[Value::from(4)].into()])
        .await
        .unwrap_err();
    assert!(err.is_invalid_insert());

    db.close().await.unwrap();
}

async fn positional_insert_checks_arity(s: &impl Setup) {
    let mut db = s.setup().await;
    let clients = s.table_name("clients");

    db.bind_table(&clients, Some(CLIENTS.into())).await.unwrap();

    let err = db
        .table(&clients)
        .insert([Value::from(1)])
        .await
        .unwrap_err();
    assert!(err.is_invalid_insert());

    db.close().await.unwrap();
}

async fn named_insert_needs_a_value(s: &impl Setup) {
    let mut db = s.setup().await;
    let clients = s.table_name("clients");

    db.create_table(&clients, CLIENTS).await.unwrap();

    let err = db
        .table(&clients)
        .insert_record(Record::new().with("id", Value::Null).with("name", Value::Null))
        .await
        .unwrap_err();
    assert!(err.is_invalid_insert());

    db.close().await.unwrap();
}

async fn failing_statement_is_reported(s: &impl Setup) {
    let mut db = s.setup().await;
    let clients = s.table_name("clients");

    db.bind_table(&clients, Some(CLIENTS.into())).await.unwrap();

    let mut table = db.table(&clients);
    table.insert([Value::from(1), Value::from("a")]).await.unwrap();

    let err = table
        .insert([Value::from(1), Value::from("again")])
        .await
        .unwrap_err();
    assert!(err.is_statement_failed());

    db.close().await.unwrap();
}

tests!(
    clients_scenario,
    null_fields_take_their_default,
    text_with_quotes_survives,
    empty_condition_deletes_every_row,
    update_matching_rows,
    insert_many_rows,
    positional_insert_checks_arity,
    named_insert_needs_a_value,
    failing_statement_is_reported,
);
