use pretty_assertions::assert_eq;
use tabula::{TableSchema, Value};
use tests::*;

const CLIENTS: &str = "id INT PRIMARY KEY, name CHAR(60)";

async fn bind_creates_missing_table(s: &impl Setup) {
    let mut db = s.setup().await;
    let clients = s.table_name("clients");

    db.bind_table(&clients, Some(CLIENTS.into())).await.unwrap();

    assert!(db.list_tables().await.unwrap().contains(&clients));
    assert_eq!(
        db.bound_fields(&clients).unwrap(),
        ["id".to_string(), "name".to_string()]
    );

    db.close().await.unwrap();
}

async fn bind_structured_schema(s: &impl Setup) {
    let mut db = s.setup().await;
    let orders = s.table_name("orders");

    let schema = TableSchema::new()
        .with_field("client", "INT")
        .with_field("line", "INT")
        .with_field("item", "VARCHAR(40)")
        .with_primary_key(["client", "line"])
        .with_not_null(["item"]);

    db.bind_table(&orders, Some(schema.clone().into())).await.unwrap();

    let live = db.table_schema(&orders).await.unwrap();
    schema.verify_matches(&live).unwrap();

    // Binding again with the same schema checks it against the live table
    db.bind_table(&orders, Some(schema.into())).await.unwrap();

    db.close().await.unwrap();
}

async fn bind_conflict_leaves_table_untouched(s: &impl Setup) {
    let mut db = s.setup().await;
    let clients = s.table_name("clients");

    db.bind_table(&clients, Some(CLIENTS.into())).await.unwrap();
    db.table(&clients)
        .insert([Value::from(5), Value::from("John")])
        .await
        .unwrap();
    db.commit().await.unwrap();

    let before = db.describe_table(&clients).await.unwrap();

    let err = db
        .bind_table(&clients, Some("id INT, name CHAR(60), PRIMARY KEY (id, name)".into()))
        .await
        .unwrap_err();
    assert!(err.is_schema_conflict(), "{err}");
    assert!(err.to_string().contains("binding table"), "{err}");

    assert_eq!(db.describe_table(&clients).await.unwrap(), before);

    let rows = db.table(&clients).select("*", "").await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], Value::from("John"));

    db.close().await.unwrap();
}

async fn bind_existing_table_without_schema(s: &impl Setup) {
    let mut db = s.setup().await;
    let clients = s.table_name("clients");

    db.create_table(&clients, CLIENTS).await.unwrap();
    db.bind_table(&clients, None).await.unwrap();

    db.bound()
        .unwrap()
        .insert([Value::from(1), Value::from("a")])
        .await
        .unwrap();

    db.close().await.unwrap();
}

async fn bind_absent_table_without_schema(s: &impl Setup) {
    let mut db = s.setup().await;
    let missing = s.table_name("missing");

    let err = db.bind_table(&missing, None).await.unwrap_err();
    assert!(err.is_missing_binding());
    assert!(!db.list_tables().await.unwrap().contains(&missing));

    db.close().await.unwrap();
}

async fn bound_table_is_inferred(s: &impl Setup) {
    let mut db = s.setup().await;
    let clients = s.table_name("clients");
    let orders = s.table_name("orders");

    let err = db.bound().unwrap_err();
    assert!(err.is_missing_binding());

    db.bind_table(&clients, Some(CLIENTS.into())).await.unwrap();

    let mut table = db.bound().unwrap();
    assert_eq!(table.name(), clients);
    table.insert([Value::from(1), Value::from("a")]).await.unwrap();

    db.bind_table(&orders, Some("id INT PRIMARY KEY".into()))
        .await
        .unwrap();

    let err = db.bound().unwrap_err();
    assert!(err.is_missing_binding());
    assert_eq!(
        db.bound_tables().collect::<Vec<_>>(),
        [clients.as_str(), orders.as_str()]
    );

    db.drop_table(&orders).await.unwrap();
    assert_eq!(db.bound().unwrap().name(), clients);

    db.close().await.unwrap();
}

async fn positional_insert_needs_binding(s: &impl Setup) {
    let mut db = s.setup().await;
    let clients = s.table_name("clients");

    db.create_table(&clients, CLIENTS).await.unwrap();

    let err = db
        .table(&clients)
        .insert([Value::from(1), Value::from("a")])
        .await
        .unwrap_err();
    assert!(err.is_missing_binding());

    db.close().await.unwrap();
}

async fn close_forgets_bindings(s: &impl Setup) {
    let mut db = s.setup().await;
    let clients = s.table_name("clients");

    db.bind_table(&clients, Some(CLIENTS.into())).await.unwrap();
    db.close().await.unwrap();
    assert!(!db.is_open());

    db.open().await.unwrap();
    assert!(db.bound_fields(&clients).is_none());

    db.close().await.unwrap();
}

tests!(
    bind_creates_missing_table,
    bind_structured_schema,
    bind_conflict_leaves_table_untouched,
    bind_existing_table_without_schema,
    bind_absent_table_without_schema,
    bound_table_is_inferred,
    positional_insert_needs_binding,
    close_forgets_bindings,
);

#[cfg(feature = "sqlite")]
#[test]
fn sqlite_binding_ignores_table_name_case() {
    let mut test = TabulaTest::new(db::sqlite::SetupSqlite::new());

    test.run_test(|setup| {
        Box::pin(async move {
            let mut db = setup.setup().await;
            db.create_table("Clients", CLIENTS).await.unwrap();

            db.bind_table("clients", Some(CLIENTS.into())).await.unwrap();
            db.table("clients")
                .insert([Value::from(1), Value::from("a")])
                .await
                .unwrap();
            assert_eq!(db.list_tables().await.unwrap(), ["Clients"]);

            let err = db
                .bind_table("CLIENTS", Some("id INT, name CHAR(60), PRIMARY KEY (id, name)".into()))
                .await
                .unwrap_err();
            assert!(err.is_schema_conflict(), "{err}");

            db.close().await.unwrap();
        })
    });
}
