use pretty_assertions::assert_eq;
use tabula::{migrate, Db, Fields, Record, Value};
use tempfile::TempDir;

struct Databases {
    _dir: TempDir,
    source: String,
    destination: String,
}

impl Databases {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let source = format!("sqlite:{}", dir.path().join("source.db").display());
        let destination = format!("sqlite:{}", dir.path().join("destination.db").display());

        Self {
            _dir: dir,
            source,
            destination,
        }
    }
}

async fn populate(url: &str) {
    let mut db = Db::builder().connect(url).await.unwrap();

    db.bind_table("clients", Some("id INT PRIMARY KEY, name CHAR(60)".into()))
        .await
        .unwrap();
    db.bind_table(
        "orders",
        Some(
            "client INT NOT NULL, line INT NOT NULL, price REAL, note TEXT DEFAULT 'none', \
             PRIMARY KEY (client, line)"
                .into(),
        ),
    )
    .await
    .unwrap();

    let mut clients = db.table("clients");
    clients.insert([Value::from(5), Value::from("John")]).await.unwrap();
    clients.insert([Value::from(9), Value::from("O'Brien")]).await.unwrap();

    let mut orders = db.table("orders");
    orders
        .insert([Value::from(5), Value::from(1), Value::from(2.5), Value::from("rush")])
        .await
        .unwrap();
    orders
        .insert([Value::from(5), Value::from(2), Value::Null, Value::Null])
        .await
        .unwrap();
    orders
        .insert([Value::from(9), Value::from(1), Value::from(10.0), Value::from("")])
        .await
        .unwrap();

    db.commit().await.unwrap();
    db.close().await.unwrap();
}

async fn dump(db: &mut Db, table: &str) -> Vec<Record> {
    db.table(table).select(Fields::All, "").await.unwrap()
}

#[tokio::test]
async fn round_trip_preserves_tables_and_rows() {
    let dbs = Databases::new();
    populate(&dbs.source).await;

    let summary = migrate::between(&dbs.source, &dbs.destination).await.unwrap();

    let copied: Vec<_> = summary
        .tables
        .iter()
        .map(|table| (table.name.as_str(), table.rows))
        .collect();
    assert_eq!(copied, [("clients", 2), ("orders", 3)]);
    assert_eq!(summary.total_rows(), 5);

    let mut source = Db::builder().connect(&dbs.source).await.unwrap();
    let mut destination = Db::builder().connect(&dbs.destination).await.unwrap();

    assert_eq!(
        destination.list_tables().await.unwrap(),
        source.list_tables().await.unwrap()
    );

    for table in ["clients", "orders"] {
        let expected = source.table_schema(table).await.unwrap();
        let actual = destination.table_schema(table).await.unwrap();
        expected.verify_matches(&actual).unwrap();

        // Column defaults are not carried over, so skipped nulls stay null
        assert_eq!(
            dump(&mut destination, table).await,
            dump(&mut source, table).await
        );
    }

    source.close().await.unwrap();
    destination.close().await.unwrap();
}

#[tokio::test]
async fn migrating_into_copied_tables_fails_on_duplicates() {
    let dbs = Databases::new();
    populate(&dbs.source).await;

    migrate::between(&dbs.source, &dbs.destination).await.unwrap();

    let err = migrate::between(&dbs.source, &dbs.destination)
        .await
        .unwrap_err();
    assert!(err.is_statement_failed(), "{err}");
    assert!(err.to_string().starts_with("migrating table `clients`"), "{err}");
}

#[tokio::test]
async fn conflicting_destination_is_left_untouched() {
    let dbs = Databases::new();
    populate(&dbs.source).await;

    let mut destination = Db::builder().connect(&dbs.destination).await.unwrap();
    destination
        .create_table("clients", "id INT, name CHAR(60), PRIMARY KEY (id, name)")
        .await
        .unwrap();
    destination.close().await.unwrap();

    let err = migrate::between(&dbs.source, &dbs.destination)
        .await
        .unwrap_err();
    assert!(err.is_schema_conflict(), "{err}");

    let mut destination = Db::builder().connect(&dbs.destination).await.unwrap();
    assert_eq!(destination.list_tables().await.unwrap(), ["clients"]);
    assert!(dump(&mut destination, "clients").await.is_empty());
    destination.close().await.unwrap();
}

#[tokio::test]
async fn commented_definitions_migrate() {
    let dbs = Databases::new();

    let mut source = Db::builder().connect(&dbs.source).await.unwrap();
    source
        .bind_table(
            "notes",
            Some("id INT PRIMARY KEY, -- the key, really\n body TEXT /* free, form */".into()),
        )
        .await
        .unwrap();
    assert_eq!(source.bound_fields("notes").unwrap().len(), 2);
    source
        .table("notes")
        .insert([Value::from(1), Value::from("hello")])
        .await
        .unwrap();
    source.commit().await.unwrap();
    source.close().await.unwrap();

    let summary = migrate::between(&dbs.source, &dbs.destination).await.unwrap();
    assert_eq!(summary.total_rows(), 1);

    let mut destination = Db::builder().connect(&dbs.destination).await.unwrap();
    let rows = dump(&mut destination, "notes").await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["body"], Value::from("hello"));
    destination.close().await.unwrap();
}

#[tokio::test]
async fn named_dialect_entry_points() {
    let dbs = Databases::new();
    populate(&dbs.source).await;

    let unknown = tabula::driver::new_driver("postgres", "whatever").unwrap();
    assert!(unknown.is_none());

    let mut source = Db::builder().connect(&dbs.source).await.unwrap();
    let path = dbs.destination.trim_start_matches("sqlite:");
    let driver = tabula::driver::new_driver("SQLite", path).unwrap().unwrap();
    let mut destination = Db::builder().build(driver);
    destination.open().await.unwrap();

    let rows = migrate::migrate_table(&mut source, &mut destination, "clients")
        .await
        .unwrap();
    assert_eq!(rows, 2);
    assert_eq!(destination.list_tables().await.unwrap(), ["clients"]);

    source.close().await.unwrap();
    destination.close().await.unwrap();
}

#[cfg(feature = "mysql")]
mod mysql {
    use super::*;
    use tests::{db::mysql::SetupMySQL, Setup, TabulaTest};

    #[test]
    fn int11_becomes_plain_int() {
        let mut test = TabulaTest::new(SetupMySQL::new());

        test.run_test(|setup| {
            Box::pin(async move {
                let counts = setup.table_name("counts");
                let mut mysql = setup.setup().await;

                mysql
                    .create_table(&counts, "id int(11) NOT NULL, total int(11), PRIMARY KEY (id)")
                    .await
                    .unwrap();
                let mut table = mysql.table(&counts);
                table
                    .insert_record(Record::new().with("id", 1).with("total", 2_147_483_647))
                    .await
                    .unwrap();
                table
                    .insert_record(Record::new().with("id", 2).with("total", -2_147_483_648_i64))
                    .await
                    .unwrap();
                mysql.commit().await.unwrap();

                let schema = mysql.table_schema(&counts).await.unwrap();
                let ty = &schema.field("total").unwrap().ty;
                assert!(ty.eq_ignore_ascii_case("INT"), "{ty}");

                let dir = tempfile::tempdir().unwrap();
                let url = format!("sqlite:{}", dir.path().join("copy.db").display());
                let mut sqlite = Db::builder().connect(&url).await.unwrap();

                let rows = migrate::migrate_table(&mut mysql, &mut sqlite, &counts)
                    .await
                    .unwrap();
                assert_eq!(rows, 2);

                let columns = sqlite.describe_table(&counts).await.unwrap();
                assert!(columns[1].ty.eq_ignore_ascii_case("INT"), "{}", columns[1].ty);
                assert_eq!(
                    dump(&mut sqlite, &counts).await,
                    dump(&mut mysql, &counts).await
                );

                sqlite.close().await.unwrap();
                mysql.close().await.unwrap();
            })
        });
    }

    #[test]
    fn sqlite_into_mysql() {
        let mut test = TabulaTest::new(SetupMySQL::new());

        test.run_test(|setup| {
            Box::pin(async move {
                let clients = setup.table_name("clients");
                let dir = tempfile::tempdir().unwrap();
                let path = dir.path().join("source.db");
                let path = path.to_str().unwrap();

                let mut source = Db::builder()
                    .autocommit(true)
                    .connect(&format!("sqlite:{path}"))
                    .await
                    .unwrap();
                source
                    .bind_table(&clients, Some("id INT PRIMARY KEY, name CHAR(60)".into()))
                    .await
                    .unwrap();
                source
                    .table(&clients)
                    .insert([Value::from(5), Value::from("John")])
                    .await
                    .unwrap();
                source.close().await.unwrap();

                let summary = migrate::sqlite_to_mysql(path, &SetupMySQL::url())
                    .await
                    .unwrap();
                assert_eq!(summary.total_rows(), 1);

                let mut mysql = setup.setup().await;
                let rows = dump(&mut mysql, &clients).await;
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0]["name"], Value::from("John"));
                mysql.close().await.unwrap();
            })
        });
    }
}
