// Integration tests for the migration framework

use rusqlite::Connection;

fn setup_test_db() -> Connection {
    Connection::open_in_memory().expect("Failed to create in-memory database")
}

fn get_table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

fn get_column_names(conn: &Connection, table: &str) -> Vec<String> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({})", table))
        .unwrap();
    stmt.query_map([], |row| row.get(1))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

#[test]
fn test_apply_migrations_on_empty_db() {
    // Given: An empty SQLite database
    let mut conn = setup_test_db();

    // When: Migrations are applied
    let result = payroll_store::migrations::apply_migrations(&mut conn);

    // Then: All migrations succeed
    assert!(
        result.is_ok(),
        "Migrations should succeed: {:?}",
        result.err()
    );

    let tables = get_table_names(&conn);
    for expected_table in ["employee", "schema_version"] {
        assert!(
            tables.contains(&expected_table.to_string()),
            "Missing table: {}",
            expected_table
        );
    }
}

#[test]
fn test_employee_columns_match_schema() {
    let mut conn = setup_test_db();
    payroll_store::migrations::apply_migrations(&mut conn).unwrap();

    assert_eq!(
        get_column_names(&conn, "employee"),
        vec![
            "id",
            "name",
            "employee_type",
            "salary",
            "hourly_rate",
            "hours_worked"
        ]
    );
}

#[test]
fn test_migration_idempotency() {
    // Given: A database with migrations already applied
    let mut conn = setup_test_db();
    payroll_store::migrations::apply_migrations(&mut conn).unwrap();

    // When: Migrations are applied again
    let result = payroll_store::migrations::apply_migrations(&mut conn);

    // Then: No error and no duplicate version rows
    assert!(result.is_ok());
    let version_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version_count, 1, "Should have exactly 1 migration applied");
}

#[test]
fn test_employee_type_check_constraint() {
    let mut conn = setup_test_db();
    payroll_store::migrations::apply_migrations(&mut conn).unwrap();

    let result = conn.execute(
        "INSERT INTO employee (name, employee_type) VALUES ('Zed', 'Contractor')",
        [],
    );
    assert!(result.is_err(), "Unknown employee_type should be rejected");
}
