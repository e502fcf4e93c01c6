use payroll_core::{calculate_salary, EmployeeKind};
use payroll_store::db::open_in_memory;
use payroll_store::seed::{seed, seed_if_empty};
use payroll_store::EmployeeRepo;
use rusqlite::Connection;
use rust_decimal::Decimal;

fn setup_test_db() -> Connection {
    let mut conn = open_in_memory().unwrap();
    EmployeeRepo::ensure_schema(&mut conn).unwrap();
    conn
}

#[test]
fn test_seed_on_empty_store_inserts_two_rows() {
    let mut conn = setup_test_db();

    let ids = seed(&mut conn).unwrap();

    assert_eq!(ids.len(), 2);
    assert_eq!(EmployeeRepo::count(&conn).unwrap(), 2);
}

#[test]
fn test_seed_rows_are_canonical() {
    let mut conn = setup_test_db();
    seed(&mut conn).unwrap();

    let rows = EmployeeRepo::list_all(&conn).unwrap();
    assert_eq!(rows[0].name, "John Doe");
    assert_eq!(rows[0].kind(), EmployeeKind::FullTime);
    assert_eq!(calculate_salary(&rows[0]), Decimal::new(50000, 0));

    assert_eq!(rows[1].name, "Jane Smith");
    assert_eq!(rows[1].kind(), EmployeeKind::PartTime);
    assert_eq!(calculate_salary(&rows[1]), Decimal::new(600, 0));
}

#[test]
fn test_seed_if_empty_never_duplicates() {
    let mut conn = setup_test_db();

    assert!(seed_if_empty(&mut conn).unwrap());
    assert!(!seed_if_empty(&mut conn).unwrap());
    assert!(!seed_if_empty(&mut conn).unwrap());

    assert_eq!(EmployeeRepo::count(&conn).unwrap(), 2);
}

#[test]
fn test_seed_if_empty_skips_user_data() {
    let mut conn = setup_test_db();
    EmployeeRepo::insert_full_time(&conn, "Ann", Decimal::new(1000, 0)).unwrap();

    assert!(!seed_if_empty(&mut conn).unwrap());

    let rows = EmployeeRepo::list_all(&conn).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Ann");
}
