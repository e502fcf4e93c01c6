// On-disk durability: rows and id assignment survive closing the connection

use payroll_core::EmployeeId;
use payroll_store::{db, seed, EmployeeRepo};
use rust_decimal::Decimal;
use tempfile::TempDir;

#[test]
fn test_rows_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("payroll.db");

    let jane_id = {
        let mut conn = db::open(&db_path).unwrap();
        EmployeeRepo::ensure_schema(&mut conn).unwrap();
        let id = EmployeeRepo::insert_part_time(&conn, "Jane", Decimal::new(20, 0)).unwrap();
        EmployeeRepo::add_hours(&conn, id, Decimal::new(12, 0)).unwrap();
        id
    };

    let mut conn = db::open(&db_path).unwrap();
    EmployeeRepo::ensure_schema(&mut conn).unwrap();

    let jane = EmployeeRepo::find_by_id(&conn, jane_id).unwrap().unwrap();
    assert_eq!(jane.name, "Jane");
    assert_eq!(
        payroll_core::calculate_salary(&jane),
        Decimal::new(240, 0)
    );
}

#[test]
fn test_startup_sequence_seeds_exactly_once_across_runs() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("payroll.db");

    for _ in 0..3 {
        let mut conn = db::open(&db_path).unwrap();
        EmployeeRepo::ensure_schema(&mut conn).unwrap();
        seed::seed_if_empty(&mut conn).unwrap();
    }

    let conn = db::open(&db_path).unwrap();
    assert_eq!(EmployeeRepo::count(&conn).unwrap(), 2);
}

#[test]
fn test_ids_keep_increasing_after_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("payroll.db");

    let first: EmployeeId = {
        let mut conn = db::open(&db_path).unwrap();
        EmployeeRepo::ensure_schema(&mut conn).unwrap();
        EmployeeRepo::insert_full_time(&conn, "Ann", Decimal::new(1, 0)).unwrap()
    };

    let conn = db::open(&db_path).unwrap();
    let second = EmployeeRepo::insert_full_time(&conn, "Ben", Decimal::new(1, 0)).unwrap();

    assert!(second > first);
}
