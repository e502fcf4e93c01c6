use payroll_core::{calculate_salary, Compensation, Employee, EmployeeId, EmployeeReport};
use proptest::prelude::*;
use rust_decimal::Decimal;

// Cents / hundredths in the range a DECIMAL(10, 2) column can hold
fn money() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn hours() -> impl Strategy<Value = Decimal> {
    (0i64..100_000).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

proptest! {
    #[test]
    fn full_time_pay_is_salary(salary in money()) {
        let e = Employee::new(EmployeeId::new(1), "Ann", Compensation::FullTime { salary });
        prop_assert_eq!(calculate_salary(&e), salary);
    }

    #[test]
    fn part_time_pay_is_rate_times_hours(rate in money(), worked in hours()) {
        let e = Employee::new(
            EmployeeId::new(2),
            "Jane",
            Compensation::PartTime { hourly_rate: rate, hours_worked: worked },
        );
        prop_assert_eq!(calculate_salary(&e), rate * worked);
    }

    #[test]
    fn report_pay_matches_calculator(rate in money(), worked in hours()) {
        let e = Employee::new(
            EmployeeId::new(3),
            "Sam",
            Compensation::PartTime { hourly_rate: rate, hours_worked: worked },
        );
        let expected = calculate_salary(&e);
        prop_assert_eq!(EmployeeReport::new(e).pay, expected);
    }
}

#[test]
fn test_jane_scenario_pay_progression() {
    let rate = Decimal::new(20, 0);
    let after_thirty = Employee::new(
        EmployeeId::new(2),
        "Jane",
        Compensation::PartTime {
            hourly_rate: rate,
            hours_worked: Decimal::new(30, 0),
        },
    );
    assert_eq!(calculate_salary(&after_thirty), Decimal::new(600, 0));

    let after_forty = Employee::new(
        EmployeeId::new(2),
        "Jane",
        Compensation::PartTime {
            hourly_rate: rate,
            hours_worked: Decimal::new(40, 0),
        },
    );
    assert_eq!(calculate_salary(&after_forty), Decimal::new(800, 0));
}
