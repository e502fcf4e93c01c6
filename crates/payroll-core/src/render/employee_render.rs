use rust_decimal::Decimal;

use crate::model::{Compensation, EmployeeReport};

/// Rule printed between employee blocks
pub const SEPARATOR: &str = "-----------------------------";

const BANNER_RULE: &str = "--------------------------------";

/// Format a monetary amount with a dollar sign and two decimal places
pub fn render_money(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

/// Render a single employee report
///
/// Prints id, name and type, then either the salary (full-time) or the
/// hourly rate, hours worked and precomputed pay (part-time).
pub fn render_employee(report: &EmployeeReport) -> String {
    let mut output = String::new();
    push_block(&mut output, report);
    output.push_str(SEPARATOR);
    output.push('\n');
    output
}

/// Render every report under an "All Employee Details" banner
///
/// Reports are printed in the order given.
pub fn render_all(reports: &[EmployeeReport]) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{BANNER_RULE}\nAll Employee Details:\n{BANNER_RULE}\n"
    ));

    if reports.is_empty() {
        output.push_str("No employees on record.\n");
    }

    for report in reports {
        push_block(&mut output, report);
    }

    output.push_str(SEPARATOR);
    output.push('\n');
    output
}

fn push_block(output: &mut String, report: &EmployeeReport) {
    let employee = &report.employee;

    output.push_str(SEPARATOR);
    output.push('\n');
    output.push_str(&format!("Employee ID: {}\n", employee.id));
    output.push_str(&format!("Name: {}\n", employee.name));
    output.push_str(&format!("Employee Type: {}\n", employee.kind()));

    match &employee.compensation {
        Compensation::FullTime { salary } => {
            output.push_str(&format!("Salary: {}\n", render_money(*salary)));
        }
        Compensation::PartTime {
            hourly_rate,
            hours_worked,
        } => {
            output.push_str(&format!("Hourly Rate: {}\n", render_money(*hourly_rate)));
            output.push_str(&format!("Hours Worked: {}\n", hours_worked.normalize()));
            output.push_str(&format!("Current Pay: {}\n", render_money(report.pay)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Employee, EmployeeId};

    fn full_time() -> EmployeeReport {
        EmployeeReport::new(Employee::new(
            EmployeeId::new(1),
            "John Doe",
            Compensation::FullTime {
                salary: Decimal::new(50000, 0),
            },
        ))
    }

    fn part_time() -> EmployeeReport {
        EmployeeReport::new(Employee::new(
            EmployeeId::new(2),
            "Jane Smith",
            Compensation::PartTime {
                hourly_rate: Decimal::new(20, 0),
                hours_worked: Decimal::new(30, 0),
            },
        ))
    }

    #[test]
    fn test_render_full_time_shows_salary_only() {
        let output = render_employee(&full_time());

        assert_eq!(
            output,
            "-----------------------------\n\
             Employee ID: 1\n\
             Name: John Doe\n\
             Employee Type: Full-time\n\
             Salary: $50000.00\n\
             -----------------------------\n"
        );
        assert!(!output.contains("Hourly Rate"));
    }

    #[test]
    fn test_render_part_time_shows_rate_and_hours() {
        let output = render_employee(&part_time());

        assert!(output.contains("Employee Type: Part-time\n"));
        assert!(output.contains("Hourly Rate: $20.00\n"));
        assert!(output.contains("Hours Worked: 30\n"));
        assert!(output.contains("Current Pay: $600.00\n"));
        assert!(!output.contains("Salary:"));
    }

    #[test]
    fn test_render_uses_precomputed_pay() {
        let mut report = part_time();
        report.pay = Decimal::new(1, 0);

        let output = render_employee(&report);
        assert!(output.contains("Current Pay: $1.00\n"));
    }

    #[test]
    fn test_render_all_preserves_order() {
        let output = render_all(&[full_time(), part_time()]);

        assert!(output.starts_with("--------------------------------\nAll Employee Details:\n"));
        let john = output.find("John Doe").unwrap();
        let jane = output.find("Jane Smith").unwrap();
        assert!(john < jane);
        assert!(output.ends_with("-----------------------------\n"));
    }

    #[test]
    fn test_render_all_empty() {
        let output = render_all(&[]);
        assert!(output.contains("No employees on record.\n"));
    }

    #[test]
    fn test_render_money_pads_to_cents() {
        assert_eq!(render_money(Decimal::new(5, 1)), "$0.50");
        assert_eq!(render_money(Decimal::new(123456, 2)), "$1234.56");
    }
}
