//! Interactive menu dispatcher
//!
//! A synchronous read-validate-dispatch loop. The session owns the database
//! connection for its whole lifetime; dropping the session releases it.

use std::io::{BufRead, Write};

use payroll_core::errors::{ExError, ExErrorKind, PayrollError};
use payroll_core::render::{render_all, render_employee, SEPARATOR};
use payroll_core::{EmployeeId, EmployeeReport};
use payroll_store::EmployeeRepo;
use rusqlite::Connection;
use thiserror::Error;

use crate::prompt::Console;

const WELCOME: &str = "Welcome to the Maze Soft Company\n--------------------------------";

const MENU: &str = "\
Employee Payroll System Menu:
-----------------------------
1. Add Full-Time Employee
2. Add Part-Time Employee
3. Clock In Part-Time Employee
4. Display Employee Info
5. Display All Employee Details
6. Exit
-----------------------------
Select an option: ";

/// One numbered menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddFullTime,
    AddPartTime,
    ClockIn,
    DisplayOne,
    DisplayAll,
    Exit,
}

/// Why a menu selection was rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuInputError {
    #[error("Invalid input. Please enter a number.")]
    NotANumber,
    #[error("Invalid option. Please try again.")]
    OutOfRange(i64),
}

impl MenuChoice {
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::AddFullTime),
            2 => Some(MenuChoice::AddPartTime),
            3 => Some(MenuChoice::ClockIn),
            4 => Some(MenuChoice::DisplayOne),
            5 => Some(MenuChoice::DisplayAll),
            6 => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    /// Parse one line of menu input
    ///
    /// # Errors
    /// * `NotANumber` - If the line is not an integer
    /// * `OutOfRange` - If the integer is outside 1..=6
    pub fn parse(input: &str) -> Result<Self, MenuInputError> {
        let n: i64 = input
            .trim()
            .parse()
            .map_err(|_| MenuInputError::NotANumber)?;
        Self::from_number(n).ok_or(MenuInputError::OutOfRange(n))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Exiting,
}

pub struct Session<R, W> {
    conn: Connection,
    console: Console<R, W>,
    state: MenuState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(conn: Connection, input: R, output: W) -> Self {
        Self {
            conn,
            console: Console::new(input, output),
            state: MenuState::Running,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Release the connection and hand back the output sink
    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Print the banner and loop until Exit or end of input
    ///
    /// # Errors
    /// Storage failures and console I/O failures end the loop.
    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.console.say(WELCOME)?;
        while self.state == MenuState::Running {
            self.state = self.step()?;
        }
        Ok(())
    }

    /// Show the menu, read one selection and dispatch it
    pub fn step(&mut self) -> Result<MenuState, Box<dyn std::error::Error>> {
        self.console.write_raw(MENU)?;
        let Some(line) = self.console.prompt("")? else {
            return self.exit();
        };

        let choice = match MenuChoice::parse(&line) {
            Ok(choice) => choice,
            Err(e) => {
                self.console.say(&e.to_string())?;
                return Ok(MenuState::Running);
            }
        };

        tracing::debug!(?choice, "menu selection");
        self.dispatch(choice)
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<MenuState, Box<dyn std::error::Error>> {
        let completed = match choice {
            MenuChoice::AddFullTime => self.add_full_time()?,
            MenuChoice::AddPartTime => self.add_part_time()?,
            MenuChoice::ClockIn => self.clock_in()?,
            MenuChoice::DisplayOne => self.display_one()?,
            MenuChoice::DisplayAll => self.display_all()?,
            MenuChoice::Exit => return self.exit(),
        };

        match completed {
            Some(()) => Ok(MenuState::Running),
            // Input ran out part-way through an action
            None => self.exit(),
        }
    }

    fn exit(&mut self) -> Result<MenuState, Box<dyn std::error::Error>> {
        self.console
            .say("Exiting Employee Payroll System. Goodbye!")?;
        Ok(MenuState::Exiting)
    }

    fn add_full_time(&mut self) -> Result<Option<()>, Box<dyn std::error::Error>> {
        let Some(name) = self.console.prompt_name("Enter full-time employee name: ")? else {
            return Ok(None);
        };
        let Some(salary) = self.console.prompt_amount("Enter salary: $")? else {
            return Ok(None);
        };

        match EmployeeRepo::insert_full_time(&self.conn, &name, salary) {
            Ok(id) => self.console.say(&format!(
                "Full-time employee added successfully! (ID: {})",
                id
            ))?,
            Err(e) => self.report_recoverable(e)?,
        }
        self.console.say(SEPARATOR)?;
        Ok(Some(()))
    }

    fn add_part_time(&mut self) -> Result<Option<()>, Box<dyn std::error::Error>> {
        let Some(name) = self.console.prompt_name("Enter part-time employee name: ")? else {
            return Ok(None);
        };
        let Some(rate) = self.console.prompt_amount("Enter hourly rate: $")? else {
            return Ok(None);
        };

        match EmployeeRepo::insert_part_time(&self.conn, &name, rate) {
            Ok(id) => self.console.say(&format!(
                "Part-time employee added successfully! (ID: {})",
                id
            ))?,
            Err(e) => self.report_recoverable(e)?,
        }
        self.console.say(SEPARATOR)?;
        Ok(Some(()))
    }

    fn clock_in(&mut self) -> Result<Option<()>, Box<dyn std::error::Error>> {
        let Some(id) = self
            .console
            .prompt_id("Enter the ID of the part-time employee to clock in: ")?
        else {
            return Ok(None);
        };
        let Some(hours) = self.console.prompt_amount("Enter hours worked: ")? else {
            return Ok(None);
        };

        match EmployeeRepo::add_hours(&self.conn, id, hours) {
            Ok(0) => {
                let err = self.missed_clock_in(id)?;
                self.report_recoverable(err.with_op("clock_in"))?;
            }
            Ok(_) => self
                .console
                .say("Part-time employee's hours updated successfully!")?,
            Err(e) => self.report_recoverable(e)?,
        }
        self.console.say(SEPARATOR)?;
        Ok(Some(()))
    }

    fn display_one(&mut self) -> Result<Option<()>, Box<dyn std::error::Error>> {
        let Some(id) = self
            .console
            .prompt_id("Enter the ID of the employee to display info: ")?
        else {
            return Ok(None);
        };

        match EmployeeRepo::find_by_id(&self.conn, id)? {
            Some(employee) => {
                let report = EmployeeReport::new(employee);
                self.console.write_raw(&render_employee(&report))?;
            }
            None => {
                let err = ExError::from(PayrollError::EmployeeNotFound {
                    employee_id: id.get(),
                });
                self.report_recoverable(err.with_op("display_one"))?;
            }
        }
        Ok(Some(()))
    }

    fn display_all(&mut self) -> Result<Option<()>, Box<dyn std::error::Error>> {
        let reports: Vec<EmployeeReport> = EmployeeRepo::list_all(&self.conn)?
            .into_iter()
            .map(EmployeeReport::new)
            .collect();
        self.console.write_raw(&render_all(&reports))?;
        Ok(Some(()))
    }

    /// Explain why clock-in changed no row
    fn missed_clock_in(&self, id: EmployeeId) -> Result<ExError, Box<dyn std::error::Error>> {
        let err = match EmployeeRepo::find_by_id(&self.conn, id)? {
            Some(employee) if !employee.is_part_time() => PayrollError::NotPartTime {
                employee_id: id.get(),
            },
            _ => PayrollError::EmployeeNotFound {
                employee_id: id.get(),
            },
        };
        Ok(err.into())
    }

    /// Print validation and lookup failures; propagate everything else
    fn report_recoverable(&mut self, err: ExError) -> Result<(), Box<dyn std::error::Error>> {
        tracing::debug!(code = err.code(), op = err.op(), "recoverable error");
        match err.kind() {
            ExErrorKind::NotFound => {
                self.console.say(err.message())?;
                Ok(())
            }
            ExErrorKind::InvalidName | ExErrorKind::InvalidAmount | ExErrorKind::InvalidInput => {
                self.console.say(&format!("Error: {}", err.message()))?;
                Ok(())
            }
            _ => Err(err.into()),
        }
    }
}
