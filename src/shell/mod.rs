//! Interactive menu shell
//!
//! Menu-driven loop over the service layer: an authentication menu while
//! logged out, a dashboard menu while logged in. The shell owns the only
//! session state in the program and passes the owner ID explicitly into
//! every service call.
//!
//! The shell is generic over its input and output streams so the whole loop
//! can be exercised from tests with scripted input. EOF on the input stream
//! always exits cleanly.

use std::io::{BufRead, Write};

use crate::display::{format_category_report, format_expense_table};
use crate::error::TrackerResult;
use crate::models::{ExpenseId, Session};
use crate::reports::CategoryReport;
use crate::services::{AuthService, ExpenseService};
use crate::storage::Storage;
use crate::validation;

/// The interactive shell
pub struct Shell<R, W> {
    storage: Storage,
    session: Option<Session>,
    input: R,
    output: W,
    /// Read passwords without echo via the terminal; off when input is piped
    password_from_tty: bool,
}

/// What the menu loop should do next
enum Flow {
    Continue,
    Exit,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell over the given streams
    pub fn new(storage: Storage, input: R, output: W, password_from_tty: bool) -> Self {
        Self {
            storage,
            session: None,
            input,
            output,
            password_from_tty,
        }
    }

    /// Run the menu loop until the user exits or input reaches EOF
    pub fn run(&mut self) -> TrackerResult<()> {
        writeln!(self.output, "Welcome to spendtrack - Personal Finance Tracker")?;

        loop {
            let flow = if self.session.is_none() {
                self.auth_menu()?
            } else {
                self.main_menu()?
            };

            match flow {
                Flow::Continue => {}
                Flow::Exit => break,
            }
        }

        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    // === Menus ===

    fn auth_menu(&mut self) -> TrackerResult<Flow> {
        writeln!(self.output)?;
        writeln!(self.output, "--- Auth Menu ---")?;
        writeln!(self.output, "1. Login")?;
        writeln!(self.output, "2. Register")?;
        writeln!(self.output, "3. Exit")?;

        let choice = match self.prompt("Choose an option: ")? {
            Some(choice) => choice,
            None => return Ok(Flow::Exit),
        };

        match choice.trim() {
            "1" => self.handle_login()?,
            "2" => self.handle_register()?,
            "3" => return Ok(Flow::Exit),
            _ => writeln!(self.output, "Invalid option. Please try again.")?,
        }
        Ok(Flow::Continue)
    }

    fn main_menu(&mut self) -> TrackerResult<Flow> {
        writeln!(self.output)?;
        writeln!(self.output, "--- Main Dashboard ---")?;
        writeln!(self.output, "1. Add Expense")?;
        writeln!(self.output, "2. View Expenses")?;
        writeln!(self.output, "3. Edit Expense")?;
        writeln!(self.output, "4. Delete Expense")?;
        writeln!(self.output, "5. View Report")?;
        writeln!(self.output, "6. Logout")?;

        let choice = match self.prompt("Choose an option: ")? {
            Some(choice) => choice,
            None => return Ok(Flow::Exit),
        };

        let result = match choice.trim() {
            "1" => self.handle_add(),
            "2" => self.handle_view(),
            "3" => self.handle_edit(),
            "4" => self.handle_delete(),
            "5" => self.handle_report(),
            "6" => {
                self.session = None;
                writeln!(self.output, "Logged out.")?;
                Ok(())
            }
            _ => {
                writeln!(self.output, "Invalid option.")?;
                Ok(())
            }
        };

        // Service failures are reported and the menu continues; nothing
        // here is fatal.
        if let Err(e) = result {
            writeln!(self.output, "Error: {}", e)?;
        }
        Ok(Flow::Continue)
    }

    // === Auth handlers ===

    fn handle_login(&mut self) -> TrackerResult<()> {
        let username = match self.prompt("Enter username: ")? {
            Some(username) => username,
            None => return Ok(()),
        };
        let password = match self.prompt_password("Enter password: ")? {
            Some(password) => password,
            None => return Ok(()),
        };

        let auth = AuthService::new(&self.storage);
        match auth.login(&username, &password)? {
            Some(session) => {
                writeln!(self.output, "Login successful! Welcome, {}.", session.username)?;
                self.session = Some(session);
            }
            None => writeln!(self.output, "Invalid credentials.")?,
        }
        Ok(())
    }

    fn handle_register(&mut self) -> TrackerResult<()> {
        let username = match self.prompt("Enter desired username: ")? {
            Some(username) => username,
            None => return Ok(()),
        };
        if !validation::non_empty(&username) {
            writeln!(self.output, "Invalid username.")?;
            return Ok(());
        }

        let password = match self.prompt_password("Enter password: ")? {
            Some(password) => password,
            None => return Ok(()),
        };
        if !validation::non_empty(&password) {
            writeln!(self.output, "Invalid password.")?;
            return Ok(());
        }

        let auth = AuthService::new(&self.storage);
        match auth.register(&username, &password) {
            Ok(_) => writeln!(self.output, "Registration successful! You can now login.")?,
            Err(e) if e.is_duplicate() => writeln!(self.output, "Username already exists.")?,
            Err(e) => return Err(e),
        }
        Ok(())
    }

    // === Expense handlers ===

    fn handle_add(&mut self) -> TrackerResult<()> {
        let owner_id = match &self.session {
            Some(session) => session.user_id,
            None => return Ok(()),
        };

        writeln!(self.output)?;
        writeln!(self.output, "--- Add Expense ---")?;

        let date = match self.prompt("Enter Date (YYYY-MM-DD): ")? {
            Some(input) => match validation::parse_date(&input) {
                Some(date) => date,
                None => {
                    writeln!(self.output, "Invalid date format.")?;
                    return Ok(());
                }
            },
            None => return Ok(()),
        };

        let category = match self.prompt("Enter Category (Food, Travel, etc.): ")? {
            Some(category) if validation::non_empty(&category) => category.trim().to_string(),
            Some(_) => {
                writeln!(self.output, "Invalid category.")?;
                return Ok(());
            }
            None => return Ok(()),
        };

        let amount = match self.prompt("Enter Amount: ")? {
            Some(input) => match validation::parse_positive_amount(&input) {
                Some(amount) => amount,
                None => {
                    writeln!(self.output, "Amount must be a positive number.")?;
                    return Ok(());
                }
            },
            None => return Ok(()),
        };

        let description = self.prompt("Enter Description: ")?.unwrap_or_default();

        let service = ExpenseService::new(&self.storage);
        service.add(owner_id, date, &category, amount, description.trim())?;
        writeln!(self.output, "Expense added successfully.")?;
        Ok(())
    }

    fn handle_view(&mut self) -> TrackerResult<()> {
        let owner_id = match &self.session {
            Some(session) => session.user_id,
            None => return Ok(()),
        };

        writeln!(self.output)?;
        writeln!(self.output, "--- Your Expenses ---")?;

        let service = ExpenseService::new(&self.storage);
        let expenses = service.list_by_owner(owner_id)?;
        writeln!(self.output, "{}", format_expense_table(&expenses))?;
        Ok(())
    }

    fn handle_edit(&mut self) -> TrackerResult<()> {
        let owner_id = match &self.session {
            Some(session) => session.user_id,
            None => return Ok(()),
        };

        self.handle_view()?;

        let id = match self.prompt_expense_id("Enter ID of expense to edit: ")? {
            Some(id) => id,
            None => return Ok(()),
        };

        let date = match self.prompt("Enter New Date (YYYY-MM-DD): ")? {
            Some(input) => match validation::parse_date(&input) {
                Some(date) => date,
                None => {
                    writeln!(self.output, "Invalid date format.")?;
                    return Ok(());
                }
            },
            None => return Ok(()),
        };

        let category = match self.prompt("Enter New Category: ")? {
            Some(category) if validation::non_empty(&category) => category.trim().to_string(),
            Some(_) => {
                writeln!(self.output, "Invalid category.")?;
                return Ok(());
            }
            None => return Ok(()),
        };

        let amount = match self.prompt("Enter New Amount: ")? {
            Some(input) => match validation::parse_positive_amount(&input) {
                Some(amount) => amount,
                None => {
                    writeln!(self.output, "Amount must be a positive number.")?;
                    return Ok(());
                }
            },
            None => return Ok(()),
        };

        let description = self.prompt("Enter New Description: ")?.unwrap_or_default();

        let service = ExpenseService::new(&self.storage);
        if service.edit(id, owner_id, date, &category, amount, description.trim())? {
            writeln!(self.output, "Expense updated.")?;
        } else {
            writeln!(self.output, "Expense not found.")?;
        }
        Ok(())
    }

    fn handle_delete(&mut self) -> TrackerResult<()> {
        let owner_id = match &self.session {
            Some(session) => session.user_id,
            None => return Ok(()),
        };

        self.handle_view()?;

        let id = match self.prompt_expense_id("Enter ID of expense to delete: ")? {
            Some(id) => id,
            None => return Ok(()),
        };

        let service = ExpenseService::new(&self.storage);
        if service.delete(id, owner_id)? {
            writeln!(self.output, "Expense deleted.")?;
        } else {
            writeln!(self.output, "Expense not found.")?;
        }
        Ok(())
    }

    fn handle_report(&mut self) -> TrackerResult<()> {
        let owner_id = match &self.session {
            Some(session) => session.user_id,
            None => return Ok(()),
        };

        let service = ExpenseService::new(&self.storage);
        let expenses = service.list_by_owner(owner_id)?;
        let report = CategoryReport::generate(&expenses);

        writeln!(self.output)?;
        writeln!(self.output, "{}", format_category_report(&report))?;
        Ok(())
    }

    // === Prompting ===

    /// Print a prompt and read one line; `None` on EOF
    fn prompt(&mut self, message: &str) -> TrackerResult<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        let bytes = self.input.read_line(&mut line)?;
        if bytes == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Read a password, without echo when running on a terminal
    fn prompt_password(&mut self, message: &str) -> TrackerResult<Option<String>> {
        if self.password_from_tty {
            let password = rpassword::prompt_password(message)
                .map_err(|e| crate::TrackerError::Io(format!("Failed to read password: {}", e)))?;
            Ok(Some(password))
        } else {
            self.prompt(message)
        }
    }

    /// Prompt for an expense ID, reporting unparseable input as not-found
    ///
    /// An ID that is not even a valid UUID cannot match any record, so it
    /// gets the same message as a missing one.
    fn prompt_expense_id(&mut self, message: &str) -> TrackerResult<Option<ExpenseId>> {
        let input = match self.prompt(message)? {
            Some(input) => input,
            None => return Ok(None),
        };

        match input.parse::<ExpenseId>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                writeln!(self.output, "Expense not found.")?;
                Ok(None)
            }
        }
    }
}
