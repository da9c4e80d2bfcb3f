//! Expense list formatting

use tabled::{Table, Tabled};

use crate::models::Expense;

/// One row of the expense table
#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&Expense> for ExpenseRow {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id.to_string(),
            date: expense.date.format("%Y-%m-%d").to_string(),
            category: expense.category.clone(),
            amount: expense.amount.to_string(),
            description: expense.description.clone(),
        }
    }
}

/// Render a list of expenses as a table
///
/// The full record ID is shown; edit and delete prompts accept it verbatim.
pub fn format_expense_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses.iter().map(ExpenseRow::from).collect();
    Table::new(rows).to_string()
}
