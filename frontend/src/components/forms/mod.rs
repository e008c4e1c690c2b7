pub mod expense_form;

pub use expense_form::ExpenseForm;
