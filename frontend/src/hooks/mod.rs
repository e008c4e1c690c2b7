pub mod use_expense_tracker;
