pub mod expense_list;

pub use expense_list::ExpenseList;
