use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dates::calendar_date;
use crate::{Expense, ExpensePayload};

/// Reasons a draft cannot be submitted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DraftError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("amount is not a number: {0}")]
    InvalidAmount(String),
}

impl DraftError {
    /// Text shown to the user when a submit is rejected locally.
    pub fn user_message(&self) -> String {
        match self {
            DraftError::MissingField(_) => "Please fill all fields".to_string(),
            DraftError::InvalidAmount(_) => "Please enter a valid amount".to_string(),
        }
    }
}

/// In-progress, unsubmitted copy of an expense's editable fields.
///
/// Every field stays a string while the user types; the amount only becomes a
/// number in [`ExpenseDraft::validate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

/// Names one editable field of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Amount,
    Category,
    Date,
}

impl DraftField {
    pub fn name(&self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Amount => "amount",
            DraftField::Category => "category",
            DraftField::Date => "date",
        }
    }
}

impl ExpenseDraft {
    /// Seeds a draft from an existing record, truncating its date to
    /// `YYYY-MM-DD`.
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            title: expense.title.clone(),
            amount: expense.amount.to_string(),
            category: expense.category.clone(),
            date: calendar_date(&expense.date),
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Title => self.title = value,
            DraftField::Amount => self.amount = value,
            DraftField::Category => self.category = value,
            DraftField::Date => self.date = value,
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Amount => &self.amount,
            DraftField::Category => &self.category,
            DraftField::Date => &self.date,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Checks that all four fields are filled and coerces the amount.
    pub fn validate(&self) -> Result<ExpensePayload, DraftError> {
        for field in [
            DraftField::Title,
            DraftField::Amount,
            DraftField::Category,
            DraftField::Date,
        ] {
            if self.get(field).trim().is_empty() {
                return Err(DraftError::MissingField(field.name()));
            }
        }

        let raw_amount = self.amount.trim();
        let amount = raw_amount
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| DraftError::InvalidAmount(raw_amount.to_string()))?;

        Ok(ExpensePayload {
            title: self.title.trim().to_string(),
            amount,
            category: self.category.trim().to_string(),
            date: self.date.trim().to_string(),
        })
    }
}
