// Transaction Entity - one debit against an account

use crate::repository::Identified;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    pub date: DateTime<Utc>,
    /// Amount debited, in account currency units
    pub amount: f64,
    pub category: String,
}

impl Transaction {
    pub fn new(id: u32, date: DateTime<Utc>, amount: f64, category: impl Into<String>) -> Self {
        Transaction {
            id,
            date,
            amount,
            category: category.into(),
        }
    }
}

impl Identified for Transaction {
    type Id = u32;
    const KIND: &'static str = "Transaction";

    fn id(&self) -> u32 {
        self.id
    }
}
