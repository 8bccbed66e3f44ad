use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ReservedCategory;

/// A single row of the expense form, holding the amount exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub amount: String,
    /// `Some` for the six fixed rows, `None` for rows the user added.
    pub category: Option<ReservedCategory>,
}

impl LineItem {
    /// A reserved row with an empty amount.
    pub fn reserved(category: ReservedCategory) -> Self {
        Self {
            name: category.label().to_string(),
            amount: String::new(),
            category: Some(category),
        }
    }

    /// A user-added row.
    pub fn custom(
        name: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            category: None,
        }
    }

    /// Builds a row from a name, tagging it when the name is a reserved label.
    pub fn from_name(
        name: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let category = ReservedCategory::parse(&name);
        Self {
            name,
            amount: amount.into(),
            category,
        }
    }

    pub fn with_amount(
        mut self,
        amount: impl Into<String>,
    ) -> Self {
        self.amount = amount.into();
        self
    }

    pub fn is_reserved(&self) -> bool {
        self.category.is_some()
    }

    /// The six reserved rows, in form order, with empty amounts.
    pub fn default_items() -> Vec<LineItem> {
        ReservedCategory::all()
            .iter()
            .copied()
            .map(LineItem::reserved)
            .collect()
    }
}

/// A line item after its amount has been parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedItem {
    pub name: String,
    pub category: Option<ReservedCategory>,
    pub value: Decimal,
}
