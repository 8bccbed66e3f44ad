use serde::{Deserialize, Serialize};

/// The six line items every report starts with.
///
/// User-added rows carry no reserved category; they appear in the breakdown
/// but never feed the income or housing totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservedCategory {
    Earnings,
    RentInterestPaid,
    InsurancePaid,
    Maintenance,
    RatesTaxes,
    PrincipalPaid,
}

impl ReservedCategory {
    /// All reserved categories in form order.
    pub fn all() -> &'static [ReservedCategory] {
        &[
            Self::Earnings,
            Self::RentInterestPaid,
            Self::InsurancePaid,
            Self::Maintenance,
            Self::RatesTaxes,
            Self::PrincipalPaid,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Earnings => "Earnings",
            Self::RentInterestPaid => "Rent/Interest Paid",
            Self::InsurancePaid => "Insurance Paid",
            Self::Maintenance => "Maintenance",
            Self::RatesTaxes => "Rates (Taxes)",
            Self::PrincipalPaid => "Principal Paid",
        }
    }

    /// Matches a label exactly as it appears on the form.
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.label() == s)
    }

    /// Whether this category is one of the four that make up the
    /// non-principal housing expense.
    pub fn is_non_principal(&self) -> bool {
        matches!(
            self,
            Self::RentInterestPaid | Self::InsurancePaid | Self::Maintenance | Self::RatesTaxes
        )
    }
}
