use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Upper bound (inclusive) of the ideal bucket, as a percent of income.
pub const IDEAL_MAX_PERCENT: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Upper bound (inclusive) of the cost-burdened bucket, as a percent of income.
pub const BURDENED_MAX_PERCENT: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Cost burden of non-principal housing expense relative to income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Ideal,
    CostBurdened,
    SeverelyCostBurdened,
}

impl Classification {
    /// Buckets a percent of income. Both boundaries belong to the lower
    /// severity bucket.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use housing_core::Classification;
    ///
    /// assert_eq!(Classification::classify(dec!(30)), Classification::Ideal);
    /// assert_eq!(Classification::classify(dec!(30.0001)), Classification::CostBurdened);
    /// assert_eq!(Classification::classify(dec!(50)), Classification::CostBurdened);
    /// assert_eq!(Classification::classify(dec!(50.0001)), Classification::SeverelyCostBurdened);
    /// ```
    pub fn classify(percent_of_income: Decimal) -> Self {
        if percent_of_income <= IDEAL_MAX_PERCENT {
            Self::Ideal
        } else if percent_of_income <= BURDENED_MAX_PERCENT {
            Self::CostBurdened
        } else {
            Self::SeverelyCostBurdened
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ideal => "Ideal",
            Self::CostBurdened => "Cost Burdened",
            Self::SeverelyCostBurdened => "Severely Cost Burdened",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Ideal => "30% of income or less",
            Self::CostBurdened => "more than 30% and up to 50% of income",
            Self::SeverelyCostBurdened => "more than 50% of income",
        }
    }
}
