//! The fixed category lists offered by the entry form's selectors.

use crate::transaction::TransactionType;

/// Categories offered on the income panel.
pub const INCOME_CATEGORIES: &[&str] = &[
    "Salary",
    "Bonus",
    "Freelance",
    "Business",
    "Interest",
    "Dividends",
    "Other Income",
];

/// Categories offered on the expense panel.
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Housing",
    "Utilities",
    "Health",
    "Entertainment",
    "Shopping",
    "Education",
    "Other Expenses",
];

/// Investment types offered on the investment panel.
pub const INVEST_TYPES: &[&str] = &[
    "Stocks",
    "Mutual Funds",
    "Bonds",
    "Gold",
    "Cryptocurrency",
    "Real Estate",
    "Fixed Deposit",
];

/// Get the category list for `type_`.
pub fn categories_for(type_: TransactionType) -> &'static [&'static str] {
    match type_ {
        TransactionType::Income => INCOME_CATEGORIES,
        TransactionType::Expense => EXPENSE_CATEGORIES,
        TransactionType::Invest => INVEST_TYPES,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::transaction::TransactionType;

    use super::categories_for;

    #[test]
    fn every_type_has_categories() {
        for type_ in TransactionType::ALL {
            assert!(
                !categories_for(type_).is_empty(),
                "want categories for {type_}, got none"
            );
        }
    }

    #[test]
    fn categories_are_unique_and_non_empty() {
        for type_ in TransactionType::ALL {
            let categories = categories_for(type_);
            let unique: HashSet<_> = categories.iter().collect();

            assert_eq!(unique.len(), categories.len(), "duplicate category for {type_}");
            assert!(categories.iter().all(|category| !category.is_empty()));
        }
    }
}
