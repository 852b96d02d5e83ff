use serde::Serialize;

use super::model::ProductRecord;

// ---------------------------------------------------------------------------
// Filter criteria: the active query
// ---------------------------------------------------------------------------

/// The active query. An empty string means "no constraint" for that
/// criterion, which is different from a criterion that matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    /// Exact Category value.
    pub category: String,
    /// Exact Target_Customer value.
    pub target_customer: String,
    /// Case-insensitive substring of Name, Description or Code.
    pub search_term: String,
}

impl FilterCriteria {
    /// True when no criterion is active.
    pub fn is_empty(&self) -> bool {
        self.category.is_empty() && self.target_customer.is_empty() && self.search_term.is_empty()
    }

    /// Whether a record passes every active criterion.
    ///
    /// Category and customer compare with plain string equality: no
    /// trimming, no case folding.
    pub fn matches(&self, record: &ProductRecord) -> bool {
        if !self.category.is_empty() && record.category != self.category {
            return false;
        }
        if !self.target_customer.is_empty() && record.target_customer != self.target_customer {
            return false;
        }
        if !self.search_term.is_empty() {
            let needle = self.search_term.to_lowercase();
            return [&record.name, &record.description, &record.code]
                .iter()
                .any(|hay| hay.to_lowercase().contains(&needle));
        }
        true
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Return indices of records that pass all active criteria, in input order.
///
/// Always evaluated over the full record set; nothing is carried over
/// from a previous call.
pub fn filtered_indices(records: &[ProductRecord], criteria: &FilterCriteria) -> Vec<usize> {
    if criteria.is_empty() {
        return (0..records.len()).collect();
    }
    records
        .iter()
        .enumerate()
        .filter(|(_, rec)| criteria.matches(rec))
        .map(|(i, _)| i)
        .collect()
}

/// The subsequence of `records` matching `criteria`.
pub fn apply<'a>(records: &'a [ProductRecord], criteria: &FilterCriteria) -> Vec<&'a ProductRecord> {
    filtered_indices(records, criteria)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, category: &str, customer: &str, description: &str, code: &str) -> ProductRecord {
        ProductRecord {
            name: name.into(),
            category: category.into(),
            target_customer: customer.into(),
            description: description.into(),
            code: code.into(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<ProductRecord> {
        vec![
            product("Pecorino", "Formaggi", "Restaurants", "Aged sheep cheese", "PC1"),
            product("Salame", "Salumi", "Restaurants, Bars", "", "SL1"),
            product("Arrosticini", "Carne", "Specialty Butchers", "Pairs with Formaggi", "AR7"),
            product("Caciocavallo", "Formaggi", "Specialty Cheese Shops", "", "CC2"),
            product("Miele di Sulla", "Miele", "Retail", "Raw honey", "MI1"),
        ]
    }

    fn criteria(category: &str, customer: &str, search: &str) -> FilterCriteria {
        FilterCriteria {
            category: category.into(),
            target_customer: customer.into(),
            search_term: search.into(),
        }
    }

    fn names<'a>(records: &[&'a ProductRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn empty_criteria_is_identity() {
        let records = sample();
        let out = apply(&records, &FilterCriteria::default());
        assert_eq!(out.len(), records.len());
        assert!(out.iter().zip(&records).all(|(a, b)| *a == b));
    }

    #[test]
    fn search_is_case_insensitive() {
        let records = vec![
            product("Pecorino", "", "", "", "PC1"),
            product("Salame", "", "", "", "SL1"),
        ];
        let out = apply(&records, &criteria("", "", "PECO"));
        assert_eq!(names(&out), ["Pecorino"]);
    }

    #[test]
    fn search_covers_description_and_code() {
        let records = sample();
        assert_eq!(names(&apply(&records, &criteria("", "", "honey"))), ["Miele di Sulla"]);
        assert_eq!(names(&apply(&records, &criteria("", "", "cc2"))), ["Caciocavallo"]);
        assert!(apply(&records, &criteria("", "", "Restaurants")).is_empty());
    }

    #[test]
    fn category_is_exact_match_only() {
        let records = sample();
        let out = apply(&records, &criteria("Formaggi", "", ""));
        assert_eq!(names(&out), ["Pecorino", "Caciocavallo"]);
    }

    #[test]
    fn exact_match_does_not_trim_or_fold_case() {
        let records = sample();
        assert!(apply(&records, &criteria("formaggi", "", "")).is_empty());
        assert!(apply(&records, &criteria("Formaggi ", "", "")).is_empty());
        assert!(apply(&records, &criteria("", "Restaurants ", "")).is_empty());
    }

    #[test]
    fn customer_is_exact_match_not_membership() {
        let records = sample();
        let out = apply(&records, &criteria("", "Restaurants", ""));
        assert_eq!(names(&out), ["Pecorino"]);
    }

    #[test]
    fn criteria_combine_with_and() {
        let records = sample();
        let out = apply(&records, &criteria("Formaggi", "Specialty Cheese Shops", "cacio"));
        assert_eq!(names(&out), ["Caciocavallo"]);
        assert!(apply(&records, &criteria("Formaggi", "Retail", "")).is_empty());
    }

    #[test]
    fn clearing_a_filter_restores_records() {
        let records = sample();
        let narrowed = criteria("Salumi", "", "");
        assert_eq!(filtered_indices(&records, &narrowed), [1]);
        assert_eq!(
            filtered_indices(&records, &FilterCriteria::default()),
            [0, 1, 2, 3, 4]
        );
    }

    #[test]
    fn result_is_ordered_subsequence_and_stable() {
        let records = sample();
        let all = [
            criteria("", "", ""),
            criteria("Formaggi", "", ""),
            criteria("", "", "a"),
            criteria("Carne", "Retail", ""),
            criteria("", "", "zzz"),
        ];
        for c in &all {
            let idx = filtered_indices(&records, c);
            assert!(idx.windows(2).all(|w| w[0] < w[1]));
            assert!(idx.iter().all(|&i| i < records.len()));
            assert_eq!(idx, filtered_indices(&records, c));
        }
    }
}
