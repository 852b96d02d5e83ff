use indexmap::IndexSet;

use super::model::{Field, ProductRecord};

/// Distinct non-empty values of `field`, in order of first appearance.
///
/// Used to populate the filter choices; the order is the file's natural
/// order, so it is reproducible for the same input.
pub fn distinct_values(records: &[ProductRecord], field: Field) -> Vec<String> {
    let seen: IndexSet<&str> = records
        .iter()
        .map(|r| r.get(field))
        .filter(|v| !v.is_empty())
        .collect();
    seen.into_iter().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_category(cat: &str) -> ProductRecord {
        ProductRecord {
            category: cat.into(),
            ..Default::default()
        }
    }

    #[test]
    fn first_seen_order_not_alphabetical() {
        let records: Vec<_> = ["Salumi", "Formaggi", "Salumi", "Aceto", "Formaggi"]
            .into_iter()
            .map(with_category)
            .collect();
        assert_eq!(
            distinct_values(&records, Field::Category),
            ["Salumi", "Formaggi", "Aceto"]
        );
    }

    #[test]
    fn blanks_are_excluded() {
        let records: Vec<_> = ["", "Olio", ""].into_iter().map(with_category).collect();
        assert_eq!(distinct_values(&records, Field::Category), ["Olio"]);
    }

    #[test]
    fn all_blank_yields_empty_facet() {
        let records: Vec<_> = ["", ""].into_iter().map(with_category).collect();
        assert!(distinct_values(&records, Field::Category).is_empty());
        assert!(distinct_values(&[], Field::TargetCustomer).is_empty());
    }

    #[test]
    fn values_are_not_normalised() {
        let records: Vec<_> = ["Olio", "olio", "Olio "].into_iter().map(with_category).collect();
        assert_eq!(
            distinct_values(&records, Field::Category),
            ["Olio", "olio", "Olio "]
        );
    }

    #[test]
    fn every_nonempty_value_appears_exactly_once() {
        let records: Vec<_> = ["Riso", "Miele", "", "Riso", "Sale", "Miele"]
            .into_iter()
            .map(with_category)
            .collect();
        let facet = distinct_values(&records, Field::Category);
        for rec in &records {
            if !rec.category.is_empty() {
                assert_eq!(facet.iter().filter(|v| **v == rec.category).count(), 1);
            }
        }
        for value in &facet {
            assert!(records.iter().any(|r| &r.category == value));
        }
    }
}
