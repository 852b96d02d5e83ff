use std::collections::BTreeMap;

use serde::Serialize;

use super::facet::distinct_values;

// ---------------------------------------------------------------------------
// Field – the closed set of catalog columns
// ---------------------------------------------------------------------------

/// A known catalog column. Header names are matched exactly (case-sensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Category,
    TargetCustomer,
    Description,
    Code,
    Size,
    /// Aging period ("Stagionatura").
    Stagionatura,
    ExpiringDate,
    PictureUrl,
    Price,
}

impl Field {
    /// All known columns in their canonical file order.
    pub const ALL: [Field; 10] = [
        Field::Name,
        Field::Category,
        Field::TargetCustomer,
        Field::Description,
        Field::Code,
        Field::Size,
        Field::Stagionatura,
        Field::ExpiringDate,
        Field::PictureUrl,
        Field::Price,
    ];

    /// The CSV header name of this column.
    pub fn header(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Category => "Category",
            Field::TargetCustomer => "Target_Customer",
            Field::Description => "Description",
            Field::Code => "Code",
            Field::Size => "Size",
            Field::Stagionatura => "Stagionatura",
            Field::ExpiringDate => "Expiring_Date",
            Field::PictureUrl => "Picture_URL",
            Field::Price => "Price",
        }
    }

    /// Map a header cell to a known column.
    pub fn from_header(header: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.header() == header)
    }
}

// ---------------------------------------------------------------------------
// ProductRecord – one row of the catalog
// ---------------------------------------------------------------------------

/// One parsed catalog row.
///
/// Every known column is always present: a column missing from the header
/// or a cell missing from a short row is the empty string. Header columns
/// outside the known set are kept verbatim in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Target_Customer")]
    pub target_customer: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Size")]
    pub size: String,
    #[serde(rename = "Stagionatura")]
    pub stagionatura: String,
    #[serde(rename = "Expiring_Date")]
    pub expiring_date: String,
    #[serde(rename = "Picture_URL")]
    pub picture_url: String,
    /// Raw price text as it appears in the file.
    #[serde(rename = "Price")]
    pub price: String,
    /// Columns not in [`Field::ALL`]: header name → cell value.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl ProductRecord {
    /// Value of a known column. Never fails; blank cells read as `""`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Category => &self.category,
            Field::TargetCustomer => &self.target_customer,
            Field::Description => &self.description,
            Field::Code => &self.code,
            Field::Size => &self.size,
            Field::Stagionatura => &self.stagionatura,
            Field::ExpiringDate => &self.expiring_date,
            Field::PictureUrl => &self.picture_url,
            Field::Price => &self.price,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Category => &mut self.category,
            Field::TargetCustomer => &mut self.target_customer,
            Field::Description => &mut self.description,
            Field::Code => &mut self.code,
            Field::Size => &mut self.size,
            Field::Stagionatura => &mut self.stagionatura,
            Field::ExpiringDate => &mut self.expiring_date,
            Field::PictureUrl => &mut self.picture_url,
            Field::Price => &mut self.price,
        };
        *slot = value;
    }

    /// Value of any header column, known or extra. `None` only when the
    /// header never had such a column.
    pub fn column(&self, header: &str) -> Option<&str> {
        match Field::from_header(header) {
            Some(field) => Some(self.get(field)),
            None => self.extra.get(header).map(String::as_str),
        }
    }

    /// Best-effort numeric reading of `Price`.
    ///
    /// Accepts surrounding whitespace, a leading `€` and a decimal comma
    /// (`"€ 12,50"` → `12.5`). Returns `None` for blank or non-numeric text.
    pub fn price_amount(&self) -> Option<f64> {
        let text = self.price.trim();
        let text = text.strip_prefix('€').unwrap_or(text).trim();
        if text.is_empty() {
            return None;
        }
        text.replace(',', ".").parse::<f64>().ok().filter(|p| p.is_finite())
    }
}

// ---------------------------------------------------------------------------
// ProductCatalog – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed catalog together with its filter facets.
///
/// Facets are computed only in [`ProductCatalog::from_records`], so they
/// cannot drift from `records`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCatalog {
    /// Header columns in file order.
    pub columns: Vec<String>,
    /// All records in file order.
    pub records: Vec<ProductRecord>,
    category_facet: Vec<String>,
    customer_facet: Vec<String>,
}

impl ProductCatalog {
    /// Build facets from the loaded records.
    pub fn from_records(columns: Vec<String>, records: Vec<ProductRecord>) -> Self {
        let category_facet = distinct_values(&records, Field::Category);
        let customer_facet = distinct_values(&records, Field::TargetCustomer);
        ProductCatalog {
            columns,
            records,
            category_facet,
            customer_facet,
        }
    }

    /// Distinct categories in first-seen order.
    pub fn category_facet(&self) -> &[String] {
        &self.category_facet
    }

    /// Distinct target-customer values in first-seen order.
    pub fn customer_facet(&self) -> &[String] {
        &self.customer_facet
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_header(field.header()), Some(field));
        }
        assert_eq!(Field::from_header("name"), None);
        assert_eq!(Field::from_header("Target Customer"), None);
    }

    #[test]
    fn column_lookup_covers_known_and_extra() {
        let mut rec = ProductRecord {
            code: "PC1".into(),
            ..Default::default()
        };
        rec.extra.insert("Origin".into(), "Abruzzo".into());

        assert_eq!(rec.column("Code"), Some("PC1"));
        assert_eq!(rec.column("Size"), Some(""));
        assert_eq!(rec.column("Origin"), Some("Abruzzo"));
        assert_eq!(rec.column("Missing"), None);
    }

    #[test]
    fn price_amount_is_lenient() {
        let with = |p: &str| ProductRecord {
            price: p.into(),
            ..Default::default()
        };
        assert_eq!(with("12.50").price_amount(), Some(12.5));
        assert_eq!(with(" €8,90 ").price_amount(), Some(8.9));
        assert_eq!(with("€ 3").price_amount(), Some(3.0));
        assert_eq!(with("").price_amount(), None);
        assert_eq!(with("on request").price_amount(), None);
    }

    #[test]
    fn catalog_facets_follow_records() {
        let rec = |cat: &str, cust: &str| ProductRecord {
            category: cat.into(),
            target_customer: cust.into(),
            ..Default::default()
        };
        let catalog = ProductCatalog::from_records(
            vec!["Category".into(), "Target_Customer".into()],
            vec![rec("Salumi", "Bars"), rec("", "Retail"), rec("Salumi", "")],
        );
        assert_eq!(catalog.category_facet(), ["Salumi"]);
        assert_eq!(catalog.customer_facet(), ["Bars", "Retail"]);
        assert_eq!(catalog.len(), 3);
    }
}
