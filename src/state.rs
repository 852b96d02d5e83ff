use crate::data::error::LoadError;
use crate::data::filter::{FilterCriteria, filtered_indices};
use crate::data::model::{ProductCatalog, ProductRecord};

// ---------------------------------------------------------------------------
// Catalog state
// ---------------------------------------------------------------------------

/// The catalog snapshot seen by the presentation layer, independent of
/// rendering.
#[derive(Debug, Default)]
pub struct CatalogState {
    /// Loaded catalog; replaced as a whole when a load completes.
    catalog: ProductCatalog,

    /// Active filter criteria.
    criteria: FilterCriteria,

    /// Indices of records passing the current criteria (cached).
    visible: Vec<usize>,

    /// Whether a load is in flight.
    loading: bool,

    /// Where the current catalog came from.
    pub source_label: Option<String>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl CatalogState {
    /// Mark a load as started. Until [`finish_load`](Self::finish_load)
    /// the previous snapshot stays visible.
    pub fn begin_load(&mut self, source: impl Into<String>) {
        self.loading = true;
        self.source_label = Some(source.into());
        self.status_message = None;
    }

    /// Publish the outcome of a load. On failure the catalog is empty,
    /// never partial, and loading ends either way.
    pub fn finish_load(&mut self, result: Result<ProductCatalog, LoadError>) {
        match result {
            Ok(catalog) => {
                self.catalog = catalog;
                self.status_message = None;
            }
            Err(e) => {
                self.catalog = ProductCatalog::default();
                self.status_message = Some(format!("Error: {e}"));
            }
        }
        self.loading = false;
        self.refilter();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn all_records(&self) -> &[ProductRecord] {
        &self.catalog.records
    }

    pub fn category_facet(&self) -> &[String] {
        self.catalog.category_facet()
    }

    pub fn customer_facet(&self) -> &[String] {
        self.catalog.customer_facet()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replace the criteria and recompute the visible records.
    pub fn set_filter_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.refilter();
    }

    pub fn clear_filters(&mut self) {
        self.set_filter_criteria(FilterCriteria::default());
    }

    /// Indices into [`all_records`](Self::all_records) passing the criteria.
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    /// Records passing the current criteria, in catalog order.
    pub fn filtered_records(&self) -> impl Iterator<Item = &ProductRecord> + '_ {
        self.visible.iter().map(|&i| &self.catalog.records[i])
    }

    /// Recompute `visible` over the full record set.
    fn refilter(&mut self) {
        self.visible = filtered_indices(&self.catalog.records, &self.criteria);
        log::debug!(
            "{} of {} products match {:?}",
            self.visible.len(),
            self.catalog.len(),
            self.criteria
        );
    }
}
