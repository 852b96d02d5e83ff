/// Data layer: catalog records, parsing, facets, filtering and loading.
///
/// Architecture:
/// ```text
///   CSV file / URL
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  streaming retrieval, buffered fallback
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  parser   │  header-driven rows → ProductRecord
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ ProductCatalog  │  Vec<ProductRecord>, category / customer facets
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  FilterCriteria → matching indices
///   └──────────┘
/// ```

pub mod error;
pub mod export;
pub mod facet;
pub mod filter;
pub mod loader;
pub mod model;
pub mod parser;
