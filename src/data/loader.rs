use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use log::{error, info, warn};
use url::Url;

use super::error::{FetchError, LoadError, StrategyError};
use super::model::ProductCatalog;
use super::parser::{parse_reader, parse_str};

// ---------------------------------------------------------------------------
// Resource location
// ---------------------------------------------------------------------------

/// Where the catalog CSV lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceLocation {
    File(PathBuf),
    Url(Url),
}

impl ResourceLocation {
    /// Resolve `resource` against the application root.
    ///
    /// A root starting with `http://` or `https://` is a base URL and the
    /// resource is joined onto it (spaces and other characters are
    /// percent-encoded). Anything else is a directory on disk. A leading
    /// `/` on the resource is relative to the root in both cases.
    pub fn resolve(root: &str, resource: &str) -> Result<Self, url::ParseError> {
        let relative = resource.trim_start_matches('/');
        if root.starts_with("http://") || root.starts_with("https://") {
            let mut base = Url::parse(root)?;
            if !base.path().ends_with('/') {
                let dir = format!("{}/", base.path());
                base.set_path(&dir);
            }
            return Ok(ResourceLocation::Url(base.join(relative)?));
        }
        Ok(ResourceLocation::File(Path::new(root).join(relative)))
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceLocation::File(path) => write!(f, "{}", path.display()),
            ResourceLocation::Url(url) => write!(f, "{url}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Retrieval strategies
// ---------------------------------------------------------------------------

/// One way of turning a location into a parsed catalog.
pub trait RetrievalStrategy {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    fn retrieve(&self, location: &ResourceLocation) -> Result<ProductCatalog, StrategyError>;
}

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

fn http_client() -> Result<reqwest::blocking::Client, reqwest::Error> {
    reqwest::blocking::Client::builder().timeout(HTTP_TIMEOUT).build()
}

fn get(url: &Url) -> Result<reqwest::blocking::Response, FetchError> {
    let http_err = |source| FetchError::Http {
        url: url.to_string(),
        source,
    };
    let response = http_client()
        .map_err(http_err)?
        .get(url.clone())
        .send()
        .map_err(http_err)?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(response)
}

fn open_file(path: &Path) -> Result<File, FetchError> {
    File::open(path).map_err(|source| FetchError::File {
        path: path.to_path_buf(),
        source,
    })
}

/// Primary strategy: open the resource and parse straight from the stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct StreamingRetrieval;

impl RetrievalStrategy for StreamingRetrieval {
    fn name(&self) -> &'static str {
        "streaming"
    }

    fn retrieve(&self, location: &ResourceLocation) -> Result<ProductCatalog, StrategyError> {
        let catalog = match location {
            ResourceLocation::File(path) => parse_reader(BufReader::new(open_file(path)?))?,
            ResourceLocation::Url(url) => parse_reader(get(url)?)?,
        };
        Ok(catalog)
    }
}

/// Fallback strategy: fetch the raw text in full, then parse it.
#[derive(Debug, Default, Clone, Copy)]
pub struct BufferedRetrieval;

impl RetrievalStrategy for BufferedRetrieval {
    fn name(&self) -> &'static str {
        "buffered"
    }

    fn retrieve(&self, location: &ResourceLocation) -> Result<ProductCatalog, StrategyError> {
        let text = match location {
            ResourceLocation::File(path) => {
                std::fs::read_to_string(path).map_err(|source| FetchError::File {
                    path: path.clone(),
                    source,
                })?
            }
            ResourceLocation::Url(url) => get(url)?.text().map_err(|source| FetchError::Http {
                url: url.to_string(),
                source,
            })?,
        };
        Ok(parse_str(&text)?)
    }
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

/// Two-stage loader: the primary strategy, then exactly one fallback attempt.
pub struct CatalogLoader<P = StreamingRetrieval, F = BufferedRetrieval> {
    primary: P,
    fallback: F,
}

impl CatalogLoader {
    /// Streaming retrieval first, buffered retrieval as the fallback.
    pub fn standard() -> Self {
        Self::new(StreamingRetrieval, BufferedRetrieval)
    }
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::standard()
    }
}

impl<P: RetrievalStrategy, F: RetrievalStrategy> CatalogLoader<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    /// Load the catalog, falling back once if the primary strategy fails.
    pub fn load(&self, location: &ResourceLocation) -> Result<ProductCatalog, LoadError> {
        info!("Loading catalog from {location} ({})", self.primary.name());
        let primary = match self.primary.retrieve(location) {
            Ok(catalog) => return Ok(loaded(catalog)),
            Err(e) => e,
        };

        warn!(
            "{} retrieval failed: {primary}; retrying with {}",
            self.primary.name(),
            self.fallback.name()
        );
        match self.fallback.retrieve(location) {
            Ok(catalog) => Ok(loaded(catalog)),
            Err(fallback) => {
                let err = LoadError {
                    location: location.to_string(),
                    primary,
                    fallback,
                };
                error!("{err}");
                Err(err)
            }
        }
    }
}

fn loaded(catalog: ProductCatalog) -> ProductCatalog {
    info!(
        "Loaded {} products, {} categories, {} customer types",
        catalog.len(),
        catalog.category_facet().len(),
        catalog.customer_facet().len()
    );
    catalog
}

/// Run a load on a background thread.
///
/// The single result arrives on the returned channel; `on_done` is called
/// right after it is sent (the UI uses it to schedule a repaint).
pub fn spawn_load<P, F>(
    loader: CatalogLoader<P, F>,
    location: ResourceLocation,
    on_done: impl FnOnce() + Send + 'static,
) -> Receiver<Result<ProductCatalog, LoadError>>
where
    P: RetrievalStrategy + Send + 'static,
    F: RetrievalStrategy + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = loader.load(&location);
        // A closed receiver means the consumer went away; nothing to report to.
        let _ = tx.send(result);
        on_done();
    });
    rx
}
