//! Catalog service client.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use shopfront_commerce::catalog::Product;
use shopfront_commerce::ProductId;

use crate::record::ProductRecord;
use crate::FetchError;

/// Default catalog service endpoint.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The catalog operations the storefront core consumes.
///
/// Both operations are asynchronous and may fail; the caller decides how
/// to surface a failure. The core never retries.
#[async_trait]
pub trait CatalogSource {
    /// Fetch the full product collection.
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;

    /// Fetch the distinct set of category names.
    async fn fetch_categories(&self) -> Result<Vec<String>, FetchError>;
}

/// Sort direction for the limited-list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// HTTP client for the catalog service.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client against the default endpoint.
    pub fn new() -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FetchError::RequestError(e.to_string()))?;
        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Get all products.
    pub async fn products(&self) -> Result<Vec<Product>, FetchError> {
        let records: Vec<ProductRecord> = self.get_json("/products").await?;
        Ok(records.into_iter().map(Product::from).collect())
    }

    /// Get a single product.
    pub async fn product(&self, id: ProductId) -> Result<Product, FetchError> {
        let record: ProductRecord = self.get_json(&format!("/products/{id}")).await?;
        Ok(record.into())
    }

    /// Get products in a category.
    pub async fn products_by_category(&self, category: &str) -> Result<Vec<Product>, FetchError> {
        let records: Vec<ProductRecord> =
            self.get_json(&format!("/products/category/{category}")).await?;
        Ok(records.into_iter().map(Product::from).collect())
    }

    /// Get all category names.
    pub async fn categories(&self) -> Result<Vec<String>, FetchError> {
        self.get_json("/products/categories").await
    }

    /// Get a limited, server-sorted product list.
    pub async fn products_limited(
        &self,
        limit: u32,
        sort: SortDirection,
    ) -> Result<Vec<Product>, FetchError> {
        let path = format!("/products?limit={limit}&sort={}", sort.as_str());
        let records: Vec<ProductRecord> = self.get_json(&path).await?;
        Ok(records.into_iter().map(Product::from).collect())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "fetching from catalog service");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpError {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let value = response.json::<T>().await?;
        Ok(value)
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        self.products().await
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, FetchError> {
        self.categories().await
    }
}
