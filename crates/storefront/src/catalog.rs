//! JSON-document-backed catalog store.
//!
//! Products, boxes, and addresses load once at startup from the data
//! directory (`products.json`, `boxes.json`, `addresses.json`), standing
//! in for the document store the CRUD collaborators own. Lookups are
//! in-memory and infallible; a load failure is a startup error.

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;
use vivarium_core::{Address, AddressId, ProductId, ProductRecord, ShippingBox};
use vivarium_shipping::{AddressBook, BoxCatalog, CatalogError, ProductCatalog};

/// Errors loading the catalog documents at startup.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("Failed to read {file}: {source}")]
    Io {
        file: String,
        source: std::io::Error,
    },
    #[error("Failed to parse {file}: {source}")]
    Parse {
        file: String,
        source: serde_json::Error,
    },
}

/// In-memory catalog loaded from JSON documents.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    products: Vec<ProductRecord>,
    boxes: Vec<ShippingBox>,
    addresses: Vec<Address>,
}

impl FileCatalog {
    /// Build a catalog from already-loaded records.
    #[must_use]
    pub fn new(
        products: Vec<ProductRecord>,
        mut boxes: Vec<ShippingBox>,
        addresses: Vec<Address>,
    ) -> Self {
        // The document store serves boxes sorted ascending by dimensions;
        // mirror that here. The box selector does not rely on it.
        boxes.sort_by(|a, b| a.volume().total_cmp(&b.volume()));

        Self {
            products,
            boxes,
            addresses,
        }
    }

    /// Load `products.json`, `boxes.json`, and `addresses.json` from the
    /// data directory.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogLoadError`] when a file is unreadable or not valid
    /// catalog JSON.
    pub fn load(data_dir: &Path) -> Result<Self, CatalogLoadError> {
        let products = load_file(data_dir, "products.json")?;
        let boxes = load_file(data_dir, "boxes.json")?;
        let addresses = load_file(data_dir, "addresses.json")?;

        tracing::info!(
            products = products.len(),
            boxes = boxes.len(),
            addresses = addresses.len(),
            "loaded catalog documents"
        );

        Ok(Self::new(products, boxes, addresses))
    }
}

fn load_file<T: serde::de::DeserializeOwned>(
    data_dir: &Path,
    file: &str,
) -> Result<Vec<T>, CatalogLoadError> {
    let path = data_dir.join(file);
    let raw = std::fs::read_to_string(&path).map_err(|source| CatalogLoadError::Io {
        file: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CatalogLoadError::Parse {
        file: path.display().to_string(),
        source,
    })
}

#[async_trait]
impl ProductCatalog for FileCatalog {
    async fn find_by_ids(&self, ids: &[ProductId]) -> Result<Vec<ProductRecord>, CatalogError> {
        Ok(self
            .products
            .iter()
            .filter(|product| ids.contains(&product.id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl BoxCatalog for FileCatalog {
    async fn list_boxes(&self) -> Result<Vec<ShippingBox>, CatalogError> {
        Ok(self.boxes.clone())
    }
}

#[async_trait]
impl AddressBook for FileCatalog {
    async fn find_address_by_id(&self, id: &AddressId) -> Result<Option<Address>, CatalogError> {
        Ok(self
            .addresses
            .iter()
            .find(|address| &address.id == id)
            .cloned())
    }
}
