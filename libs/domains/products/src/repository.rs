use async_trait::async_trait;
use rust_decimal::dec;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::Product;

/// Repository trait for Product persistence
///
/// Absence is reported as `None`/`false`/empty, never as an error. Errors are
/// reserved for storage faults, which callers propagate untouched.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List every product, ordered by id
    async fn get_all(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Assign the next id to `product` and persist it
    async fn create(&self, product: Product) -> ProductResult<Product>;

    /// Replace the stored product with the same id; `None` if it no longer exists
    async fn update(&self, product: Product) -> ProductResult<Option<Product>>;

    /// Delete a product by ID, returning whether a record was removed
    async fn delete(&self, id: i64) -> ProductResult<bool>;

    /// Case-insensitive substring search over name and description
    async fn search(&self, term: &str) -> ProductResult<Vec<Product>>;
}

#[derive(Debug)]
struct Store {
    products: BTreeMap<i64, Product>,
    next_id: i64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            products: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl Store {
    fn insert(&mut self, mut product: Product) -> Product {
        product.id = self.next_id;
        self.next_id += 1;
        self.products.insert(product.id, product.clone());
        product
    }
}

/// In-memory implementation of ProductRepository
///
/// Clones share the same underlying store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the catalog's three starter products (ids 1-3).
    pub fn with_seed_data() -> Self {
        let mut store = Store::default();
        for (name, description, price, stock) in [
            ("Laptop", "High-performance laptop", dec!(999.99), 10),
            ("Mouse", "Wireless mouse", dec!(29.99), 50),
            ("Keyboard", "Mechanical keyboard", dec!(79.99), 30),
        ] {
            store.insert(Product {
                id: 0,
                name: name.to_string(),
                description: Some(description.to_string()),
                price,
                stock,
                created_at: chrono::Utc::now(),
                updated_at: None,
            });
        }

        tracing::debug!(count = store.products.len(), "Seeded product store");
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.products.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn create(&self, product: Product) -> ProductResult<Product> {
        let mut store = self.store.write().await;
        let product = store.insert(product);

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn update(&self, product: Product) -> ProductResult<Option<Product>> {
        let mut store = self.store.write().await;

        match store.products.get_mut(&product.id) {
            Some(existing) => {
                *existing = product.clone();
                tracing::info!(product_id = product.id, "Updated product");
                Ok(Some(product))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> ProductResult<bool> {
        let mut store = self.store.write().await;

        if store.products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn search(&self, term: &str) -> ProductResult<Vec<Product>> {
        let needle = term.to_lowercase();
        let store = self.store.read().await;

        Ok(store
            .products
            .values()
            .filter(|p| p.matches(&needle))
            .cloned()
            .collect())
    }
}
