//! Product Service - Business logic layer

use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProductRequest, Product, ProductFields, UpdateProductRequest};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// The service layer enforces the catalog's business rules and orchestrates
/// repository operations. It never touches storage directly.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all products
    #[instrument(skip(self))]
    pub async fn get_all_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.get_all().await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i64) -> ProductResult<Option<Product>> {
        if id <= 0 {
            return Err(ProductError::invalid("Invalid product ID"));
        }

        self.repository.get_by_id(id).await
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProductRequest) -> ProductResult<Product> {
        check_fields(&input)?;

        self.repository.create(Product::new(input)).await
    }

    /// Update an existing product
    ///
    /// Returns `Ok(None)` when no product has `id`; validation only runs
    /// against products that exist.
    #[instrument(skip(self, input))]
    pub async fn update_product(
        &self,
        id: i64,
        input: UpdateProductRequest,
    ) -> ProductResult<Option<Product>> {
        let Some(mut product) = self.repository.get_by_id(id).await? else {
            return Ok(None);
        };

        check_fields(&input)?;

        product.apply_update(input);
        self.repository.update(product).await
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> ProductResult<bool> {
        self.repository.delete(id).await
    }

    /// Search products; a blank term lists everything
    #[instrument(skip(self))]
    pub async fn search_products(&self, term: &str) -> ProductResult<Vec<Product>> {
        if term.trim().is_empty() {
            return self.repository.get_all().await;
        }

        self.repository.search(term).await
    }
}

/// Rules shared by create and update, checked in a fixed order.
fn check_fields(input: &impl ProductFields) -> ProductResult<()> {
    if input.name().trim().is_empty() {
        return Err(ProductError::invalid("Product name is required"));
    }

    if input.price() <= Decimal::ZERO {
        return Err(ProductError::invalid("Price must be greater than 0"));
    }

    input
        .validate()
        .map_err(|e| ProductError::InvalidArgument(e.to_string()))
}
