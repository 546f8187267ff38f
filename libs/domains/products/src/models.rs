use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Maximum length of a product name
pub const NAME_MAX_LEN: usize = 100;
/// Maximum length of a product description
pub const DESCRIPTION_MAX_LEN: usize = 500;
// `validator` length bounds are `u64`
const NAME_MAX_LEN_U64: u64 = NAME_MAX_LEN as u64;
const DESCRIPTION_MAX_LEN_U64: u64 = DESCRIPTION_MAX_LEN as u64;

/// Product entity - a catalog item held by the repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Store-assigned identifier; `0` until the product is persisted
    pub id: i64,
    /// Product name
    pub name: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Unit price, carried as an exact JSON number
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64, example = 29.99)]
    pub price: Decimal,
    /// Quantity on hand
    pub stock: i32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last successful update
    pub updated_at: Option<DateTime<Utc>>,
}

/// DTO for creating a new product
///
/// Absent `name`/`price` default to empty/zero so the service reports the
/// business rule that was broken.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[serde(default)]
    #[validate(length(max = NAME_MAX_LEN_U64, message = "Product name must be at most 100 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = DESCRIPTION_MAX_LEN_U64, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64, example = 29.99)]
    pub price: Decimal,
    #[serde(default)]
    pub stock: i32,
}

/// DTO for updating an existing product; every mutable field is overwritten
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(default)]
    #[validate(length(max = NAME_MAX_LEN_U64, message = "Product name must be at most 100 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = DESCRIPTION_MAX_LEN_U64, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64, example = 29.99)]
    pub price: Decimal,
    #[serde(default)]
    pub stock: i32,
}

/// Query parameters for product search
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
pub struct SearchQuery {
    /// Case-insensitive substring matched against name and description
    #[serde(default)]
    pub term: String,
}

/// Fields shared by the create and update requests that business rules inspect
pub trait ProductFields: Validate {
    fn name(&self) -> &str;
    fn price(&self) -> Decimal;
}

impl ProductFields for CreateProductRequest {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> Decimal {
        self.price
    }
}

impl ProductFields for UpdateProductRequest {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> Decimal {
        self.price
    }
}

impl Product {
    /// Build an unpersisted product from a create request, stamping `created_at`.
    pub fn new(input: CreateProductRequest) -> Self {
        Self {
            id: 0,
            name: input.name,
            description: input.description,
            price: input.price,
            stock: input.stock,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Overwrite all mutable fields from an update request and stamp `updated_at`.
    pub fn apply_update(&mut self, update: UpdateProductRequest) {
        self.name = update.name;
        self.description = update.description;
        self.price = update.price;
        self.stock = update.stock;
        self.updated_at = Some(Utc::now());
    }

    /// Whether `needle` (already lowercased) occurs in the name or description.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }
}
