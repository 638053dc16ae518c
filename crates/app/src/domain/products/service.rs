//! Products service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::products::{
    data::{NewProduct, ProductUpdate},
    errors::ProductsServiceError,
    records::{ProductId, ProductRecord},
    repository::ProductsRepository,
    validation,
};

/// Products held in process memory.
///
/// Reads share the lock; every write holds it for the whole
/// find, merge, validate and replace sequence.
#[derive(Debug, Default)]
pub struct InMemoryProductsService {
    products: RwLock<ProductsRepository>,
}

impl InMemoryProductsService {
    /// An empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            products: RwLock::new(ProductsRepository::new()),
        }
    }

    /// A catalogue holding the two house coffees.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            products: RwLock::new(ProductsRepository::seeded(Timestamp::now())),
        }
    }
}

#[async_trait]
impl ProductsService for InMemoryProductsService {
    async fn list_products(&self) -> Vec<ProductRecord> {
        self.products.read().await.list().to_vec()
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut products = self.products.write().await;

        let candidate = product.into_record(products.next_id()?, Timestamp::now());

        validation::validate(&candidate)?;

        let id = products.add(candidate.clone())?;

        debug!(product_id = %id, "stored product");

        Ok(ProductRecord { id, ..candidate })
    }

    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut products = self.products.write().await;

        let (existing, position) = products.find(product)?;
        let candidate = update.merge(existing);

        validation::validate(&candidate)?;

        let updated = products.replace(position, candidate)?.clone();

        debug!(product_id = %product, "replaced product");

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products in insertion order.
    async fn list_products(&self) -> Vec<ProductRecord>;

    /// Validates and appends a product, assigning its ID.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Merges `update` onto the stored product, validates and replaces it.
    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn mocha() -> NewProduct {
        NewProduct {
            name: "Mocha".to_owned(),
            description: "Chocolate and espresso".to_owned(),
            price: 2.95,
            sku: "choc-milk-coffee".to_owned(),
        }
    }

    #[tokio::test]
    async fn create_product_assigns_next_id() -> TestResult {
        let service = InMemoryProductsService::seeded();

        let created = service.create_product(mocha()).await?;

        assert_eq!(created.id, ProductId::from_u64(3));
        assert_eq!(created.name, "Mocha");
        assert!(created.created_at.is_some());
        assert!(created.deleted_at.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn create_product_on_empty_catalogue_starts_at_one() -> TestResult {
        let service = InMemoryProductsService::new();

        let created = service.create_product(mocha()).await?;

        assert_eq!(created.id, ProductId::FIRST);

        Ok(())
    }

    #[tokio::test]
    async fn create_product_appends_to_list() -> TestResult {
        let service = InMemoryProductsService::seeded();

        service.create_product(mocha()).await?;

        let names: Vec<String> = service
            .list_products()
            .await
            .into_iter()
            .map(|p| p.name)
            .collect();

        assert_eq!(names, vec!["Latte", "Espresso", "Mocha"]);

        Ok(())
    }

    #[tokio::test]
    async fn create_invalid_product_returns_every_violation() {
        let service = InMemoryProductsService::seeded();

        let result = service
            .create_product(NewProduct {
                name: "ab".to_owned(),
                description: "Chocolate and espresso".to_owned(),
                price: 0.0,
                sku: "abc323".to_owned(),
            })
            .await;

        assert!(
            matches!(
                &result,
                Err(ProductsServiceError::Invalid(errors))
                    if errors.has_field("name")
                        && errors.has_field("price")
                        && errors.has_field("sku")
                        && !errors.has_field("description")
            ),
            "expected Invalid on name, price and sku, got {result:?}"
        );

        assert_eq!(service.list_products().await.len(), 2);
    }

    #[tokio::test]
    async fn update_product_keeps_fields_left_empty() -> TestResult {
        let service = InMemoryProductsService::seeded();

        let updated = service
            .update_product(
                ProductId::FIRST,
                ProductUpdate {
                    description: "new desc".to_owned(),
                    ..ProductUpdate::default()
                },
            )
            .await?;

        assert_eq!(updated.id, ProductId::FIRST);
        assert_eq!(updated.name, "Latte");
        assert_eq!(updated.description, "new desc");
        assert!((updated.price - 2.45).abs() < f64::EPSILON, "price kept");
        assert_eq!(updated.sku, "frothy-milky-coffee");

        let listed = service.list_products().await;

        assert_eq!(listed.first(), Some(&updated));

        Ok(())
    }

    #[tokio::test]
    async fn update_product_unknown_id_returns_not_found() {
        let service = InMemoryProductsService::seeded();
        let before = service.list_products().await;

        let result = service
            .update_product(
                ProductId::from_u64(999),
                ProductUpdate {
                    name: "Mocha".to_owned(),
                    ..ProductUpdate::default()
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
        assert_eq!(service.list_products().await, before);
    }

    #[tokio::test]
    async fn update_product_rejects_invalid_merge_without_mutation() {
        let service = InMemoryProductsService::seeded();
        let before = service.list_products().await;

        let result = service
            .update_product(
                ProductId::from_u64(2),
                ProductUpdate {
                    sku: "NOPE".to_owned(),
                    price: -1.0,
                    ..ProductUpdate::default()
                },
            )
            .await;

        assert!(
            matches!(
                &result,
                Err(ProductsServiceError::Invalid(errors))
                    if errors.has_field("sku") && errors.has_field("price") && errors.len() == 2
            ),
            "expected Invalid on sku and price, got {result:?}"
        );
        assert_eq!(service.list_products().await, before);
    }
}
