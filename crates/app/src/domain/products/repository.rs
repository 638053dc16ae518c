//! In-memory products store.

use jiff::Timestamp;

use crate::domain::products::{
    errors::ProductsServiceError,
    records::{ProductId, ProductRecord},
};

/// Ordered product collection.
///
/// Insertion order is kept and identifiers only ever grow: each new record
/// takes the last record's ID plus one.
#[derive(Debug, Clone, Default)]
pub(crate) struct ProductsRepository {
    products: Vec<ProductRecord>,
}

impl ProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the house coffees.
    #[must_use]
    pub(crate) fn seeded(now: Timestamp) -> Self {
        let seed = |id: u64, name: &str, description: &str, price: f64, sku: &str| ProductRecord {
            id: ProductId::from_u64(id),
            name: name.to_owned(),
            description: description.to_owned(),
            price,
            sku: sku.to_owned(),
            created_at: Some(now),
            updated_at: Some(now),
            deleted_at: None,
        };

        Self {
            products: vec![
                seed(1, "Latte", "Frothy milky coffee", 2.45, "frothy-milky-coffee"),
                seed(
                    2,
                    "Espresso",
                    "Short and strong coffee without milk",
                    1.99,
                    "short-strong-coffee",
                ),
            ],
        }
    }

    pub(crate) fn list(&self) -> &[ProductRecord] {
        &self.products
    }

    /// The ID the next added record will receive.
    ///
    /// An empty store starts at [`ProductId::FIRST`].
    pub(crate) fn next_id(&self) -> Result<ProductId, ProductsServiceError> {
        match self.products.last() {
            None => Ok(ProductId::FIRST),
            Some(last) => last
                .id
                .next()
                .ok_or(ProductsServiceError::IdsExhausted(last.id)),
        }
    }

    /// Append `product`, overwriting whatever ID it carried.
    pub(crate) fn add(
        &mut self,
        mut product: ProductRecord,
    ) -> Result<ProductId, ProductsServiceError> {
        let id = self.next_id()?;

        product.id = id;

        self.products.push(product);

        Ok(id)
    }

    pub(crate) fn find(
        &self,
        id: ProductId,
    ) -> Result<(&ProductRecord, usize), ProductsServiceError> {
        self.products
            .iter()
            .enumerate()
            .find(|(_, product)| product.id == id)
            .map(|(position, product)| (product, position))
            .ok_or(ProductsServiceError::NotFound)
    }

    /// Swap the record at `position`, as returned by [`Self::find`], for
    /// `replacement`.
    pub(crate) fn replace(
        &mut self,
        position: usize,
        replacement: ProductRecord,
    ) -> Result<&ProductRecord, ProductsServiceError> {
        let slot = self
            .products
            .get_mut(position)
            .ok_or(ProductsServiceError::NotFound)?;

        *slot = replacement;

        Ok(&*slot)
    }
}
