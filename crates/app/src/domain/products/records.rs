//! Product Records

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;

/// Product ID
///
/// Assigned by the store on insert and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(u64);

impl ProductId {
    /// The identifier handed out when the collection is empty.
    pub const FIRST: Self = Self(1);

    pub const fn from_u64(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn into_u64(self) -> u64 {
        self.0
    }

    /// The identifier that follows this one, or `None` once `u64` runs out.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<ProductId> for u64 {
    fn from(value: ProductId) -> Self {
        value.into_u64()
    }
}

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub sku: String,

    /// Bookkeeping only; never sent to clients.
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    pub deleted_at: Option<Timestamp>,
}
