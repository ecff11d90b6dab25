//! Products referenced by the feed, keyed by id.
//!
//! A product that failed to load is kept as [`ProductSlot::Missing`] so the
//! look still renders with a placeholder card in its place.

use std::collections::HashMap;

use crate::look::Look;
use crate::product::Product;
use crate::types::ResourceId;

#[derive(Debug, Clone, PartialEq)]
pub enum ProductSlot {
    Loading,
    Loaded(Product),
    Missing,
}

#[derive(Debug, Default)]
pub struct ProductShelf {
    slots: HashMap<ResourceId, ProductSlot>,
}

impl ProductShelf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark ids as loading. Ids already on the shelf are left alone.
    pub fn expect<'a>(&mut self, ids: impl IntoIterator<Item = &'a ResourceId>) {
        for id in ids {
            self.slots.entry(id.clone()).or_insert(ProductSlot::Loading);
        }
    }

    pub fn insert(&mut self, product: Product) {
        self.slots.insert(product.id.clone(), ProductSlot::Loaded(product));
    }

    pub fn mark_missing(&mut self, id: &ResourceId) {
        self.slots.insert(id.clone(), ProductSlot::Missing);
    }

    pub fn slot(&self, id: &ResourceId) -> Option<&ProductSlot> {
        self.slots.get(id)
    }

    pub fn get(&self, id: &ResourceId) -> Option<&Product> {
        match self.slots.get(id) {
            Some(ProductSlot::Loaded(product)) => Some(product),
            _ => None,
        }
    }

    /// Slots for a look's products, in the look's order.
    pub fn for_look(&self, look: &Look) -> Vec<ProductSlot> {
        look.product_ids
            .iter()
            .map(|id| self.slots.get(id).cloned().unwrap_or(ProductSlot::Missing))
            .collect()
    }

    pub fn missing_count(&self) -> usize {
        self.slots
            .values()
            .filter(|slot| matches!(slot, ProductSlot::Missing))
            .count()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
