use crate::catalog::Product;
use crate::Amount;
use serde::Serialize;
use thiserror::Error;

/// The merged quantity would not fit in a `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cart quantity overflow")]
pub struct QuantityOverflow;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartEntry {
    pub product: Product,
    pub quantity: u32,
}

impl CartEntry {
    /// Unit price × quantity, delivery excluded.
    pub fn total(&self) -> Amount {
        Amount::from(self.product.price) * Amount::from(self.quantity)
    }
}

/// Shopping cart. One entry per item name; order is insertion order.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges into the entry with the same item name, or appends a new one.
    /// Returns the entry's new quantity; on overflow the cart is left unchanged.
    pub fn add(&mut self, product: &Product, quantity: u32) -> Result<u32, QuantityOverflow> {
        match self.entries.iter_mut().find(|e| e.product.item == product.item) {
            Some(entry) => {
                entry.quantity = entry.quantity.checked_add(quantity).ok_or(QuantityOverflow)?;
                Ok(entry.quantity)
            }
            None => {
                self.entries.push(CartEntry { product: product.clone(), quantity });
                Ok(quantity)
            }
        }
    }

    /// Removes the entry at `index`. Returns `None` and leaves the cart alone when out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<CartEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn total(&self) -> Amount {
        self.entries.iter().map(CartEntry::total).sum()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Distinct entries, not units.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn units(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }
}
