//! Command handlers a presentation layer drives: one call per user action,
//! each returning a serializable view of the result.

use crate::cart::{Cart, CartEntry};
use crate::catalog::{Catalog, Category, DeliveryFee};
use crate::criteria::Criteria;
use crate::scoring::ScoredOffer;
use crate::tender::Tender;
use crate::{Amount, Price, TenderId};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// How many ranked offers a search exposes.
    pub top_n: usize,
    /// Tender summaries kept in history, most recent first.
    pub history_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { top_n: 6, history_limit: 50 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("please enter a search request")]
    EmptyQuery,
    #[error("your cart is empty")]
    EmptyCart,
    #[error("no product named {0:?}")]
    UnknownProduct(String),
    #[error("quantity must be at least 1 and fit in the cart")]
    InvalidQuantity,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResults {
    pub tender_id: TenderId,
    pub query: String,
    pub category: Category,
    pub criteria: Criteria,
    /// Products in the category before truncation to `results`.
    pub total_candidates: usize,
    pub results: Vec<ScoredOffer>,
}

impl RankedResults {
    fn from_tender(tender: &Tender, top_n: usize) -> Self {
        Self {
            tender_id: tender.id(),
            query: tender.request().to_string(),
            category: tender.category(),
            criteria: *tender.criteria(),
            total_candidates: tender.offers().len(),
            results: tender.top(top_n).to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub item: String,
    pub seller: String,
    pub unit_price: Price,
    pub quantity: u32,
    pub total: Amount,
}

impl From<&CartEntry> for CartLine {
    fn from(entry: &CartEntry) -> Self {
        Self {
            item: entry.product.item.clone(),
            seller: entry.product.seller.clone(),
            unit_price: entry.product.price,
            quantity: entry.quantity,
            total: entry.total(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    /// Distinct entries.
    pub count: usize,
    pub units: u64,
    pub total: Amount,
}

impl From<&Cart> for CartSnapshot {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.entries().iter().map(CartLine::from).collect(),
            count: cart.count(),
            units: cart.units(),
            total: cart.total(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutReceipt {
    pub total: Amount,
    pub item_count: usize,
    pub units: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseReceipt {
    pub item: String,
    pub seller: String,
    pub price: Price,
    pub delivery: DeliveryFee,
    pub delivery_minutes: u32,
    /// Price plus delivery fee.
    pub landed_price: Amount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenderSummary {
    pub id: TenderId,
    pub request: String,
    /// `HH:MM`, UTC.
    pub time: String,
    pub category: Category,
    pub result_count: usize,
}

/// State of one user: the shared catalog, a cart, the current tender and past ones.
pub struct Session {
    catalog: Arc<Catalog>,
    config: SessionConfig,
    cart: Cart,
    active: Option<Tender>,
    history: VecDeque<TenderSummary>,
    next_tender_id: TenderId,
}

impl Session {
    pub fn new(catalog: Arc<Catalog>, config: SessionConfig) -> Self {
        Self {
            catalog,
            config,
            cart: Cart::new(),
            active: None,
            history: VecDeque::new(),
            next_tender_id: 1,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Opens a tender for `query`. Blank queries are rejected and the previous
    /// results stay active.
    pub fn search(&mut self, query: &str) -> Result<RankedResults, SessionError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SessionError::EmptyQuery);
        }

        let tender = Tender::open(self.next_tender_id, query, &self.catalog);
        self.next_tender_id += 1;
        tracing::debug!(
            tender_id = tender.id(),
            category = %tender.category(),
            criteria = ?tender.criteria(),
            candidates = tender.offers().len(),
            "tender opened"
        );

        let results = RankedResults::from_tender(&tender, self.config.top_n);
        self.history.push_front(TenderSummary {
            id: tender.id(),
            request: tender.request().to_string(),
            time: tender.timestamp(),
            category: tender.category(),
            result_count: results.results.len(),
        });
        self.history.truncate(self.config.history_limit);
        self.active = Some(tender);
        Ok(results)
    }

    /// Results of the last successful search.
    pub fn active(&self) -> Option<RankedResults> {
        self.active.as_ref().map(|t| RankedResults::from_tender(t, self.config.top_n))
    }

    pub fn add_to_cart(&mut self, item: &str, quantity: u32) -> Result<CartSnapshot, SessionError> {
        if quantity == 0 {
            return Err(SessionError::InvalidQuantity);
        }
        let product = self
            .catalog
            .find(item)
            .ok_or_else(|| SessionError::UnknownProduct(item.to_string()))?;
        self.cart.add(product, quantity).map_err(|_| SessionError::InvalidQuantity)?;
        tracing::debug!(item = %product.item, quantity, entries = self.cart.count(), "added to cart");
        Ok(self.cart())
    }

    /// Out-of-bounds indices leave the cart untouched.
    pub fn remove_from_cart(&mut self, index: usize) -> CartSnapshot {
        match self.cart.remove(index) {
            Some(entry) => tracing::debug!(index, item = %entry.product.item, "removed from cart"),
            None => tracing::debug!(index, entries = self.cart.count(), "remove ignored, index out of range"),
        }
        self.cart()
    }

    pub fn cart(&self) -> CartSnapshot {
        CartSnapshot::from(&self.cart)
    }

    /// Produces a receipt and empties the cart. Fails on an empty cart.
    pub fn checkout(&mut self) -> Result<CheckoutReceipt, SessionError> {
        if self.cart.is_empty() {
            return Err(SessionError::EmptyCart);
        }
        let receipt = CheckoutReceipt {
            total: self.cart.total(),
            item_count: self.cart.count(),
            units: self.cart.units(),
        };
        self.cart.clear();
        tracing::info!(total = receipt.total, items = receipt.item_count, "checkout complete");
        Ok(receipt)
    }

    /// Direct single-unit purchase; the cart is not involved.
    pub fn buy_now(&self, item: &str) -> Result<PurchaseReceipt, SessionError> {
        let product = self
            .catalog
            .find(item)
            .ok_or_else(|| SessionError::UnknownProduct(item.to_string()))?;
        let receipt = PurchaseReceipt {
            item: product.item.clone(),
            seller: product.seller.clone(),
            price: product.price,
            delivery: product.delivery,
            delivery_minutes: product.delivery_minutes,
            landed_price: product.landed_price(),
        };
        tracing::info!(item = %receipt.item, price = receipt.price, "purchase complete");
        Ok(receipt)
    }

    /// Most recent first.
    pub fn history(&self) -> Vec<TenderSummary> {
        self.history.iter().cloned().collect()
    }
}
