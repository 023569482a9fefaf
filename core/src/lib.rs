pub mod cart;
pub mod catalog;
pub mod category;
pub mod criteria;
pub mod scoring;
pub mod session;
pub mod tender;

pub use cart::{Cart, CartEntry, QuantityOverflow};
pub use catalog::{Catalog, Category, Complexity, DeliveryFee, Portion, Product};
pub use criteria::{Criteria, Criterion};
pub use scoring::ScoredOffer;
pub use session::{
    CartSnapshot, CheckoutReceipt, PurchaseReceipt, RankedResults, Session, SessionConfig,
    SessionError, TenderSummary,
};
pub use tender::Tender;

/// Unit price of a single product, in whole currency units.
pub type Price = u32;
/// Aggregated amount (cart lines, totals). Wider than `Price` so quantities can't overflow it.
pub type Amount = u64;
pub type TenderId = u64;
