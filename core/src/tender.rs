use crate::catalog::{Catalog, Category};
use crate::category;
use crate::criteria::{self, Criteria};
use crate::scoring::{self, ScoredOffer};
use crate::TenderId;
use time::macros::format_description;
use time::OffsetDateTime;

/// One search request together with everything derived from it.
#[derive(Debug, Clone)]
pub struct Tender {
    id: TenderId,
    request: String,
    created_at: OffsetDateTime,
    criteria: Criteria,
    category: Category,
    offers: Vec<ScoredOffer>,
}

impl Tender {
    /// Derives criteria and category from `request`, then ranks every catalog
    /// product of that category.
    pub fn open(id: TenderId, request: &str, catalog: &Catalog) -> Self {
        let normalized = criteria::normalize(request);
        let criteria = Criteria::from_normalized(&normalized);
        let category = category::detect_normalized(&normalized);
        let offers = scoring::rank(catalog.by_category(category), &criteria);
        Self {
            id,
            request: request.to_string(),
            created_at: OffsetDateTime::now_utc(),
            criteria,
            category,
            offers,
        }
    }

    pub fn id(&self) -> TenderId {
        self.id
    }

    pub fn request(&self) -> &str {
        &self.request
    }

    /// Creation time as `HH:MM`.
    pub fn timestamp(&self) -> String {
        self.created_at
            .format(format_description!("[hour]:[minute]"))
            .unwrap_or_default()
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Every ranked candidate.
    pub fn offers(&self) -> &[ScoredOffer] {
        &self.offers
    }

    /// The `count` best offers, or all of them when there are fewer.
    pub fn top(&self, count: usize) -> &[ScoredOffer] {
        &self.offers[..count.min(self.offers.len())]
    }
}
