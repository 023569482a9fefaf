use crate::catalog::{Complexity, Portion, Product};
use crate::criteria::{Criteria, Criterion};
use crate::Price;
use serde::Serialize;

pub const CHEAP_PRICE_LIMIT: Price = 15_000;
pub const SWEET_LEVEL_MIN: u8 = 3;
pub const FAST_DELIVERY_MINUTES: u32 = 15;

pub struct ScoreRule {
    pub criterion: Criterion,
    pub weight: u32,
    pub applies: fn(&Product) -> bool,
}

pub const SCORE_RULES: &[ScoreRule] = &[
    ScoreRule { criterion: Criterion::Cheapest, weight: 3, applies: |p| p.price <= CHEAP_PRICE_LIMIT },
    ScoreRule { criterion: Criterion::Sweet, weight: 2, applies: |p| p.sweetness >= SWEET_LEVEL_MIN },
    ScoreRule { criterion: Criterion::Large, weight: 2, applies: |p| p.portion == Portion::Large },
    ScoreRule { criterion: Criterion::Simple, weight: 2, applies: |p| p.complexity == Complexity::Simple },
    ScoreRule { criterion: Criterion::Fastest, weight: 3, applies: |p| p.delivery_minutes <= FAST_DELIVERY_MINUTES },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredOffer {
    pub product: Product,
    pub score: u32,
}

/// Sum of the weights of every rule whose criterion is requested and which the product satisfies.
pub fn score(product: &Product, criteria: &Criteria) -> u32 {
    SCORE_RULES
        .iter()
        .filter(|rule| criteria.contains(rule.criterion) && (rule.applies)(product))
        .map(|rule| rule.weight)
        .sum()
}

/// Scores every candidate and orders them by score (desc), then base price (asc).
/// The sort is stable, so exact ties keep the candidates' input order.
pub fn rank<'a, I>(candidates: I, criteria: &Criteria) -> Vec<ScoredOffer>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut scored: Vec<ScoredOffer> = candidates
        .into_iter()
        .map(|p| ScoredOffer { score: score(p, criteria), product: p.clone() })
        .collect();
    scored.sort_by(|a, b| b.score.cmp(&a.score).then(a.product.price.cmp(&b.product.price)));
    scored
}
