use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    Cheapest,
    Sweet,
    Large,
    Simple,
    Fastest,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::Cheapest,
        Criterion::Sweet,
        Criterion::Large,
        Criterion::Simple,
        Criterion::Fastest,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Criterion::Cheapest => "cheapest",
            Criterion::Sweet => "sweet",
            Criterion::Large => "large",
            Criterion::Simple => "simple",
            Criterion::Fastest => "fastest",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Synonyms per flag. A flag is set when any keyword occurs as a substring.
pub const CRITERIA_RULES: &[(Criterion, &[&str])] = &[
    (Criterion::Cheapest, &["cheap", "budget", "affordable"]),
    (Criterion::Sweet, &["sweet"]),
    (Criterion::Large, &["large", "big", "jumbo", "lot"]),
    (Criterion::Simple, &["simple", "easy", "basic"]),
    (Criterion::Fastest, &["fast", "quick", "rapid"]),
];

/// Boolean flags derived from a request. Serializes as `{"cheapest": true, ...}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    pub cheapest: bool,
    pub sweet: bool,
    pub large: bool,
    pub simple: bool,
    pub fastest: bool,
}

impl Criteria {
    /// Normalizes `text` and applies [`CRITERIA_RULES`].
    pub fn parse(text: &str) -> Self {
        Self::from_normalized(&normalize(text))
    }

    /// Same as [`Criteria::parse`] for text already passed through [`normalize`].
    pub fn from_normalized(text: &str) -> Self {
        let mut criteria = Criteria::default();
        for (criterion, keywords) in CRITERIA_RULES {
            if keywords.iter().any(|kw| text.contains(kw)) {
                criteria.insert(*criterion);
            }
        }
        criteria
    }

    pub fn contains(&self, criterion: Criterion) -> bool {
        match criterion {
            Criterion::Cheapest => self.cheapest,
            Criterion::Sweet => self.sweet,
            Criterion::Large => self.large,
            Criterion::Simple => self.simple,
            Criterion::Fastest => self.fastest,
        }
    }

    pub fn insert(&mut self, criterion: Criterion) {
        let flag = match criterion {
            Criterion::Cheapest => &mut self.cheapest,
            Criterion::Sweet => &mut self.sweet,
            Criterion::Large => &mut self.large,
            Criterion::Simple => &mut self.simple,
            Criterion::Fastest => &mut self.fastest,
        };
        *flag = true;
    }

    pub fn is_empty(&self) -> bool {
        !Criterion::ALL.iter().any(|c| self.contains(*c))
    }

    /// Set flags in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Criterion> + '_ {
        Criterion::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

/// NFKC-normalize and lowercase request text before keyword matching.
pub fn normalize(text: &str) -> String {
    text.nfkc().collect::<String>().to_lowercase()
}
