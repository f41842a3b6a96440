//! In-memory fuzzy search over already-loaded content snapshots.
//!
//! There is no server-side search index. Callers build a [`SearchIndex`]
//! from a collection snapshot and rebuild it whenever the snapshot changes;
//! the index itself is immutable. Matching runs a skim-style fuzzy scorer
//! over a fixed set of weighted fields per entity, then applies hard filters
//! as a separate pass on top of the fuzzy result set.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use serde::Serialize;

use crate::domain::product::Product;
use crate::domain::recipe::Recipe;

pub mod filters;

pub use filters::{ProductFilters, RecipeFilters, filter_products, filter_recipes, recipe_tags};

/// Queries shorter than this bypass the fuzzy stage entirely.
pub const MIN_QUERY_LEN: usize = 2;

/// A field matches when its score reaches this share of the query's
/// self-match score.
pub const MATCH_THRESHOLD: f64 = 0.3;

/// Provides the weighted text fields fed to the matcher. Weights sum to 1.
pub trait Searchable {
    fn search_fields(&self) -> Vec<(String, f64)>;
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<(String, f64)> {
        vec![
            (self.title.as_str().to_string(), 0.4),
            (self.short_copy.clone(), 0.3),
            (self.long_copy.clone(), 0.2),
            (self.variety.clone().unwrap_or_default(), 0.1),
        ]
    }
}

impl Searchable for Recipe {
    fn search_fields(&self) -> Vec<(String, f64)> {
        let ingredients = self
            .ingredients
            .iter()
            .map(|i| i.item.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        vec![
            (self.title.as_str().to_string(), 0.4),
            (self.description.clone(), 0.3),
            (ingredients, 0.2),
            (self.tags.join(" "), 0.1),
        ]
    }
}

/// An item together with its match relevance. Higher is closer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit<T> {
    pub item: T,
    pub relevance: f64,
}

struct IndexEntry<T> {
    item: T,
    fields: Vec<(String, f64)>,
}

/// Weighted fuzzy index over one collection snapshot.
pub struct SearchIndex<T> {
    entries: Vec<IndexEntry<T>>,
    matcher: SkimMatcherV2,
}

impl<T: Searchable + Clone> SearchIndex<T> {
    /// Build the index from a snapshot. Field texts are extracted once.
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        let entries = items
            .into_iter()
            .map(|item| IndexEntry {
                fields: item.search_fields(),
                item,
            })
            .collect();
        Self {
            entries,
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }

    /// Fuzzy-match the query against every indexed item.
    pub fn search(&self, query: &str) -> Vec<SearchHit<T>> {
        self.search_filtered(query, |_| true)
    }

    /// Fuzzy-match, then keep only items passing the hard filter. The two
    /// stages stay separate: an empty or too-short query returns the
    /// filter-only result set unchanged, in snapshot order.
    pub fn search_filtered(
        &self,
        query: &str,
        keep: impl Fn(&T) -> bool,
    ) -> Vec<SearchHit<T>> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            return self
                .entries
                .iter()
                .filter(|entry| keep(&entry.item))
                .map(|entry| SearchHit {
                    item: entry.item.clone(),
                    relevance: 1.0,
                })
                .collect();
        }

        // Field scores are normalized against the query's self-match score,
        // so the threshold behaves the same for short and long queries.
        let self_score = self
            .matcher
            .fuzzy_match(query, query)
            .unwrap_or(1)
            .max(1) as f64;

        let mut hits = Vec::new();
        for entry in self.entries.iter().filter(|entry| keep(&entry.item)) {
            let mut relevance = 0.0;
            let mut matched = false;
            for (text, weight) in &entry.fields {
                let Some(score) = self.matcher.fuzzy_match(text, query) else {
                    continue;
                };
                let ratio = score as f64 / self_score;
                if ratio >= MATCH_THRESHOLD {
                    matched = true;
                }
                relevance += weight * ratio;
            }
            if matched {
                hits.push((entry, relevance));
            }
        }

        hits.sort_by(|(a, ra), (b, rb)| {
            rb.partial_cmp(ra)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.fields[0].0.len().cmp(&b.fields[0].0.len()))
                .then_with(|| a.fields[0].0.cmp(&b.fields[0].0))
        });

        hits.into_iter()
            .map(|(entry, relevance)| SearchHit {
                item: entry.item.clone(),
                relevance,
            })
            .collect()
    }
}
