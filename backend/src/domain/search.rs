//! Case-insensitive name search over the catalogue.

use crate::domain::{CATALOGUE, Destination};

/// Outcome of a catalogue search.
///
/// `NoQuery` and `NotFound` both carry no results; pages use the distinction
/// to decide between rendering nothing and rendering a "no matches" notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The submitted query was empty or whitespace only.
    NoQuery,
    /// A query was submitted and nothing matched.
    NotFound {
        /// Query as submitted.
        query: String,
    },
    /// One or more destinations matched, in catalogue order.
    Matches {
        /// Query as submitted.
        query: String,
        /// Matching destinations.
        destinations: Vec<Destination>,
    },
}

impl SearchOutcome {
    /// Matching destinations; empty for `NoQuery` and `NotFound`.
    pub fn destinations(&self) -> &[Destination] {
        match self {
            Self::Matches { destinations, .. } => destinations,
            Self::NoQuery | Self::NotFound { .. } => &[],
        }
    }

    /// The submitted query, or `None` when no query was given.
    pub fn query(&self) -> Option<&str> {
        match self {
            Self::NoQuery => None,
            Self::NotFound { query } | Self::Matches { query, .. } => Some(query),
        }
    }

    /// Whether a query was submitted and matched nothing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Match `query` against every destination's display name.
///
/// The query is compared untrimmed, so a query with surrounding spaces only
/// matches names that contain those spaces.
///
/// # Examples
/// ```
/// use wanderlist::domain::{search, SearchOutcome};
///
/// let outcome = search("ali");
/// let names: Vec<_> = outcome.destinations().iter().map(|d| d.display_name()).collect();
/// assert_eq!(names, ["Bali Island"]);
/// assert_eq!(search("  "), SearchOutcome::NoQuery);
/// ```
pub fn search(query: &str) -> SearchOutcome {
    if query.trim().is_empty() {
        return SearchOutcome::NoQuery;
    }

    let needle = query.to_lowercase();
    let destinations: Vec<Destination> = CATALOGUE
        .iter()
        .copied()
        .filter(|destination| destination.display_name().to_lowercase().contains(&needle))
        .collect();

    if destinations.is_empty() {
        SearchOutcome::NotFound {
            query: query.to_owned(),
        }
    } else {
        SearchOutcome::Matches {
            query: query.to_owned(),
            destinations,
        }
    }
}
