use chrono::NaiveDate;

use seedstock_core::{Entry, Kind};

/// Predicate set for list views. All active predicates are ANDed.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    /// Case-insensitive substring matched against every field of the entry.
    pub search: Option<String>,

    /// Exact match on the kind's categorical field: party for
    /// inward/outward, reason for returns, action for expiry.
    pub category: Option<String>,

    /// Inclusive date range over the entry's movement date.
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl EntryFilter {
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.category.is_none() && self.from.is_none() && self.to.is_none()
    }

    pub fn matches(&self, kind: Kind, entry: &Entry) -> bool {
        if let Some(needle) = &self.search {
            if !text_matches(entry, needle) {
                return false;
            }
        }

        if let Some(category) = &self.category {
            let field = match kind {
                Kind::Inward | Kind::Outward => entry.party.as_deref(),
                Kind::Returns => entry.reason.as_deref(),
                Kind::Expiry => entry.action.map(|a| a.as_str()),
            };
            if field != Some(category.as_str()) {
                return false;
            }
        }

        if let Some(from) = self.from {
            if entry.date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if entry.date > to {
                return false;
            }
        }

        true
    }
}

/// Free-text match across all of the entry's fields, including numeric and
/// date values in their display form.
fn text_matches(entry: &Entry, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    let Ok(serde_json::Value::Object(fields)) = serde_json::to_value(entry) else {
        return false;
    };
    fields.values().any(|v| match v {
        serde_json::Value::String(s) => s.to_lowercase().contains(&needle),
        serde_json::Value::Number(n) => n.to_string().contains(&needle),
        _ => false,
    })
}

/// Distinct categorical values present in a collection, in first-seen
/// order. Feeds the filter dropdown.
pub fn category_values(kind: Kind, entries: &[Entry]) -> Vec<String> {
    let mut seen = Vec::new();
    for entry in entries {
        let value = match kind {
            Kind::Inward | Kind::Outward => entry.party.clone(),
            Kind::Returns => entry.reason.clone(),
            Kind::Expiry => entry.action.map(|a| a.as_str().to_string()),
        };
        if let Some(v) = value {
            if !v.is_empty() && !seen.contains(&v) {
                seen.push(v);
            }
        }
    }
    seen
}
