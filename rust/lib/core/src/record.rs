use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Record category. Every stored entry belongs to exactly one kind and the
/// four collections are independent of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Inward,
    Outward,
    Returns,
    Expiry,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::Inward, Kind::Outward, Kind::Returns, Kind::Expiry];

    /// Lowercase wire/table name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Inward => "inward",
            Kind::Outward => "outward",
            Kind::Returns => "returns",
            Kind::Expiry => "expiry",
        }
    }

    /// Singular label used in API messages ("Return entry added").
    pub fn label(&self) -> &'static str {
        match self {
            Kind::Inward => "Inward",
            Kind::Outward => "Outward",
            Kind::Returns => "Return",
            Kind::Expiry => "Expiry",
        }
    }

    pub fn parse(s: &str) -> Option<Kind> {
        match s {
            "inward" => Some(Kind::Inward),
            "outward" => Some(Kind::Outward),
            "returns" => Some(Kind::Returns),
            "expiry" => Some(Kind::Expiry),
            _ => None,
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened to an expired lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryAction {
    Used,
    Destroyed,
    Returned,
}

impl ExpiryAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryAction::Used => "used",
            ExpiryAction::Destroyed => "destroyed",
            ExpiryAction::Returned => "returned",
        }
    }
}

/// A stored inventory record. All four kinds share this shape; the
/// kind-specific fields (`party`, `reason`, `expiry_date`, `action`) are
/// optional here and enforced per kind by validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Opaque id, unique within the entry's kind.
    pub id: String,

    pub seed_name: String,

    /// Quantity in kg. Always positive.
    pub quantity: f64,

    /// Movement date (not the insertion time).
    pub date: NaiveDate,

    /// Supplier (inward) or customer (outward).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party: Option<String>,

    /// Why the lot came back (returns only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ExpiryAction>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// RFC 3339 insertion timestamp, assigned by whichever store created
    /// the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// A form submission: an [`Entry`] before an id and timestamp are assigned.
/// Everything is optional so validation can report all missing fields at
/// once instead of failing on the first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ExpiryAction>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl EntryDraft {
    /// Materialize an [`Entry`] with the given id and timestamp. Callers
    /// validate first; missing required fields fall back to defaults rather
    /// than panicking.
    pub fn into_entry(self, id: String, created_at: String) -> Entry {
        Entry {
            id,
            seed_name: self.seed_name.unwrap_or_default(),
            quantity: self.quantity.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            party: self.party,
            reason: self.reason,
            expiry_date: self.expiry_date,
            action: self.action,
            notes: self.notes,
            created_at: Some(created_at),
        }
    }
}

impl From<&Entry> for EntryDraft {
    fn from(e: &Entry) -> Self {
        EntryDraft {
            seed_name: Some(e.seed_name.clone()),
            quantity: Some(e.quantity),
            date: Some(e.date),
            party: e.party.clone(),
            reason: e.reason.clone(),
            expiry_date: e.expiry_date,
            action: e.action,
            notes: e.notes.clone(),
        }
    }
}
