//! Form validation. All failed rules are collected and reported together;
//! the caller aborts the mutation when the list is non-empty.

use chrono::Local;

use seedstock_core::{EntryDraft, Kind};

pub const MAX_SEED_NAME_LEN: usize = 100;
pub const MAX_QUANTITY_KG: f64 = 10_000.0;

/// Validate a draft for the given kind. Returns one message per failed
/// rule, in form order; an empty list means the draft is acceptable.
pub fn validate(kind: Kind, draft: &EntryDraft) -> Vec<String> {
    let mut errors = Vec::new();
    let today = Local::now().date_naive();

    match &draft.seed_name {
        None => errors.push("Seed name is required".to_string()),
        Some(name) if name.trim().is_empty() => {
            errors.push("Seed name is required".to_string())
        }
        Some(name) if name.chars().count() > MAX_SEED_NAME_LEN => {
            errors.push("Seed name must be less than 100 characters".to_string())
        }
        Some(_) => {}
    }

    match draft.quantity {
        None => errors.push("Quantity must be a number".to_string()),
        Some(q) if !q.is_finite() => errors.push("Quantity must be a number".to_string()),
        Some(q) if q <= 0.0 => errors.push("Quantity must be greater than 0".to_string()),
        Some(q) if q > MAX_QUANTITY_KG => {
            errors.push("Quantity must be less than 10,000 kg".to_string())
        }
        Some(_) => {}
    }

    match draft.date {
        None => errors.push("Date is required".to_string()),
        Some(d) if d > today => errors.push("Date cannot be in the future".to_string()),
        Some(_) => {}
    }

    match kind {
        Kind::Inward | Kind::Outward => {
            if draft.party.as_deref().map(str::trim).unwrap_or("").is_empty() {
                errors.push(match kind {
                    Kind::Inward => "Supplier is required".to_string(),
                    _ => "Customer is required".to_string(),
                });
            }
        }
        Kind::Returns => {
            if draft.reason.as_deref().map(str::trim).unwrap_or("").is_empty() {
                errors.push("Reason is required".to_string());
            }
        }
        Kind::Expiry => {
            if draft.action.is_none() {
                errors.push("Action is required".to_string());
            }
            match draft.expiry_date {
                None => errors.push("Expiry date is required".to_string()),
                Some(d) if d < today => {
                    errors.push("Expiry date must be in the future".to_string())
                }
                Some(_) => {}
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local};
    use seedstock_core::ExpiryAction;

    fn today() -> chrono::NaiveDate {
        Local::now().date_naive()
    }

    fn inward_draft() -> EntryDraft {
        EntryDraft {
            seed_name: Some("Wheat-A".into()),
            quantity: Some(50.0),
            date: Some(today()),
            party: Some("AgriCo".into()),
            ..Default::default()
        }
    }

    #[test]
    fn valid_inward_passes() {
        assert!(validate(Kind::Inward, &inward_draft()).is_empty());
    }

    #[test]
    fn missing_fields_collected_together() {
        let errors = validate(Kind::Inward, &EntryDraft::default());
        assert!(errors.contains(&"Seed name is required".to_string()));
        assert!(errors.contains(&"Quantity must be a number".to_string()));
        assert!(errors.contains(&"Date is required".to_string()));
        assert!(errors.contains(&"Supplier is required".to_string()));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn quantity_bounds() {
        let mut draft = inward_draft();
        draft.quantity = Some(0.0);
        assert_eq!(validate(Kind::Inward, &draft), vec!["Quantity must be greater than 0"]);

        draft.quantity = Some(-3.0);
        assert_eq!(validate(Kind::Inward, &draft), vec!["Quantity must be greater than 0"]);

        draft.quantity = Some(10_000.0);
        assert!(validate(Kind::Inward, &draft).is_empty());

        draft.quantity = Some(10_000.5);
        assert_eq!(validate(Kind::Inward, &draft), vec!["Quantity must be less than 10,000 kg"]);
    }

    #[test]
    fn future_date_rejected() {
        let mut draft = inward_draft();
        draft.date = Some(today() + Duration::days(1));
        assert_eq!(validate(Kind::Inward, &draft), vec!["Date cannot be in the future"]);
    }

    #[test]
    fn seed_name_length_capped() {
        let mut draft = inward_draft();
        draft.seed_name = Some("x".repeat(101));
        assert_eq!(
            validate(Kind::Inward, &draft),
            vec!["Seed name must be less than 100 characters"]
        );
        draft.seed_name = Some("x".repeat(100));
        assert!(validate(Kind::Inward, &draft).is_empty());
    }

    #[test]
    fn returns_require_reason() {
        let mut draft = inward_draft();
        draft.party = None;
        assert_eq!(validate(Kind::Returns, &draft), vec!["Reason is required"]);
        draft.reason = Some("damaged".into());
        assert!(validate(Kind::Returns, &draft).is_empty());
    }

    #[test]
    fn expiry_requires_future_expiry_date() {
        let mut draft = inward_draft();
        draft.party = None;
        draft.action = Some(ExpiryAction::Used);
        draft.expiry_date = Some(today() - Duration::days(1));
        assert_eq!(
            validate(Kind::Expiry, &draft),
            vec!["Expiry date must be in the future"]
        );
        draft.expiry_date = Some(today() + Duration::days(30));
        assert!(validate(Kind::Expiry, &draft).is_empty());
    }
}
