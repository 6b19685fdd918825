use seedstock_core::{
    Entry, EntryDraft, Kind, PageParams, Pagination, ServiceError, new_id, now_rfc3339,
};
use seedstock_sql::Value;

use super::InventoryService;

/// Full-table report, keyed by kind.
#[derive(Debug)]
pub struct Report {
    pub inward: Vec<Entry>,
    pub outward: Vec<Entry>,
    pub returns: Vec<Entry>,
    pub expiry: Vec<Entry>,
}

impl InventoryService {
    /// Insert one row with a server-assigned id and timestamp and return
    /// the stored entry. Required fields missing from the draft bind as
    /// NULL and fail the column constraint — by contract there is no
    /// richer server-side validation.
    pub fn create(&self, kind: Kind, draft: EntryDraft) -> Result<Entry, ServiceError> {
        // Bind the required columns from the raw draft so an omitted field
        // arrives as NULL (materializing first would paper over it with a
        // default).
        let seed_name = Value::opt_text(draft.seed_name.as_deref());
        let quantity = Value::opt_real(draft.quantity);
        let date = Value::opt_text(draft.date.map(|d| d.to_string()).as_deref());
        let kind_fields = match kind {
            Kind::Inward | Kind::Outward => vec![Value::opt_text(draft.party.as_deref())],
            Kind::Returns => vec![Value::opt_text(draft.reason.as_deref())],
            Kind::Expiry => vec![
                Value::opt_text(draft.expiry_date.map(|d| d.to_string()).as_deref()),
                Value::opt_text(draft.action.map(|a| a.as_str())),
            ],
        };

        let entry = draft.into_entry(new_id(), now_rfc3339());
        let data = serde_json::to_string(&entry)
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        let sql = match kind {
            Kind::Inward | Kind::Outward => format!(
                "INSERT INTO {} (id, data, seed_name, quantity, party, date, notes, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                kind.as_str()
            ),
            Kind::Returns => "INSERT INTO returns (id, data, seed_name, quantity, reason, date, notes, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"
                .to_string(),
            Kind::Expiry => "INSERT INTO expiry (id, data, seed_name, quantity, expiry_date, action, date, notes, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"
                .to_string(),
        };
        let params: Vec<Value> = [Value::Text(entry.id.clone()), Value::Text(data), seed_name, quantity]
            .into_iter()
            .chain(kind_fields)
            .chain([
                date,
                Value::opt_text(entry.notes.as_deref()),
                Value::opt_text(entry.created_at.as_deref()),
            ])
            .collect();

        self.sql
            .exec(&sql, &params)
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        Ok(entry)
    }

    /// All entries of a kind, newest first.
    pub fn list(&self, kind: Kind) -> Result<Vec<Entry>, ServiceError> {
        let sql = format!(
            "SELECT data FROM {} ORDER BY created_at DESC",
            kind.as_str()
        );
        let rows = self
            .sql
            .query(&sql, &[])
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        rows.iter().map(decode_row).collect()
    }

    /// One page of entries plus a pagination envelope. The count runs as a
    /// second, separate query; a concurrent insert between the two can make
    /// `totalPages` and the page inconsistent (accepted, see DESIGN.md).
    pub fn list_paged(
        &self,
        kind: Kind,
        params: &PageParams,
    ) -> Result<(Vec<Entry>, Pagination), ServiceError> {
        let sql = format!(
            "SELECT data FROM {} ORDER BY created_at DESC LIMIT ?1 OFFSET ?2",
            kind.as_str()
        );
        let rows = self
            .sql
            .query(
                &sql,
                &[
                    Value::Integer(params.limit as i64),
                    Value::Integer(params.offset() as i64),
                ],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        let entries: Vec<Entry> = rows.iter().map(decode_row).collect::<Result<_, _>>()?;

        let count_sql = format!("SELECT COUNT(*) AS cnt FROM {}", kind.as_str());
        let count_rows = self
            .sql
            .query(&count_sql, &[])
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        let total = count_rows
            .first()
            .and_then(|r| r.get_i64("cnt"))
            .unwrap_or(0) as usize;

        Ok((entries, Pagination::new(total, params)))
    }

    /// Delete by primary key. Zero rows affected means not-found.
    pub fn delete(&self, kind: Kind, id: &str) -> Result<(), ServiceError> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", kind.as_str());
        let affected = self
            .sql
            .exec(&sql, &[Value::Text(id.to_string())])
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        if affected == 0 {
            return Err(ServiceError::NotFound(format!(
                "{}/{}",
                kind.as_str(),
                id
            )));
        }
        Ok(())
    }

    /// Full-table read of every kind. Unbounded by contract: the whole
    /// table is always returned. The four reads are independent, so they
    /// run on separate blocking threads.
    pub async fn report(self: std::sync::Arc<Self>) -> Result<Report, ServiceError> {
        fn fetch(
            svc: &std::sync::Arc<InventoryService>,
            kind: Kind,
        ) -> tokio::task::JoinHandle<Result<Vec<Entry>, ServiceError>> {
            let svc = std::sync::Arc::clone(svc);
            tokio::task::spawn_blocking(move || svc.list(kind))
        }

        let (inward, outward, returns, expiry) = tokio::try_join!(
            fetch(&self, Kind::Inward),
            fetch(&self, Kind::Outward),
            fetch(&self, Kind::Returns),
            fetch(&self, Kind::Expiry),
        )
        .map_err(|e| ServiceError::Internal(e.to_string()))?;

        Ok(Report {
            inward: inward?,
            outward: outward?,
            returns: returns?,
            expiry: expiry?,
        })
    }
}

fn decode_row(row: &seedstock_sql::Row) -> Result<Entry, ServiceError> {
    let data = row
        .get_str("data")
        .ok_or_else(|| ServiceError::Internal("missing data column".into()))?;
    serde_json::from_str(data).map_err(|e| ServiceError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::NaiveDate;
    use seedstock_sql::SqliteStore;

    fn service() -> InventoryService {
        let sql = Arc::new(SqliteStore::open_in_memory().unwrap());
        InventoryService::new(sql).unwrap()
    }

    fn draft(seed: &str, qty: f64, party: Option<&str>) -> EntryDraft {
        EntryDraft {
            seed_name: Some(seed.into()),
            quantity: Some(qty),
            date: Some(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()),
            party: party.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn create_assigns_id_and_timestamp() {
        let svc = service();
        let entry = svc
            .create(Kind::Inward, draft("Wheat-A", 50.0, Some("AgriCo")))
            .unwrap();
        assert_eq!(entry.id.len(), 32);
        assert!(entry.created_at.is_some());
    }

    #[test]
    fn create_without_required_field_is_a_storage_error() {
        let svc = service();
        // party is NOT NULL for inward; absent field surfaces as the
        // database error, not a domain error.
        let err = svc.create(Kind::Inward, draft("Wheat-A", 50.0, None)).unwrap_err();
        assert!(matches!(err, ServiceError::Storage(_)));
        assert!(svc.list(Kind::Inward).unwrap().is_empty());
    }

    #[test]
    fn list_is_newest_first() {
        let svc = service();
        // created_at carries sub-second precision; the sleep keeps the two
        // timestamps distinct.
        svc.create(Kind::Inward, draft("First", 10.0, Some("A"))).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        svc.create(Kind::Inward, draft("Wheat-A", 50.0, Some("B"))).unwrap();

        let entries = svc.list(Kind::Inward).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].seed_name, "Wheat-A");
    }

    #[test]
    fn delete_then_delete_again_reports_not_found() {
        let svc = service();
        let entry = svc
            .create(Kind::Outward, draft("Wheat", 5.0, Some("Mills")))
            .unwrap();

        svc.delete(Kind::Outward, &entry.id).unwrap();
        let err = svc.delete(Kind::Outward, &entry.id).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn delete_unknown_id_not_found() {
        let svc = service();
        assert!(matches!(
            svc.delete(Kind::Expiry, "missing"),
            Err(ServiceError::NotFound(_))
        ));
    }

    #[test]
    fn pagination_math() {
        let svc = service();
        for i in 0..13 {
            svc.create(Kind::Inward, draft(&format!("Seed-{i}"), 1.0, Some("A")))
                .unwrap();
        }
        let params = PageParams { page: 2, limit: 5 };
        let (page, pagination) = svc.list_paged(Kind::Inward, &params).unwrap();
        assert_eq!(page.len(), 5);
        assert_eq!(pagination.total, 13);
        assert_eq!(pagination.total_pages, 3);
        assert_eq!(pagination.page, 2);
    }

    #[test]
    fn kinds_are_independent_tables() {
        let svc = service();
        let entry = svc
            .create(Kind::Inward, draft("Wheat", 5.0, Some("A")))
            .unwrap();
        assert!(svc.list(Kind::Outward).unwrap().is_empty());
        assert!(matches!(
            svc.delete(Kind::Outward, &entry.id),
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn report_returns_all_four_tables() {
        let svc = Arc::new(service());
        svc.create(Kind::Inward, draft("Wheat", 5.0, Some("A"))).unwrap();
        let mut ret = draft("Corn", 2.0, None);
        ret.reason = Some("damaged".into());
        svc.create(Kind::Returns, ret).unwrap();

        let report = svc.report().await.unwrap();
        assert_eq!(report.inward.len(), 1);
        assert_eq!(report.returns.len(), 1);
        assert!(report.outward.is_empty());
        assert!(report.expiry.is_empty());
    }
}
