pub mod entries;
pub mod schema;

use std::sync::Arc;

use seedstock_core::ServiceError;
use seedstock_sql::SQLStore;

/// Inventory service — stateless request logic over the SQL store.
/// One parameterized statement per call; no cross-statement transaction.
pub struct InventoryService {
    pub(crate) sql: Arc<dyn SQLStore>,
}

impl InventoryService {
    pub fn new(sql: Arc<dyn SQLStore>) -> Result<Self, ServiceError> {
        schema::init_schema(sql.as_ref())?;
        Ok(Self { sql })
    }
}
