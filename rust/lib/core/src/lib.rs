pub mod auth;
pub mod error;
pub mod module;
pub mod record;
pub mod types;

pub use auth::{AllowAll, Authenticator, DenyAll, StaticCredentials, password_meets_policy};
pub use error::ServiceError;
pub use module::Module;
pub use record::{Entry, EntryDraft, ExpiryAction, Kind};
pub use types::{PageParams, Pagination, new_id, now_rfc3339};
