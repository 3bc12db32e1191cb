//! Record fetching from the MongoDB store.
//!
//! The store is an external collaborator: a simple key-based fetch plus the
//! one date-range query the expiry alert needs. All the rendering logic is
//! upstream of this module and never touches the database.

mod mongo;

pub use mongo::*;

use crate::core::{CotizaError, Record, RecordType};

/// Key-based record lookup. `Ok(None)` means the id has no matching record;
/// callers must fail fast on that rather than render a blank document.
pub trait RecordStore {
    fn fetch(&self, record_type: RecordType, id: &str) -> Result<Option<Record>, CotizaError>;
}

/// Display fields of a quote expiring today, as the alert mail needs them.
#[derive(Debug, Clone)]
pub struct ExpiringQuote {
    /// Store object id, used to build the detail link.
    pub id: String,
    /// Quote number shown to the client.
    pub number: String,
    pub client_names: String,
    pub client_last_names: String,
}

impl ExpiringQuote {
    pub fn client_full_name(&self) -> String {
        format!("{} {}", self.client_names, self.client_last_names)
    }
}
