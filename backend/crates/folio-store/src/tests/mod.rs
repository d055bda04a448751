
use folio_core::ProjectRecord;

pub(crate) fn record(name: &str) -> ProjectRecord {
    ProjectRecord::new(name.to_string(), format!("{name} description"), None)
}
