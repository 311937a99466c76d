use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("Monitored entry {entry_id} not found")]
    EntryNotFound { entry_id: i64 },
}
