//! Entity structs for the store records this tool reads and destroys.
//!
//! Both entities are owned by the host application's content store. Nothing
//! here creates them; the purge workflow only resolves, counts and deletes.

mod log_record;
mod log_type;

pub use log_record::{LogId, LogMeta, LogRecord};
pub use log_type::LogTypeCategory;
