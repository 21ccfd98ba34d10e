pub mod entry;
pub mod failure;
pub mod scan_level;
pub mod technique;

pub use entry::ReportEntry;
pub use failure::{EntryFailure, FailureCode};
pub use scan_level::ScanLevel;
pub use technique::TechniqueDef;
