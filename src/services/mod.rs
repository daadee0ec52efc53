pub mod citation_service;
pub mod citation_writer;
pub mod index_writer;
pub mod roster_service;

pub use citation_service::{CitationService, Citations};
pub use citation_writer::CitationWriter;
pub use index_writer::IndexWriter;
pub use roster_service::RosterService;
