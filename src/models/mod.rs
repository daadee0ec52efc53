pub mod content;
pub mod front_matter;
pub mod orcid;
pub mod student;

pub use content::ContentEntry;
pub use front_matter::FrontMatter;
pub use orcid::{Citation, WorkDetail, WorkGroup, WorkSummary, WorksResponse, BIBTEX_CITATION_TYPE};
pub use student::{derive_slug, StudentRecord};
