pub mod content_client;
pub mod orcid_client;

pub use content_client::ContentClient;
pub use orcid_client::OrcidClient;
