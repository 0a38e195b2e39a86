pub mod config;
pub mod error;
pub mod logging;
pub mod providers;
pub mod store;
pub mod url_resolver;

pub use error::{LookupError, NotFoundError, NotFoundReason};
pub use providers::{FolderProvider, UrlProvider};
pub use store::StoreLocations;
pub use url_resolver::UrlResolver;
