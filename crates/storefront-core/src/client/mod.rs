//! Storefront side of search: query documents, the HTTP search client,
//! debounced search-as-you-type and the static suggestion list.

mod query;
mod search;
mod session;
mod suggestions;

pub use query::{QueryDocument, SortBy, ALL_BRANDS, DEFAULT_PAGE_SIZE};
pub use search::{SearchBackend, SearchClient};
pub use session::{SearchSession, DEFAULT_DEBOUNCE};
pub use suggestions::{suggest, SEARCH_SUGGESTIONS};
