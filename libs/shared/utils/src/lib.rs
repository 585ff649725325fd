pub mod confirmation;
pub mod listing;
pub mod selection;
pub mod test_utils;

pub use confirmation::Confirmation;
pub use listing::{
    apply_query, compare_number, compare_text, facet_matches, matches_search, page_window,
    paginate, total_pages, ListQuery, ListView, RecordFilter, Searchable, SortKey, SortSpec,
};
pub use selection::Selection;
