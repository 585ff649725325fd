// Filter -> sort -> paginate pipeline shared by every console listing.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use shared_models::listing::{Page, PageRequest, SortDirection};

/// Maximum number of page buttons rendered at once.
pub const PAGE_WINDOW_SIZE: usize = 5;

/// Records that take part in free-text search.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// Facet criteria for one record type. Unset facets match everything.
pub trait RecordFilter {
    type Record;

    fn matches(&self, record: &Self::Record) -> bool;
}

/// Enumerated sortable field of a record type, each variant mapped to a typed comparator.
pub trait SortKey: Copy + PartialEq {
    type Record;

    fn compare(&self, a: &Self::Record, b: &Self::Record) -> Ordering;

    /// Direction applied when the operator switches to a new key.
    fn default_direction() -> SortDirection;
}

pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

pub fn compare_number(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

/// Case-insensitive substring match against the record's searchable fields.
/// A blank query matches every record.
pub fn matches_search<T: Searchable>(record: &T, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Exact equality on optional text facets. Unset or empty means "all".
pub fn facet_matches(selected: Option<&str>, value: &str) -> bool {
    match selected {
        None | Some("") => true,
        Some(wanted) => wanted == value,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K: SortKey> SortSpec<K> {
    pub fn new(key: K, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn with_default_direction(key: K) -> Self {
        Self::new(key, K::default_direction())
    }

    /// Header click: the same key flips direction, a new key resets to the default.
    pub fn toggle(&mut self, key: K) {
        if self.key == key {
            self.direction = self.direction.flipped();
        } else {
            self.key = key;
            self.direction = K::default_direction();
        }
    }

    pub fn compare(&self, a: &K::Record, b: &K::Record) -> Ordering {
        let ordering = self.key.compare(a, b);
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery<F, K> {
    pub search: String,
    pub filter: F,
    pub sort: SortSpec<K>,
    pub page: PageRequest,
}

pub fn filter_records<'a, T, F>(records: &'a [T], search: &str, filter: &F) -> Vec<&'a T>
where
    T: Searchable,
    F: RecordFilter<Record = T>,
{
    records
        .iter()
        .filter(|record| matches_search(*record, search) && filter.matches(record))
        .collect()
}

/// Stable sort: records comparing equal keep their incoming order in both directions.
pub fn sort_records<T, K>(records: &mut [&T], sort: &SortSpec<K>)
where
    K: SortKey<Record = T>,
{
    records.sort_by(|a, b| sort.compare(a, b));
}

pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

/// Clamp a requested page into `[1, max(1, total_pages)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Up to [`PAGE_WINDOW_SIZE`] consecutive page numbers around `current`, clipped to the
/// valid range.
pub fn page_window(current: usize, total_pages: usize) -> Vec<usize> {
    if total_pages == 0 {
        return Vec::new();
    }
    if total_pages <= PAGE_WINDOW_SIZE {
        return (1..=total_pages).collect();
    }

    let half = PAGE_WINDOW_SIZE / 2;
    let current = clamp_page(current, total_pages);
    let start = if current <= half + 1 {
        1
    } else if current + half >= total_pages {
        total_pages + 1 - PAGE_WINDOW_SIZE
    } else {
        current - half
    };

    (start..start + PAGE_WINDOW_SIZE).collect()
}

pub fn paginate<T: Clone>(records: &[T], request: PageRequest) -> Page<T> {
    let page_size = request.page_size.max(1);
    let total_count = records.len();
    let pages = total_pages(total_count, page_size);
    let page = clamp_page(request.page, pages);

    let start = ((page - 1) * page_size).min(total_count);
    let end = (start + page_size).min(total_count);

    Page {
        items: records[start..end].to_vec(),
        total_count,
        page,
        page_size,
        total_pages: pages,
        page_window: page_window(page, pages),
    }
}

/// Runs the whole pipeline. Pure: the same records and query always give the same page.
pub fn apply_query<T, F, K>(records: &[T], query: &ListQuery<F, K>) -> Page<T>
where
    T: Searchable + Clone,
    F: RecordFilter<Record = T>,
    K: SortKey<Record = T>,
{
    let mut matched = filter_records(records, &query.search, &query.filter);
    sort_records(&mut matched, &query.sort);

    let sorted: Vec<T> = matched.into_iter().cloned().collect();
    let page = paginate(&sorted, query.page);
    debug!(
        matched = page.total_count,
        page = page.page,
        total_pages = page.total_pages,
        "Listing query applied"
    );
    page
}

/// Transient listing state behind one console table: search box, facet dropdowns,
/// sortable headers and page controls.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<F, K> {
    search: String,
    filter: F,
    sort: SortSpec<K>,
    page: PageRequest,
}

impl<F, K> ListView<F, K>
where
    F: Clone,
    K: SortKey,
{
    pub fn new(filter: F, sort_key: K, page_size: usize) -> Self {
        Self {
            search: String::new(),
            filter,
            sort: SortSpec::with_default_direction(sort_key),
            page: PageRequest::first(page_size.max(1)),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn sort(&self) -> SortSpec<K> {
        self.sort
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page.page = 1;
    }

    pub fn update_filter(&mut self, update: impl FnOnce(&mut F)) {
        update(&mut self.filter);
        self.page.page = 1;
    }

    pub fn sort_by(&mut self, key: K) {
        self.sort.toggle(key);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page = PageRequest::first(page_size.max(1));
    }

    pub fn go_to_page(&mut self, page: usize, total_count: usize) {
        let pages = total_pages(total_count, self.page.page_size);
        self.page.page = clamp_page(page, pages);
    }

    pub fn can_go_previous(&self) -> bool {
        self.page.page > 1
    }

    pub fn can_go_next(&self, total_count: usize) -> bool {
        self.page.page < total_pages(total_count, self.page.page_size)
    }

    pub fn previous_page(&mut self) {
        if self.can_go_previous() {
            self.page.page -= 1;
        }
    }

    pub fn next_page(&mut self, total_count: usize) {
        if self.can_go_next(total_count) {
            self.page.page += 1;
        }
    }

    pub fn query(&self) -> ListQuery<F, K> {
        ListQuery {
            search: self.search.clone(),
            filter: self.filter.clone(),
            sort: self.sort,
            page: self.page,
        }
    }

    pub fn apply<T>(&self, records: &[T]) -> Page<T>
    where
        T: Searchable + Clone,
        F: RecordFilter<Record = T>,
        K: SortKey<Record = T>,
    {
        apply_query(records, &self.query())
    }
}
