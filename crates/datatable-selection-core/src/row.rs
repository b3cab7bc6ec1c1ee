/// A data record as shown by a table page.
///
/// `initial_index` is the record's position in the unfiltered, unsorted, unpaginated source
/// collection. It stays the same when the row moves between pages, which makes it the stable
/// handle the selection engine uses for its anchor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataTableRow<T> {
    pub initial_index: usize,
    pub source: T,
}

impl<T> DataTableRow<T> {
    pub fn new(initial_index: usize, source: T) -> Self {
        Self {
            initial_index,
            source,
        }
    }

    /// Annotates each item with its position in `items`.
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Vec<Self> {
        items
            .into_iter()
            .enumerate()
            .map(|(i, source)| Self::new(i, source))
            .collect()
    }
}

/// Returns the rows shown on `current_page` (1-based) when showing `per_page` rows per page.
///
/// `per_page == 0` disables pagination. Pages past the end are empty.
pub fn paginate<T>(
    rows: &[DataTableRow<T>],
    per_page: usize,
    current_page: usize,
) -> &[DataTableRow<T>] {
    if per_page == 0 {
        return rows;
    }
    let start = current_page.saturating_sub(1).saturating_mul(per_page);
    if start >= rows.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(rows.len());
    &rows[start..end]
}
