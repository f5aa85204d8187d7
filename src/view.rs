//! Shared list-view logic: filtering, sorting, and pagination.
//!
//! Every tab presents its records through the same pipeline: filter by
//! category, sort by the active key, slice into pages. The helpers here are
//! stateless; `PageState` holds the one piece of state the pipeline needs.

use chrono::NaiveDate;
use std::cmp::Ordering;

/// Category filter for a record list.
///
/// `All` is the sentinel that lets every record through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No filtering
    All,
    /// Only records with this exact category
    Only(String),
}

impl CategoryFilter {
    /// Check whether a record category passes the filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }

    /// Display label for the filter bar.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category,
        }
    }
}

/// Sort key for a record list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// By record date (newest first)
    Date,
    /// By amount (highest first)
    Amount,
    /// By title (alphabetical)
    Title,
    /// Unread records before read ones (stable partition)
    Unread,
}

impl SortKey {
    /// Display name for the filter bar.
    pub fn name(&self) -> &'static str {
        match self {
            SortKey::Date => "Date (newest)",
            SortKey::Amount => "Amount (highest)",
            SortKey::Title => "Title (A-Z)",
            SortKey::Unread => "Unread first",
        }
    }
}

/// Value a record exposes for a given sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortValue {
    /// Calendar date
    Date(NaiveDate),
    /// Monetary amount in cents
    Amount(i64),
    /// Display text
    Text(String),
    /// Read flag (false sorts first, so unread leads)
    Flag(bool),
}

impl SortValue {
    /// Compare two sort values in display order.
    ///
    /// # Details
    /// Dates and amounts sort descending (newest/highest first), text sorts
    /// ascending. Mismatched variants compare equal, which leaves the input
    /// order untouched under a stable sort.
    fn display_cmp(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            (SortValue::Date(a), SortValue::Date(b)) => b.cmp(a),
            (SortValue::Amount(a), SortValue::Amount(b)) => b.cmp(a),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            (SortValue::Flag(a), SortValue::Flag(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// A record that can be shown in a filterable, sortable, paginated list.
pub trait Record {
    /// Stable unique identifier.
    fn id(&self) -> u64;

    /// Category string the filter matches against.
    fn category(&self) -> &str;

    /// Record date, used as the secondary sort tiebreaker.
    fn date(&self) -> NaiveDate;

    /// Value for a sort key, or `None` when the key does not apply to this
    /// record type (the sort is then a passthrough).
    fn sort_value(&self, key: SortKey) -> Option<SortValue>;
}

/// Filter a record collection by category.
///
/// # Returns
/// * `Vec<&T>` - References to the passing records, input order preserved
///
/// # Details
/// Never mutates the input. A record passes when the filter is `All` or its
/// category matches exactly.
pub fn filter_records<'a, T: Record>(items: &'a [T], filter: &CategoryFilter) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| filter.matches(item.category()))
        .collect()
}

/// Sort a filtered view in place by the given key.
///
/// # Details
/// Uses a stable sort. Ties on the primary key fall back to the record date
/// (newest first) so the output is deterministic and re-sorting is
/// idempotent. `Unread` is the exception: it is a pure stable partition so
/// the relative date order inside each group is preserved. Records that
/// report no value for the key are left in their current order.
pub fn sort_records<T: Record>(rows: &mut [&T], key: SortKey) {
    rows.sort_by(|a, b| {
        let (Some(va), Some(vb)) = (a.sort_value(key), b.sort_value(key)) else {
            return Ordering::Equal;
        };
        let primary = va.display_cmp(&vb);
        if key == SortKey::Unread {
            primary
        } else {
            primary.then_with(|| b.date().cmp(&a.date()))
        }
    });
}

/// Number of pages needed for `count` items.
///
/// # Details
/// Rounds up; an empty collection still has one (empty) page so the footer
/// always reads "Page 1 of 1".
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    count.div_ceil(page_size).max(1)
}

/// Slice one page out of an ordered sequence.
///
/// # Arguments
/// * `page` - 1-indexed page number
///
/// # Details
/// Returns the half-open window `[(page-1)*size, page*size)`. Does not
/// clamp: an out-of-range page yields an empty slice, and keeping the page
/// in range is the caller's job (see `PageState::clamp`).
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1) * page_size;
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Current page plus the transient jump-to-page input buffer.
///
/// Pages are 1-indexed. While the jump input is open, edits accumulate in a
/// separate string and the page only moves on commit; non-numeric input
/// reverts to the page that was current before editing began.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    current: usize,
    input: Option<String>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current: 1,
            input: None,
        }
    }
}

impl PageState {
    /// Current 1-indexed page number.
    pub fn current(&self) -> usize {
        self.current
    }

    /// The jump input buffer, if editing is in progress.
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    /// Open the jump-to-page input, seeded with the current page.
    pub fn begin_input(&mut self) {
        self.input = Some(self.current.to_string());
    }

    /// Append a character to the jump input. No-op when not editing.
    pub fn push_input(&mut self, ch: char) {
        if let Some(buffer) = self.input.as_mut() {
            buffer.push(ch);
        }
    }

    /// Remove the last character from the jump input.
    pub fn pop_input(&mut self) {
        if let Some(buffer) = self.input.as_mut() {
            buffer.pop();
        }
    }

    /// Commit the jump input.
    ///
    /// # Details
    /// Parses the buffer; a valid number is clamped to `[1, total]` and
    /// becomes the current page, anything else reverts to the prior page.
    /// The buffer is cleared either way.
    pub fn commit_input(&mut self, total: usize) {
        if let Some(buffer) = self.input.take()
            && let Ok(page) = buffer.trim().parse::<usize>()
        {
            self.current = page.clamp(1, total.max(1));
        }
    }

    /// Discard the jump input without moving the page.
    pub fn cancel_input(&mut self) {
        self.input = None;
    }

    /// Move to the next page, saturating at the last page.
    pub fn next(&mut self, total: usize) {
        if self.current < total {
            self.current += 1;
        }
    }

    /// Move to the previous page, saturating at page 1.
    pub fn prev(&mut self) {
        if self.current > 1 {
            self.current -= 1;
        }
    }

    /// Pull the current page back into `[1, total]`.
    ///
    /// # Details
    /// Called after the underlying collection shrinks (delete, filter
    /// change) so the view never sits on an empty trailing page.
    pub fn clamp(&mut self, total: usize) {
        self.current = self.current.clamp(1, total.max(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row {
        id: u64,
        category: &'static str,
        date: NaiveDate,
        amount: i64,
        read: bool,
    }

    fn row(id: u64, category: &'static str, day: u32, amount: i64, read: bool) -> Row {
        Row {
            id,
            category,
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            amount,
            read,
        }
    }

    impl Record for Row {
        fn id(&self) -> u64 {
            self.id
        }

        fn category(&self) -> &str {
            self.category
        }

        fn date(&self) -> NaiveDate {
            self.date
        }

        fn sort_value(&self, key: SortKey) -> Option<SortValue> {
            match key {
                SortKey::Date => Some(SortValue::Date(self.date)),
                SortKey::Amount => Some(SortValue::Amount(self.amount)),
                SortKey::Unread => Some(SortValue::Flag(self.read)),
                SortKey::Title => None,
            }
        }
    }

    fn sample() -> Vec<Row> {
        vec![
            row(1, "maintenance", 10, 500, false),
            row(2, "payment", 12, 120_000, true),
            row(3, "notice", 8, 0, false),
            row(4, "payment", 15, 80_000, false),
        ]
    }

    #[test]
    fn test_filter_all_passes_everything() {
        let rows = sample();
        let visible = filter_records(&rows, &CategoryFilter::All);
        assert_eq!(visible.len(), 4);
    }

    #[test]
    fn test_filter_only_matching_category() {
        let rows = sample();
        let filter = CategoryFilter::Only("payment".to_string());
        let visible = filter_records(&rows, &filter);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|r| r.category == "payment"));
    }

    #[test]
    fn test_filter_preserves_order_and_input() {
        let rows = sample();
        let visible = filter_records(&rows, &CategoryFilter::Only("payment".to_string()));
        let ids: Vec<u64> = visible.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 4]);
        // input untouched
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn test_sort_is_permutation_and_idempotent() {
        let rows = sample();
        let mut visible = filter_records(&rows, &CategoryFilter::All);
        sort_records(&mut visible, SortKey::Date);
        let mut ids: Vec<u64> = visible.iter().map(|r| r.id).collect();
        let mut expected: Vec<u64> = rows.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        expected.sort_unstable();
        assert_eq!(ids, expected);

        let first_pass: Vec<u64> = visible.iter().map(|r| r.id).collect();
        sort_records(&mut visible, SortKey::Date);
        let second_pass: Vec<u64> = visible.iter().map(|r| r.id).collect();
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn test_sort_date_newest_first() {
        let rows = sample();
        let mut visible = filter_records(&rows, &CategoryFilter::All);
        sort_records(&mut visible, SortKey::Date);
        let ids: Vec<u64> = visible.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 2, 1, 3]);
    }

    #[test]
    fn test_sort_amount_highest_first() {
        let rows = sample();
        let mut visible = filter_records(&rows, &CategoryFilter::All);
        sort_records(&mut visible, SortKey::Amount);
        let ids: Vec<u64> = visible.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_sort_unknown_key_is_passthrough() {
        let rows = sample();
        let mut visible = filter_records(&rows, &CategoryFilter::All);
        sort_records(&mut visible, SortKey::Title);
        let ids: Vec<u64> = visible.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_sort_unread_is_stable_partition() {
        // Date-ordered input; partition must keep that order inside groups.
        let rows = vec![
            row(1, "n", 20, 0, true),
            row(2, "n", 18, 0, false),
            row(3, "n", 16, 0, true),
            row(4, "n", 14, 0, false),
        ];
        let mut visible = filter_records(&rows, &CategoryFilter::All);
        sort_records(&mut visible, SortKey::Unread);
        let ids: Vec<u64> = visible.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn test_page_slice_window() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(page_slice(&items, 1, 10), &items[0..10]);
        assert_eq!(page_slice(&items, 3, 10), &items[20..25]);
    }

    #[test]
    fn test_page_slice_out_of_range_is_empty() {
        let items: Vec<u32> = (1..=5).collect();
        assert!(page_slice(&items, 0, 10).is_empty());
        assert!(page_slice(&items, 2, 10).is_empty());
        assert!(page_slice(&items, 99, 10).is_empty());
    }

    #[test]
    fn test_pagination_round_trip() {
        // Concatenating every page reconstructs the sequence exactly once.
        for page_size in 1..=7 {
            let items: Vec<u32> = (1..=23).collect();
            let mut rebuilt = Vec::new();
            for page in 1..=total_pages(items.len(), page_size) {
                rebuilt.extend_from_slice(page_slice(&items, page, page_size));
            }
            assert_eq!(rebuilt, items, "page_size {}", page_size);
        }
    }

    #[test]
    fn test_page_input_commit_valid() {
        let mut page = PageState::default();
        page.begin_input();
        page.pop_input();
        page.push_input('2');
        page.commit_input(3);
        assert_eq!(page.current(), 2);
        assert!(page.input().is_none());
    }

    #[test]
    fn test_page_input_commit_clamps_high() {
        let mut page = PageState::default();
        page.begin_input();
        page.pop_input();
        page.push_input('9');
        page.push_input('9');
        page.commit_input(3);
        assert_eq!(page.current(), 3);
    }

    #[test]
    fn test_page_input_non_numeric_reverts() {
        let mut page = PageState::default();
        page.next(3);
        page.begin_input();
        page.pop_input();
        for ch in "abc".chars() {
            page.push_input(ch);
        }
        page.commit_input(3);
        assert_eq!(page.current(), 2);
    }

    #[test]
    fn test_page_navigation_saturates() {
        let mut page = PageState::default();
        page.prev();
        assert_eq!(page.current(), 1);
        page.next(2);
        page.next(2);
        assert_eq!(page.current(), 2);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut page = PageState::default();
        page.next(5);
        page.next(5);
        assert_eq!(page.current(), 3);
        page.clamp(1);
        assert_eq!(page.current(), 1);
    }
}
