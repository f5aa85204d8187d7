//! Application state management.
//!
//! Owns the record collections, the per-tab filter/sort/page state, and the
//! UI mode. Derived views (filtered, sorted, paged) are recomputed on
//! demand for every render; nothing is cached across events.

use crate::bookmarks::Bookmarks;
use crate::portal::{Notice, Notification, Payment, Property, Rental};
use crate::view::{self, CategoryFilter, PageState, Record, SortKey};

/// Application state and UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Normal table view
    List,
    /// Category filter menu open (dropdown analogue)
    FilterMenu,
    /// Jump-to-page input active
    PageJump,
}

/// Dashboard tab, one per record collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// Property listings
    Properties,
    /// Tenant rentals
    Rentals,
    /// Broadcast notices
    Notices,
    /// Payment records
    Payments,
    /// Notification inbox
    Notifications,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 5] = [
        Tab::Properties,
        Tab::Rentals,
        Tab::Notices,
        Tab::Payments,
        Tab::Notifications,
    ];

    /// Tab header label.
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Properties => "Properties",
            Tab::Rentals => "Rentals",
            Tab::Notices => "Notices",
            Tab::Payments => "Payments",
            Tab::Notifications => "Notifications",
        }
    }

    /// Sort keys this tab's records support, in cycle order.
    fn sort_keys(&self) -> &'static [SortKey] {
        match self {
            Tab::Properties | Tab::Rentals | Tab::Payments => {
                &[SortKey::Date, SortKey::Amount, SortKey::Title]
            }
            Tab::Notices => &[SortKey::Date, SortKey::Title],
            Tab::Notifications => &[SortKey::Date, SortKey::Unread],
        }
    }
}

/// Filter, sort, pagination and selection state for one tab.
///
/// Owned per tab and deliberately not reset when the user switches away
/// and back; only an explicit filter change touches it.
#[derive(Debug, Clone)]
pub struct TabState {
    /// Active category filter
    pub filter: CategoryFilter,
    /// Active sort key
    pub sort: SortKey,
    /// Pagination state
    pub page: PageState,
    /// Selected row within the current page
    pub selected: usize,
}

impl Default for TabState {
    fn default() -> Self {
        Self {
            filter: CategoryFilter::All,
            sort: SortKey::Date,
            page: PageState::default(),
            selected: 0,
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// Property listings
    pub properties: Vec<Property>,
    /// Tenant rentals
    pub rentals: Vec<Rental>,
    /// Broadcast notices
    pub notices: Vec<Notice>,
    /// Payment records
    pub payments: Vec<Payment>,
    /// Notification inbox
    pub notifications: Vec<Notification>,
    /// Bookmarked property ids
    pub bookmarks: Bookmarks,
    /// Show only bookmarked properties
    pub bookmarked_only: bool,
    /// Per-tab view state, indexed in `Tab::ALL` order
    tab_states: [TabState; 5],
    /// Active tab
    active_tab: Tab,
    /// Current UI mode
    pub mode: UiMode,
    /// Highlighted entry in the open filter menu
    pub menu_index: usize,
    /// Status message to display
    pub status_message: Option<String>,
    /// Whether the last fetch failed (drives the retry hint)
    pub load_error: bool,
    /// Rows per page
    pub page_size: usize,
}

impl App {
    /// Create a new application state.
    pub fn new(bookmarks: Bookmarks, page_size: usize) -> Self {
        Self {
            properties: Vec::new(),
            rentals: Vec::new(),
            notices: Vec::new(),
            payments: Vec::new(),
            notifications: Vec::new(),
            bookmarks,
            bookmarked_only: false,
            tab_states: std::array::from_fn(|_| TabState::default()),
            active_tab: Tab::Properties,
            mode: UiMode::List,
            menu_index: 0,
            status_message: None,
            load_error: false,
            page_size: page_size.max(1),
        }
    }

    /// The currently active tab.
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// View state of the active tab.
    pub fn tab_state(&self) -> &TabState {
        &self.tab_states[self.tab_index()]
    }

    fn tab_state_mut(&mut self) -> &mut TabState {
        let index = self.tab_index();
        &mut self.tab_states[index]
    }

    fn tab_index(&self) -> usize {
        Tab::ALL
            .iter()
            .position(|t| *t == self.active_tab)
            .unwrap_or(0)
    }

    /// Switch to a tab. Its filter/sort/page state is kept as left.
    pub fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.mode = UiMode::List;
    }

    /// Switch to the next tab in display order, wrapping.
    pub fn next_tab(&mut self) {
        let next = (self.tab_index() + 1) % Tab::ALL.len();
        self.switch_tab(Tab::ALL[next]);
    }

    /// Set status message.
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    // --- derived views -----------------------------------------------------

    fn visible<'a, T: Record>(&self, items: &'a [T], extra: impl Fn(&T) -> bool) -> Vec<&'a T> {
        let state = self.tab_state();
        let mut rows = view::filter_records(items, &state.filter);
        rows.retain(|item| extra(item));
        view::sort_records(&mut rows, state.sort);
        rows
    }

    /// Filtered and sorted property rows (all pages).
    pub fn visible_properties(&self) -> Vec<&Property> {
        self.visible(&self.properties, |p| {
            !self.bookmarked_only || self.bookmarks.contains(p.id)
        })
    }

    /// Filtered and sorted rental rows (all pages).
    pub fn visible_rentals(&self) -> Vec<&Rental> {
        self.visible(&self.rentals, |_| true)
    }

    /// Filtered and sorted notice rows (all pages).
    pub fn visible_notices(&self) -> Vec<&Notice> {
        self.visible(&self.notices, |_| true)
    }

    /// Filtered and sorted payment rows (all pages).
    pub fn visible_payments(&self) -> Vec<&Payment> {
        self.visible(&self.payments, |_| true)
    }

    /// Filtered and sorted notification rows (all pages).
    pub fn visible_notifications(&self) -> Vec<&Notification> {
        self.visible(&self.notifications, |_| true)
    }

    /// Ids of the active tab's filtered/sorted rows, in display order.
    pub fn visible_ids(&self) -> Vec<u64> {
        match self.active_tab {
            Tab::Properties => self.visible_properties().iter().map(|r| r.id).collect(),
            Tab::Rentals => self.visible_rentals().iter().map(|r| r.id).collect(),
            Tab::Notices => self.visible_notices().iter().map(|r| r.id).collect(),
            Tab::Payments => self.visible_payments().iter().map(|r| r.id).collect(),
            Tab::Notifications => self.visible_notifications().iter().map(|r| r.id).collect(),
        }
    }

    /// Row count of the active tab after filtering.
    pub fn row_count(&self) -> usize {
        self.visible_ids().len()
    }

    /// Total record count of the active tab before filtering.
    pub fn total_count(&self) -> usize {
        match self.active_tab {
            Tab::Properties => self.properties.len(),
            Tab::Rentals => self.rentals.len(),
            Tab::Notices => self.notices.len(),
            Tab::Payments => self.payments.len(),
            Tab::Notifications => self.notifications.len(),
        }
    }

    /// Page count of the active tab.
    pub fn total_pages(&self) -> usize {
        view::total_pages(self.row_count(), self.page_size)
    }

    /// Number of rows on the current page of the active tab.
    pub fn page_len(&self) -> usize {
        let ids = self.visible_ids();
        view::page_slice(&ids, self.tab_state().page.current(), self.page_size).len()
    }

    /// Id of the selected record, if the page has any rows.
    pub fn selected_id(&self) -> Option<u64> {
        let ids = self.visible_ids();
        let state = self.tab_state();
        view::page_slice(&ids, state.page.current(), self.page_size)
            .get(state.selected)
            .copied()
    }

    // --- selection & paging ------------------------------------------------

    /// Move selection up within the current page, wrapping.
    pub fn move_up(&mut self) {
        let len = self.page_len();
        if len == 0 {
            return;
        }
        let state = self.tab_state_mut();
        state.selected = if state.selected == 0 {
            len - 1
        } else {
            state.selected - 1
        };
    }

    /// Move selection down within the current page, wrapping.
    pub fn move_down(&mut self) {
        let len = self.page_len();
        if len == 0 {
            return;
        }
        let state = self.tab_state_mut();
        state.selected = (state.selected + 1) % len;
    }

    /// Select a row on the current page directly (mouse click).
    pub fn select_row(&mut self, index: usize) {
        let len = self.page_len();
        if index < len {
            self.tab_state_mut().selected = index;
        }
    }

    /// Go to the next page.
    pub fn next_page(&mut self) {
        let total = self.total_pages();
        let state = self.tab_state_mut();
        state.page.next(total);
        state.selected = 0;
    }

    /// Go to the previous page.
    pub fn prev_page(&mut self) {
        let state = self.tab_state_mut();
        state.page.prev();
        state.selected = 0;
    }

    /// Open the jump-to-page input.
    pub fn begin_page_jump(&mut self) {
        self.mode = UiMode::PageJump;
        self.tab_state_mut().page.begin_input();
    }

    /// Append a character to the jump input.
    pub fn push_page_input(&mut self, ch: char) {
        self.tab_state_mut().page.push_input(ch);
    }

    /// Delete the last character of the jump input.
    pub fn pop_page_input(&mut self) {
        self.tab_state_mut().page.pop_input();
    }

    /// Commit the jump input (the blur event of the text control).
    pub fn commit_page_jump(&mut self) {
        let total = self.total_pages();
        let state = self.tab_state_mut();
        state.page.commit_input(total);
        state.selected = 0;
        self.mode = UiMode::List;
    }

    /// Abandon the jump input without moving the page.
    pub fn cancel_page_jump(&mut self) {
        self.tab_state_mut().page.cancel_input();
        self.mode = UiMode::List;
    }

    /// Clamp the current page and selection after the row set changed.
    fn clamp_view(&mut self) {
        let total = self.total_pages();
        self.tab_state_mut().page.clamp(total);
        let len = self.page_len();
        let state = self.tab_state_mut();
        state.selected = state.selected.min(len.saturating_sub(1));
    }

    /// Clamp page and selection on every tab.
    ///
    /// # Details
    /// A reload replaces the collections wholesale and can shrink any of
    /// them, including ones behind inactive tabs, so each tab's view is
    /// pulled back in range.
    pub fn clamp_all_views(&mut self) {
        let active = self.active_tab;
        for tab in Tab::ALL {
            self.active_tab = tab;
            self.clamp_view();
        }
        self.active_tab = active;
    }

    // --- filtering & sorting -----------------------------------------------

    /// Filter menu entries for the active tab: the "all" sentinel followed
    /// by the distinct categories present in the collection.
    pub fn filter_options(&self) -> Vec<String> {
        let mut categories: Vec<String> = match self.active_tab {
            Tab::Properties => self.properties.iter().map(|r| r.kind.clone()).collect(),
            Tab::Rentals => self.rentals.iter().map(|r| r.status.clone()).collect(),
            Tab::Notices => self.notices.iter().map(|r| r.kind.clone()).collect(),
            Tab::Payments => self.payments.iter().map(|r| r.status.clone()).collect(),
            Tab::Notifications => self.notifications.iter().map(|r| r.kind.clone()).collect(),
        };
        categories.sort();
        categories.dedup();
        let mut options = vec!["all".to_string()];
        options.extend(categories);
        options
    }

    /// Open the filter menu with the current filter highlighted.
    pub fn open_filter_menu(&mut self) {
        let options = self.filter_options();
        let current = self.tab_state().filter.label().to_string();
        self.menu_index = options.iter().position(|o| *o == current).unwrap_or(0);
        self.mode = UiMode::FilterMenu;
    }

    /// Move the filter menu highlight up.
    pub fn menu_up(&mut self) {
        let len = self.filter_options().len();
        if len > 0 {
            self.menu_index = self.menu_index.checked_sub(1).unwrap_or(len - 1);
        }
    }

    /// Move the filter menu highlight down.
    pub fn menu_down(&mut self) {
        let len = self.filter_options().len();
        if len > 0 {
            self.menu_index = (self.menu_index + 1) % len;
        }
    }

    /// Apply the highlighted filter menu entry and close the menu.
    pub fn apply_menu_selection(&mut self) {
        let options = self.filter_options();
        if let Some(choice) = options.get(self.menu_index) {
            self.tab_state_mut().filter = if choice == "all" {
                CategoryFilter::All
            } else {
                CategoryFilter::Only(choice.clone())
            };
        }
        self.mode = UiMode::List;
        self.clamp_view();
    }

    /// Close the filter menu without changing the filter.
    pub fn dismiss_filter_menu(&mut self) {
        self.mode = UiMode::List;
    }

    /// Cycle to the next sort key the active tab supports.
    pub fn cycle_sort(&mut self) {
        let keys = self.active_tab.sort_keys();
        let current = self.tab_state().sort;
        let pos = keys.iter().position(|k| *k == current).unwrap_or(0);
        let next = keys[(pos + 1) % keys.len()];
        self.tab_state_mut().sort = next;
        self.set_status(format!("Sort: {}", next.name()));
    }

    // --- row actions -------------------------------------------------------

    /// Mark the selected notification read.
    ///
    /// # Details
    /// Only meaningful on the Notifications tab. The transition is one-way
    /// and touches a single record.
    pub fn mark_selected_read(&mut self) {
        if self.active_tab != Tab::Notifications {
            return;
        }
        if let Some(id) = self.selected_id() {
            Notification::mark_read(&mut self.notifications, id);
        }
    }

    /// Count of unread notifications, for the tab badge.
    pub fn unread_count(&self) -> usize {
        Notification::unread_count(&self.notifications)
    }

    /// Toggle the bookmark on the selected property.
    ///
    /// # Returns
    /// * `Option<(u64, bool)>` - The id and whether it is now bookmarked,
    ///   or None when not on the Properties tab or the page is empty
    pub fn toggle_selected_bookmark(&mut self) -> Option<(u64, bool)> {
        if self.active_tab != Tab::Properties {
            return None;
        }
        let id = self.selected_id()?;
        let added = self.bookmarks.toggle(id);
        self.clamp_view();
        Some((id, added))
    }

    /// Toggle the bookmarked-only view of the Properties tab.
    pub fn toggle_bookmarked_only(&mut self) {
        self.bookmarked_only = !self.bookmarked_only;
        self.clamp_view();
    }

    /// Remove the selected record from its collection (client-side).
    ///
    /// # Details
    /// Shrinking the row set can strand the view past the last page, so the
    /// page is clamped afterwards.
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        match self.active_tab {
            Tab::Properties => self.properties.retain(|r| r.id != id),
            Tab::Rentals => self.rentals.retain(|r| r.id != id),
            Tab::Notices => self.notices.retain(|r| r.id != id),
            Tab::Payments => self.payments.retain(|r| r.id != id),
            Tab::Notifications => self.notifications.retain(|r| r.id != id),
        }
        self.clamp_view();
    }
}
