//! List-view controller: query state, fetch sequencing, and the
//! page-local result cache behind every management screen.
//!
//! The controller is detached from I/O. Intents ([`ListState::set_page`],
//! [`ListState::apply_filters`], ...) mutate the committed query and hand
//! back a [`FetchTicket`]; the caller performs the request and feeds the
//! outcome into [`ListState::settle_ok`] / [`ListState::settle_err`].
//! Each ticket carries a monotonically increasing sequence number and a
//! settlement is applied only when its ticket is the most recent one, so
//! the cache always reflects the last-dispatched query no matter the
//! order responses arrive in.

use std::collections::BTreeMap;

use crate::envelope::ListPage;

/// Declared query shape of one screen: page size plus the filter keys it
/// understands and their default values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    /// Rows requested per page.
    pub page_size: u32,
    /// Filter keys with their defaults; [`ListState::clear_filters`]
    /// restores exactly these.
    pub filter_defaults: Vec<(&'static str, &'static str)>,
}

impl ListConfig {
    /// Config with the given page size and no filters.
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            filter_defaults: Vec::new(),
        }
    }

    /// Declares a filter key with its default value.
    pub fn with_filter(mut self, key: &'static str, default: &'static str) -> Self {
        self.filter_defaults.push((key, default));
        self
    }

    fn default_filters(&self) -> BTreeMap<String, String> {
        self.filter_defaults
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }
}

/// Committed query parameters for one list fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based page index.
    pub page: u32,
    /// Rows per page.
    pub page_size: u32,
    /// Live search term; empty means unsearched.
    pub search: String,
    /// Committed filter values keyed by the screen's filter vocabulary.
    pub filters: BTreeMap<String, String>,
}

impl ListQuery {
    fn from_config(config: &ListConfig) -> Self {
        Self {
            page: 1,
            page_size: config.page_size,
            search: String::new(),
            filters: config.default_filters(),
        }
    }

    /// Committed value for a filter key, empty when absent.
    pub fn filter(&self, key: &str) -> &str {
        self.filters.get(key).map(String::as_str).unwrap_or("")
    }

    /// Renders the query string for the list endpoint.
    ///
    /// `page` and `limit` are always present; search and filter values
    /// are percent-encoded and omitted while empty.
    pub fn to_query_string(&self) -> String {
        let mut params = vec![
            format!("page={}", self.page),
            format!("limit={}", self.page_size),
        ];
        if !self.search.is_empty() {
            params.push(format!("search={}", urlencoding::encode(&self.search)));
        }
        for (key, value) in &self.filters {
            if !value.is_empty() {
                params.push(format!("{}={}", key, urlencoding::encode(value)));
            }
        }
        params.join("&")
    }
}

/// Lifecycle of the most recently dispatched fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    /// Nothing dispatched yet.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The latest fetch settled with rows (possibly zero).
    Loaded,
    /// The latest fetch settled with a failure.
    Error,
}

/// What the view should render for the current cache.
///
/// The three non-failure states are mutually exclusive with each other
/// and with [`DisplayState::Failed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    /// Skeleton rows while a fetch is in flight.
    Loading,
    /// The latest fetch succeeded with zero rows.
    Empty,
    /// Rows are available.
    Populated,
    /// The latest fetch failed.
    Failed,
}

/// Token for one dispatched fetch; settlement must present it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    /// Sequence number, unique and increasing per controller instance.
    pub seq: u64,
    /// Snapshot of the query to execute.
    pub query: ListQuery,
}

/// Owned render view of a [`ListState`], handed to the view layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSnapshot<R> {
    /// Display state the view must branch on.
    pub display: DisplayState,
    /// Rows of the last applied successful fetch.
    pub items: Vec<R>,
    /// Committed 1-based page.
    pub page: u32,
    /// Rows per page.
    pub page_size: u32,
    /// Page count, at least 1.
    pub total_pages: u32,
    /// Total matching rows reported by the server.
    pub total_items: u64,
    /// Committed search term.
    pub search: String,
    /// Committed filter values.
    pub filters: BTreeMap<String, String>,
    /// Staged (not yet applied) filter values backing the filter inputs.
    pub staged: BTreeMap<String, String>,
}

impl<R> ListSnapshot<R> {
    /// Staged value for a filter key, empty when absent.
    pub fn staged_value(&self, key: &str) -> &str {
        self.staged.get(key).map(String::as_str).unwrap_or("")
    }

    /// Committed value for a filter key, empty when absent.
    pub fn filter_value(&self, key: &str) -> &str {
        self.filters.get(key).map(String::as_str).unwrap_or("")
    }
}

/// State machine behind one list screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<R> {
    config: ListConfig,
    query: ListQuery,
    staged: BTreeMap<String, String>,
    phase: ListPhase,
    items: Vec<R>,
    total_items: u64,
    total_pages: u32,
    seq: u64,
}

impl<R> ListState<R> {
    /// Fresh controller for a screen's declared query shape.
    pub fn new(config: ListConfig) -> Self {
        let query = ListQuery::from_config(&config);
        let staged = query.filters.clone();
        Self {
            config,
            query,
            staged,
            phase: ListPhase::Idle,
            items: Vec::new(),
            total_items: 0,
            total_pages: 1,
            seq: 0,
        }
    }

    fn ticket(&mut self) -> FetchTicket {
        self.seq += 1;
        self.phase = ListPhase::Loading;
        self.items.clear();
        FetchTicket {
            seq: self.seq,
            query: self.query.clone(),
        }
    }

    /// Moves to another page, keeping committed filters and search.
    pub fn set_page(&mut self, page: u32) -> FetchTicket {
        self.query.page = page.max(1);
        self.ticket()
    }

    /// Stages a filter value without fetching.
    pub fn stage_filter(&mut self, key: &str, value: &str) {
        self.staged.insert(key.to_string(), value.to_string());
    }

    /// Commits all staged filters and fetches page 1.
    pub fn apply_filters(&mut self) -> FetchTicket {
        self.query.filters = self.staged.clone();
        self.query.page = 1;
        self.ticket()
    }

    /// Restores every filter to its declared default and fetches page 1.
    /// The search term is left alone.
    pub fn clear_filters(&mut self) -> FetchTicket {
        self.staged = self.config.default_filters();
        self.query.filters = self.staged.clone();
        self.query.page = 1;
        self.ticket()
    }

    /// Commits a search term and fetches page 1 immediately. Search is
    /// live; filters are staged-then-applied.
    pub fn set_search(&mut self, term: &str) -> FetchTicket {
        self.query.search = term.to_string();
        self.query.page = 1;
        self.ticket()
    }

    /// Fetches again with the query unchanged. Used on mount and after a
    /// confirmed mutation.
    pub fn refetch(&mut self) -> FetchTicket {
        self.ticket()
    }

    /// Applies a successful settlement. Returns false (and changes
    /// nothing) when the ticket is not the most recently issued one.
    pub fn settle_ok(&mut self, ticket_seq: u64, page: ListPage<R>) -> bool {
        if ticket_seq != self.seq {
            return false;
        }
        self.phase = ListPhase::Loaded;
        self.items = page.items;
        self.total_items = page.total_items;
        self.total_pages = page.total_pages.max(1);
        true
    }

    /// Applies a failed settlement: rows are cleared so stale data is
    /// never shown next to an error. Returns false for stale tickets,
    /// in which case no notification should be emitted either.
    pub fn settle_err(&mut self, ticket_seq: u64) -> bool {
        if ticket_seq != self.seq {
            return false;
        }
        self.phase = ListPhase::Error;
        self.items = Vec::new();
        self.total_items = 0;
        self.total_pages = 1;
        true
    }

    /// Current phase of the state machine.
    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    /// Committed query.
    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    /// Rows of the last applied successful fetch.
    pub fn items(&self) -> &[R] {
        &self.items
    }

    /// Page count, at least 1.
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Total matching rows reported by the server.
    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Display projection for the view layer.
    pub fn display(&self) -> DisplayState {
        match self.phase {
            ListPhase::Idle | ListPhase::Loading => DisplayState::Loading,
            ListPhase::Error => DisplayState::Failed,
            ListPhase::Loaded if self.items.is_empty() => DisplayState::Empty,
            ListPhase::Loaded => DisplayState::Populated,
        }
    }
}

impl<R: Clone> ListState<R> {
    /// Owned snapshot for rendering.
    pub fn snapshot(&self) -> ListSnapshot<R> {
        ListSnapshot {
            display: self.display(),
            items: self.items.clone(),
            page: self.query.page,
            page_size: self.query.page_size,
            total_pages: self.total_pages,
            total_items: self.total_items,
            search: self.query.search.clone(),
            filters: self.query.filters.clone(),
            staged: self.staged.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review_state() -> ListState<&'static str> {
        ListState::new(
            ListConfig::new(10)
                .with_filter("replyStatus", "")
                .with_filter("dateFilter", ""),
        )
    }

    fn page_of(items: Vec<&'static str>, total: u64) -> ListPage<&'static str> {
        let total_pages = crate::envelope::total_pages_for(total, 10);
        ListPage {
            items,
            total_items: total,
            total_pages,
        }
    }

    #[test]
    fn slow_earlier_response_cannot_overwrite_latest_page() {
        let mut state = review_state();
        let slow = state.refetch();
        let fast = state.set_page(2);

        // Page 2 settles first even though it was dispatched second.
        assert!(state.settle_ok(fast.seq, page_of(vec!["p2-row"], 12)));
        assert!(!state.settle_ok(slow.seq, page_of(vec!["p1-row"], 12)));

        assert_eq!(state.items(), ["p2-row"]);
        assert_eq!(state.query().page, 2);
        assert_eq!(state.phase(), ListPhase::Loaded);
    }

    #[test]
    fn stale_failure_is_discarded_silently() {
        let mut state = review_state();
        let old = state.refetch();
        let new = state.set_page(3);

        assert!(state.settle_ok(new.seq, page_of(vec!["p3"], 40)));
        assert!(!state.settle_err(old.seq));
        assert_eq!(state.phase(), ListPhase::Loaded);
        assert_eq!(state.items(), ["p3"]);
    }

    #[test]
    fn clear_filters_restores_declared_defaults_and_first_page() {
        let mut state = review_state();
        state.stage_filter("replyStatus", "replied");
        state.stage_filter("dateFilter", "thisWeek");
        let _ = state.apply_filters();
        let seq_before = state.set_page(4).seq;

        let ticket = state.clear_filters();

        assert_eq!(ticket.query.page, 1);
        assert_eq!(ticket.query.filter("replyStatus"), "");
        assert_eq!(ticket.query.filter("dateFilter"), "");
        // Exactly one fetch: sequence advanced by one.
        assert_eq!(ticket.seq, seq_before + 1);
    }

    #[test]
    fn apply_filters_commits_staged_values_at_page_one() {
        let mut state = review_state();
        let _ = state.set_page(5);
        state.stage_filter("replyStatus", "replied");

        let ticket = state.apply_filters();
        let query_string = ticket.query.to_query_string();

        assert!(query_string.contains("replyStatus=replied"));
        assert!(query_string.contains("page=1"));
    }

    #[test]
    fn staging_a_filter_does_not_touch_the_committed_query() {
        let mut state = review_state();
        let baseline = state.refetch();
        state.stage_filter("replyStatus", "not replied");

        assert_eq!(state.query().filter("replyStatus"), "");
        // No new ticket was issued by staging.
        assert_eq!(state.refetch().seq, baseline.seq + 1);
    }

    #[test]
    fn search_is_live_and_resets_to_page_one() {
        let mut state = review_state();
        let _ = state.set_page(3);

        let ticket = state.set_search("acme");
        assert_eq!(ticket.query.page, 1);
        assert!(ticket.query.to_query_string().contains("search=acme"));
        assert!(ticket.query.to_query_string().contains("page=1"));
    }

    #[test]
    fn empty_search_result_renders_empty_not_error() {
        let mut state = review_state();
        let ticket = state.set_search("acme");

        assert!(state.settle_ok(ticket.seq, page_of(vec![], 0)));
        assert_eq!(state.display(), DisplayState::Empty);
        assert_eq!(state.total_pages(), 1);
    }

    #[test]
    fn refetch_after_mutation_keeps_query_untouched() {
        let mut state = review_state();
        state.stage_filter("replyStatus", "replied");
        let _ = state.apply_filters();
        let applied = state.set_page(3);
        let _ = state.settle_ok(applied.seq, page_of(vec!["row"], 40));

        let before = state.query().clone();
        let ticket = state.refetch();

        assert_eq!(ticket.query, before);
        assert_eq!(state.query().page, 3);
        assert_eq!(state.query().filter("replyStatus"), "replied");
    }

    #[test]
    fn failed_latest_fetch_clears_rows_and_reports_once() {
        let mut state = review_state();
        let first = state.refetch();
        let _ = state.settle_ok(first.seq, page_of(vec!["kept"], 5));

        let failing = state.set_page(2);
        assert!(state.settle_err(failing.seq));
        assert_eq!(state.display(), DisplayState::Failed);
        assert!(state.items().is_empty());
        assert_eq!(state.total_pages(), 1);

        let recovered = state.refetch();
        assert!(state.settle_ok(recovered.seq, page_of(vec!["back"], 5)));
        assert_eq!(state.display(), DisplayState::Populated);
    }

    #[test]
    fn loading_hides_previous_rows() {
        let mut state = review_state();
        let first = state.refetch();
        let _ = state.settle_ok(first.seq, page_of(vec!["old"], 5));
        assert_eq!(state.display(), DisplayState::Populated);

        let _ = state.set_page(2);
        assert_eq!(state.display(), DisplayState::Loading);
        assert!(state.items().is_empty());
    }

    #[test]
    fn query_string_omits_empty_values() {
        let mut state = review_state();
        let ticket = state.refetch();
        assert_eq!(ticket.query.to_query_string(), "page=1&limit=10");
    }

    #[test]
    fn query_string_percent_encodes_values() {
        let mut state = review_state();
        state.stage_filter("replyStatus", "not replied");
        let ticket = state.apply_filters();
        assert!(ticket
            .query
            .to_query_string()
            .contains("replyStatus=not%20replied"));

        let search = state.set_search("a&b");
        assert!(search.query.to_query_string().contains("search=a%26b"));
    }

    #[test]
    fn page_below_one_is_clamped() {
        let mut state = review_state();
        let ticket = state.set_page(0);
        assert_eq!(ticket.query.page, 1);
    }
}
