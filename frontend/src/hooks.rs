use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use brandboard_shared::{
    ActionFlags, ActionKind, ActionRequest, ApiError, FetchTicket, ListConfig, ListPage,
    ListSnapshot, ListState,
};
use yew::prelude::*;

use crate::toast::{use_toasts, Toasts};

/// Render snapshot plus intent callbacks for one server-paginated list.
#[derive(Clone)]
pub struct ListView<R: Clone> {
    /// What to render right now.
    pub snapshot: ListSnapshot<R>,
    /// Jump to a page, keeping filters and search.
    pub set_page: Callback<u32>,
    /// Stage one filter value; nothing is fetched until apply.
    pub stage_filter: Callback<(String, String)>,
    /// Commit every staged filter and fetch page 1.
    pub apply_filters: Callback<()>,
    /// Restore declared filter defaults and fetch page 1.
    pub clear_filters: Callback<()>,
    /// Commit a search term and fetch page 1 immediately.
    pub set_search: Callback<String>,
    /// Fetch again with the query untouched.
    pub refetch: Callback<()>,
}

/// Drive a server-paginated, filterable table from one hook.
///
/// The controller lives in a `use_mut_ref` so in-flight responses always
/// settle against the current sequence number; only snapshots flow into
/// rendering state. Out-of-order responses are dropped by the controller,
/// a failed fetch clears the rows and raises one error toast.
///
/// # Example
/// ```ignore
/// use brandboard_shared::{DisplayState, ListConfig};
/// use crate::hooks::use_list_view;
///
/// #[function_component(ReviewsPage)]
/// fn reviews_page() -> Html {
///     let list = use_list_view(
///         ListConfig::new(10).with_filter("replyStatus", ""),
///         |query| async move { crate::api::fetch_reviews(&query).await },
///     );
///
///     match list.snapshot.display {
///         DisplayState::Populated => html! { /* rows */ },
///         _ => html! { /* skeleton, empty or error card */ },
///     }
/// }
/// ```
#[hook]
pub fn use_list_view<R, F, Fut>(config: ListConfig, fetch: F) -> ListView<R>
where
    R: Clone + PartialEq + 'static,
    F: Fn(brandboard_shared::ListQuery) -> Fut + 'static,
    Fut: Future<Output = Result<ListPage<R>, ApiError>> + 'static,
{
    let toasts = use_toasts();
    let state = use_mut_ref(|| ListState::<R>::new(config));
    let snapshot = use_state(|| state.borrow().snapshot());
    let fetch = Rc::new(fetch);

    // Dispatch one ticket: paint the loading state, run the request,
    // settle. The controller ignores settlements for superseded tickets.
    let run: Rc<dyn Fn(FetchTicket)> = {
        let state = state.clone();
        let snapshot = snapshot.clone();
        let toasts = toasts.clone();
        Rc::new(move |ticket: FetchTicket| {
            snapshot.set(state.borrow().snapshot());

            let state = state.clone();
            let snapshot = snapshot.clone();
            let toasts = toasts.clone();
            let future = fetch(ticket.query.clone());
            wasm_bindgen_futures::spawn_local(async move {
                match future.await {
                    Ok(page) => {
                        let applied = state.borrow_mut().settle_ok(ticket.seq, page);
                        if applied {
                            snapshot.set(state.borrow().snapshot());
                        }
                    }
                    Err(err) => {
                        let applied = state.borrow_mut().settle_err(ticket.seq);
                        if applied {
                            web_sys::console::error_1(
                                &format!("list fetch failed: {err}").into(),
                            );
                            toasts.error(err.user_message());
                            snapshot.set(state.borrow().snapshot());
                        }
                    }
                }
            });
        })
    };

    {
        let state = state.clone();
        let run = run.clone();
        use_effect_with((), move |_| {
            let ticket = state.borrow_mut().refetch();
            run(ticket);
            || ()
        });
    }

    let set_page = {
        let state = state.clone();
        let run = run.clone();
        Callback::from(move |page: u32| {
            let ticket = state.borrow_mut().set_page(page);
            run(ticket);
        })
    };

    let stage_filter = {
        let state = state.clone();
        let snapshot = snapshot.clone();
        Callback::from(move |(key, value): (String, String)| {
            state.borrow_mut().stage_filter(&key, &value);
            snapshot.set(state.borrow().snapshot());
        })
    };

    let apply_filters = {
        let state = state.clone();
        let run = run.clone();
        Callback::from(move |_: ()| {
            let ticket = state.borrow_mut().apply_filters();
            run(ticket);
        })
    };

    let clear_filters = {
        let state = state.clone();
        let run = run.clone();
        Callback::from(move |_: ()| {
            let ticket = state.borrow_mut().clear_filters();
            run(ticket);
        })
    };

    let set_search = {
        let state = state.clone();
        let run = run.clone();
        Callback::from(move |term: String| {
            let ticket = state.borrow_mut().set_search(&term);
            run(ticket);
        })
    };

    let refetch = {
        let state = state.clone();
        let run = run.clone();
        Callback::from(move |_: ()| {
            let ticket = state.borrow_mut().refetch();
            run(ticket);
        })
    };

    ListView {
        snapshot: (*snapshot).clone(),
        set_page,
        stage_filter,
        apply_filters,
        clear_filters,
        set_search,
        refetch,
    }
}

/// Row-action dispatcher with one in-flight guard per (row, action) pair.
///
/// A second click on the same action of the same row is ignored while the
/// first is still running; a different action or a different row is not
/// blocked. Success raises the server confirmation as a toast and emits
/// `on_settled` (the page passes its refetch callback there); failure only
/// raises an error toast and keeps the current rows.
#[derive(Clone)]
pub struct ActionDispatcher {
    flags: Rc<RefCell<ActionFlags>>,
    mirror: UseStateHandle<ActionFlags>,
    toasts: Toasts,
    on_settled: Callback<()>,
}

impl ActionDispatcher {
    /// True while this exact action runs for this row.
    pub fn is_inflight(&self, target_id: &str, kind: ActionKind) -> bool {
        self.mirror.is_inflight(target_id, kind)
    }

    /// True while any action runs for this row.
    pub fn row_busy(&self, target_id: &str) -> bool {
        self.mirror.row_busy(target_id)
    }

    /// True while any action runs at all.
    pub fn any_busy(&self) -> bool {
        self.mirror.any_busy()
    }

    /// Runs `future` under the (row, action) guard. Drops the request
    /// when the same pair is already in flight.
    pub fn dispatch<Fut>(&self, request: ActionRequest, future: Fut)
    where
        Fut: Future<Output = Result<String, ApiError>> + 'static,
    {
        let started = self.flags.borrow_mut().begin(&request);
        if !started {
            return;
        }
        self.mirror.set(self.flags.borrow().clone());

        let flags = self.flags.clone();
        let mirror = self.mirror.clone();
        let toasts = self.toasts.clone();
        let on_settled = self.on_settled.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = future.await;
            flags.borrow_mut().finish(&request);
            mirror.set(flags.borrow().clone());

            match outcome {
                Ok(message) => {
                    toasts.success(message);
                    on_settled.emit(());
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("action failed: {err}").into());
                    toasts.error(err.user_message());
                }
            }
        });
    }
}

/// Dispatcher wired to the toast queue; `on_settled` fires after every
/// confirmed mutation.
#[hook]
pub fn use_actions(on_settled: Callback<()>) -> ActionDispatcher {
    let toasts = use_toasts();
    let flags = use_mut_ref(ActionFlags::default);
    let mirror = use_state(|| flags.borrow().clone());

    ActionDispatcher {
        flags,
        mirror,
        toasts,
        on_settled,
    }
}
