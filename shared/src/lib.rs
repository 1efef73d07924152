//! Shared core of the Brandboard back-office.
//!
//! Holds everything the wasm frontend needs that is not rendering or
//! I/O: the list-view controller state machine ([`list`]), the wire
//! envelopes ([`envelope`]), the typed request error ([`error`]), the
//! mutation vocabulary ([`actions`]) and the business records
//! ([`records`]). Keeping the controller free of framework types makes
//! its ordering rules (last-dispatched-wins, stale-settlement discard)
//! testable natively.

pub mod actions;
pub mod envelope;
pub mod error;
pub mod list;
pub mod records;

pub use actions::{ActionFlags, ActionKind, ActionRequest};
pub use envelope::{Envelope, FailureBody, ListBody, ListPage};
pub use error::ApiError;
pub use list::{
    DisplayState, FetchTicket, ListConfig, ListPhase, ListQuery, ListSnapshot, ListState,
};
