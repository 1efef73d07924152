//! Mutation vocabulary for the row-action dispatchers.

use std::collections::HashSet;

/// Kind of state-changing request a screen can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Create a record.
    Create,
    /// Update fields of an existing record.
    Update,
    /// Approve a pending record.
    Approve,
    /// Reject a pending record.
    Reject,
    /// Delete a record.
    Delete,
}

/// One state-changing request: what to do and to which row.
///
/// Request bodies travel typed through the API layer; this struct only
/// identifies the mutation for in-flight tracking and refetching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    /// Kind of mutation.
    pub kind: ActionKind,
    /// Identifier of the target row; empty for create forms, which have
    /// no row yet.
    pub target_id: String,
}

impl ActionRequest {
    /// Request against an existing row.
    pub fn new(kind: ActionKind, target_id: &str) -> Self {
        Self {
            kind,
            target_id: target_id.to_string(),
        }
    }

    /// Create request; keyed by the screen's create form rather than a row.
    pub fn create() -> Self {
        Self {
            kind: ActionKind::Create,
            target_id: String::new(),
        }
    }
}

/// In-flight markers keyed by (row, action kind), so one row's pending
/// approve never disables another row's controls and never disables the
/// same row's reject.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionFlags {
    inflight: HashSet<(String, ActionKind)>,
}

impl ActionFlags {
    /// Tracker with nothing in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a request in flight. Returns false when the same
    /// (row, kind) pair is already pending, in which case the caller
    /// must not dispatch a duplicate.
    pub fn begin(&mut self, request: &ActionRequest) -> bool {
        self.inflight
            .insert((request.target_id.clone(), request.kind))
    }

    /// Clears the marker once the request settles either way.
    pub fn finish(&mut self, request: &ActionRequest) {
        self.inflight
            .remove(&(request.target_id.clone(), request.kind));
    }

    /// Whether this exact (row, kind) pair is pending.
    pub fn is_inflight(&self, target_id: &str, kind: ActionKind) -> bool {
        self.inflight
            .iter()
            .any(|(id, k)| id == target_id && *k == kind)
    }

    /// Whether any action is pending for the row.
    pub fn row_busy(&self, target_id: &str) -> bool {
        self.inflight.iter().any(|(id, _)| id == target_id)
    }

    /// Whether anything at all is pending.
    pub fn any_busy(&self) -> bool {
        !self.inflight.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_dispatch_is_refused() {
        let mut flags = ActionFlags::new();
        let approve = ActionRequest::new(ActionKind::Approve, "s1");
        assert!(flags.begin(&approve));
        assert!(!flags.begin(&approve));
        flags.finish(&approve);
        assert!(flags.begin(&approve));
    }

    #[test]
    fn kinds_are_independent_per_row() {
        let mut flags = ActionFlags::new();
        assert!(flags.begin(&ActionRequest::new(ActionKind::Approve, "s1")));

        assert!(!flags.is_inflight("s1", ActionKind::Reject));
        assert!(!flags.is_inflight("s2", ActionKind::Approve));
        assert!(flags.is_inflight("s1", ActionKind::Approve));
        assert!(flags.row_busy("s1"));
        assert!(!flags.row_busy("s2"));
    }

    #[test]
    fn create_requests_key_on_the_form() {
        let mut flags = ActionFlags::new();
        assert!(flags.begin(&ActionRequest::create()));
        assert!(flags.is_inflight("", ActionKind::Create));
        assert!(!flags.is_inflight("", ActionKind::Delete));
    }

    #[test]
    fn finish_only_clears_the_settled_pair() {
        let mut flags = ActionFlags::new();
        let approve = ActionRequest::new(ActionKind::Approve, "s1");
        let reject = ActionRequest::new(ActionKind::Reject, "s1");
        flags.begin(&approve);
        flags.begin(&reject);

        flags.finish(&approve);
        assert!(!flags.is_inflight("s1", ActionKind::Approve));
        assert!(flags.is_inflight("s1", ActionKind::Reject));
        assert!(flags.any_busy());
    }
}
