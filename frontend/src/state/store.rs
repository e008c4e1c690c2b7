use std::rc::Rc;

use shared::{Expense, Summary};
use yew::prelude::*;

/// Canonical in-memory state of the tracker. Components only ever see
/// snapshots of it; every change goes through [`AppAction`].
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub expenses: Vec<Expense>,
    pub summary: Summary,
    pub list_loading: bool,
    pub summary_loading: bool,
    /// Record currently being edited; `None` means the form is in create mode
    pub editing: Option<Expense>,
    /// Id awaiting the user's delete confirmation
    pub pending_delete: Option<String>,
    /// Id whose delete request is in flight
    pub deleting: Option<String>,
    /// User-facing notices, oldest first
    pub alerts: Vec<String>,
    /// Number of the newest list fetch; older responses are dropped
    pub list_seq: u64,
    /// Number of the newest summary fetch; older responses are dropped
    pub summary_seq: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            expenses: Vec::new(),
            summary: Summary::default(),
            list_loading: true,
            summary_loading: true,
            editing: None,
            pending_delete: None,
            deleting: None,
            alerts: Vec::new(),
            list_seq: 0,
            summary_seq: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    ListRequested(u64),
    ListLoaded { seq: u64, expenses: Vec<Expense> },
    ListFailed(u64),
    SummaryRequested(u64),
    SummaryLoaded { seq: u64, summary: Summary },
    SummaryFailed(u64),
    /// A create or update succeeded with this record
    Saved(Expense),
    Edit(Expense),
    CancelEdit,
    RequestDelete(String),
    CancelDelete,
    DeleteStarted(String),
    Deleted(String),
    DeleteFailed(String),
    Alert(String),
    DismissAlert,
}

impl AppState {
    pub fn alert(&self) -> Option<&str> {
        self.alerts.first().map(String::as_str)
    }

    pub fn pending_delete_title(&self) -> Option<&str> {
        let id = self.pending_delete.as_deref()?;
        self.expenses
            .iter()
            .find(|expense| expense.has_id(id))
            .map(|expense| expense.title.as_str())
    }

    fn apply(&mut self, action: AppAction) {
        match action {
            AppAction::ListRequested(seq) => {
                self.list_seq = seq;
                self.list_loading = true;
            }
            AppAction::ListLoaded { seq, expenses } => {
                if seq == self.list_seq {
                    self.expenses = expenses;
                    self.list_loading = false;
                }
            }
            AppAction::ListFailed(seq) => {
                if seq == self.list_seq {
                    self.list_loading = false;
                }
            }
            AppAction::SummaryRequested(seq) => {
                self.summary_seq = seq;
                self.summary_loading = true;
            }
            AppAction::SummaryLoaded { seq, summary } => {
                if seq == self.summary_seq {
                    self.summary = summary;
                    self.summary_loading = false;
                }
            }
            AppAction::SummaryFailed(seq) => {
                if seq == self.summary_seq {
                    self.summary = Summary::default();
                    self.summary_loading = false;
                }
            }
            AppAction::Saved(expense) => {
                if self
                    .editing
                    .as_ref()
                    .is_some_and(|target| target.same_identity(&expense))
                {
                    self.editing = None;
                }
                match self
                    .expenses
                    .iter()
                    .position(|existing| existing.same_identity(&expense))
                {
                    Some(index) => self.expenses[index] = expense,
                    None => self.expenses.insert(0, expense),
                }
            }
            AppAction::Edit(expense) => self.editing = Some(expense),
            AppAction::CancelEdit => self.editing = None,
            AppAction::RequestDelete(id) => {
                if self.deleting.is_none() {
                    self.pending_delete = Some(id);
                }
            }
            AppAction::CancelDelete => self.pending_delete = None,
            AppAction::DeleteStarted(id) => {
                self.pending_delete = None;
                self.deleting = Some(id);
            }
            AppAction::Deleted(id) => {
                self.expenses.retain(|expense| !expense.has_id(&id));
                if self.editing.as_ref().is_some_and(|e| e.has_id(&id)) {
                    self.editing = None;
                }
                self.deleting = None;
            }
            AppAction::DeleteFailed(_) => self.deleting = None,
            AppAction::Alert(message) => self.alerts.push(message),
            AppAction::DismissAlert => {
                if !self.alerts.is_empty() {
                    self.alerts.remove(0);
                }
            }
        }
    }
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::CategoryTotal;

    fn expense(id: &str, title: &str) -> Expense {
        Expense {
            id: Some(id.to_string()),
            title: title.to_string(),
            amount: 10.0,
            category: "Food".to_string(),
            date: "2024-03-15".to_string(),
        }
    }

    fn reduce_all(state: AppState, actions: Vec<AppAction>) -> AppState {
        let mut state = Rc::new(state);
        for action in actions {
            state = state.reduce(action);
        }
        (*state).clone()
    }

    fn loaded(expenses: Vec<Expense>) -> AppState {
        reduce_all(
            AppState::default(),
            vec![AppAction::ListRequested(1), AppAction::ListLoaded { seq: 1, expenses }],
        )
    }

    fn titles(state: &AppState) -> Vec<&str> {
        state.expenses.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = AppState::default();
        assert!(state.list_loading);
        assert!(state.summary_loading);
        assert!(state.expenses.is_empty());
        assert_eq!(state.summary, Summary::default());
    }

    #[test]
    fn test_saved_new_record_is_prepended() {
        let state = loaded(vec![expense("1", "a"), expense("2", "b")]);
        let state = reduce_all(state, vec![AppAction::Saved(expense("3", "c"))]);

        assert_eq!(titles(&state), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_saved_existing_record_is_replaced_in_place() {
        let state = loaded(vec![expense("1", "a"), expense("2", "b"), expense("3", "c")]);
        let state = reduce_all(
            state,
            vec![
                AppAction::Edit(expense("2", "b")),
                AppAction::Saved(expense("2", "b-updated")),
            ],
        );

        assert_eq!(titles(&state), vec!["a", "b-updated", "c"]);
        assert_eq!(state.editing, None);
    }

    #[test]
    fn test_saving_another_record_keeps_edit_target() {
        let state = loaded(vec![expense("1", "a"), expense("2", "b")]);
        let state = reduce_all(
            state,
            vec![
                AppAction::Edit(expense("1", "a")),
                AppAction::Saved(expense("3", "c")),
            ],
        );

        assert_eq!(state.editing, Some(expense("1", "a")));
    }

    #[test]
    fn test_cancel_edit_returns_to_create_mode() {
        let state = loaded(vec![expense("1", "a")]);
        let state = reduce_all(state, vec![AppAction::Edit(expense("1", "a"))]);
        assert_eq!(state.editing, Some(expense("1", "a")));

        let state = reduce_all(state, vec![AppAction::CancelEdit]);
        assert_eq!(state.editing, None);
    }

    #[test]
    fn test_summary_failure_resets_to_zero() {
        let summary = Summary {
            total: 200.0,
            count: 4,
            by_category: vec![CategoryTotal {
                category: "Food".to_string(),
                total: 200.0,
                count: 4,
            }],
        };
        let state = reduce_all(
            AppState::default(),
            vec![
                AppAction::SummaryRequested(1),
                AppAction::SummaryLoaded { seq: 1, summary },
                AppAction::SummaryRequested(2),
                AppAction::SummaryFailed(2),
            ],
        );

        assert_eq!(state.summary, Summary::default());
        assert!(!state.summary_loading);
    }

    #[test]
    fn test_list_failure_keeps_previous_list() {
        let state = loaded(vec![expense("1", "a")]);
        let state = reduce_all(state, vec![AppAction::ListRequested(2), AppAction::ListFailed(2)]);

        assert_eq!(titles(&state), vec!["a"]);
        assert!(!state.list_loading);
    }

    #[test]
    fn test_overtaken_summary_response_is_dropped() {
        let state = reduce_all(
            AppState::default(),
            vec![
                AppAction::SummaryRequested(1),
                AppAction::SummaryRequested(2),
                AppAction::SummaryLoaded {
                    seq: 2,
                    summary: Summary {
                        total: 80.0,
                        count: 1,
                        by_category: Vec::new(),
                    },
                },
                AppAction::SummaryLoaded { seq: 1, summary: Summary::default() },
                AppAction::SummaryFailed(1),
            ],
        );

        assert_eq!(state.summary.total, 80.0);
        assert_eq!(state.summary.count, 1);
        assert!(!state.summary_loading);
    }

    #[test]
    fn test_overtaken_list_response_is_dropped() {
        let state = reduce_all(
            AppState::default(),
            vec![
                AppAction::ListRequested(1),
                AppAction::ListRequested(2),
                AppAction::ListLoaded { seq: 2, expenses: vec![expense("2", "new")] },
                AppAction::ListLoaded { seq: 1, expenses: Vec::new() },
            ],
        );

        assert_eq!(titles(&state), vec!["new"]);
        assert!(!state.list_loading);
    }

    #[test]
    fn test_stale_failure_keeps_loading_for_newer_fetch() {
        let state = reduce_all(
            AppState::default(),
            vec![AppAction::ListRequested(1), AppAction::ListRequested(2), AppAction::ListFailed(1)],
        );

        assert!(state.list_loading);
    }

    #[test]
    fn test_delete_removes_only_matching_record() {
        let state = loaded(vec![expense("1", "a"), expense("2", "b"), expense("3", "c")]);
        let state = reduce_all(
            state,
            vec![
                AppAction::RequestDelete("2".to_string()),
                AppAction::DeleteStarted("2".to_string()),
                AppAction::Deleted("2".to_string()),
            ],
        );

        assert_eq!(titles(&state), vec!["a", "c"]);
        assert_eq!(state.pending_delete, None);
        assert_eq!(state.deleting, None);
    }

    #[test]
    fn test_cancel_delete_leaves_list_unchanged() {
        let before = loaded(vec![expense("1", "a"), expense("2", "b")]);
        let state = reduce_all(
            before.clone(),
            vec![
                AppAction::RequestDelete("1".to_string()),
                AppAction::CancelDelete,
            ],
        );

        assert_eq!(state.expenses, before.expenses);
        assert_eq!(state.pending_delete, None);
    }

    #[test]
    fn test_failed_delete_keeps_record() {
        let state = loaded(vec![expense("1", "a")]);
        let state = reduce_all(
            state,
            vec![
                AppAction::DeleteStarted("1".to_string()),
                AppAction::DeleteFailed("1".to_string()),
            ],
        );

        assert_eq!(titles(&state), vec!["a"]);
        assert_eq!(state.deleting, None);
    }

    #[test]
    fn test_delete_request_ignored_while_another_in_flight() {
        let state = loaded(vec![expense("1", "a"), expense("2", "b")]);
        let state = reduce_all(
            state,
            vec![
                AppAction::DeleteStarted("1".to_string()),
                AppAction::RequestDelete("2".to_string()),
            ],
        );

        assert_eq!(state.pending_delete, None);
        assert_eq!(state.deleting.as_deref(), Some("1"));
    }

    #[test]
    fn test_deleting_edit_target_returns_to_create_mode() {
        let state = loaded(vec![expense("1", "a")]);
        let state = reduce_all(
            state,
            vec![
                AppAction::Edit(expense("1", "a")),
                AppAction::Deleted("1".to_string()),
            ],
        );

        assert_eq!(state.editing, None);
    }

    #[test]
    fn test_alerts_queue_in_order() {
        let state = reduce_all(
            AppState::default(),
            vec![
                AppAction::Alert("first".to_string()),
                AppAction::Alert("second".to_string()),
            ],
        );
        assert_eq!(state.alert(), Some("first"));

        let state = reduce_all(state, vec![AppAction::DismissAlert]);
        assert_eq!(state.alert(), Some("second"));

        let state = reduce_all(state, vec![AppAction::DismissAlert, AppAction::DismissAlert]);
        assert_eq!(state.alert(), None);
    }

    #[test]
    fn test_pending_delete_title() {
        let state = loaded(vec![expense("1", "Lunch")]);
        let state = reduce_all(state, vec![AppAction::RequestDelete("1".to_string())]);

        assert_eq!(state.pending_delete_title(), Some("Lunch"));
    }
}
