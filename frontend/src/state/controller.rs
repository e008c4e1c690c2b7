use std::cell::Cell;
use std::rc::Rc;

use shared::Expense;
use yew::Callback;

use super::store::AppAction;
use crate::services::api::ExpenseApi;
use crate::services::logging::Logger;

const COMPONENT: &str = "expense-controller";

pub const LIST_FETCH_FAILED: &str = "Could not fetch expenses";
pub const DELETE_FAILED: &str = "Could not delete";

/// Numbers the fetches of one resource and counts those still unanswered.
#[derive(Debug, Default)]
struct FetchSequence {
    issued: Cell<u64>,
    pending: Cell<u32>,
}

impl FetchSequence {
    fn begin(&self) -> u64 {
        let seq = self.issued.get() + 1;
        self.issued.set(seq);
        self.pending.set(self.pending.get() + 1);
        seq
    }

    fn settle(&self) {
        self.pending.set(self.pending.get().saturating_sub(1));
    }

    fn is_latest(&self, seq: u64) -> bool {
        seq == self.issued.get()
    }

    fn in_flight(&self) -> bool {
        self.pending.get() > 0
    }
}

/// Performs the network side of every state transition and reports results
/// as [`AppAction`]s.
///
/// The summary is always re-fetched from the backend after a mutation; it is
/// never recomputed from the local list.
pub struct ExpenseController<A> {
    api: Rc<A>,
    dispatch: Callback<AppAction>,
    list_fetches: Rc<FetchSequence>,
    summary_fetches: Rc<FetchSequence>,
}

impl<A> Clone for ExpenseController<A> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            dispatch: self.dispatch.clone(),
            list_fetches: Rc::clone(&self.list_fetches),
            summary_fetches: Rc::clone(&self.summary_fetches),
        }
    }
}

impl<A> PartialEq for ExpenseController<A> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.api, &other.api) && self.dispatch == other.dispatch
    }
}

impl<A: ExpenseApi> ExpenseController<A> {
    pub fn new(api: Rc<A>, dispatch: Callback<AppAction>) -> Self {
        Self {
            api,
            dispatch,
            list_fetches: Rc::default(),
            summary_fetches: Rc::default(),
        }
    }

    pub async fn refresh_list(&self) {
        let seq = self.list_fetches.begin();
        self.dispatch.emit(AppAction::ListRequested(seq));
        let result = self.api.list().await;
        self.list_fetches.settle();

        match result {
            Ok(expenses) => {
                Logger::debug_with_component(COMPONENT, &format!("loaded {} expenses", expenses.len()));
                self.dispatch.emit(AppAction::ListLoaded { seq, expenses });
            }
            Err(e) => {
                Logger::error_with_component(COMPONENT, &format!("failed to fetch expenses: {}", e));
                self.dispatch.emit(AppAction::ListFailed(seq));
                if self.list_fetches.is_latest(seq) {
                    self.dispatch.emit(AppAction::Alert(LIST_FETCH_FAILED.to_string()));
                }
            }
        }
    }

    pub async fn refresh_summary(&self) {
        let seq = self.summary_fetches.begin();
        self.dispatch.emit(AppAction::SummaryRequested(seq));
        let result = self.api.fetch_summary().await;
        self.summary_fetches.settle();

        match result {
            Ok(summary) => self.dispatch.emit(AppAction::SummaryLoaded { seq, summary }),
            Err(e) => {
                Logger::error_with_component(COMPONENT, &format!("failed to fetch summary: {}", e));
                self.dispatch.emit(AppAction::SummaryFailed(seq));
            }
        }
    }

    /// Merges a record the form saved, then re-syncs the summary.
    pub async fn record_saved(&self, expense: Expense) {
        self.dispatch.emit(AppAction::Saved(expense));
        self.resync_pending_list().await;
        self.refresh_summary().await;
    }

    /// A list fetch issued before a mutation may answer without it. Supersede
    /// it with one issued after.
    async fn resync_pending_list(&self) {
        if self.list_fetches.in_flight() {
            Logger::debug_with_component(COMPONENT, "list fetch overtaken by a change, fetching again");
            self.refresh_list().await;
        }
    }

    /// Deletes after the user confirmed. The local list only changes once the
    /// backend has accepted the delete.
    pub async fn confirm_delete(&self, id: String) {
        self.dispatch.emit(AppAction::DeleteStarted(id.clone()));
        match self.api.delete(&id).await {
            Ok(()) => {
                Logger::info_with_component(COMPONENT, &format!("deleted expense {}", id));
                self.dispatch.emit(AppAction::Deleted(id));
                self.resync_pending_list().await;
                self.refresh_summary().await;
            }
            Err(e) => {
                Logger::error_with_component(COMPONENT, &format!("failed to delete {}: {}", id, e));
                self.dispatch.emit(AppAction::DeleteFailed(id));
                self.dispatch.emit(AppAction::Alert(e.user_message(DELETE_FAILED)));
            }
        }
    }

    pub fn edit(&self, expense: Expense) {
        self.dispatch.emit(AppAction::Edit(expense));
    }

    pub fn cancel_edit(&self) {
        self.dispatch.emit(AppAction::CancelEdit);
    }

    pub fn request_delete(&self, id: String) {
        self.dispatch.emit(AppAction::RequestDelete(id));
    }

    pub fn cancel_delete(&self) {
        self.dispatch.emit(AppAction::CancelDelete);
    }

    pub fn alert(&self, message: String) {
        self.dispatch.emit(AppAction::Alert(message));
    }

    pub fn dismiss_alert(&self) {
        self.dispatch.emit(AppAction::DismissAlert);
    }
}
