use std::rc::Rc;

use shared::Expense;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::state::controller::ExpenseController;
use crate::state::store::{AppAction, AppState};

pub struct UseExpenseTrackerResult {
    pub state: AppState,
    pub actions: UseExpenseTrackerActions,
}

#[derive(Clone, PartialEq)]
pub struct UseExpenseTrackerActions {
    pub on_saved: Callback<Expense>,
    pub on_edit: Callback<Expense>,
    pub on_cancel_edit: Callback<()>,
    pub on_request_delete: Callback<String>,
    pub on_confirm_delete: Callback<String>,
    pub on_cancel_delete: Callback<()>,
    pub on_alert: Callback<String>,
    pub on_dismiss_alert: Callback<()>,
}

/// Owns the tracker state and exposes its mutation entry points.
///
/// On mount the list and the summary are fetched as two independent tasks, so
/// one failing never blocks or clears the other.
#[hook]
pub fn use_expense_tracker(api: Rc<ApiClient>) -> UseExpenseTrackerResult {
    let state = use_reducer(AppState::default);

    let controller = {
        let dispatcher = state.dispatcher();
        use_memo(api, move |api| {
            Logger::debug_with_component("expense-tracker", &format!("bound to {}", api.base_url()));
            let dispatch = Callback::from(move |action: AppAction| dispatcher.dispatch(action));
            ExpenseController::new(Rc::clone(api), dispatch)
        })
    };

    use_effect_with(controller.clone(), |controller| {
        let list_controller = (**controller).clone();
        spawn_local(async move {
            list_controller.refresh_list().await;
        });

        let summary_controller = (**controller).clone();
        spawn_local(async move {
            summary_controller.refresh_summary().await;
        });

        || ()
    });

    let on_saved = use_callback(controller.clone(), |expense: Expense, controller| {
        let controller = (**controller).clone();
        spawn_local(async move {
            controller.record_saved(expense).await;
        });
    });

    let on_confirm_delete = use_callback(controller.clone(), |id: String, controller| {
        let controller = (**controller).clone();
        spawn_local(async move {
            controller.confirm_delete(id).await;
        });
    });

    let on_edit = use_callback(controller.clone(), |expense: Expense, controller| {
        controller.edit(expense)
    });

    let on_cancel_edit = use_callback(controller.clone(), |_: (), controller| controller.cancel_edit());

    let on_request_delete = use_callback(controller.clone(), |id: String, controller| {
        controller.request_delete(id)
    });

    let on_cancel_delete = use_callback(controller.clone(), |_: (), controller| controller.cancel_delete());

    let on_alert = use_callback(controller.clone(), |message: String, controller| {
        controller.alert(message)
    });

    let on_dismiss_alert = use_callback(controller, |_: (), controller| controller.dismiss_alert());

    let actions = UseExpenseTrackerActions {
        on_saved,
        on_edit,
        on_cancel_edit,
        on_request_delete,
        on_confirm_delete,
        on_cancel_delete,
        on_alert,
        on_dismiss_alert,
    };

    UseExpenseTrackerResult {
        state: (*state).clone(),
        actions,
    }
}
