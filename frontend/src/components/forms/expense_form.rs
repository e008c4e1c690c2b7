use std::cell::Cell;
use std::rc::Rc;

use shared::draft::DraftField;
use shared::{DraftError, Expense, ExpenseDraft};
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::{ApiClient, ExpenseApi, RequestError};
use crate::services::logging::Logger;

const COMPONENT: &str = "expense-form";

pub const SAVE_FAILED: &str = "Could not save expense";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] DraftError),
    #[error(transparent)]
    Request(#[from] RequestError),
}

impl SubmitError {
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Invalid(e) => e.user_message(),
            SubmitError::Request(e) => e.user_message(SAVE_FAILED),
        }
    }
}

/// Validates the draft, then updates when the editing target has an id and
/// creates otherwise. An invalid draft never reaches the network.
pub async fn submit_draft<A: ExpenseApi + ?Sized>(
    api: &A,
    draft: &ExpenseDraft,
    editing: Option<&Expense>,
) -> Result<Expense, SubmitError> {
    let payload = draft.validate()?;
    let saved = match editing.and_then(|target| target.id.as_deref()) {
        Some(id) => api.update(id, &payload).await?,
        None => api.create(&payload).await?,
    };
    Ok(saved)
}

/// Rejects a second submit while one is still outstanding.
#[derive(Debug, Default)]
pub struct InFlightGuard(Cell<bool>);

impl InFlightGuard {
    /// Returns false if a submit is already running.
    pub fn try_begin(&self) -> bool {
        !self.0.replace(true)
    }

    pub fn finish(&self) {
        self.0.set(false);
    }

    pub fn is_active(&self) -> bool {
        self.0.get()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub draft: ExpenseDraft,
    pub submitting: bool,
}

pub enum FormAction {
    Seed(Expense),
    SetField(DraftField, String),
    SubmitStarted,
    SubmitSucceeded,
    SubmitFailed,
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Seed(expense) => next.draft = ExpenseDraft::from_expense(&expense),
            FormAction::SetField(field, value) => next.draft.set(field, value),
            FormAction::SubmitStarted => next.submitting = true,
            FormAction::SubmitSucceeded => {
                next.draft = ExpenseDraft::default();
                next.submitting = false;
            }
            // Draft is kept so the user can retry
            FormAction::SubmitFailed => next.submitting = false,
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    pub api: Rc<ApiClient>,
    pub editing: Option<Expense>,
    pub on_saved: Callback<Expense>,
    pub on_cancel_edit: Callback<()>,
    pub on_alert: Callback<String>,
}

fn field_input(form: &UseReducerHandle<FormState>, field: DraftField) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        form.dispatch(FormAction::SetField(field, input.value()));
    })
}

#[function_component(ExpenseForm)]
pub fn expense_form(props: &ExpenseFormProps) -> Html {
    let form = use_reducer(FormState::default);
    let guard = use_memo((), |_| InFlightGuard::default());

    // Re-seed whenever a new editing target arrives; clearing it leaves the draft alone
    use_effect_with(props.editing.clone(), {
        let form = form.clone();
        move |editing: &Option<Expense>| {
            if let Some(expense) = editing {
                form.dispatch(FormAction::Seed(expense.clone()));
            }
            || ()
        }
    });

    let on_submit = {
        let form = form.clone();
        let guard = guard.clone();
        let api = props.api.clone();
        let editing = props.editing.clone();
        let on_saved = props.on_saved.clone();
        let on_alert = props.on_alert.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if !guard.try_begin() {
                Logger::warn_with_component(COMPONENT, "submit ignored while a save is in flight");
                return;
            }

            let form = form.clone();
            let guard = guard.clone();
            let api = api.clone();
            let editing = editing.clone();
            let on_saved = on_saved.clone();
            let on_alert = on_alert.clone();
            let draft = form.draft.clone();

            form.dispatch(FormAction::SubmitStarted);
            spawn_local(async move {
                match submit_draft(&*api, &draft, editing.as_ref()).await {
                    Ok(saved) => {
                        form.dispatch(FormAction::SubmitSucceeded);
                        on_saved.emit(saved);
                    }
                    Err(err) => {
                        if let SubmitError::Request(request_error) = &err {
                            Logger::error_with_component(
                                COMPONENT,
                                &format!("failed to save expense: {}", request_error),
                            );
                        }
                        form.dispatch(FormAction::SubmitFailed);
                        on_alert.emit(err.user_message());
                    }
                }
                guard.finish();
            });
        })
    };

    let on_cancel = {
        let on_cancel_edit = props.on_cancel_edit.clone();
        Callback::from(move |_: MouseEvent| on_cancel_edit.emit(()))
    };

    let is_editing = props.editing.is_some();
    let draft = &form.draft;

    html! {
        <form class="card expense-form" onsubmit={on_submit}>
            <h3>{if is_editing { "Edit Expense" } else { "Add Expense" }}</h3>

            <label>{"Title"}
                <input
                    name="title"
                    value={draft.title.clone()}
                    oninput={field_input(&form, DraftField::Title)}
                />
            </label>
            <label>{"Amount"}
                <input
                    name="amount"
                    type="number"
                    step="0.01"
                    value={draft.amount.clone()}
                    oninput={field_input(&form, DraftField::Amount)}
                />
            </label>
            <label>{"Category"}
                <input
                    name="category"
                    value={draft.category.clone()}
                    oninput={field_input(&form, DraftField::Category)}
                />
            </label>
            <label>{"Date"}
                <input
                    name="date"
                    type="date"
                    value={draft.date.clone()}
                    oninput={field_input(&form, DraftField::Date)}
                />
            </label>

            <div class="row">
                <button type="submit" class="btn primary" disabled={form.submitting}>
                    {match (form.submitting, is_editing) {
                        (true, _) => "Saving...",
                        (false, true) => "Update",
                        (false, false) => "Create",
                    }}
                </button>
                {if is_editing {
                    html! {
                        <button type="button" class="btn" onclick={on_cancel}>{"Cancel"}</button>
                    }
                } else { html! {} }}
            </div>
        </form>
    }
}
