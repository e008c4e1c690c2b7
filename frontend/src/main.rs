use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod services;
mod state;

use components::dialogs::{AlertDialog, ConfirmDialog};
use components::expenses::ExpenseList;
use components::forms::ExpenseForm;
use components::header::Header;
use components::summary_chart::SummaryChart;
use components::summary_panel::SummaryPanel;
use config::AppConfig;
use hooks::use_expense_tracker::{use_expense_tracker, UseExpenseTrackerResult};
use services::api::ApiClient;
use services::logging::Logger;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: AppConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let api = use_memo(props.config.api_base_url.clone(), |url| ApiClient::with_base_url(url.clone()));
    let UseExpenseTrackerResult { state, actions } = use_expense_tracker(api.clone());
    let currency_symbol = props.config.currency_symbol.clone();

    let confirm_dialog = match state.pending_delete.clone() {
        Some(id) => {
            let on_confirm = {
                let on_confirm_delete = actions.on_confirm_delete.clone();
                Callback::from(move |_| on_confirm_delete.emit(id.clone()))
            };
            html! {
                <ConfirmDialog
                    message={"Delete this expense?".to_string()}
                    detail={state.pending_delete_title().map(str::to_string)}
                    on_confirm={on_confirm}
                    on_cancel={actions.on_cancel_delete.clone()}
                />
            }
        }
        None => html! {},
    };

    // Only the oldest alert is shown; the rest wait their turn
    let alert_dialog = match state.alert() {
        Some(message) => html! {
            <AlertDialog message={message.to_string()} on_dismiss={actions.on_dismiss_alert.clone()} />
        },
        None => html! {},
    };

    html! {
        <ContextProvider<AppConfig> context={props.config.clone()}>
            <div class="container">
                <Header />

                <div class="grid">
                    <div class="col">
                        <ExpenseForm
                            api={api.clone()}
                            editing={state.editing.clone()}
                            on_saved={actions.on_saved.clone()}
                            on_cancel_edit={actions.on_cancel_edit.clone()}
                            on_alert={actions.on_alert.clone()}
                        />
                    </div>

                    <div class="col">
                        <div class="card">
                            <SummaryPanel
                                summary={state.summary.clone()}
                                loading={state.summary_loading}
                                currency_symbol={currency_symbol.clone()}
                            />

                            <h3>{"Expenses"}</h3>
                            <ExpenseList
                                expenses={state.expenses.clone()}
                                loading={state.list_loading}
                                currency_symbol={currency_symbol.clone()}
                                deleting={state.deleting.clone()}
                                on_edit={actions.on_edit.clone()}
                                on_delete={actions.on_request_delete.clone()}
                            />
                        </div>
                    </div>
                </div>

                <SummaryChart
                    summary={state.summary.clone()}
                    loading={state.summary_loading}
                    currency_symbol={currency_symbol}
                />

                {confirm_dialog}
                {alert_dialog}
            </div>
        </ContextProvider<AppConfig>>
    }
}

fn main() {
    let config = AppConfig::from_build_env();
    Logger::set_min_level(config.log_level);
    Logger::info_with_component("app", &format!("expense API at {}", config.api_base_url));

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
