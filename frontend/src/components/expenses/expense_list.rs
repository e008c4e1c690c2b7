use shared::dates::display_date;
use shared::money::format_money;
use shared::Expense;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExpenseListProps {
    pub expenses: Vec<Expense>,
    pub loading: bool,
    pub currency_symbol: String,
    /// Id of a record whose delete is in flight
    #[prop_or_default]
    pub deleting: Option<String>,
    pub on_edit: Callback<Expense>,
    pub on_delete: Callback<String>,
}

/// Secondary line under the title: "Mar 15, 2024 • Food".
pub fn row_meta(expense: &Expense) -> String {
    format!("{} • {}", display_date(&expense.date), expense.category)
}

#[function_component(ExpenseList)]
pub fn expense_list(props: &ExpenseListProps) -> Html {
    if props.loading {
        return html! { <p class="loading">{"Loading..."}</p> };
    }

    if props.expenses.is_empty() {
        return html! { <p class="list-empty">{"No expenses yet."}</p> };
    }

    html! {
        <div class="list">
            {for props.expenses.iter().enumerate().map(|(index, expense)| {
                let on_edit = {
                    let on_edit = props.on_edit.clone();
                    let expense = expense.clone();
                    Callback::from(move |_: MouseEvent| on_edit.emit(expense.clone()))
                };

                // Unsaved records have nothing to delete on the backend
                let delete_button = match expense.id.clone() {
                    Some(id) => {
                        let busy = props.deleting.as_deref() == Some(id.as_str());
                        let on_delete = props.on_delete.clone();
                        html! {
                            <button
                                class="btn small danger"
                                disabled={busy}
                                onclick={Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))}
                            >
                                {if busy { "Deleting..." } else { "Delete" }}
                            </button>
                        }
                    }
                    None => html! {},
                };

                html! {
                    <div key={expense.id.clone().unwrap_or_else(|| format!("unsaved-{}", index))} class="list-item">
                        <div>
                            <div class="title">{&expense.title}</div>
                            <div class="meta">{row_meta(expense)}</div>
                        </div>
                        <div class="controls">
                            <div class="amount">{format_money(expense.amount, &props.currency_symbol)}</div>
                            <button class="btn small" onclick={on_edit}>{"Edit"}</button>
                            {delete_button}
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
