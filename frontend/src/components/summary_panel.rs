use shared::money::format_money;
use shared::{CategoryTotal, Summary};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryPanelProps {
    pub summary: Summary,
    pub loading: bool,
    pub currency_symbol: String,
}

/// "Food: ₹120 (3)"
pub fn category_line(category: &CategoryTotal, currency_symbol: &str) -> String {
    format!(
        "{}: {} ({})",
        category.category,
        format_money(category.total, currency_symbol),
        category.count
    )
}

#[function_component(SummaryPanel)]
pub fn summary_panel(props: &SummaryPanelProps) -> Html {
    let summary = &props.summary;

    html! {
        <div class="summary">
            <h3>{"Summary"}</h3>
            {if props.loading {
                html! { <p class="loading">{"Loading summary..."}</p> }
            } else {
                html! {
                    <>
                        <p>
                            <strong>{"Total expenses: "}</strong>
                            <span class="total-value">{format_money(summary.total, &props.currency_symbol)}</span>
                        </p>
                        <p><strong>{"Entries: "}</strong>{summary.count}</p>

                        <h4>{"By Category"}</h4>
                        {if summary.by_category.is_empty() {
                            html! { <p>{"No categories yet."}</p> }
                        } else {
                            html! {
                                <ul class="category-list">
                                    {for summary.by_category.iter().map(|category| html! {
                                        <li key={category.category.clone()}>
                                            {category_line(category, &props.currency_symbol)}
                                        </li>
                                    })}
                                </ul>
                            }
                        }}
                    </>
                }
            }}
        </div>
    }
}
