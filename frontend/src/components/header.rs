use yew::prelude::*;

use crate::config::AppConfig;

#[function_component(Header)]
pub fn header() -> Html {
    let config = use_context::<AppConfig>();

    html! {
        <header class="header">
            <h1>{"EXPENSE TRACKER"}</h1>
            {if let Some(config) = config {
                html! { <span class="header-endpoint" title="Expense API">{config.api_base_url}</span> }
            } else { html! {} }}
        </header>
    }
}
