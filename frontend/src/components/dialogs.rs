use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub message: String,
    #[prop_or_default]
    pub detail: Option<String>,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Modal yes/no prompt. Clicking the backdrop counts as cancel.
#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let on_backdrop_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_cancel.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_confirm_click = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" role="dialog" onclick={on_modal_click}>
                <p class="modal-message">{&props.message}</p>
                {if let Some(detail) = &props.detail {
                    html! { <p class="modal-detail">{detail}</p> }
                } else { html! {} }}
                <div class="modal-buttons">
                    <button type="button" class="btn" onclick={on_cancel_click}>{"Cancel"}</button>
                    <button type="button" class="btn danger" onclick={on_confirm_click}>{"OK"}</button>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AlertDialogProps {
    pub message: String,
    pub on_dismiss: Callback<()>,
}

#[function_component(AlertDialog)]
pub fn alert_dialog(props: &AlertDialogProps) -> Html {
    let on_dismiss_click = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal" role="alertdialog">
                <p class="modal-message">{&props.message}</p>
                <div class="modal-buttons">
                    <button type="button" class="btn primary" onclick={on_dismiss_click}>{"OK"}</button>
                </div>
            </div>
        </div>
    }
}
