use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::state::forms::ChangePasswordForm;

#[derive(Properties, PartialEq)]
pub struct ChangePasswordModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

fn field<F>(form: &UseStateHandle<ChangePasswordForm>, apply: F) -> Callback<Event>
where
    F: Fn(&mut ChangePasswordForm, String) + 'static,
{
    let form = form.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.value());
        form.set(next);
    })
}

#[function_component(ChangePasswordModal)]
pub fn change_password_modal(props: &ChangePasswordModalProps) -> Html {
    let form = use_state(ChangePasswordForm::default);
    let submitting = use_state(|| false);
    let error = use_state(|| Option::<String>::None);
    let success = use_state(|| false);
    let api = ApiClient::new();

    use_effect_with(props.is_open, {
        let form = form.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let success = success.clone();
        move |is_open| {
            if *is_open {
                form.set(ChangePasswordForm::default());
                submitting.set(false);
                error.set(None);
                success.set(false);
            }
            || ()
        }
    });

    let on_submit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let success = success.clone();
        let on_close = props.on_close.clone();
        let api = api.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // Mismatch never reaches the network.
            let request = match form.validate() {
                Ok(request) => request,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };

            let submitting = submitting.clone();
            let error = error.clone();
            let success = success.clone();
            let on_close = on_close.clone();
            let api = api.clone();

            spawn_local(async move {
                submitting.set(true);
                error.set(None);

                match api.change_password(&request).await {
                    Ok(()) => {
                        success.set(true);
                        TimeoutFuture::new(2000).await;
                        on_close.emit(());
                    }
                    Err(message) => error.set(Some(message)),
                }

                submitting.set(false);
            });
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_modal_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <h3>{"Change Password"}</h3>

                {if let Some(error) = (*error).as_ref() {
                    html! { <div class="alert alert-error">{error}</div> }
                } else { html! {} }}
                {if *success {
                    html! { <div class="alert alert-success">{"Password changed successfully!"}</div> }
                } else { html! {} }}

                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="current-password">{"Current Password"}</label>
                        <input
                            type="password"
                            id="current-password"
                            required=true
                            value={form.current_password.clone()}
                            onchange={field(&form, |f, v| f.current_password = v)}
                        />
                    </div>

                    <div class="form-group">
                        <label for="new-password">{"New Password"}</label>
                        <input
                            type="password"
                            id="new-password"
                            required=true
                            value={form.new_password.clone()}
                            onchange={field(&form, |f, v| f.new_password = v)}
                        />
                    </div>

                    <div class="form-group">
                        <label for="confirm-password">{"Confirm New Password"}</label>
                        <input
                            type="password"
                            id="confirm-password"
                            required=true
                            value={form.confirm_password.clone()}
                            onchange={field(&form, |f, v| f.confirm_password = v)}
                        />
                    </div>

                    <div class="modal-buttons">
                        <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn btn-primary" disabled={*submitting}>
                            {if *submitting { "Saving..." } else { "Change Password" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
