use gloo::timers::future::TimeoutFuture;
use shared::{Profile, User};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, MouseEvent};
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::state::editing::{user_submit_plan, FormMode};
use crate::state::forms::UserForm;

#[derive(Properties, PartialEq)]
pub struct UserModalProps {
    pub is_open: bool,
    pub mode: FormMode,
    pub initial: Option<User>,
    pub on_saved: Callback<()>,
    pub on_close: Callback<()>,
}

fn field<F>(form: &UseStateHandle<UserForm>, apply: F) -> Callback<Event>
where
    F: Fn(&mut UserForm, String) + 'static,
{
    let form = form.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.value());
        form.set(next);
    })
}

fn checkbox<F>(form: &UseStateHandle<UserForm>, apply: F) -> Callback<Event>
where
    F: Fn(&mut UserForm, bool) + 'static,
{
    let form = form.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.checked());
        form.set(next);
    })
}

#[function_component(UserModal)]
pub fn user_modal(props: &UserModalProps) -> Html {
    let form = use_state(UserForm::default);
    let submitting = use_state(|| false);
    let error = use_state(|| Option::<String>::None);
    let success = use_state(|| false);
    let api = ApiClient::new();

    use_effect_with((props.is_open, props.initial.clone()), {
        let form = form.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let success = success.clone();
        move |(is_open, initial): &(bool, Option<User>)| {
            if *is_open {
                form.set(
                    initial
                        .as_ref()
                        .map(UserForm::from_user)
                        .unwrap_or_default(),
                );
                submitting.set(false);
                error.set(None);
                success.set(false);
            }
            || ()
        }
    });

    let on_profile_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.profile = match select.value().as_str() {
                "admin" => Profile::Admin,
                _ => Profile::User,
            };
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let success = success.clone();
        let mode = props.mode;
        let on_saved = props.on_saved.clone();
        let on_close = props.on_close.clone();
        let api = api.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let plan = user_submit_plan(mode);
            let payload = (*form).to_payload(mode);

            let submitting = submitting.clone();
            let error = error.clone();
            let success = success.clone();
            let on_saved = on_saved.clone();
            let on_close = on_close.clone();
            let api = api.clone();

            spawn_local(async move {
                submitting.set(true);
                error.set(None);

                match api.submit(&plan, &payload, "Failed to save user").await {
                    Ok(()) => {
                        success.set(true);
                        on_saved.emit(());
                        TimeoutFuture::new(1500).await;
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

    let password_placeholder = if props.mode.is_edit() {
        "Leave blank to keep the current password"
    } else {
        ""
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <h3>{props.mode.title("User")}</h3>

                {if let Some(error) = (*error).as_ref() {
                    html! { <div class="alert alert-error">{error}</div> }
                } else { html! {} }}
                {if *success {
                    html! { <div class="alert alert-success">{"User saved successfully!"}</div> }
                } else { html! {} }}

                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="user-username">{"Username"}</label>
                        <input
                            type="text"
                            id="user-username"
                            required=true
                            value={form.username.clone()}
                            onchange={field(&form, |f, v| f.username = v)}
                        />
                    </div>

                    <div class="form-group">
                        <label for="user-email">{"Email"}</label>
                        <input
                            type="email"
                            id="user-email"
                            required=true
                            value={form.email.clone()}
                            onchange={field(&form, |f, v| f.email = v)}
                        />
                    </div>

                    <div class="form-group">
                        <label for="user-password">{"Password"}</label>
                        <input
                            type="password"
                            id="user-password"
                            required={!props.mode.is_edit()}
                            placeholder={password_placeholder}
                            value={form.password.clone()}
                            onchange={field(&form, |f, v| f.password = v)}
                        />
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="user-profile">{"Profile"}</label>
                            <select id="user-profile" onchange={on_profile_change}>
                                <option value="user" selected={form.profile == Profile::User}>{"User"}</option>
                                <option value="admin" selected={form.profile == Profile::Admin}>{"Admin"}</option>
                            </select>
                        </div>
                        <div class="form-group checkbox-group">
                            <label>
                                <input
                                    type="checkbox"
                                    checked={form.active}
                                    onchange={checkbox(&form, |f, v| f.active = v)}
                                />
                                {"Active"}
                            </label>
                        </div>
                    </div>

                    // Capability flags only make sense for regular users;
                    // admins get everything implicitly.
                    {if form.profile == Profile::User {
                        html! {
                            <fieldset class="permissions">
                                <legend>{"Permissions"}</legend>
                                <label>
                                    <input
                                        type="checkbox"
                                        checked={form.can_access_vaccination}
                                        onchange={checkbox(&form, |f, v| f.can_access_vaccination = v)}
                                    />
                                    {"Vaccinations"}
                                </label>
                                <label>
                                    <input
                                        type="checkbox"
                                        checked={form.can_manage_pets}
                                        onchange={checkbox(&form, |f, v| f.can_manage_pets = v)}
                                    />
                                    {"Pets"}
                                </label>
                                <label>
                                    <input
                                        type="checkbox"
                                        checked={form.can_access_reports}
                                        onchange={checkbox(&form, |f, v| f.can_access_reports = v)}
                                    />
                                    {"Reports"}
                                </label>
                            </fieldset>
                        }
                    } else { html! {} }}

                    <div class="modal-buttons">
                        <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn btn-primary" disabled={*submitting}>
                            {if *submitting { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
