use shared::LoginRequest;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub on_login: Callback<LoginRequest>,
    pub error: Option<String>,
    pub logging_in: bool,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);

    let on_username_change = {
        let username = username.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_login.emit(LoginRequest {
                username: (*username).clone(),
                password: (*password).clone(),
            });
        })
    };

    html! {
        <section class="login-section">
            <div class="login-card">
                <h1>{"🐾 Vet Admin"}</h1>

                {if let Some(error) = props.error.as_ref() {
                    html! { <div class="alert alert-error">{error}</div> }
                } else { html! {} }}

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="username">{"Username"}</label>
                        <input
                            type="text"
                            id="username"
                            value={(*username).clone()}
                            onchange={on_username_change}
                            disabled={props.logging_in}
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            value={(*password).clone()}
                            onchange={on_password_change}
                            disabled={props.logging_in}
                        />
                    </div>

                    <button type="submit" class="btn btn-primary" disabled={props.logging_in}>
                        {if props.logging_in { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </section>
    }
}
