use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub username: String,
    pub on_change_password: Callback<()>,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_change_password = {
        let on_change_password = props.on_change_password.clone();
        Callback::from(move |_: MouseEvent| on_change_password.emit(()))
    };

    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>{"🐾 Vet Admin"}</h1>
                <div class="header-actions">
                    <span class="user-welcome">{format!("Hello, {}!", props.username)}</span>
                    <button class="btn btn-secondary" onclick={on_change_password}>
                        {"Change Password"}
                    </button>
                    <button class="btn btn-secondary" onclick={on_logout}>
                        {"Logout"}
                    </button>
                </div>
            </div>
        </header>
    }
}
