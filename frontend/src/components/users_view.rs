use shared::{format_date_time, Profile, User};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UsersViewProps {
    pub users: Vec<User>,
    /// Id of the logged-in user; their own row gets no delete control.
    pub current_user_id: i64,
    pub on_add: Callback<()>,
    pub on_edit: Callback<i64>,
    pub on_delete: Callback<i64>,
}

#[function_component(UsersView)]
pub fn users_view(props: &UsersViewProps) -> Html {
    let on_add = {
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| on_add.emit(()))
    };

    html! {
        <section class="users-section">
            <div class="section-header">
                <h2>{"Users"}</h2>
                <button class="btn btn-primary" onclick={on_add}>{"👤 Add User"}</button>
            </div>

            <div class="table-container">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Username"}</th>
                            <th>{"Email"}</th>
                            <th>{"Profile"}</th>
                            <th>{"Status"}</th>
                            <th>{"Last Login"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for props.users.iter().map(|user| {
                            let edit = {
                                let on_edit = props.on_edit.clone();
                                let id = user.id;
                                Callback::from(move |_: MouseEvent| on_edit.emit(id))
                            };
                            let delete = {
                                let on_delete = props.on_delete.clone();
                                let id = user.id;
                                Callback::from(move |_: MouseEvent| on_delete.emit(id))
                            };
                            let profile_badge = match user.profile {
                                Profile::Admin => ("badge badge-admin", "Admin"),
                                Profile::User => ("badge badge-user", "User"),
                            };
                            let status_badge = if user.active {
                                ("badge badge-active", "Active")
                            } else {
                                ("badge badge-inactive", "Inactive")
                            };
                            let last_login = user
                                .last_login
                                .as_deref()
                                .map(format_date_time)
                                .unwrap_or_else(|| "Never".to_string());
                            html! {
                                <tr key={user.id}>
                                    <td>{&user.username}</td>
                                    <td>{&user.email}</td>
                                    <td><span class={profile_badge.0}>{profile_badge.1}</span></td>
                                    <td><span class={status_badge.0}>{status_badge.1}</span></td>
                                    <td>{last_login}</td>
                                    <td>
                                        <button class="btn" onclick={edit}>{"✏️ Edit"}</button>
                                        {if user.id != props.current_user_id {
                                            html! {
                                                <button class="btn btn-danger" onclick={delete}>
                                                    {"🗑️ Delete"}
                                                </button>
                                            }
                                        } else { html! {} }}
                                    </td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>
        </section>
    }
}
