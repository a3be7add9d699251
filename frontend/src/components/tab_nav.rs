use yew::prelude::*;

use crate::state::routing::Tab;

#[derive(Properties, PartialEq)]
pub struct TabNavProps {
    /// Tabs the current user may see, in display order.
    pub tabs: Vec<Tab>,
    pub active: Tab,
    pub on_select: Callback<Tab>,
}

#[function_component(TabNav)]
pub fn tab_nav(props: &TabNavProps) -> Html {
    html! {
        <nav class="nav-tabs">
            {for props.tabs.iter().map(|tab| {
                let tab = *tab;
                let class = if tab == props.active { "nav-tab active" } else { "nav-tab" };
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(tab))
                };
                html! {
                    <button {class} {onclick}>{tab.label()}</button>
                }
            })}
        </nav>
    }
}
