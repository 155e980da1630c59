use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub api_base_url: String,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{"Expense Tracker"}</h1>
                <div class="header-right">
                    <span class="connection-status">{format!("Server: {}", props.api_base_url)}</span>
                </div>
            </div>
        </header>
    }
}
