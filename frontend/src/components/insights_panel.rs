use shared::InsightsView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InsightsPanelProps {
    pub view: InsightsView,
    pub on_request: Callback<()>,
}

#[function_component(InsightsPanel)]
pub fn insights_panel(props: &InsightsPanelProps) -> Html {
    let onclick = {
        let on_request = props.on_request.clone();
        Callback::from(move |_: MouseEvent| on_request.emit(()))
    };

    html! {
        <section class="insights-section">
            <h2>{"AI Insights"}</h2>
            <button
                id="ai-insights-btn"
                type="button"
                class="btn btn-secondary"
                aria-busy={props.view.status().is_requesting().to_string()}
                {onclick}
            >
                {"Get Insights"}
            </button>
            <div id="insights-box" class="insights-box">{props.view.text()}</div>
        </section>
    }
}
