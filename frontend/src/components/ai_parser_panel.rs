use shared::FlowStatus;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AiParserPanelProps {
    pub text: String,
    pub result: String,
    pub status: FlowStatus,
    pub on_text_input: Callback<String>,
    pub on_parse: Callback<()>,
}

#[function_component(AiParserPanel)]
pub fn ai_parser_panel(props: &AiParserPanelProps) -> Html {
    let oninput = {
        let on_text_input = props.on_text_input.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            on_text_input.emit(textarea.value());
        })
    };

    let onclick = {
        let on_parse = props.on_parse.clone();
        Callback::from(move |_: MouseEvent| on_parse.emit(()))
    };

    html! {
        <section class="ai-parse-section">
            <h2>{"Describe an Expense"}</h2>
            <textarea
                id="ai-text"
                class="ai-text"
                rows="3"
                placeholder="Paid 450 for electricity bill today..."
                value={props.text.clone()}
                {oninput}
            />
            // Never disabled: every click issues its own request
            <button
                id="ai-parse-btn"
                type="button"
                class="btn btn-secondary"
                aria-busy={props.status.is_requesting().to_string()}
                {onclick}
            >
                {"Fill Form with AI"}
            </button>
            <pre id="ai-result" class="ai-result">{&props.result}</pre>
        </section>
    }
}
