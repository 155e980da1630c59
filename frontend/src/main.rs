use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod services;
#[cfg(test)]
mod test_utils;

use components::{AiParserPanel, ExpenseForm, ExpenseTable, Header, InsightsPanel};
use config::AppConfig;
use hooks::use_ai_insights::use_ai_insights;
use hooks::use_ai_parser::use_ai_parser;
use hooks::use_expense_form::use_expense_form;
use hooks::use_expenses::use_expenses;
use services::api::ApiClient;
use services::logging::Logger;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: AppConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let api_client = use_memo(props.config.clone(), |config| ApiClient::from_config(config));

    let expense_form = use_expense_form();
    let expenses = use_expenses(&api_client, &expense_form.form, expense_form.dispatcher.clone());
    let ai_parser = use_ai_parser(&api_client, expense_form.dispatcher.clone());
    let ai_insights = use_ai_insights(&api_client);

    html! {
        <>
            <Header api_base_url={api_client.base_url().to_string()} />

            <main class="main">
                <div class="container">
                    <ExpenseForm
                        form={expense_form.form.clone()}
                        on_field_input={expense_form.on_field_input.clone()}
                        on_submit={expenses.actions.submit_expense.clone()}
                    />

                    <AiParserPanel
                        text={ai_parser.text.clone()}
                        result={ai_parser.result.clone()}
                        status={ai_parser.status}
                        on_text_input={ai_parser.actions.on_text_input.clone()}
                        on_parse={ai_parser.actions.parse.clone()}
                    />

                    <ExpenseTable expenses={expenses.expenses.clone()} />

                    <InsightsPanel
                        view={ai_insights.view.clone()}
                        on_request={ai_insights.request_insights.clone()}
                    />
                </div>
            </main>
        </>
    }
}

fn main() {
    let config = AppConfig::from_env();
    Logger::info_with_component("app", &format!("Using API at {}", config.api_base_url));
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
