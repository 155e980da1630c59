use shared::{ExpenseForm as ExpenseFormValues, FormField};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Category suggestions offered by the parse endpoint
const CATEGORY_OPTIONS: [&str; 5] = ["Stock purchase", "Electricity", "Rent", "Salary", "Misc"];

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    pub form: ExpenseFormValues,
    pub on_field_input: Callback<(FormField, String)>,
    pub on_submit: Callback<()>,
}

fn field_input(on_field_input: &Callback<(FormField, String)>, field: FormField) -> Callback<InputEvent> {
    let on_field_input = on_field_input.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_field_input.emit((field, input.value()));
    })
}

#[function_component(ExpenseForm)]
pub fn expense_form(props: &ExpenseFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <section class="add-expense-section">
            <h2>{"Add Expense"}</h2>

            // No constraint validation: whatever is in the inputs gets sent
            <form id="expense-form" class="expense-form" novalidate=true {onsubmit}>
                <div class="form-group">
                    <label for={FormField::Date.id()}>{"Date"}</label>
                    <input
                        type="date"
                        id={FormField::Date.id()}
                        name={FormField::Date.id()}
                        value={props.form.date.clone()}
                        oninput={field_input(&props.on_field_input, FormField::Date)}
                    />
                </div>

                <div class="form-group">
                    <label for={FormField::Amount.id()}>{"Amount"}</label>
                    <input
                        type="text"
                        inputmode="decimal"
                        id={FormField::Amount.id()}
                        name={FormField::Amount.id()}
                        placeholder="0.00"
                        value={props.form.amount.clone()}
                        oninput={field_input(&props.on_field_input, FormField::Amount)}
                    />
                </div>

                <div class="form-group">
                    <label for={FormField::Category.id()}>{"Category"}</label>
                    <input
                        type="text"
                        id={FormField::Category.id()}
                        name={FormField::Category.id()}
                        list="category-options"
                        value={props.form.category.clone()}
                        oninput={field_input(&props.on_field_input, FormField::Category)}
                    />
                    <datalist id="category-options">
                        {for CATEGORY_OPTIONS.iter().map(|category| html! { <option value={*category} /> })}
                    </datalist>
                </div>

                <div class="form-group">
                    <label for={FormField::Description.id()}>{"Description"}</label>
                    <input
                        type="text"
                        id={FormField::Description.id()}
                        name={FormField::Description.id()}
                        value={props.form.description.clone()}
                        oninput={field_input(&props.on_field_input, FormField::Description)}
                    />
                </div>

                <button type="submit" class="btn btn-primary">{"Add Expense"}</button>
            </form>
        </section>
    }
}
