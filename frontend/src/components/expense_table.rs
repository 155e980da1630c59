use shared::Expense;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExpenseTableProps {
    pub expenses: Vec<Expense>,
}

/// Renders the full expense list. The body is rebuilt from `expenses` on
/// every render; no rows survive from an earlier list.
#[function_component(ExpenseTable)]
pub fn expense_table(props: &ExpenseTableProps) -> Html {
    html! {
        <section class="expenses-section">
            <h2>{"Expenses"}</h2>
            <div class="table-container">
                <table id="expense-table" class="expense-table">
                    <thead>
                        <tr>
                            <th>{"Date"}</th>
                            <th>{"Description"}</th>
                            <th>{"Category"}</th>
                            <th>{"Amount"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for props.expenses.iter().map(|expense| {
                            let [date, description, category, amount] = expense.cells();
                            html! {
                                <tr>
                                    <td class="date">{date}</td>
                                    <td class="description">{description}</td>
                                    <td class="category">{category}</td>
                                    <td class="amount">{amount}</td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>
        </section>
    }
}
