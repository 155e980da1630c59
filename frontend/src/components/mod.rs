pub mod ai_parser_panel;
pub mod expense_table;
pub mod forms;
pub mod header;
pub mod insights_panel;

pub use ai_parser_panel::AiParserPanel;
pub use expense_table::ExpenseTable;
pub use forms::ExpenseForm;
pub use header::Header;
pub use insights_panel::InsightsPanel;
