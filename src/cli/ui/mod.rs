pub mod budget_view;
pub mod style;
pub mod table;

pub use budget_view::BudgetView;
pub use table::{Alignment, Table, TableColumn};
