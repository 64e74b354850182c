pub mod badge;
pub mod bar_chart;
pub mod card;
pub mod data_table;
pub mod page_header;
pub mod sidebar;

pub use badge::*;
pub use bar_chart::*;
pub use card::*;
pub use data_table::*;
pub use page_header::*;
pub use sidebar::*;
