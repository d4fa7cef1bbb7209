pub mod date_input;
pub mod stat_card;
pub mod table;
pub mod ui;

pub use date_input::DateInput;
pub use stat_card::StatCard;
