pub mod filter_panel;
pub mod filter_select;
pub mod page_header;
pub mod pagination_controls;
pub mod search_input;
pub mod stat_card;
pub mod table;
pub mod year_selector;
