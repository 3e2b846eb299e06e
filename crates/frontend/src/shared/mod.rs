pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod export;
pub mod http;
pub mod icons;
pub mod list_controller;
pub mod list_pipeline;
pub mod list_state;
pub mod page_frame;
pub mod page_standard;
pub mod selection;
