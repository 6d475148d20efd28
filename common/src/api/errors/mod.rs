pub mod app_error;
pub mod group_error;
