pub use utilities::strings;

pub mod api;
pub mod configuration;
pub mod defaults;
pub mod grouping;
pub mod listing;
pub mod logging;
pub mod models;
pub mod paths;
pub mod utilities;
