pub mod errors;
pub mod escape_radius;
pub mod field;
pub mod julia_config;
pub mod params;
