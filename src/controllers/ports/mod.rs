pub mod field_presenter;
