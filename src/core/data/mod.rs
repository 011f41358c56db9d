pub mod classification_field;
pub mod complex;
pub mod complex_rect;
pub mod grid_shape;
pub mod point_state;
