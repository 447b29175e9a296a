pub mod classify;
pub mod line;
pub mod tally;
pub mod value_objects;
