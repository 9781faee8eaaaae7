pub mod catalog;
pub mod charts;
pub mod rank;
pub mod rating;
