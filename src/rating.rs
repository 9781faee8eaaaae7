use crate::catalog::{Dish, Ratings};

/// Mean of the three sub-scores, rounded to one decimal digit
/// (half away from zero). Always recomputed from the record so a later
/// edit of the source data can never leave a stale cached score behind.
pub fn average_rating(dish: &Dish) -> f64 {
    let Ratings {
        taste,
        texture,
        bang_for_buck,
    } = dish.ratings;

    let mean = (taste + texture + bang_for_buck) / 3.0;
    (mean * 10.0).round() / 10.0
}
