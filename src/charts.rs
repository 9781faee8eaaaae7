use crate::catalog::Catalog;
use crate::rank::bottom_rated;
use crate::rating::average_rating;

/// Default number of dishes the weak-points breakdown covers.
pub const WEAK_POINTS_COUNT: usize = 7;

/// Dish names longer than this are cut for chart axis labels.
const NAME_DISPLAY_LIMIT: usize = 15;

/// Improvement-priority band for the performance scatter plot. A dish with
/// a low rating and many reviews is the one worth fixing first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityTier {
    High,
    Medium,
    Low,
}

impl PriorityTier {
    pub fn for_rating(rating: f64) -> Self {
        if rating < 3.5 {
            Self::High
        } else if rating < 4.2 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// One point of the rating-vs-review-volume scatter plot.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PerformancePoint {
    pub name: String,
    pub rating: f64,
    pub reviews: u32,
    pub tier: PriorityTier,
}

pub fn performance_points(catalog: &Catalog) -> Vec<PerformancePoint> {
    catalog
        .dishes()
        .iter()
        .map(|dish| {
            let rating = average_rating(dish);
            PerformancePoint {
                name: dish.name.clone(),
                rating,
                reviews: dish.review_count,
                tier: PriorityTier::for_rating(rating),
            }
        })
        .collect()
}

/// Sub-score breakdown for one of the lowest-rated dishes.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeakPointRow {
    pub name: String,
    pub taste: f64,
    pub texture: f64,
    pub bang_for_buck: f64,
}

/// The bottom `count` dishes with their raw sub-scores, lowest average
/// first, for the "dishes needing attention" bar chart.
pub fn weak_points(catalog: &Catalog, count: usize) -> Vec<WeakPointRow> {
    bottom_rated(catalog, count)
        .into_iter()
        .map(|dish| WeakPointRow {
            name: display_name(&dish.name),
            taste: dish.ratings.taste,
            texture: dish.ratings.texture,
            bang_for_buck: dish.ratings.bang_for_buck,
        })
        .collect()
}

fn display_name(name: &str) -> String {
    if name.chars().count() > NAME_DISPLAY_LIMIT {
        let cut: String = name.chars().take(NAME_DISPLAY_LIMIT).collect();
        format!("{cut}...")
    } else {
        name.to_string()
    }
}
