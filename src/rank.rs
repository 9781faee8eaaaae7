use crate::catalog::{Catalog, Dish};
use crate::rating::average_rating;
use derive_builder::Builder;

/// Default number of entries the dashboard shows per ranking tab.
pub const DEFAULT_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// highest average rating first ("Top Rated" tab)
    Descending,
    /// lowest first ("Needs Improvement" tab)
    Ascending,
}

#[derive(Builder)]
pub struct RankProps {
    #[builder(default = "Direction::Descending")]
    direction: Direction,
    #[builder(default = "DEFAULT_COUNT")]
    count: usize,
}

/// Sorts a copy of the catalog by average rating and truncates it to
/// `count` entries. The sort is stable, so dishes with equal averages keep
/// their catalog order and repeated calls return identical sequences. The
/// catalog itself is never touched.
pub fn ranked(catalog: &Catalog, props: RankProps) -> Vec<Dish> {
    let RankProps { direction, count } = props;

    let mut dishes = catalog.dishes().to_vec();
    dishes.sort_by(|a, b| {
        let (a, b) = (average_rating(a), average_rating(b));
        match direction {
            Direction::Descending => b.total_cmp(&a),
            Direction::Ascending => a.total_cmp(&b),
        }
    });
    dishes.truncate(count);
    dishes
}

pub fn top_rated(catalog: &Catalog, count: usize) -> Vec<Dish> {
    ranked(
        catalog,
        RankProps {
            direction: Direction::Descending,
            count,
        },
    )
}

pub fn bottom_rated(catalog: &Catalog, count: usize) -> Vec<Dish> {
    ranked(
        catalog,
        RankProps {
            direction: Direction::Ascending,
            count,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Ratings;

    fn names(dishes: &[Dish]) -> Vec<&str> {
        dishes.iter().map(|dish| dish.name.as_str()).collect()
    }

    #[test]
    fn top_five_of_sample_catalog() {
        let catalog = Catalog::sample();
        let top = top_rated(&catalog, 5);
        assert_eq!(
            names(&top),
            [
                "Margherita Pizza",
                "Truffle Mushroom Risotto",
                "Grilled Salmon",
                "Chocolate Lava Cake",
                "Beef Burger",
            ]
        );
        assert_eq!(average_rating(&top[0]), 4.8);
    }

    #[test]
    fn bottom_five_of_sample_catalog() {
        let catalog = Catalog::sample();
        let bottom = bottom_rated(&catalog, 5);
        assert_eq!(
            names(&bottom),
            [
                "Garlic Bread",
                "Tomato Soup",
                "Fish Tacos",
                "Caesar Salad",
                "Panna Cotta",
            ]
        );
        assert_eq!(average_rating(&bottom[0]), 2.7);
    }

    #[test]
    fn props_builder_defaults() {
        let catalog = Catalog::sample();
        let defaulted = ranked(&catalog, RankPropsBuilder::default().build().unwrap());
        assert_eq!(names(&defaulted), names(&top_rated(&catalog, DEFAULT_COUNT)));
    }

    #[test]
    fn count_boundaries() {
        let catalog = Catalog::sample();
        assert!(top_rated(&catalog, 0).is_empty());

        let all = top_rated(&catalog, 100);
        assert_eq!(all.len(), catalog.len());

        // no duplication, every dish exactly once
        let mut ids: Vec<u32> = all.iter().map(|dish| dish.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn empty_catalog_ranks_empty() {
        let catalog = Catalog::new(vec![]).unwrap();
        assert!(top_rated(&catalog, 5).is_empty());
        assert!(bottom_rated(&catalog, 5).is_empty());
    }

    #[test]
    fn ranking_is_idempotent_and_non_destructive() {
        let catalog = Catalog::sample();
        let before: Vec<u32> = catalog.dishes().iter().map(|dish| dish.id).collect();

        let first = top_rated(&catalog, 5);
        let second = top_rated(&catalog, 5);
        let first_ids: Vec<u32> = first.iter().map(|dish| dish.id).collect();
        let second_ids: Vec<u32> = second.iter().map(|dish| dish.id).collect();
        assert_eq!(first_ids, second_ids);

        let after: Vec<u32> = catalog.dishes().iter().map(|dish| dish.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let tied = |id, name: &str| Dish {
            id,
            name: name.to_string(),
            price: 10.0,
            ratings: Ratings {
                taste: 4.0,
                texture: 4.0,
                bang_for_buck: 4.0,
            },
            review_count: 1,
            image: String::new(),
        };
        let catalog = Catalog::new(vec![tied(1, "first"), tied(2, "second"), tied(3, "third")])
            .unwrap();

        assert_eq!(names(&top_rated(&catalog, 3)), ["first", "second", "third"]);
        assert_eq!(names(&bottom_rated(&catalog, 3)), ["first", "second", "third"]);
    }

    #[test]
    fn ties_in_sample_catalog_follow_catalog_order() {
        // Grilled Salmon (id 2) and Chocolate Lava Cake (id 5) both round
        // to 4.5; Beef Burger (id 6) and Tiramisu (id 8) both to 4.4.
        let catalog = Catalog::sample();
        let top = top_rated(&catalog, 6);
        let ids: Vec<u32> = top.iter().map(|dish| dish.id).collect();
        assert_eq!(ids, [3, 1, 2, 5, 6, 8]);
    }
}
