use anyhow::{bail, Context};
use fuzzy_matcher::{skim::SkimMatcherV2, FuzzyMatcher};
use std::collections::HashSet;
use std::path::Path;

/// The three sub-scores a dish is reviewed on. Each value is expected to be
/// within [0, 5]; the catalog only enforces that they are finite numbers.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ratings {
    pub taste: f64,
    pub texture: f64,
    pub bang_for_buck: f64,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub ratings: Ratings,
    pub review_count: u32,
    /// URI of the display asset, not validated here
    pub image: String,
}

/// Read-only ordered collection of dishes. Built once at startup and never
/// mutated afterwards, so it can be shared freely across request handlers.
#[derive(Debug, Clone)]
pub struct Catalog {
    dishes: Vec<Dish>,
}

impl Catalog {
    /// Validates and wraps a list of dishes. Malformed records (duplicate id,
    /// empty name, non-finite sub-score) are rejected here so everything
    /// downstream can assume well-formed data.
    pub fn new(dishes: Vec<Dish>) -> anyhow::Result<Self> {
        let mut seen = HashSet::new();
        for dish in &dishes {
            if !seen.insert(dish.id) {
                bail!("duplicate dish id {} in catalog", dish.id);
            }
            if dish.name.is_empty() {
                bail!("dish {} has an empty name", dish.id);
            }
            let Ratings {
                taste,
                texture,
                bang_for_buck,
            } = dish.ratings;
            if !taste.is_finite() || !texture.is_finite() || !bang_for_buck.is_finite() {
                bail!("dish {} ({}) has a non-numeric sub-score", dish.id, dish.name);
            }
        }

        Ok(Self { dishes })
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("fail to read dish file {}", path.display()))?;
        let dishes: Vec<Dish> = serde_json::from_str(&raw)
            .with_context(|| format!("fail to parse dish file {}", path.display()))?;
        Self::new(dishes).with_context(|| format!("invalid dish data in {}", path.display()))
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Dish> {
        self.dishes.iter().find(|dish| dish.id == id)
    }

    /// The builtin demo dataset the dashboard ships with.
    pub fn sample() -> Self {
        let dish = |id, name: &str, price, taste, texture, bang_for_buck, review_count, image: &str| Dish {
            id,
            name: name.to_string(),
            price,
            ratings: Ratings {
                taste,
                texture,
                bang_for_buck,
            },
            review_count,
            image: format!("https://images.unsplash.com/{image}?w=400&h=300&fit=crop"),
        };

        Self {
            dishes: vec![
                dish(1, "Truffle Mushroom Risotto", 28.0, 4.8, 4.7, 4.2, 156, "photo-1476124369491-e7addf5db371"),
                dish(2, "Grilled Salmon", 32.0, 4.6, 4.8, 4.0, 203, "photo-1485921325833-c519f76c4927"),
                dish(3, "Margherita Pizza", 16.0, 4.9, 4.6, 4.9, 342, "photo-1574071318508-1cdbab80d002"),
                dish(4, "Caesar Salad", 12.0, 3.8, 3.5, 3.2, 128, "photo-1546793665-c74683f339c1"),
                dish(5, "Chocolate Lava Cake", 10.0, 4.7, 4.5, 4.3, 267, "photo-1624353365286-3f8d62daad51"),
                dish(6, "Beef Burger", 18.0, 4.4, 4.2, 4.5, 412, "photo-1568901346375-23c9450c58cd"),
                dish(7, "Tomato Soup", 8.0, 3.2, 2.9, 3.0, 89, "photo-1547592166-23ac45744acd"),
                dish(8, "Tiramisu", 12.0, 4.5, 4.6, 4.1, 198, "photo-1571877227200-a0d98ea607e9"),
                dish(9, "Fish Tacos", 14.0, 3.5, 3.3, 3.4, 145, "photo-1551504734-5ee1c4a1479b"),
                dish(10, "Lobster Bisque", 22.0, 4.6, 4.4, 3.8, 176, "photo-1547592166-23ac45744acd"),
                dish(11, "Garlic Bread", 6.0, 2.8, 2.5, 2.7, 94, "photo-1573140401552-388e3c0b4972"),
                dish(12, "Panna Cotta", 11.0, 4.3, 4.4, 4.0, 132, "photo-1488477181946-6428a0291777"),
            ],
        }
    }
}

/// Fuzzy match dishes by name, in catalog order.
pub fn search<'a>(catalog: &'a Catalog, pattern: &str) -> Vec<&'a Dish> {
    let matcher = SkimMatcherV2::default();
    catalog
        .dishes()
        .iter()
        .filter(|dish| matcher.fuzzy_match(&dish.name, pattern).is_some())
        .collect()
}
