use actix_web::{web, HttpResponse};
use dish_analytics::rating::average_rating;
use dish_analytics::{catalog, charts, rank};

pub(super) struct ApiState {
    catalog: catalog::Catalog,
}

impl ApiState {
    pub(super) fn new() -> anyhow::Result<Self> {
        let catalog = match std::env::var("DISHES_FILE") {
            Ok(path) => catalog::Catalog::from_json_file(&path)?,
            Err(_) => catalog::Catalog::sample(),
        };
        tracing::info!("serving a catalog of {} dishes", catalog.len());
        Ok(Self { catalog })
    }
}

#[derive(serde::Serialize)]
struct ErrJsonResp {
    message: String,
}

/// Dish plus the fields the dashboard's rank badge and star display need.
/// Rank is the 1-based position in the sorted sequence, so tied dishes
/// still get distinct sequential ranks.
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct RankedDish {
    rank: usize,
    average_rating: f64,
    #[serde(flatten)]
    dish: catalog::Dish,
}

fn with_ranks(ranked_dishes: Vec<catalog::Dish>) -> Vec<RankedDish> {
    ranked_dishes
        .into_iter()
        .enumerate()
        .map(|(index, ranked_dish)| RankedDish {
            rank: index + 1,
            average_rating: average_rating(&ranked_dish),
            dish: ranked_dish,
        })
        .collect()
}

#[derive(serde::Deserialize)]
pub(super) struct RankQuery {
    count: Option<usize>,
}

#[actix_web::get("/api/v1/dishes")]
pub(super) async fn dishes(data: web::Data<ApiState>) -> HttpResponse {
    HttpResponse::Ok().json(data.catalog.dishes())
}

#[actix_web::get("/api/v1/dishes/top")]
pub(super) async fn top_rated(
    data: web::Data<ApiState>,
    query: web::Query<RankQuery>,
) -> HttpResponse {
    let count = query.count.unwrap_or(rank::DEFAULT_COUNT);
    HttpResponse::Ok().json(with_ranks(rank::top_rated(&data.catalog, count)))
}

#[actix_web::get("/api/v1/dishes/bottom")]
pub(super) async fn bottom_rated(
    data: web::Data<ApiState>,
    query: web::Query<RankQuery>,
) -> HttpResponse {
    let count = query.count.unwrap_or(rank::DEFAULT_COUNT);
    HttpResponse::Ok().json(with_ranks(rank::bottom_rated(&data.catalog, count)))
}

#[derive(serde::Deserialize)]
pub(super) struct SearchQuery {
    pattern: String,
}

#[actix_web::get("/api/v1/dishes/search")]
pub(super) async fn search(
    data: web::Data<ApiState>,
    query: web::Query<SearchQuery>,
) -> HttpResponse {
    HttpResponse::Ok().json(catalog::search(&data.catalog, &query.pattern))
}

#[derive(serde::Deserialize)]
pub(super) struct DishPath {
    id: u32,
}

#[actix_web::get("/api/v1/dishes/{id}")]
pub(super) async fn dish(data: web::Data<ApiState>, path: web::Path<DishPath>) -> HttpResponse {
    match data.catalog.get(path.id) {
        Some(dish) => HttpResponse::Ok().json(dish),
        None => {
            tracing::error!("no dish with id {}", path.id);
            HttpResponse::NotFound().json(ErrJsonResp {
                message: format!("no dish with id {}", path.id),
            })
        }
    }
}

#[actix_web::get("/api/v1/charts/performance")]
pub(super) async fn performance_chart(data: web::Data<ApiState>) -> HttpResponse {
    HttpResponse::Ok().json(charts::performance_points(&data.catalog))
}

#[actix_web::get("/api/v1/charts/weak-points")]
pub(super) async fn weak_points_chart(
    data: web::Data<ApiState>,
    query: web::Query<RankQuery>,
) -> HttpResponse {
    let count = query.count.unwrap_or(charts::WEAK_POINTS_COUNT);
    HttpResponse::Ok().json(charts::weak_points(&data.catalog, count))
}
