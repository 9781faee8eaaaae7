use actix_cors::Cors;
use actix_web::{web, App, HttpServer};

mod api;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(true)
        .with_file(false)
        .pretty()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("fail to setup logging");

    let state = web::Data::new(api::ApiState::new()?);
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    tracing::info!("dashboard api listening on {addr}");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(
                Cors::default()
                    .allowed_origin("http://localhost:3000")
                    .allow_any_method()
                    .allow_any_origin(),
            )
            .service(api::dishes)
            .service(api::top_rated)
            .service(api::bottom_rated)
            .service(api::search)
            .service(api::dish)
            .service(api::performance_chart)
            .service(api::weak_points_chart)
    })
    .bind(addr)?
    .run()
    .await?;
    Ok(())
}
