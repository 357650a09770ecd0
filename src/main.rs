use actix_web::{App, HttpServer, web};
use tracing::info;

use watchmetrics::config::Config;
use watchmetrics::services;
use watchmetrics::storage::MetricStore;
use watchmetrics::system::logging::init_logging;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    // Load env configurations
    let config = Config::from_env();
    let _log_guard = init_logging(&config);

    // 检查存储后端
    let store = MetricStore::new(&config.database_url)
        .await
        .expect("Failed to create metric store");
    info!("Using storage backend: {}", store.backend_name());

    // 检查读取 API 是否启用
    if config.api_token.is_empty() {
        info!("Read API is disabled (METRICS_TOKEN not set)");
    } else {
        info!("Read API available at: /metric/{{video_id}}, /quiz_metric/{{quiz_id}}");
    }

    let bind_address = format!("{}:{}", config.server_host, config.server_port);
    info!("Starting server at http://{}", bind_address);

    // Start the HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(config.clone()))
            .configure(services::configure_routes)
            .default_service(web::route().to(services::not_found))
    })
    .bind(bind_address)?
    .run()
    .await
}
