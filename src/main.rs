use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;
use sea_orm::{Database, DatabaseConnection};

use autolog_backend::api::{AuditApi, HealthApi, MonitorApi};
use autolog_backend::config::{init_logging, MonitorSettings};
use autolog_backend::monitor::ActivityMonitor;
use autolog_backend::AppData;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging().expect("Failed to initialize logging");

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://autolog.db?mode=rwc".to_string());

    let db: DatabaseConnection = Database::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database: {}", database_url);

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    tracing::info!("Database migrations completed");

    // Shared secret of the marketplace's auth service; this backend only
    // validates tokens, it never issues them.
    let jwt_secret = std::env::var("JWT_SECRET")
        .expect("JWT_SECRET environment variable must be set");

    let app_data = Arc::new(AppData::init(db, jwt_secret, MonitorSettings::default()));

    // The monitor reads the audit log through its ActivitySource seam and
    // escalates into the monitored-users store.
    let monitor = Arc::new(ActivityMonitor::new(
        app_data.monitor_settings.clone(),
        app_data.audit_store.clone(),
        app_data.monitored_user_store.clone(),
    ));
    let monitor_handle = monitor
        .clone()
        .start()
        .expect("monitor was not running at startup");

    let audit_api = AuditApi::new(app_data.clone());
    let monitor_api = MonitorApi::new(app_data.clone(), monitor.clone());

    let api_service = OpenApiService::new(
        (HealthApi, audit_api, monitor_api),
        "Autolog Monitoring API",
        "1.0.0",
    )
    .server("http://localhost:3000/api");

    let ui = api_service.swagger_ui();

    let app = Route::new()
        .nest("/api", api_service)
        .nest("/swagger", ui);

    tracing::info!("Starting server on http://0.0.0.0:3000");
    tracing::info!("Swagger UI available at http://localhost:3000/swagger");

    let result = Server::new(TcpListener::bind("0.0.0.0:3000")).run(app).await;

    monitor_handle.stop();

    result
}
