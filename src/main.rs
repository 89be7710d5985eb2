use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use chamcham::config::Settings;
use chamcham::core::{PoseClassifier, RankEngine};
use chamcham::routes::{self, AppState};
use chamcham::services::ScoreBoard;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    // Initialize logging; RUST_LOG and LOG_LEVEL override the configured level
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }

    info!("Starting Cham Cham Cham service...");

    let thresholds = settings.pose.thresholds();
    if thresholds.left_percent > thresholds.right_percent {
        error!(
            "Pose thresholds overlap: left {} > right {}",
            thresholds.left_percent, thresholds.right_percent
        );
        return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, "invalid pose thresholds"));
    }

    let classifier = PoseClassifier::new(thresholds);
    info!("Pose classifier initialized with thresholds: {:?}", thresholds);

    let scoreboard = ScoreBoard::new(
        RankEngine::new(settings.ranking.podium_tiers),
        settings.ranking.max_entries,
    );
    info!(
        "Scoreboard initialized ({} podium tiers, up to {} entries)",
        settings.ranking.podium_tiers, settings.ranking.max_entries
    );

    // Build application state
    let app_state = AppState {
        classifier,
        scoreboard,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_app)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
