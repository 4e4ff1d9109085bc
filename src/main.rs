use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vidtube::{auth, config, db, seed, server};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vidtube=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    if !auth::has_jwt_secret() {
        tracing::error!("JWT_SECRET environment variable must be set in production");
        std::process::exit(1);
    }

    // Initialize database
    let db = match db::init_db(&config.database_url).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to initialize database: {}", e);
            std::process::exit(1);
        }
    };

    if config.seed_demo {
        tracing::info!("Seeding demo data...");
        match seed::seed_demo_data(&db).await {
            Ok(()) => {
                tracing::info!("Demo data seeded successfully.");
                for (id, username) in seed::DEMO_USERS {
                    match auth::create_jwt(id, username) {
                        Ok(token) => tracing::info!("Demo token for {}: {}", username, token),
                        Err(e) => tracing::warn!("Could not mint token for {}: {}", username, e),
                    }
                }
            }
            Err(e) => tracing::error!("Failed to seed data: {}", e),
        }
    }

    if let Err(e) = server::serve(db, &config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
