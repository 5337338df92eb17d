/// Mixtape Server - multi-user music catalog REST API
use clap::{Parser, Subcommand};
use mixtape_core::types::CreateUser;
use mixtape_server::{config::ServerConfig, services::AuthService, state::AppState};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mixtape-server")]
#[command(about = "Mixtape music catalog REST API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Create a new user
    AddUser {
        /// Email address
        #[arg(short, long)]
        email: String,
        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// List all users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mixtape_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => {
            serve().await?;
        }
        Commands::AddUser { email, password } => {
            add_user(&email, &password).await?;
        }
        Commands::ListUsers => {
            list_users().await?;
        }
    }

    Ok(())
}

async fn serve() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;
    config.validate()?;

    tracing::info!("Starting Mixtape Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let pool = mixtape_storage::create_pool(&config.storage.database_url).await?;
    mixtape_storage::run_migrations(&pool).await?;
    tracing::info!("Database connected");

    // Initialize auth service
    let auth = Arc::new(AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_hours,
    ));
    tracing::info!("Auth service initialized");

    // Build application state and router
    let app_state = AppState::new(pool, auth);
    let app = mixtape_server::create_router(app_state)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive());

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn add_user(email: &str, password: &str) -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    let pool = mixtape_storage::create_pool(&config.storage.database_url).await?;
    mixtape_storage::run_migrations(&pool).await?;

    let auth = AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_hours,
    );

    if mixtape_storage::users::find_by_email(&pool, email)
        .await?
        .is_some()
    {
        anyhow::bail!("user with email {} already exists", email);
    }

    let password_hash = auth.hash_password(password)?;
    let user = mixtape_storage::users::create(
        &pool,
        CreateUser {
            email: email.to_string(),
            password_hash,
        },
    )
    .await?;

    tracing::info!("Created user {} ({})", user.email, user.id);

    Ok(())
}

async fn list_users() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    let pool = mixtape_storage::create_pool(&config.storage.database_url).await?;
    mixtape_storage::run_migrations(&pool).await?;

    let users = mixtape_storage::users::get_all(&pool).await?;

    println!("Users:");
    for user in users {
        println!("  {} - {}", user.id, user.email);
    }

    Ok(())
}
