use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::{info, LevelFilter};

use token_graph_api::config::{Config, CorsConfig};
use token_graph_api::database::GraphDbService;
use token_graph_api::routes::configure_routes;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value = "info")]
    log_level: String,

    /// TOML config file; environment variables override its values
    #[arg(long, default_value = "config/config.toml")]
    config: String,
}

fn build_cors(config: &CorsConfig) -> Cors {
    let allowed_origins = config.allowed_origins.clone();

    let cors = Cors::default().allowed_origin_fn(move |origin, _req_head| {
        let origin_str = match origin.to_str() {
            Ok(s) => s,
            Err(_) => return false,
        };
        allowed_origins.iter().any(|allowed| origin_str == allowed)
    });

    let methods: Vec<actix_web::http::Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();

    let cors = cors
        .allowed_methods(methods)
        .allowed_headers(config.allowed_headers.clone())
        .max_age(config.max_age);

    if config.supports_credentials {
        cors.supports_credentials()
    } else {
        cors
    }
}

#[actix_web::main]
async fn main() -> Result<()> {
    // 1. Parse command line arguments, pick up .env and setup logging
    let args = Args::parse();
    dotenvy::dotenv().ok();
    let log_level = match args.log_level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level.to_string())).init();

    // 2. Load configuration
    let config = Config::load(&args.config)?;

    info!("Starting Token API...");
    info!("Configuration loaded: {:?}", config);

    // 3. Connect to the graph store; refuses to start when it is unreachable
    let db_service = GraphDbService::new(&config.neo4j).await?;
    info!(
        "Serving tokens from Neo4j database {}",
        db_service.get_client().database().unwrap_or("<default>")
    );
    let store = web::Data::from(db_service.token_store());

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server will be available at http://{}", bind_addr);

    let cors_config = config.cors.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .wrap(build_cors(&cors_config))
            .wrap(Logger::default())
            .configure(configure_routes)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    info!("Token API stopped");
    Ok(())
}
