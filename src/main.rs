use actix_cors::Cors;
use actix_multipart::form::MultipartFormConfig;
use actix_web::{middleware::Logger, web, App, HttpServer};

use socrati_server::{app_state::AppState, config::Config, errors::AppError, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    config.warn_on_missing_secrets();

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let max_upload_bytes = config.max_upload_bytes;

    let state = AppState::new(config).expect("failed to build application state");

    log::info!("starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let json_config = web::JsonConfig::default()
            .error_handler(|err, _req| AppError::InvalidInput(err.to_string()).into());
        let multipart_config = MultipartFormConfig::default()
            .total_limit(max_upload_bytes)
            .memory_limit(max_upload_bytes)
            .error_handler(|err, _req| AppError::InvalidInput(err.to_string()).into());

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(json_config)
            .app_data(multipart_config)
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::index)
            .service(handlers::wake_up)
            .service(handlers::extract_pdf)
            .service(handlers::generate_reed)
            .service(handlers::generate_quiz)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
