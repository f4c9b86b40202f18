extern crate actix_web as aw;

use ::aw::{web::Data, HttpServer};

use ::dotenvy::dotenv;
use ::log::{info, trace};

pub mod activity;
pub mod config;
pub mod handlers;
pub mod state;
use config::{ConfigError, Settings};
use state::*;

macro_rules! app {
    () => {
        app!("./static/")
    };
    ($static_dir:expr) => {
        ::actix_web::App::new()
            .wrap(::actix_web::middleware::Logger::default())
            .service(
                actix_files::Files::new("/static", $static_dir)
                    .index_file("index.html")
                    .use_last_modified(true),
            )
            .configure(handlers::config)
    };
}

#[derive(Debug, ::thiserror::Error)]
enum StartUpError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("general IO error: {0}")]
    IO(#[from] std::io::Error),
}

#[actix_web::main]
async fn main() -> Result<(), StartUpError> {
    dotenv().ok();

    env_logger::init();

    trace!("TRACE level enabled");

    let settings = Settings::from_env()?;
    info!("{:?}", settings);

    let registry = Data::new(Registry::seeded());
    info!("registry seeded with {} activities", registry.len());

    let static_dir = settings.static_dir.clone();
    let srv = HttpServer::new(move || app!(static_dir.clone()).app_data(Data::clone(&registry)))
        .workers(settings.workers)
        .bind((settings.bind_addr.as_str(), settings.port))?
        .run();

    srv.await?;

    Ok(())
}
