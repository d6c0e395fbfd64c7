use std::sync::Arc;

use tripmate::config::Config;
use tripmate::engine::Engine;
use tripmate::external::GoogleMaps;
use tripmate::server::serve;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("{}", err);
            std::process::exit(1);
        }
    };

    let maps = GoogleMaps::new(&config);
    let engine = Engine::new(Arc::new(maps), config.search.clone());

    if let Err(err) = serve(engine, config.addr).await {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}
