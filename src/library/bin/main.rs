use std::net::SocketAddr;
use lambda_http::{run, Error};
use tracing::info;
use lbms::core::controller::AppState;
use lbms::core::domain::Configuration;
use lbms::library::controller::router;
use lbms::utils::ddb::setup_tracing;

// See https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = Configuration::from_env();
    info!("starting library branch {} with {} store", config.branch_id, config.store);
    let state = AppState::new(config.clone(), config.store).await;

    if config.lambda {
        return run(router::<lambda_http::Body>(state)).await;
    }

    let app = router::<axum::body::Body>(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    info!("listening on {}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
