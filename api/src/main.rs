use std::sync::Arc;

use clap::Parser;
use spooltag_api::{
    application::{http::server::http_server::serve, logging::init_logging},
    args::Args,
};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logging(&args.log);

    serve(args).await
}
