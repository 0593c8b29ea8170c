use clap::Parser;
use dotenv::dotenv;
use simple_chat_bot::cli::Args;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    dotenv().ok();
    let args = Args::parse();
    let env = env_logger::Env::default()
        .default_filter_or(args.log_filter());
    env_logger::Builder::from_env(env).init();

    simple_chat_bot::run(args).await
}
