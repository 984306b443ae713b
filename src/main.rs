use cryptobot::config::Config;
use cryptobot::run;
use std::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env()?;

    let listener = TcpListener::bind(("0.0.0.0", config.server_port))?;

    run(listener, config)?.await?;

    Ok(())
}
