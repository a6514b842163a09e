use anyhow::Context;
use ops_sdk::{Client, SdkConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let result = SdkConfig::from_env()
        .context("failed to load sdk config")
        .and_then(|config| Client::from_config(&config).context("failed to build sdk client"))
        .and_then(|mut client| deploy_recorder::run(&mut client));

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
