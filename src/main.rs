use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use petalshop::cli::{Cli, Commands};
use petalshop::config::StaticConfig;
use petalshop::errors::ShopError;
use petalshop::runtime::modes::run_server;
use petalshop::system::logging::init_logging;

#[actix_web::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command() {
        Commands::GenerateConfig { path } => match generate_config(path.as_deref()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => fail(&e),
        },
        Commands::CheckConfig => match load_config(&cli) {
            Ok(config) => match toml::to_string_pretty(&config) {
                Ok(rendered) => {
                    println!("{}", rendered);
                    ExitCode::SUCCESS
                }
                Err(e) => fail(&ShopError::from(e)),
            },
            Err(e) => fail(&e),
        },
        Commands::Serve => serve(&cli).await,
    }
}

async fn serve(cli: &Cli) -> ExitCode {
    let config = match load_config(cli) {
        Ok(config) => config,
        Err(e) => return fail(&e),
    };

    // guard 需要在整个进程生命周期内保持
    let _log_guard = match init_logging(&config.logging) {
        Ok(guard) => guard,
        Err(e) => return fail(&e),
    };

    match run_server(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Server exited with error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> petalshop::errors::Result<StaticConfig> {
    let mut config = StaticConfig::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

fn generate_config(path: Option<&std::path::Path>) -> petalshop::errors::Result<()> {
    match path {
        Some(path) => {
            StaticConfig::default().save_to_file(path)?;
            println!("Sample configuration written to {}", path.display());
        }
        None => println!("{}", StaticConfig::generate_sample_config()?),
    }
    Ok(())
}

fn fail(err: &ShopError) -> ExitCode {
    eprintln!("{}", err.format_colored());
    ExitCode::FAILURE
}
