use clap::Parser;
use package_sorter::utils::error::ErrorCategory;
use package_sorter::utils::logger;
use package_sorter::{CliConfig, Package};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let package = match Package::from_readings(&config.readings()) {
        Ok(package) => package,
        Err(e) => {
            tracing::error!("Rejected input: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e);

            let exit_code = match e.category() {
                ErrorCategory::InvalidType => 2,
                ErrorCategory::InvalidRange => 3,
            };
            std::process::exit(exit_code);
        }
    };

    let classification = package.classification();
    tracing::info!(
        "Package {}x{}x{} cm, {} kg -> {}",
        package.width.get(),
        package.height.get(),
        package.length.get(),
        package.mass.get(),
        classification.stack
    );

    if config.json {
        println!("{}", serde_json::to_string(&classification)?);
    } else {
        println!("{}", classification.stack);
    }

    Ok(())
}
