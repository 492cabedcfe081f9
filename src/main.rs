use anyhow::Result;

fn main() -> Result<()> {
    // Initialize core
    kisan_core::init()?;

    // Load and validate configuration
    let (config, _validation) = kisan_core::Config::load_validated()?;

    tracing::info!("Kisan application started");

    println!("Kisan - Farming Assistant");
    println!("\nConfiguration:");
    println!("  Config directory: {}", config.config_dir.display());
    println!("  Language: {}", config.language);
    println!("  Default city: {}", config.weather.default_city);
    println!("  Translation endpoint: {}", config.translation.endpoint);

    Ok(())
}
