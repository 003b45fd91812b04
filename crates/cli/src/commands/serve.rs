//! `mentora serve` — Start the HTTP backend.

use mentora_config::AppConfig;

pub async fn run(port_override: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if let Some(port) = port_override {
        config.gateway.port = port;
    }

    println!("📚 Mentora");
    println!("   Listening: {}:{}", config.gateway.host, config.gateway.port);
    println!(
        "   Provider:  {}",
        if config.has_api_key() {
            "configured"
        } else {
            "not configured — offline fallback responses"
        }
    );

    mentora_gateway::start(config).await?;

    Ok(())
}
