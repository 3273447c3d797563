use anyhow::Result;
use std::time::Duration;

/// Ping a running gateway's health endpoint.
pub async fn execute(url: &str) -> Result<()> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()?;

    match client.get(format!("{}/health", url.trim_end_matches('/'))).send().await {
        Ok(response) if response.status().is_success() => {
            println!("Gateway is running at {url}");
        }
        _ => {
            eprintln!("Gateway is not reachable at {url}");
            std::process::exit(1);
        }
    }

    Ok(())
}
