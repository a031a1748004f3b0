use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "audit-cli")]
#[command(about = "Command-line client for the website audit service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3001")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service status
    Health,
    /// Run an SSL Labs analysis for a hostname
    Ssl { hostname: String },
    /// Group a page's headings by tag
    Headings { website_url: String },
    /// List a page's meta tags
    Meta { website_url: String },
    /// Headings, meta tags and canonical link in one call
    Features { website_url: String },
    /// Check whether a URL redirects
    Redirect { target: String },
    /// Find a page's canonical link
    Canonical { target: String },
    /// Generate alt text for an image
    AltText { image: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let request = match &cli.command {
        Commands::Health => client.get(format!("{}/health", base)),
        Commands::Ssl { hostname } => client
            .get(format!("{}/ssl-analyze", base))
            .query(&[("hostname", hostname)]),
        Commands::Headings { website_url } => client
            .get(format!("{}/heading-tag-checker", base))
            .query(&[("websiteUrl", website_url)]),
        Commands::Meta { website_url } => client
            .get(format!("{}/meta-tag-analyzer", base))
            .query(&[("websiteUrl", website_url)]),
        Commands::Features { website_url } => client
            .get(format!("{}/page-features", base))
            .query(&[("websiteUrl", website_url)]),
        Commands::Redirect { target } => client
            .get(format!("{}/check-redirection", base))
            .query(&[("url", target)]),
        Commands::Canonical { target } => client
            .get(format!("{}/check-canonical", base))
            .query(&[("url", target)]),
        Commands::AltText { image } => client
            .post(format!("{}/alttext", base))
            .json(&serde_json::json!({ "image": image })),
    };

    print_response(request.send().await?).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: audit service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
