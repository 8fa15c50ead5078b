use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "site-cli")]
#[command(about = "Management CLI for the site administration service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8081")]
    url: String,

    /// Session token from `site-cli login`.
    #[arg(short, long)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service status
    Status,
    /// Log in and print a session token
    Login {
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// List site configurations
    Sites,
    /// Create and activate a site configuration
    Create {
        path: String,
        port: u16,
        #[arg(long)]
        autoindex: bool,
        #[arg(long)]
        custom_404: Option<String>,
    },
    /// Delete a site configuration
    Delete { name: String },
    /// Update the listen port of a configuration
    UpdatePort { name: String, port: u16 },
    /// Validate and reload the web server
    Reload,
    /// List directories eligible for serving
    Directories,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let mut headers = HeaderMap::new();
    if let Some(token) = &cli.token {
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))?,
        );
    }

    match cli.command {
        Commands::Status => {
            let res = client.get(format!("{}/admin/status", cli.url))
                .headers(headers)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Login { username, password } => {
            let res = client.post(format!("{}/admin/login", cli.url))
                .json(&json!({ "username": username, "password": password }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Sites => {
            let res = client.get(format!("{}/admin/sites", cli.url))
                .headers(headers)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Create { path, port, autoindex, custom_404 } => {
            let res = client.post(format!("{}/admin/sites", cli.url))
                .headers(headers)
                .json(&json!({
                    "path": path,
                    "port": port,
                    "autoindex": autoindex,
                    "custom_404": custom_404,
                }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Delete { name } => {
            let res = client.delete(format!("{}/admin/sites/{}", cli.url, name))
                .headers(headers)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::UpdatePort { name, port } => {
            let res = client.put(format!("{}/admin/sites/{}/port", cli.url, name))
                .headers(headers)
                .json(&json!({ "port": port }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Reload => {
            let res = client.post(format!("{}/admin/reload", cli.url))
                .headers(headers)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Directories => {
            let res = client.get(format!("{}/admin/directories", cli.url))
                .headers(headers)
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: Admin API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
