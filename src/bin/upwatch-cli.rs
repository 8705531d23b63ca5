//! On-demand check utility.
//!
//! Invokes the monitor's trigger route over the network and prints a
//! human-readable summary. Exit status: 0 when the probe passed (or the
//! invocation was sampled out), 1 when the probe failed or the trigger
//! endpoint itself was unreachable — the latter two are reported
//! differently so "target down" and "checker down" stay distinguishable.

use clap::{Parser, Subcommand};
use serde_json::Value;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "upwatch-cli")]
#[command(about = "Client for the upwatch availability monitor", long_about = None)]
struct Cli {
    /// Base URL of the running upwatch service.
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Trigger a check now and print the result
    Check,
    /// Print the service status descriptor
    Status,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: could not reach the monitor: {}", e);
            1
        }
    };
    std::process::exit(code);
}

async fn run(cli: Cli) -> Result<i32, reqwest::Error> {
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Check => {
            println!("Running check via {} ...", cli.url);
            let start = Instant::now();
            let response = client.get(format!("{}/check", cli.url)).send().await?;
            let http_status = response.status();
            let body: Value = response.json().await?;
            let round_trip = start.elapsed();

            println!("{}", "-".repeat(50));
            if let Some(message) = body.get("message").and_then(Value::as_str) {
                println!("Message:        {}", message);
                print_field(&body, "timestamp", "Timestamp:     ");
                println!("{}", "-".repeat(50));
                println!("Total request time: {}ms", round_trip.as_millis());
                // a sampled-out run is not a failure
                return Ok(0);
            }

            let success = body.get("success").and_then(Value::as_bool).unwrap_or(false);
            println!("Success:        {}", if success { "yes" } else { "no" });
            print_field(&body, "statusCode", "HTTP status:   ");
            print_field(&body, "responseTimeMs", "Response time: ");
            print_field(&body, "timestamp", "Timestamp:     ");
            print_field(&body, "error", "Error:         ");
            print_field(&body, "logsCount", "Logs count:    ");
            println!("{}", "-".repeat(50));
            println!("Total request time: {}ms", round_trip.as_millis());

            if !http_status.is_success() {
                eprintln!("monitor returned HTTP {}", http_status);
                return Ok(1);
            }
            Ok(if success { 0 } else { 1 })
        }
        Commands::Status => {
            let response = client.get(format!("{}/status", cli.url)).send().await?;
            let body: Value = response.json().await?;
            match serde_json::to_string_pretty(&body) {
                Ok(pretty) => println!("{}", pretty),
                Err(_) => println!("{}", body),
            }
            Ok(0)
        }
    }
}

fn print_field(body: &Value, key: &str, label: &str) {
    if let Some(value) = body.get(key) {
        match value {
            Value::String(s) => println!("{}{}", label, s),
            other => println!("{}{}", label, other),
        }
    }
}
