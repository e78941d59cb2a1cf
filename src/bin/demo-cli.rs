use clap::{Parser, Subcommand};
use serde_json::Value;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "demo-cli")]
#[command(about = "Probe and load-test the demo service endpoints", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Call one endpoint and print the response
    Get {
        /// Route to call, e.g. /hello
        route: String,
    },
    /// Hammer one endpoint with concurrent clients and report latencies
    Load {
        /// Route to call, e.g. /slow
        route: String,

        #[arg(short, long, default_value_t = 20)]
        concurrency: usize,

        /// Sequential requests per client
        #[arg(short, long, default_value_t = 5)]
        requests: usize,

        /// Per-request timeout in seconds
        #[arg(short, long, default_value_t = 120)]
        timeout: u64,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Get { route } => {
            let client = reqwest::Client::new();
            let res = client.get(endpoint(&cli.url, &route)).send().await?;
            print_response(res).await?;
        }
        Commands::Load {
            route,
            concurrency,
            requests,
            timeout,
        } => {
            let client = reqwest::Client::builder()
                .timeout(Duration::from_secs(timeout))
                .build()?;
            let url = endpoint(&cli.url, &route);
            let report = run_load(client, url, concurrency, requests).await;
            report.print(&route, concurrency);
        }
    }

    Ok(())
}

fn endpoint(base: &str, route: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        route.trim_start_matches('/')
    )
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    println!("Status: {}", status);
    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}

struct LoadReport {
    total: usize,
    elapsed: Duration,
    latencies: Vec<Duration>,
    failures: usize,
}

async fn run_load(
    client: reqwest::Client,
    url: String,
    concurrency: usize,
    requests: usize,
) -> LoadReport {
    let start = Instant::now();

    let mut tasks = Vec::with_capacity(concurrency);
    for _ in 0..concurrency {
        let client = client.clone();
        let url = url.clone();
        tasks.push(tokio::spawn(async move {
            let mut latencies = Vec::new();
            let mut failures = 0;
            for _ in 0..requests {
                let req_start = Instant::now();
                match client.get(&url).send().await {
                    Ok(res) if res.status().is_success() => latencies.push(req_start.elapsed()),
                    Ok(res) => {
                        eprintln!("non-success status: {}", res.status());
                        failures += 1;
                    }
                    Err(e) => {
                        eprintln!("request error: {}", e);
                        failures += 1;
                    }
                }
            }
            (latencies, failures)
        }));
    }

    let mut latencies = Vec::new();
    let mut failures = 0;
    for task in tasks {
        match task.await {
            Ok((l, f)) => {
                latencies.extend(l);
                failures += f;
            }
            Err(e) => {
                eprintln!("worker panicked: {}", e);
                failures += requests;
            }
        }
    }
    latencies.sort();

    LoadReport {
        total: concurrency * requests,
        elapsed: start.elapsed(),
        latencies,
        failures,
    }
}

impl LoadReport {
    fn percentile(&self, p: f64) -> Option<Duration> {
        if self.latencies.is_empty() {
            return None;
        }
        let idx = ((self.latencies.len() as f64 * p) as usize).min(self.latencies.len() - 1);
        Some(self.latencies[idx])
    }

    fn print(&self, route: &str, concurrency: usize) {
        let rps = self.total as f64 / self.elapsed.as_secs_f64().max(f64::EPSILON);

        println!("\n--- Load Test Results ({}) ---", route);
        println!("Total Requests: {}", self.total);
        println!("Concurrency:    {}", concurrency);
        println!("Total Duration: {:?}", self.elapsed);
        println!("Requests/sec:   {:.2}", rps);
        println!("P50 Latency:    {:?}", self.percentile(0.50));
        println!("P95 Latency:    {:?}", self.percentile(0.95));
        println!("P99 Latency:    {:?}", self.percentile(0.99));
        println!("Success Rate:   {}/{}", self.latencies.len(), self.total);
        println!("Failures:       {}", self.failures);
        println!("-------------------------------\n");
    }
}
