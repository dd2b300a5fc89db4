//! Jobboard CLI - Command-line client for the Jobboard HTTP API

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tabled::{Table, Tabled};

const DEFAULT_URL: &str = "http://127.0.0.1:7000";

#[derive(Parser)]
#[command(name = "jobboard")]
#[command(about = "Jobboard CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Server base URL
    #[arg(long, env = "JOBBOARD_URL", default_value = DEFAULT_URL)]
    url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List jobs
    Jobs {
        /// Equality filter as column=value (e.g. title=Engineer, remote=true)
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Show one job
    Job {
        /// Job ID
        id: i64,
    },

    /// List employers
    Employers,

    /// Show server status
    Status,
}

#[derive(Debug, Deserialize)]
struct Job {
    id: Option<i64>,
    title: Option<String>,
    posted_at: String,
    domain: String,
    location: String,
    remote: bool,
    full_time: bool,
    requirements: String,
    salary: i64,
    employer_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct Employer {
    id: Option<i64>,
    name: String,
    category: String,
    summary: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    message: String,
}

#[derive(Tabled)]
struct JobRow {
    id: String,
    title: String,
    location: String,
    remote: String,
    full_time: String,
    salary: i64,
    employer: String,
}

#[derive(Tabled)]
struct EmployerRow {
    id: String,
    name: String,
    category: String,
    summary: String,
}

fn opt(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn yes_no(flag: bool) -> String {
    if flag { "yes" } else { "no" }.to_string()
}

impl From<&Job> for JobRow {
    fn from(job: &Job) -> Self {
        JobRow {
            id: opt(job.id),
            title: job.title.clone().unwrap_or_default(),
            location: job.location.clone(),
            remote: yes_no(job.remote),
            full_time: yes_no(job.full_time),
            salary: job.salary,
            employer: opt(job.employer_id),
        }
    }
}

impl From<&Employer> for EmployerRow {
    fn from(employer: &Employer) -> Self {
        EmployerRow {
            id: opt(employer.id),
            name: employer.name.clone(),
            category: employer.category.clone(),
            summary: employer.summary.clone(),
        }
    }
}

/// Split a `column=value` filter flag
fn parse_filter(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((column, value)) if !column.trim().is_empty() => {
            Ok((column.trim().to_string(), value.to_string()))
        }
        _ => bail!("Filter must look like column=value, got '{}'", raw),
    }
}

async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    base_url: &str,
    path: &str,
    query: &[(String, String)],
) -> Result<T> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), path);
    let response = client
        .get(&url)
        .query(query)
        .send()
        .await
        .with_context(|| format!("Failed to connect to {}", url))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ErrorBody>(&body) {
            Ok(err) => bail!("Server error {} ({}): {}", status, err.error, err.message),
            Err(_) => bail!("Server error {}: {}", status, body),
        }
    }

    response.json().await.context("Failed to parse response")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Jobs { filter } => {
            let query = filter.as_deref().map(parse_filter).transpose()?;
            let query: Vec<(String, String)> = query.into_iter().collect();

            let jobs: Vec<Job> = get_json(&client, &cli.url, "/jobs", &query).await?;

            if jobs.is_empty() {
                println!("{}", "No jobs found".yellow());
            } else {
                let rows: Vec<JobRow> = jobs.iter().map(JobRow::from).collect();
                println!("{}", Table::new(rows));
                println!("{}", format!("{} job(s)", jobs.len()).cyan());
            }
        }

        Commands::Job { id } => {
            let job: Job = get_json(&client, &cli.url, &format!("/jobs/{}", id), &[]).await?;

            let title = job.title.clone().unwrap_or_default();
            println!("{}", format!("Job {}: {}", id, title).cyan().bold());
            println!();
            println!("  {} {}", "Posted:".bold(), job.posted_at);
            println!("  {} {}", "Domain:".bold(), job.domain);
            println!("  {} {}", "Location:".bold(), job.location);
            println!("  {} {}", "Remote:".bold(), yes_no(job.remote));
            println!("  {} {}", "Full time:".bold(), yes_no(job.full_time));
            println!("  {} {}", "Salary:".bold(), job.salary);
            println!("  {} {}", "Employer:".bold(), opt(job.employer_id));
            println!("  {} {}", "Requirements:".bold(), job.requirements);
        }

        Commands::Employers => {
            let employers: Vec<Employer> = get_json(&client, &cli.url, "/employers", &[]).await?;

            if employers.is_empty() {
                println!("{}", "No employers found".yellow());
            } else {
                let rows: Vec<EmployerRow> = employers.iter().map(EmployerRow::from).collect();
                println!("{}", Table::new(rows));
            }
        }

        Commands::Status => {
            println!("{}", "Server Status".cyan().bold());
            println!();

            match get_json::<serde_json::Value>(&client, &cli.url, "/healthz", &[]).await {
                Ok(health) => {
                    println!("  {} {}", "URL:".bold(), cli.url);
                    println!("  {} {}", "Status:".bold(), "ONLINE".green());
                    println!("  {} {}", "Version:".bold(), health["version"]);
                }
                Err(e) => {
                    println!("  {} {}", "Status:".bold(), "ERROR".red());
                    println!("  {} {}", "Error:".bold(), e);
                }
            }
        }
    }

    Ok(())
}
