use anyhow::Context;
use clap::{Parser, Subcommand};
use client::{
    ApiClient, Config, GithubClient,
    services::{athletes, competitions, rankings},
};
use domain::{
    dto::{
        competition::{CompetitionFilters, RankingScope},
        ranking::{RankingFilters, RankingMovement},
    },
    models::CompetitionStatus,
};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "osl")]
#[command(about = "OpenStreetLifting API client", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Overrides API_URL
    #[arg(long)]
    api_url: Option<String>,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List competitions
    Competitions {
        #[arg(long)]
        status: Option<CompetitionStatus>,

        #[arg(long)]
        country: Option<String>,

        #[arg(long)]
        search: Option<String>,
    },
    /// Show one competition with its results
    Competition {
        slug: String,

        #[arg(long)]
        scope: Option<RankingScope>,
    },
    /// Show a page of the global ranking
    Rankings {
        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long)]
        gender: Option<String>,

        #[arg(long)]
        country: Option<String>,

        #[arg(long)]
        movement: Option<RankingMovement>,
    },
    /// List athletes
    Athletes,
    /// Show one athlete
    Athlete {
        slug: String,

        #[arg(long)]
        detailed: bool,
    },
    /// Show the star count of a GitHub repository
    Stars {
        #[arg(long, default_value = "OpenStreetlifting")]
        owner: String,

        #[arg(long, default_value = "openstreetlifting_backend")]
        repo: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("osl={},client={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Competitions {
            status,
            country,
            search,
        } => {
            let api = api_client(cli.api_url)?;
            let filters = CompetitionFilters {
                status,
                country,
                search,
            };
            let list = competitions::get_all(&api, Some(&filters))
                .await
                .context("Failed to load competitions")?;
            tracing::info!("Found {} competition(s)", list.len());
            print_json(&list)?;
        }
        Commands::Competition { slug, scope } => {
            let api = api_client(cli.api_url)?;
            let detail = competitions::get_by_id(&api, &slug, scope)
                .await
                .with_context(|| format!("Failed to load competition '{}'", slug))?;
            print_json(&detail)?;
        }
        Commands::Rankings {
            page,
            gender,
            country,
            movement,
        } => {
            let api = api_client(cli.api_url)?;
            let filters = RankingFilters {
                pagination: page,
                gender,
                country,
                movement: Some(movement.unwrap_or_default()),
            };
            let response = rankings::get_global_rankings(&api, &filters)
                .await
                .context("Failed to load rankings")?;
            tracing::info!(
                "Page {}/{} ({} athletes total)",
                response.pagination.page,
                response.pagination.total_pages,
                response.pagination.total_items
            );
            if response.pagination.has_next_page() {
                tracing::info!("Next page: --page {}", response.pagination.page + 1);
            }
            print_json(&response)?;
        }
        Commands::Athletes => {
            let api = api_client(cli.api_url)?;
            let list = athletes::list(&api)
                .await
                .context("Failed to load athletes")?;
            print_json(&list)?;
        }
        Commands::Athlete { slug, detailed } => {
            let api = api_client(cli.api_url)?;
            let result = if detailed {
                athletes::get_detailed(&api, &slug)
                    .await
                    .map(serde_json::to_value)
            } else {
                athletes::get_by_slug(&api, &slug)
                    .await
                    .map(serde_json::to_value)
            };

            match result {
                Ok(value) => print_json(&value?)?,
                Err(e) if e.is_not_found() => {
                    anyhow::bail!("No athlete with slug '{}'", slug);
                }
                Err(e) => {
                    return Err(e).with_context(|| format!("Failed to load athlete '{}'", slug));
                }
            }
        }
        Commands::Stars { owner, repo } => {
            let stars = GithubClient::from_env().get_star_count(&owner, &repo).await;
            print_json(&serde_json::json!({
                "repository": format!("{}/{}", owner, repo),
                "stars": stars,
            }))?;
        }
    }

    Ok(())
}

fn api_client(api_url: Option<String>) -> anyhow::Result<ApiClient> {
    let config = match api_url {
        Some(api_url) => Config::with_api_url(api_url),
        None => Config::from_env().context("Failed to load client configuration")?,
    };

    let api = ApiClient::from_config(&config).context("Failed to build API client")?;
    tracing::debug!("Using API at {}", api.base_url());

    Ok(api)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}
