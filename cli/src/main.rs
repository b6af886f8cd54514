mod analyze;
mod scrape;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use dotenv::dotenv;
use job_analyzer::DEFAULT_TOP_N;
use job_scraper::dou::DEFAULT_CATEGORY;
use job_scraper::fetch::DEFAULT_CONCURRENCY;
use job_scraper::webdriver::DEFAULT_WEBDRIVER_URL;
use thiserror::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Csv file the vacancies are written to and read from
    #[arg(long, global = true, env = "VACANCIES_CSV", default_value = "python_vacancies.csv")]
    output: PathBuf,

    /// Vacancy category on jobs.dou.ua
    #[arg(long, global = true, env = "VACANCY_CATEGORY", default_value = DEFAULT_CATEGORY)]
    category: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scrape every vacancy of the category into the csv file
    Scrape(ScrapeArgs),
    /// Count technologies in the csv file and render the chart
    Analyze(AnalyzeArgs),
    /// Scrape, then analyze
    Run {
        #[command(flatten)]
        scrape: ScrapeArgs,
        #[command(flatten)]
        analyze: AnalyzeArgs,
    },
}

#[derive(Args, Debug)]
pub struct ScrapeArgs {
    /// WebDriver server the browser sessions are opened on
    #[arg(long, env = "WEBDRIVER_URL", default_value = DEFAULT_WEBDRIVER_URL)]
    pub webdriver_url: String,

    /// Vacancy pages loaded at the same time
    #[arg(long, env = "FETCH_CONCURRENCY", default_value_t = DEFAULT_CONCURRENCY, value_parser = parse_concurrency)]
    pub concurrency: usize,

    /// Show the browser windows
    #[arg(long)]
    pub headed: bool,

    /// Scrape even if the csv file already exists
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Where the svg chart is written
    #[arg(long, env = "TECHNOLOGIES_CHART", default_value = "technologies_chart.svg")]
    pub chart: PathBuf,

    /// Number of technologies shown in the chart
    #[arg(long, env = "CHART_TOP_N", default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,
}

fn parse_concurrency(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("concurrency must be at least 1".to_owned()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Scraping failed: {0}")]
    Scrape(#[from] job_scraper::Error),
    #[error("Persistence failed: {0}")]
    Persistence(#[from] persistence::Error),
    #[error("Analysis failed: {0}")]
    Analysis(#[from] job_analyzer::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Cli::parse();
    let outcome = match args.command {
        Commands::Scrape(scrape_args) => {
            scrape::scrape(&args.output, &args.category, &scrape_args).await
        }
        Commands::Analyze(analyze_args) => {
            analyze::analyze(&args.output, &args.category, &analyze_args)
        }
        Commands::Run {
            scrape: scrape_args,
            analyze: analyze_args,
        } => {
            match scrape::scrape(&args.output, &args.category, &scrape_args).await {
                Ok(()) => analyze::analyze(&args.output, &args.category, &analyze_args),
                Err(e) => Err(e),
            }
        }
    };
    match outcome {
        Ok(()) => {
            log::info!("Process completed successfully!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
