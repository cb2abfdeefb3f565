use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use country_browser::cli::{Cli, Command};
use country_browser::config::Config;
use country_browser::country::{distinct_regions, paginate, visible, CountryRecord};
use country_browser::loader::CountryClient;
use country_browser::logging::{init_tracing, LogTarget};
use country_browser::{plain, ui};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config_path();
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))?;
    cli.apply_overrides(&mut config);
    config.validate().context("Invalid configuration")?;

    let target = if cli.is_interactive() {
        LogTarget::file_from(&config.logging)
    } else {
        LogTarget::Stderr
    };
    init_tracing(&config.logging, &target).context("Failed to set up logging")?;

    let client = CountryClient::new(&config.api)?;

    match cli.command {
        None | Some(Command::Browse) => ui::run(client).context("Terminal UI failed")?,
        Some(Command::List {
            query,
            region,
            limit,
            json,
        }) => {
            let records = fetch_once(&client)?;
            let matches = visible(&records, &query, &region);
            let page = paginate(&matches, limit);
            let output = if json {
                let mut text = plain::render_json(page)?;
                text.push('\n');
                text
            } else {
                plain::render_table(page)
            };
            write_stdout(&output)?;
        }
        Some(Command::Regions) => {
            let records = fetch_once(&client)?;
            write_stdout(&plain::render_regions(&distinct_regions(&records)))?;
        }
    }

    Ok(())
}

/// Run the single load to completion on a throwaway runtime.
fn fetch_once(client: &CountryClient) -> Result<Vec<CountryRecord>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let records = runtime
        .block_on(client.fetch_all())
        .with_context(|| format!("Failed to load countries from {}", client.endpoint()))?;
    Ok(records)
}

fn write_stdout(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}
