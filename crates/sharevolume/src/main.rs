mod cli;
mod lookup;

// remote imports
use clap::Parser;
use cli::{Cli, Commands, TraceLevel};
use sharevolume_spider::Config;
use sharevolume_tui::location::Location;
use tracing::{debug, subscriber, trace, Level};
use tracing_subscriber::FmtSubscriber;

/// Where the viewer's trace goes, since the terminal is taken.
const VIEW_LOG: &str = "sharevolume.log";

////////////////////////////////////////////////////////////////////////////

// install the subscriber at the requested trace level
fn preprocess(trace_level: Level, to_file: bool) -> anyhow::Result<()> {
    let builder = FmtSubscriber::builder().with_max_level(trace_level);
    if to_file {
        let file = std::fs::File::create(VIEW_LOG)?;
        let my_subscriber = builder
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .finish();
        subscriber::set_global_default(my_subscriber)?;
    } else {
        let my_subscriber = builder.with_writer(std::io::stderr).finish();
        subscriber::set_global_default(my_subscriber)?;
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // set the trace level
    if let Some(trace_level) = cli.trace {
        preprocess(
            match trace_level {
                TraceLevel::DEBUG => Level::DEBUG,
                TraceLevel::ERROR => Level::ERROR,
                TraceLevel::INFO => Level::INFO,
                TraceLevel::TRACE => Level::TRACE,
                TraceLevel::WARN => Level::WARN,
            },
            matches!(cli.command, Commands::View { .. }),
        )?;
    }
    trace!("command line input recorded: {cli:?}");

    let config = Config::from_env()?;
    debug!("configuration loaded: {config:?}");

    // read cli inputs
    use cli::Commands::*;
    match cli.command {
        // `sharevolume view [--cik <CIK> | --location <QUERY>]`: open the viewer
        View { cik, location } => {
            let location = match (cik, location) {
                (Some(cik), _) => Location::parse(&format!("CIK={cik}")),
                (None, Some(query)) => Location::parse(&query),
                (None, None) => Location::default(),
            };

            let location = sharevolume_tui::run(config, location)
                .await
                .map_err(|err| anyhow::anyhow!("viewer failed: {err}"))?;

            println!("{}", location.command());
        }

        // `sharevolume fetch <CIK> [--json]`: print live data
        Fetch { cik, json } => lookup::fetch(&config, &cik, json).await?,

        // `sharevolume snapshot <CIK> [--out <PATH>]`: write live data as the bundled snapshot
        Snapshot { cik, out } => {
            let out = out.unwrap_or_else(|| config.snapshot.clone());
            lookup::write_snapshot(&config, &cik, &out).await?
        }
    }

    Ok(())
}
