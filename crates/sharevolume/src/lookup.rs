use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use sharevolume_spider::format::{format_shares, Locale};
use sharevolume_spider::stock::model::{Extremum, ViewModel};
use sharevolume_spider::stock::sec::{Cik, SharesClient};
use sharevolume_spider::stock::snapshot;
use sharevolume_spider::Config;
use std::time::Duration;
use tracing::{error, info};

/// Fetch `cik` live and print it, as text or JSON.
pub(crate) async fn fetch(config: &Config, cik: &str, json: bool) -> anyhow::Result<()> {
    let cik = Cik::parse(cik)?;
    let model = load(config, &cik).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&model)?);
    } else {
        print!("{}", describe(&model, config.locale));
    }

    Ok(())
}

/// Fetch `cik` live and write it to `out` as a bundled snapshot.
pub(crate) async fn write_snapshot(
    config: &Config,
    cik: &str,
    out: &str,
) -> anyhow::Result<()> {
    let cik = Cik::parse(cik)?;
    let model = load(config, &cik).await?;

    snapshot::save(out, &model).await?;
    println!(
        "{} snapshot of {} written to {out}",
        "done".green(),
        model.entity_name.bold()
    );

    Ok(())
}

async fn load(config: &Config, cik: &Cik) -> anyhow::Result<ViewModel> {
    let client = SharesClient::new(config)?;

    let pb = ProgressBar::new_spinner()
        .with_message(format!("fetching live SEC data for CIK {cik} ..."))
        .with_style(ProgressStyle::default_spinner().template("{msg} {spinner:.magenta}")?);
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = client.load(cik).await;
    pb.finish_and_clear();

    match result {
        Ok(model) => {
            info!("live data loaded for CIK {cik}: {}", model.entity_name);
            Ok(model)
        }
        Err(err) => {
            error!("live fetch failed for CIK {cik}: {err}");
            Err(anyhow::anyhow!("Live fetch failed for CIK {cik}: {err}"))
        }
    }
}

// text rendering of a model, one line per end of the range
fn describe(model: &ViewModel, locale: Locale) -> String {
    let row = |label: &str, end: &Extremum| {
        let val = if end.has_val() {
            format_shares(end.val, locale)
        } else {
            "—".to_string()
        };
        let fy = if end.has_fy() { end.fy.as_str() } else { "—" };
        format!("  {label}  {val:>15}  FY {fy}\n")
    };

    format!(
        "{}\n{}{}",
        model.entity_name.bold(),
        row("max", &model.max).green(),
        row("min", &model.min).red()
    )
}
