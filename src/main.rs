use anyhow::Context;
use catalog_import::convert;
use std::env;

fn env_flag(key: &str, default_value: bool) -> bool {
    match std::env::var(key) {
        Ok(raw) => match raw.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default_value,
        },
        Err(_) => default_value,
    }
}

fn summary_json() -> bool {
    env_flag("CATALOG_SUMMARY_JSON", false)
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    if let Err(env::VarError::NotPresent) = env::var("RUST_LOG") {
        env::set_var("RUST_LOG", "INFO");
    }
    pretty_env_logger::formatted_timed_builder()
        .parse_default_env()
        .init();

    match std::fs::File::open(".env") {
        Ok(_) => envmnt::load_file(".env")?,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            std::fs::File::create(".env")?;
            envmnt::load_file(".env")?;
        }
        Err(err) => {
            return Err(anyhow::anyhow!("Unable to open .env file: {err}"));
        }
    }

    let input_path = env::args()
        .nth(1)
        .context("Usage: catalog-import <export.csv> [output.csv]")?;
    let output_path = env::args()
        .nth(2)
        .or_else(|| env::var("CATALOG_OUTPUT").ok())
        .unwrap_or_else(|| "catalog_import.csv".to_string());

    let input = tokio::fs::read_to_string(&input_path)
        .await
        .with_context(|| format!("Unable to read source export {input_path}"))?;
    let conversion = convert(&input)?;
    tokio::fs::write(&output_path, conversion.document.as_bytes())
        .await
        .with_context(|| format!("Unable to write converted catalog {output_path}"))?;

    log::info!(
        "{} variant satırı {output_path} dosyasına yazıldı",
        conversion.report.converted
    );
    for warning in &conversion.report.warnings {
        log::warn!("{warning}");
    }

    if summary_json() {
        let summary_path = format!("{output_path}.summary.json");
        tokio::fs::write(&summary_path, serde_json::to_vec_pretty(&conversion.report)?)
            .await
            .with_context(|| format!("Unable to write summary {summary_path}"))?;
        log::info!("özet {summary_path} dosyasına yazıldı");
    }
    Ok(())
}
