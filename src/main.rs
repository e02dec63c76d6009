use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use tracing_subscriber::EnvFilter;
use travel_documents::{AppConfig, TemplateData, TemplateEngine};

const USAGE: &str = "Uso: travel-docs <request.json> [--source-only]";

fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let mut request_path = None;
    let mut source_only = false;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--source-only" => source_only = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            _ if request_path.is_none() => request_path = Some(arg),
            _ => bail!("Argumento inesperado: {}\n{}", arg, USAGE),
        }
    }
    let Some(request_path) = request_path else {
        bail!("{}", USAGE);
    };

    let config = AppConfig::from_env()?;
    let engine = TemplateEngine::from_app_config(&config);

    let raw = fs::read_to_string(&request_path)
        .with_context(|| format!("No se pudo leer {}", request_path))?;
    let request: TemplateData = serde_json::from_str(&raw)
        .with_context(|| format!("Petición inválida en {}", request_path))?;

    tracing::info!("Generando documento con la plantilla {}", request.template_id());
    let rendered = engine.layout(&request)?;

    let path = if source_only {
        engine.save_source(&rendered)?
    } else {
        engine.save_pdf(&rendered)?
    };

    println!("{}", path.display());
    Ok(())
}
