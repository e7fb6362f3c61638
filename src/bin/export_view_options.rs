use china_map::api::{CatalogManifest, DrilldownCatalog, ScopeEntry};
use china_map::core::BoundaryDataset;
use china_map::view::ViewConfiguration;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

const USAGE: &str =
    "usage: export_view_options <echarts|contract> [--manifest <path>] [--output <path>]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Echarts,
    Contract,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    manifest: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn main() {
    let _ = china_map::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let catalog = load_catalog(args.manifest.as_deref())?;

    let mut scopes: Vec<&ScopeEntry> = vec![catalog.national()];
    scopes.extend(
        catalog
            .drillable_codes()
            .filter_map(|code| catalog.province(code)),
    );

    let mut document = Map::new();
    for scope in scopes {
        let value = render_scope(&scope.configuration, args.command)?;
        document.insert(scope.key().to_string(), value);
    }
    let rendered = serde_json::to_string_pretty(&Value::Object(document))
        .map_err(|err| format!("failed to serialize output: {err}"))?;

    match &args.output {
        Some(path) => fs::write(path, rendered)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{rendered}");
            Ok(())
        }
    }
}

fn load_catalog(manifest: Option<&Path>) -> Result<DrilldownCatalog, String> {
    match manifest {
        Some(path) => {
            let manifest = CatalogManifest::from_path(path).map_err(|err| err.to_string())?;
            let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
            manifest.load(base_dir).map_err(|err| err.to_string())
        }
        None => {
            // Presets only need a placeholder geometry to be exported.
            let empty = BoundaryDataset::from_string(r#"{"type":"FeatureCollection","features":[]}"#);
            DrilldownCatalog::china(empty.clone(), empty).map_err(|err| err.to_string())
        }
    }
}

fn render_scope(configuration: &ViewConfiguration, command: CommandKind) -> Result<Value, String> {
    match command {
        CommandKind::Echarts => Ok(configuration.to_echarts_option()),
        CommandKind::Contract => {
            let text = configuration
                .to_json_contract_v1_pretty()
                .map_err(|err| err.to_string())?;
            serde_json::from_str(&text).map_err(|err| format!("invalid contract json: {err}"))
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("echarts") => CommandKind::Echarts,
        Some("contract") => CommandKind::Contract,
        _ => return Err(USAGE.to_owned()),
    };

    let mut manifest = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--manifest" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --manifest".to_owned())?;
                manifest = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    Ok(CliArgs {
        command,
        manifest,
        output,
    })
}
