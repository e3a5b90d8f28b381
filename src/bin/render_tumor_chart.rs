use std::fs;
use std::path::PathBuf;

use tumor_chart::api::{ChartConfig, ChartRenderer, TumorDynamicsPayload};
use tumor_chart::core::YAxisAnchor;
use tumor_chart::render::CairoSurface;

const DEFAULT_WIDTH: i32 = 600;
const DEFAULT_HEIGHT: i32 = 400;

struct CliArgs {
    payload_path: PathBuf,
    output_path: PathBuf,
    config_path: Option<PathBuf>,
    width: i32,
    height: i32,
    indicator: bool,
}

fn main() {
    let _ = tumor_chart::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let raw = fs::read_to_string(&args.payload_path).map_err(|err| {
        format!(
            "failed to read payload `{}`: {err}",
            args.payload_path.display()
        )
    })?;
    let payload = TumorDynamicsPayload::from_json_str(&raw).map_err(|err| err.to_string())?;

    let mut config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            ChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ChartConfig::default(),
    };

    let set = if args.indicator {
        // The indicator chart reads from a zero baseline.
        config = config.with_y_axis_anchor(YAxisAnchor::Zero);
        payload.indicator_series_set()
    } else {
        payload.tumor_series_set()
    }
    .map_err(|err| err.to_string())?;

    let renderer = ChartRenderer::new(config).map_err(|err| err.to_string())?;
    let mut surface = CairoSurface::new(args.width, args.height).map_err(|err| err.to_string())?;
    surface
        .set_clear_color(renderer.config().style.background_color)
        .map_err(|err| err.to_string())?;

    let report = renderer
        .render_to_surface(&mut surface, &set)
        .map_err(|err| err.to_string())?;
    if let Some(issue) = report.issue {
        eprintln!("warning: {issue}");
    }
    if report.is_skipped() {
        return Err(format!("nothing rendered to `{}`", args.output_path.display()));
    }

    surface
        .write_png(&args.output_path)
        .map_err(|err| err.to_string())?;

    println!("wrote {}", args.output_path.display());
    for entry in &report.legend {
        println!("  {} {}", entry.color.to_hex(), entry.label);
    }
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut positional = Vec::new();
    let mut config_path = None;
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    let mut indicator = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--width" => width = parse_dimension("--width", args.next())?,
            "--height" => height = parse_dimension("--height", args.next())?,
            "--indicator" => indicator = true,
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            flag if flag.starts_with("--") => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
            _ => positional.push(PathBuf::from(arg)),
        }
    }

    let [payload_path, output_path]: [PathBuf; 2] = positional
        .try_into()
        .map_err(|_| format!("expected <payload.json> <output.png>\n\n{}", usage_message()))?;

    Ok(CliArgs {
        payload_path,
        output_path,
        config_path,
        width,
        height,
        indicator,
    })
}

fn parse_dimension(flag: &str, value: Option<String>) -> Result<i32, String> {
    let value = value.ok_or_else(|| format!("missing value for {flag}"))?;
    value
        .parse::<i32>()
        .ok()
        .filter(|parsed| *parsed > 0)
        .ok_or_else(|| format!("{flag} must be a positive integer, got `{value}`"))
}

fn usage_message() -> String {
    format!(
        "Usage: cargo run --features cairo-backend --bin render-tumor-chart -- <payload.json> <output.png> [options]\n\nOptions:\n  --config <path>   Chart config JSON\n  --width <px>      Surface width (default: {DEFAULT_WIDTH})\n  --height <px>     Surface height (default: {DEFAULT_HEIGHT})\n  --indicator       Plot the scalar indicator instead of V/Ns/Nr/N\n  -h, --help        Show this message"
    )
}
