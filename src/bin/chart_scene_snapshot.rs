use std::fs;
use std::path::PathBuf;

use segment_chart::ChartRenderer;
use segment_chart::api::ChartConfig;
use segment_chart::core::{AxisMarkers, DataPoint};
use segment_chart::render::PositionBuffer;
use segment_chart::telemetry::init_default_tracing;
use serde::Deserialize;

const DEFAULT_SCENE_PATH: &str = "tests/fixtures/scenes/basic_scene.json";

#[derive(Debug, Deserialize)]
struct Scene {
    config: serde_json::Value,
    #[serde(default)]
    points: Vec<DataPoint>,
    #[serde(default)]
    x_marker_count: usize,
    #[serde(default)]
    y_marker_count: usize,
}

#[derive(Debug)]
struct CliArgs {
    scene_path: PathBuf,
    output_path: Option<PathBuf>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.scene_path)
        .map_err(|err| format!("failed to read `{}`: {err}", args.scene_path.display()))?;
    let scene: Scene = serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))?;

    let config = ChartConfig::from_json_value(scene.config).map_err(|err| err.to_string())?;
    let mut chart = ChartRenderer::with_target(PositionBuffer::default(), config)
        .map_err(|err| err.to_string())?;
    chart.set_data(scene.points).map_err(|err| err.to_string())?;
    chart.render_chart().map_err(|err| err.to_string())?;

    if scene.x_marker_count > 0 || scene.y_marker_count > 0 {
        chart.set_axis_markers(AxisMarkers::with_counts(
            scene.x_marker_count,
            scene.y_marker_count,
        ));
        chart.manipulate_points().map_err(|err| err.to_string())?;
    }

    let snapshot = chart.snapshot_json_pretty().map_err(|err| err.to_string())?;
    match args.output_path {
        Some(path) => fs::write(&path, format!("{snapshot}\n"))
            .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?,
        None => println!("{snapshot}"),
    }
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut scene_path = PathBuf::from(DEFAULT_SCENE_PATH);
    let mut output_path: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--scene" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --scene".to_owned())?;
                scene_path = PathBuf::from(value);
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_path = Some(PathBuf::from(value));
            }
            "-h" | "--help" => {
                println!(
                    "Usage: cargo run --bin chart_scene_snapshot -- [--scene <path>] [--output <path>]"
                );
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`"));
            }
        }
    }

    Ok(CliArgs {
        scene_path,
        output_path,
    })
}
