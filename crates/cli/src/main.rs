mod provenance;
mod viewer;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use floorplan::config::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use floorplan::{
    classify_room, load_house, plot_house, HouseSummary, LoadError, MatchTolerance, PlanDefaults,
    PlotCfg, RenderCfg,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "floorplan")]
#[command(about = "Render 2D floor plans from a house description")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Render every floor into one image
    Render {
        #[arg(long, default_value = DEFAULT_INPUT)]
        input: PathBuf,
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        out: PathBuf,
        /// Also write the SVG scene next to the image
        #[arg(long)]
        svg: bool,
        /// Match declared segments within this distance instead of exactly
        #[arg(long)]
        tolerance: Option<f64>,
        #[arg(long, default_value_t = 150.0)]
        dpi: f64,
        /// Do not open the image after writing it
        #[arg(long)]
        no_show: bool,
    },
    /// Print per-floor room, void and window counts
    Summary {
        #[arg(long, default_value = DEFAULT_INPUT)]
        input: PathBuf,
    },
    /// Print every classified polygon edge as JSON
    Classify {
        #[arg(long, default_value = DEFAULT_INPUT)]
        input: PathBuf,
        #[arg(long)]
        tolerance: Option<f64>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Render {
            input,
            out,
            svg,
            tolerance,
            dpi,
            no_show,
        } => {
            let svg_output = if svg { Some(svg_output_for(&out)?) } else { None };
            let cfg = PlotCfg {
                input,
                output: out,
                svg_output,
                render: RenderCfg {
                    dpi,
                    tolerance: MatchTolerance::from_eps(tolerance),
                    ..RenderCfg::default()
                },
            };
            render(&cfg, !no_show).map(|_| ())
        }
        Action::Summary { input } => summary(input),
        Action::Classify { input, tolerance } => classify(input, tolerance),
        Action::Report => report(),
    }
}

/// Returns `Ok(false)` when the description is missing and nothing was written.
fn render(cfg: &PlotCfg, show: bool) -> Result<bool> {
    tracing::info!(
        input = %cfg.input.display(),
        out = %cfg.output.display(),
        tolerance = ?cfg.render.tolerance,
        "render"
    );
    let outcome = match plot_house(cfg) {
        Ok(outcome) => outcome,
        Err(e) if e.is_missing_input() => {
            report_missing(&cfg.input);
            return Ok(false);
        }
        Err(e) => return Err(e).context("rendering floor plan"),
    };

    let mut outputs = vec![outcome.output.clone()];
    outputs.extend(outcome.svg_output.iter().cloned());
    let payload = provenance::Payload::new(serde_json::json!({
        "input": cfg.input,
        "dpi": cfg.render.dpi,
        "tolerance": tolerance_param(cfg.render.tolerance),
        "size_px": [outcome.width_px, outcome.height_px],
        "summary": outcome.summary,
    }))
    .with_outputs(outputs);
    let prov_path = provenance::write_sidecar(&outcome.output, payload)?;
    tracing::debug!(path = %prov_path.display(), "provenance written");

    println!("✓ Floor plan generated: {}", outcome.output.display());
    println!("{}", outcome.summary);

    if show {
        viewer::open(&outcome.output);
    }
    Ok(true)
}

fn summary(input: PathBuf) -> Result<()> {
    if let Some(text) = summary_text(&input)? {
        println!("{text}");
    }
    Ok(())
}

fn summary_text(input: &Path) -> Result<Option<String>> {
    let Some(house) = load_or_report(input)? else {
        return Ok(None);
    };
    Ok(Some(HouseSummary::of(&house, &PlanDefaults::default()).to_string()))
}

#[derive(Serialize)]
struct EdgeRow<'a> {
    floor: &'a str,
    level: i32,
    room: &'a str,
    #[serde(flatten)]
    edge: floorplan::ClassifiedEdge,
}

fn classify(input: PathBuf, tolerance: Option<f64>) -> Result<()> {
    if let Some(rows) = classify_rows(&input, MatchTolerance::from_eps(tolerance))? {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    }
    Ok(())
}

/// One JSON object per classified edge, floors and rooms in file order.
fn classify_rows(input: &Path, tolerance: MatchTolerance) -> Result<Option<serde_json::Value>> {
    let Some(house) = load_or_report(input)? else {
        return Ok(None);
    };
    let mut rows = Vec::new();
    for floor in &house.floors {
        for room in &floor.rooms {
            rows.extend(classify_room(room, tolerance).into_iter().map(|edge| EdgeRow {
                floor: &floor.name,
                level: floor.level,
                room: &room.id,
                edge,
            }));
        }
    }
    Ok(Some(serde_json::to_value(&rows)?))
}

/// SVG path written next to `out`; refuses an `out` that is itself that path.
fn svg_output_for(out: &Path) -> Result<PathBuf> {
    let svg = out.with_extension("svg");
    if svg == out {
        bail!(
            "--out {} already has an .svg extension; pick an image name for --svg",
            out.display()
        );
    }
    Ok(svg)
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": floorplan::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

/// `Ok(None)` after reporting a missing description; other failures propagate.
fn load_or_report(input: &Path) -> Result<Option<floorplan::House>> {
    match load_house(input) {
        Ok(house) => Ok(Some(house)),
        Err(LoadError::NotFound(path)) => {
            report_missing(&path);
            Ok(None)
        }
        Err(e) => Err(e).with_context(|| format!("loading {}", input.display())),
    }
}

fn report_missing(path: &Path) {
    tracing::error!(path = %path.display(), "house description not found");
    eprintln!("ERROR: house description not found at {}", path.display());
}

fn tolerance_param(tolerance: MatchTolerance) -> serde_json::Value {
    match tolerance {
        MatchTolerance::Exact => serde_json::json!("exact"),
        MatchTolerance::Within(eps) => serde_json::json!(eps),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::tempdir;

    const HOUSE: &str = "house:\n  floors:\n    - name: G\n      level: 0\n      rooms:\n        - id: r\n          polygon: [[0, 0], [5, 0], [5, 5], [0, 5]]\n          doors: [[[0, 0], [5, 0]]]\n";

    #[test]
    fn cli_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn render_defaults_match_library_paths() {
        let cmd = Cmd::try_parse_from(["floorplan", "render", "--no-show"]).unwrap();
        match cmd.action {
            Action::Render { input, out, svg, tolerance, no_show, .. } => {
                assert_eq!(input, PathBuf::from(DEFAULT_INPUT));
                assert_eq!(out, PathBuf::from(DEFAULT_OUTPUT));
                assert!(!svg && no_show);
                assert!(tolerance.is_none());
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn missing_input_reports_and_writes_nothing() {
        let dir = tempdir().unwrap();
        let cfg = PlotCfg {
            input: dir.path().join("nope.yaml"),
            output: dir.path().join("plan.png"),
            svg_output: None,
            render: RenderCfg::default(),
        };
        assert!(!render(&cfg, false).unwrap());
        assert!(!cfg.output.exists());
        assert!(!dir.path().join("plan.provenance.json").exists());
    }

    #[test]
    fn render_writes_image_and_provenance() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("house.yaml");
        std::fs::write(&input, HOUSE).unwrap();
        let cfg = PlotCfg {
            input,
            output: dir.path().join("plan.png"),
            svg_output: None,
            render: RenderCfg {
                dpi: 30.0,
                ..RenderCfg::default()
            },
        };
        assert!(render(&cfg, false).unwrap());
        assert!(cfg.output.exists());
        let prov: serde_json::Value = serde_json::from_slice(
            &std::fs::read(dir.path().join("plan.provenance.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(prov["params"]["tolerance"], "exact");
        assert_eq!(prov["params"]["summary"]["floors"][0]["rooms"], 1);
    }

    #[test]
    fn svg_output_needs_a_distinct_path() {
        assert_eq!(
            svg_output_for(Path::new("out/plan.png")).unwrap(),
            PathBuf::from("out/plan.svg")
        );
        assert!(svg_output_for(Path::new("out/plan.svg")).is_err());
    }

    #[test]
    fn summary_lists_floor_counts() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("house.yaml");
        std::fs::write(&input, HOUSE).unwrap();
        let text = summary_text(&input).unwrap().unwrap();
        assert_eq!(text, "  - 1 floors\n  - G: 1 rooms, 0 voids, 0 windows");
        assert!(summary_text(&dir.path().join("nope.yaml")).unwrap().is_none());
    }

    #[test]
    fn classify_rows_flatten_edges() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("house.yaml");
        std::fs::write(&input, HOUSE).unwrap();
        let rows = classify_rows(&input, MatchTolerance::Exact).unwrap().unwrap();
        let rows = rows.as_array().unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(
            rows[0],
            serde_json::json!({
                "floor": "G",
                "level": 0,
                "room": "r",
                "index": 0,
                "from": [0.0, 0.0],
                "to": [5.0, 0.0],
                "kind": "door"
            })
        );
        assert_eq!(rows[3]["kind"], "wall");
        assert_eq!(rows[3]["to"], serde_json::json!([0.0, 0.0]));
        assert!(classify_rows(&dir.path().join("nope.yaml"), MatchTolerance::Exact)
            .unwrap()
            .is_none());
    }

    #[test]
    fn malformed_input_is_an_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("house.yaml");
        std::fs::write(&input, "house: [not, a, mapping]\n").unwrap();
        assert!(load_or_report(&input).is_err());
    }
}
