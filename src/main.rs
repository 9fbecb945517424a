// src/main.rs

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::{info, LevelFilter};
use std::io;
use std::path::{Path, PathBuf};

use report_plotter::constants::DEFAULT_REPORT_PATH;
use report_plotter::data_analysis::summary::summarize;
use report_plotter::plot_framework::{BlockingSink, FileSink, ImageFormat, RenderSink};
use report_plotter::views::{View, ViewSelection};
use report_plotter::{derive_direction, load, render, DirectionMode};

fn cli() -> Command {
    Command::new("report_plotter")
        .version(report_plotter::crate_version())
        .about("Render exploratory plots from a track simulator report CSV")
        .arg(
            Arg::new("input")
                .help("Report CSV: one header line, then 10 numeric columns per row")
                .default_value(DEFAULT_REPORT_PATH)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output_dir")
                .short('o')
                .long("output-dir")
                .help("Directory the figures are written to")
                .default_value(".")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::DirPath),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Image format of the written figures")
                .value_parser(["png", "svg"])
                .default_value("png"),
        )
        .arg(
            Arg::new("views_config")
                .long("views-config")
                .help("JSON file mapping view names to true/false, e.g. {\"views\": {\"velocity-scatter\": true}}")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("enable")
                .long("enable")
                .help("Enable a view (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("disable")
                .long("disable")
                .help("Disable a view (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("only")
                .long("only")
                .help("Render only the listed views (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("guard_direction")
                .long("guard-direction")
                .help("Map zero x-velocity to +/- pi/2 instead of failing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("wait")
                .long("wait")
                .help("After writing the figures, block until Enter is pressed")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list_views")
                .long("list-views")
                .help("Print every view with its enabled state and exit")
                .action(ArgAction::SetTrue),
        )
}

fn parse_views(matches: &ArgMatches, id: &str) -> Result<Vec<View>> {
    matches
        .get_many::<String>(id)
        .unwrap_or_default()
        .map(|name| name.parse::<View>().with_context(|| format!("--{}", id)))
        .collect()
}

/// Defaults, then the JSON file, then --enable/--disable, then --only.
fn view_selection(matches: &ArgMatches) -> Result<ViewSelection> {
    let mut selection = ViewSelection::default();
    if let Some(path) = matches.get_one::<PathBuf>("views_config") {
        selection
            .apply_file(path)
            .with_context(|| format!("reading view config '{}'", path.display()))?;
    }
    for view in parse_views(matches, "enable")? {
        selection.set(view, true);
    }
    for view in parse_views(matches, "disable")? {
        selection.set(view, false);
    }
    let only = parse_views(matches, "only")?;
    if !only.is_empty() {
        selection = ViewSelection::none();
        for view in only {
            selection.set(view, true);
        }
    }
    Ok(selection)
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("REPORT_PLOTTER_LOG", "warn,report_plotter=info"))
        .init();

    let matches = cli().get_matches();
    let selection = view_selection(&matches)?;

    if matches.get_flag("list_views") {
        for (view, enabled) in selection.iter() {
            println!("{:<34} {}", view.name(), if enabled { "enabled" } else { "disabled" });
        }
        return Ok(());
    }

    let input_path = matches
        .get_one::<PathBuf>("input")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_PATH));
    let root_name = input_path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    let table = load(&input_path).with_context(|| format!("loading '{}'", input_path.display()))?;
    summarize(&table).log();

    let directions = if selection.is_enabled(View::DirectionOverTime) {
        let mode = if matches.get_flag("guard_direction") {
            DirectionMode::Guarded
        } else {
            DirectionMode::Strict
        };
        Some(derive_direction(&table, mode).context("deriving direction")?)
    } else {
        None
    };

    let format = match matches.get_one::<String>("format").map(String::as_str) {
        Some("svg") => ImageFormat::Svg,
        _ => ImageFormat::Png,
    };
    let output_dir = matches
        .get_one::<PathBuf>("output_dir")
        .map(PathBuf::as_path)
        .unwrap_or(Path::new("."));
    let file_sink = FileSink::new(output_dir, &root_name, format);

    let mut sink: Box<dyn RenderSink> = if matches.get_flag("wait") {
        Box::new(BlockingSink::new(file_sink, io::stdin().lock()))
    } else {
        Box::new(file_sink)
    };

    let count = render(&table, directions.as_deref(), &selection, sink.as_mut())
        .context("rendering views")?;
    info!("Done: {} figure(s) for '{}'.", count, root_name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn test_only_overrides_everything() {
        let m = cli()
            .try_get_matches_from(["report_plotter", "--enable", "velocity-scatter", "--only", "speed-over-time"])
            .unwrap();
        let sel = view_selection(&m).unwrap();
        assert_eq!(sel.enabled_views(), vec![View::SpeedOverTime]);
    }

    #[test]
    fn test_enable_and_disable() {
        let m = cli()
            .try_get_matches_from([
                "report_plotter",
                "--enable",
                "direction-over-time",
                "--disable",
                "speed-histogram",
            ])
            .unwrap();
        let sel = view_selection(&m).unwrap();
        assert!(sel.is_enabled(View::DirectionOverTime));
        assert!(!sel.is_enabled(View::SpeedHistogram));
    }

    #[test]
    fn test_unknown_view_is_rejected() {
        let m = cli()
            .try_get_matches_from(["report_plotter", "--enable", "pie-chart"])
            .unwrap();
        assert!(view_selection(&m).is_err());
    }
}
