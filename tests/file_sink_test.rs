// tests/file_sink_test.rs

use report_plotter::data_input::report_parser::parse_report;
use report_plotter::plot_framework::{FileSink, ImageFormat};
use report_plotter::views::{View, ViewSelection};
use report_plotter::{derive_direction, render, DirectionMode};

fn sample_report() -> String {
    let mut contents = String::from("timestamp,xpos,ypos,xvel,yvel,speed,xacc,yacc,accmag,freefall\n");
    for i in 0..50 {
        let t = i as f64;
        contents.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{}\n",
            i,
            t * 2.0,
            -(t * t) * 0.1,
            2.0,
            -0.2 * t - 0.1,
            (4.0 + (0.2 * t + 0.1).powi(2)).sqrt(),
            0.0,
            -0.2,
            0.2,
            i % 2
        ));
    }
    contents
}

fn all_views() -> ViewSelection {
    let mut selection = ViewSelection::none();
    for view in View::ALL {
        selection.set(view, true);
    }
    selection
}

fn render_all_views(format: ImageFormat) {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("plots");
    let table = parse_report(sample_report().as_bytes()).unwrap();
    let directions = derive_direction(&table, DirectionMode::Strict).unwrap();

    let mut sink = FileSink::new(&out_dir, "report", format);
    let count = render(&table, Some(directions.as_slice()), &all_views(), &mut sink).unwrap();

    assert_eq!(count, View::ALL.len());
    assert_eq!(sink.written().len(), count);
    for (path, view) in sink.written().iter().zip(View::ALL) {
        assert_eq!(path, &sink.output_path(view));
        let meta = std::fs::metadata(path).unwrap();
        assert!(meta.len() > 0, "{} is empty", path.display());
    }
}

#[test]
fn file_sink_writes_every_view_as_png() {
    render_all_views(ImageFormat::Png);
}

#[test]
fn file_sink_writes_every_view_as_svg() {
    render_all_views(ImageFormat::Svg);
}

#[test]
fn file_sink_writes_placeholders_for_empty_report() {
    let dir = tempfile::tempdir().unwrap();
    let table = parse_report("timestamp,xpos\n".as_bytes()).unwrap();

    let mut sink = FileSink::new(dir.path(), "empty", ImageFormat::Png);
    let count = render(&table, None, &ViewSelection::default(), &mut sink).unwrap();

    assert_eq!(count, 4);
    assert_eq!(sink.written().len(), 4);
    assert!(sink.written().iter().all(|p| p.exists()));
}

#[test]
fn file_sink_creates_nothing_without_figures() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("unused");
    let table = parse_report(sample_report().as_bytes()).unwrap();

    let mut sink = FileSink::new(&out_dir, "report", ImageFormat::Png);
    render(&table, None, &ViewSelection::none(), &mut sink).unwrap();

    assert!(sink.written().is_empty());
    assert!(!out_dir.exists());
}
