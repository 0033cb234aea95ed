use contour_saliency::config::salient;
use contour_saliency::contour::trace_boundary;
use contour_saliency::diagnostics::ShapeReport;
use contour_saliency::image::io::{load_mask_image, save_overlay_image, write_json_file};
use contour_saliency::ShapeAnalyzer;
use std::env;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "salient_points".to_string());
    let config = salient::parse_cli(&program)?;

    let mask = load_mask_image(&config.input)?;
    let analyzer = ShapeAnalyzer::new(config.params).map_err(|e| format!("Invalid params: {e}"))?;
    let contour = trace_boundary(&mask).map_err(|e| format!("{}: {e}", config.input.display()))?;
    let report = analyzer.analyze_contour(&contour);

    print_text_summary(&report);

    write_json_file(&config.output.report_json, &report)?;
    println!(
        "JSON report written to {}",
        config.output.report_json.display()
    );

    if let Some(path) = &config.output.overlay_image {
        let points: Vec<_> = report.salient.iter().map(|p| p.point).collect();
        save_overlay_image(&mask, contour.points(), &points, path)?;
        println!("Overlay written to {}", path.display());
    }
    Ok(())
}

fn print_text_summary(report: &ShapeReport) {
    println!("Salient points");
    println!("  {}", report.summary());
    for scale in &report.scales {
        println!(
            "  sigma={:.2} salient={} mapped={}",
            scale.sigma,
            scale.salient,
            scale.mapped.len()
        );
    }
    for p in &report.salient {
        println!(
            "  #{:<5} ({:7.1}, {:7.1}) k={:+.3} {} sigma={:.2}",
            p.index,
            p.point.x,
            p.point.y,
            p.curvature,
            if p.convex { "convex " } else { "concave" },
            p.sigma
        );
    }
    for stage in &report.timing.stages {
        println!("  {:<10} {:.3} ms", stage.label, stage.elapsed_ms);
    }
}
