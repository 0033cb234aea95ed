use contour_saliency::image::Mask;
use contour_saliency::{AnalyzerParams, ShapeAnalyzer};

fn main() {
    // Demo stub: rasterizes a filled rectangle and prints its salient points
    let (w, h) = (64usize, 40usize);
    let mut mask = Mask::new(w, h);
    for y in 10..30 {
        for x in 12..52 {
            mask.set(x, y, true);
        }
    }

    let analyzer = match ShapeAnalyzer::new(AnalyzerParams::default()) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    match analyzer.process(&mask) {
        Ok(report) => {
            println!("{}", report.summary());
            for p in &report.salient {
                println!("  ({:.0}, {:.0}) k={:+.3}", p.point.x, p.point.y, p.curvature);
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
