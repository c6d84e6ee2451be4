use std::path::PathBuf;
use superpixel_graph::grid::io::{save_label_preview_png, save_mask_png, write_json_file};
use superpixel_graph::prelude::*;

fn main() {
    // Demo stub: derives graph data from a synthetic block label map
    let w = 640usize;
    let h = 480usize;
    let cell = 32usize;
    let cols = w / cell;
    let labels = LabelMap::from_fn(w, h, |x, y| ((y / cell) * cols + x / cell) as u32);
    let region_count = cols * (h / cell);

    let map = match SuperpixelMap::from_labels(labels, region_count) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("invalid label map: {e}");
            std::process::exit(1);
        }
    };

    let summary = map.summary();
    let contour = map.contour_mask(true);
    println!(
        "regions={} pairs={} maxDegree={} contourPx={}",
        summary.region_count,
        summary.adjacent_pairs,
        summary.max_degree,
        contour.marked()
    );

    // Optional export: pass an output directory as the first argument.
    if let Some(dir) = std::env::args().nth(1).map(PathBuf::from) {
        let result = save_mask_png(&contour, &dir.join("contour.png"))
            .and_then(|()| save_label_preview_png(&map.labels(), &dir.join("labels.png")))
            .and_then(|()| write_json_file(&summary, &dir.join("summary.json")));
        if let Err(e) = result {
            eprintln!("{e}");
            std::process::exit(1);
        }
        println!("wrote contour.png, labels.png, summary.json to {}", dir.display());
    }
}
