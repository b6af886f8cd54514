use std::path::Path;

use plotters::prelude::*;

use crate::{Error, Result};

const BAR_COLOR: RGBColor = RGBColor(135, 206, 235);

/// Bar chart of `top` (technology, count) pairs, written as svg.
/// The caption names the requested `top_n` even when fewer technologies were found.
pub fn render_chart<P: AsRef<Path>>(
    path: P,
    top: &[(String, usize)],
    top_n: usize,
    category: &str,
) -> Result<()> {
    if top.is_empty() {
        return Err(Error::NoData);
    }
    let path = path.as_ref();
    draw(path, top, top_n, category).map_err(|e| Error::Chart(e.to_string()))?;
    log::info!("Chart saved to {}", path.display());
    Ok(())
}

fn draw(
    path: &Path,
    top: &[(String, usize)],
    top_n: usize,
    category: &str,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_count = top.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Top {} Required Technologies for {} Vacancies", top_n, category),
            ("sans-serif", 30),
        )
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d((0..top.len()).into_segmented(), 0..max_count + max_count / 10 + 1)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(top.len())
        .x_label_formatter(&|position| match position {
            SegmentValue::CenterOf(i) => top.get(*i).map(|(name, _)| name.clone()).unwrap_or_default(),
            _ => String::new(),
        })
        .x_desc("Technologies")
        .y_desc("Number of Vacancies")
        .draw()?;

    chart.draw_series(top.iter().enumerate().map(|(i, (_, count))| {
        let mut bar = Rectangle::new(
            [(SegmentValue::Exact(i), 0), (SegmentValue::Exact(i + 1), *count)],
            BAR_COLOR.filled(),
        );
        bar.set_margin(0, 0, 8, 8);
        bar
    }))?;

    chart.draw_series(top.iter().enumerate().map(|(i, (_, count))| {
        Text::new(
            count.to_string(),
            (SegmentValue::CenterOf(i), *count),
            ("sans-serif", 16).into_font(),
        )
    }))?;

    root.present()?;
    Ok(())
}
