//! Draws a decision boundary to a bitmap.
use plotters::prelude::*;

use std::error::Error;
use std::path::Path;

use super::geometry::Boundary;


impl Boundary {
    /// Draw this boundary to the bitmap file `path` of
    /// size `width x height` pixels.
    /// Leaf rectangles are filled with one color per label and
    /// the dividing segments are drawn on top of them.
    pub fn plot<P>(&self, path: P, width: u32, height: u32)
        -> Result<(), Box<dyn Error>>
        where P: AsRef<Path>
    {
        let area = BitMapBackend::new(path.as_ref(), (width, height))
            .into_drawing_area();
        area.fill(&WHITE)?;

        if self.regions.is_empty() {
            area.present()?;
            return Ok(());
        }

        // The regions cover the bounding rectangle,
        // so their extrema recover the frame.
        let x_min = self.regions.iter()
            .map(|r| r.x)
            .fold(f64::INFINITY, f64::min);
        let x_max = self.regions.iter()
            .map(|r| r.x + r.width)
            .fold(f64::NEG_INFINITY, f64::max);
        let y_min = self.regions.iter()
            .map(|r| r.y)
            .fold(f64::INFINITY, f64::min);
        let y_max = self.regions.iter()
            .map(|r| r.y + r.height)
            .fold(f64::NEG_INFINITY, f64::max);

        let mut chart = ChartBuilder::on(&area)
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(30)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

        chart.configure_mesh()
            .disable_mesh()
            .draw()?;

        let mut labels = self.regions.iter()
            .filter_map(|r| r.label)
            .collect::<Vec<_>>();
        labels.sort_unstable();
        labels.dedup();

        chart.draw_series(
            self.regions.iter()
                .map(|r| {
                    let k = r.label
                        .and_then(|label| {
                            labels.iter().position(|&l| l == label)
                        })
                        .unwrap_or(0);
                    let color = Palette99::pick(k).mix(0.4);

                    Rectangle::new(
                        [(r.x, r.y), (r.x + r.width, r.y + r.height)],
                        color.filled(),
                    )
                })
        )?;

        chart.draw_series(
            self.lines.iter()
                .map(|line| {
                    PathElement::new(
                        vec![(line.x1, line.y1), (line.x2, line.y2)],
                        BLACK.stroke_width(2),
                    )
                })
        )?;

        area.present()?;

        Ok(())
    }
}
