//! PNG chart rendering with [`plotters`].
//!
//! Every `write_*` method owns its backend and drawing area for the duration
//! of the call, so no drawing state carries over between figures. Empty
//! inputs are rejected with [`ProcessingError::EmptySubset`] before any file
//! is created.

use crate::error::{ProcessingError, Result};
use crate::models::{CategoryCount, LinearFit, Listing, NeighbourhoodSummary, RoomTypePrice};
use crate::utils::constants::{MARKER_AREA_MAX, MARKER_AREA_MIN, SCATTER_ALPHA};
use crate::writers::figure::Figure;
use plotters::prelude::*;
use std::ops::Range;
use std::path::{Path, PathBuf};

const FONT: &str = "sans-serif";

/// Colour Brewer "Set2"
const SET2: [RGBColor; 8] = [
    RGBColor(0x66, 0xc2, 0xa5),
    RGBColor(0xfc, 0x8d, 0x62),
    RGBColor(0x8d, 0xa0, 0xcb),
    RGBColor(0xe7, 0x8a, 0xc3),
    RGBColor(0xa6, 0xd8, 0x54),
    RGBColor(0xff, 0xd9, 0x2f),
    RGBColor(0xe5, 0xc4, 0x94),
    RGBColor(0xb3, 0xb3, 0xb3),
];

/// Seaborn "pastel"
const PASTEL: [RGBColor; 10] = [
    RGBColor(0xa1, 0xc9, 0xf4),
    RGBColor(0xff, 0xb4, 0x82),
    RGBColor(0x8d, 0xe5, 0xa1),
    RGBColor(0xff, 0x9f, 0x9b),
    RGBColor(0xd0, 0xbb, 0xff),
    RGBColor(0xde, 0xbb, 0x9b),
    RGBColor(0xfa, 0xb0, 0xe4),
    RGBColor(0xcf, 0xcf, 0xcf),
    RGBColor(0xff, 0xfe, 0xa3),
    RGBColor(0xb9, 0xf2, 0xf0),
];

/// Labelled bar chart input shared by the count and mean-price figures
struct BarChart<'a> {
    figure: Figure,
    x_desc: &'a str,
    y_desc: &'a str,
    bars: Vec<(String, f64)>,
    palette: &'a [RGBColor],
    whole_numbers: bool,
}

pub struct ChartWriter {
    output_dir: PathBuf,
}

impl ChartWriter {
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn output_path(&self, figure: Figure) -> PathBuf {
        self.output_dir.join(figure.file_name())
    }

    /// Figure 1: listing counts per neighbourhood group, in the given order
    pub fn write_group_distribution(&self, counts: &[CategoryCount]) -> Result<PathBuf> {
        let figure = Figure::NeighbourhoodGroupDistribution;
        ensure_not_empty(figure, counts)?;

        self.draw_bar_chart(BarChart {
            figure,
            x_desc: "Neighbourhood Group",
            y_desc: "Number of Listings",
            bars: counts
                .iter()
                .map(|c| (c.category.clone(), c.count as f64))
                .collect(),
            palette: &SET2,
            whole_numbers: true,
        })
    }

    /// Figure 2: ln(price) against review count, one panel per borough.
    ///
    /// Both panels share the y range. Each carries an OLS line fitted to
    /// ln(price) over the panel's review range.
    pub fn write_log_price_vs_reviews(
        &self,
        brooklyn: &[Listing],
        manhattan: &[Listing],
    ) -> Result<PathBuf> {
        let figure = Figure::LogPriceVsReviews;
        ensure_not_empty(figure, brooklyn)?;
        ensure_not_empty(figure, manhattan)?;

        let panels = [
            ("Brooklyn", log_price_points(brooklyn, |l| l.number_of_reviews as f64)),
            ("Manhattan", log_price_points(manhattan, |l| l.number_of_reviews as f64)),
        ];

        let y_range = padded_range(panels.iter().flat_map(|(_, points)| points.iter().map(|p| p.1)));

        let path = self.output_path(figure);
        let target = path.clone();
        let root = BitMapBackend::new(&target, figure.size()).into_drawing_area();
        root.fill(&WHITE).map_err(ProcessingError::plot)?;
        let root = root
            .titled(figure.title(), (FONT, 26))
            .map_err(ProcessingError::plot)?;

        for (area, (name, points)) in root.split_evenly((1, 2)).iter().zip(panels.iter()) {
            let x_range = padded_range(points.iter().map(|p| p.0));

            let mut chart = ChartBuilder::on(area)
                .caption(*name, (FONT, 20))
                .margin(15)
                .x_label_area_size(45)
                .y_label_area_size(60)
                .build_cartesian_2d(x_range, y_range.clone())
                .map_err(ProcessingError::plot)?;

            chart
                .configure_mesh()
                .x_desc("Number of Accommodation Reviews")
                .y_desc("Logarithm of Accommodation Price in USD")
                .label_style((FONT, 13))
                .draw()
                .map_err(ProcessingError::plot)?;

            chart
                .draw_series(
                    points
                        .iter()
                        .map(|&p| Circle::new(p, 3, BLUE.mix(SCATTER_ALPHA).filled())),
                )
                .map_err(ProcessingError::plot)?;

            if let Some(fit) = LinearFit::fit(points) {
                let (lo, hi) = data_bounds(points.iter().map(|p| p.0));
                chart
                    .draw_series(LineSeries::new(
                        [(lo, fit.predict(lo)), (hi, fit.predict(hi))],
                        BLUE.stroke_width(2),
                    ))
                    .map_err(ProcessingError::plot)?;
            } else {
                tracing::warn!("Skipping regression line for {}: degenerate data", name);
            }
        }

        root.present().map_err(ProcessingError::plot)?;
        tracing::debug!("Wrote {}", path.display());

        Ok(path)
    }

    /// Figure 3: mean price per room type
    pub fn write_mean_price_by_room_type(&self, means: &[RoomTypePrice]) -> Result<PathBuf> {
        let figure = Figure::MeanPriceByRoomType;
        ensure_not_empty(figure, means)?;

        self.draw_bar_chart(BarChart {
            figure,
            x_desc: "Room Type",
            y_desc: "Mean of Airbnb Prices (USD)",
            bars: means
                .iter()
                .map(|m| (m.room_type.clone(), m.mean_price))
                .collect(),
            palette: &PASTEL,
            whole_numbers: false,
        })
    }

    /// Figure 4: neighbourhood centroids sized by mean price, one hue each
    pub fn write_neighbourhood_prices(&self, summaries: &[NeighbourhoodSummary]) -> Result<PathBuf> {
        let figure = Figure::NeighbourhoodPriceDistribution;
        ensure_not_empty(figure, summaries)?;

        let x_range = padded_range(summaries.iter().map(|s| s.mean_longitude));
        let y_range = padded_range(summaries.iter().map(|s| s.mean_latitude));
        let (min_price, max_price) = data_bounds(summaries.iter().map(|s| s.mean_price));

        let path = self.output_path(figure);
        let target = path.clone();
        let root = BitMapBackend::new(&target, figure.size()).into_drawing_area();
        root.fill(&WHITE).map_err(ProcessingError::plot)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(figure.title(), (FONT, 22))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(x_range, y_range)
            .map_err(ProcessingError::plot)?;

        chart
            .configure_mesh()
            .x_desc("Longitude")
            .y_desc("Latitude")
            .x_label_formatter(&|x| format!("{:.2}", x))
            .y_label_formatter(&|y| format!("{:.2}", y))
            .label_style((FONT, 14))
            .draw()
            .map_err(ProcessingError::plot)?;

        let hues = summaries.len() as f64;
        chart
            .draw_series(summaries.iter().enumerate().map(|(i, s)| {
                let radius = marker_area(s.mean_price, min_price, max_price).sqrt().round() as u32;
                let color = HSLColor(i as f64 / hues, 0.65, 0.5);
                Circle::new(
                    (s.mean_longitude, s.mean_latitude),
                    radius,
                    color.mix(0.8).filled(),
                )
            }))
            .map_err(ProcessingError::plot)?;

        root.present().map_err(ProcessingError::plot)?;
        tracing::debug!("Wrote {}", path.display());

        Ok(path)
    }

    /// Figure 5: price against minimum nights on a log-scaled price axis.
    ///
    /// The OLS fit of ln(price) is drawn as exp(fit), a straight line on the
    /// log axis.
    pub fn write_minimum_nights_vs_price(&self, listings: &[Listing]) -> Result<PathBuf> {
        let figure = Figure::MinimumNightsVsPrice;
        ensure_not_empty(figure, listings)?;

        let points: Vec<(f64, f64)> = listings
            .iter()
            .filter(|l| l.price > 0.0)
            .map(|l| (l.minimum_nights as f64, l.price))
            .collect();
        ensure_not_empty(figure, &points)?;

        let x_range = padded_range(points.iter().map(|p| p.0));
        let (min_price, max_price) = data_bounds(points.iter().map(|p| p.1));
        let y_range = (min_price * 0.8)..(max_price * 1.25);

        let path = self.output_path(figure);
        let target = path.clone();
        let root = BitMapBackend::new(&target, figure.size()).into_drawing_area();
        root.fill(&WHITE).map_err(ProcessingError::plot)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(figure.title(), (FONT, 18))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(x_range, y_range.log_scale())
            .map_err(ProcessingError::plot)?;

        chart
            .configure_mesh()
            .x_desc("Minimum nights of stay")
            .y_desc("Logarithm of price per night in USD")
            .y_label_formatter(&|y| format!("{:.0}", y))
            .label_style((FONT, 14))
            .draw()
            .map_err(ProcessingError::plot)?;

        chart
            .draw_series(
                points
                    .iter()
                    .map(|&p| Circle::new(p, 3, BLUE.mix(SCATTER_ALPHA).filled())),
            )
            .map_err(ProcessingError::plot)?;

        let log_points: Vec<(f64, f64)> = points.iter().map(|&(x, y)| (x, y.ln())).collect();
        if let Some(fit) = LinearFit::fit(&log_points) {
            let (lo, hi) = data_bounds(points.iter().map(|p| p.0));
            chart
                .draw_series(LineSeries::new(
                    [(lo, fit.predict(lo).exp()), (hi, fit.predict(hi).exp())],
                    BLUE.stroke_width(2),
                ))
                .map_err(ProcessingError::plot)?;
        } else {
            tracing::warn!("Skipping regression line for {}: degenerate data", figure);
        }

        root.present().map_err(ProcessingError::plot)?;
        tracing::debug!("Wrote {}", path.display());

        Ok(path)
    }

    fn draw_bar_chart(&self, spec: BarChart<'_>) -> Result<PathBuf> {
        let figure = spec.figure;
        let labels: Vec<&str> = spec.bars.iter().map(|(label, _)| label.as_str()).collect();
        let slots = spec.bars.len() as f64;
        let y_max = spec.bars.iter().map(|(_, v)| *v).fold(0.0, f64::max);
        let y_max = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };
        let whole_numbers = spec.whole_numbers;

        let path = self.output_path(figure);
        let target = path.clone();
        let root = BitMapBackend::new(&target, figure.size()).into_drawing_area();
        root.fill(&WHITE).map_err(ProcessingError::plot)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(figure.title(), (FONT, 22))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(-0.5..(slots - 0.5), 0.0..y_max)
            .map_err(ProcessingError::plot)?;

        // Bars sit on integer slots; only those ticks get a category label
        let category_label = |x: &f64| {
            let slot = x.round();
            if (x - slot).abs() < 1e-6 && slot >= 0.0 {
                labels.get(slot as usize).map(|s| s.to_string()).unwrap_or_default()
            } else {
                String::new()
            }
        };

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(labels.len())
            .x_label_formatter(&category_label)
            .y_label_formatter(&|y| value_label(*y, whole_numbers))
            .x_desc(spec.x_desc)
            .y_desc(spec.y_desc)
            .label_style((FONT, 14))
            .draw()
            .map_err(ProcessingError::plot)?;

        chart
            .draw_series(spec.bars.iter().enumerate().map(|(i, (_, value))| {
                let x = i as f64;
                let color = spec.palette[i % spec.palette.len()];
                Rectangle::new([(x - 0.4, 0.0), (x + 0.4, *value)], color.filled())
            }))
            .map_err(ProcessingError::plot)?;

        root.present().map_err(ProcessingError::plot)?;
        tracing::debug!("Wrote {}", path.display());

        Ok(path)
    }
}

fn ensure_not_empty<T>(figure: Figure, rows: &[T]) -> Result<()> {
    if rows.is_empty() {
        return Err(ProcessingError::EmptySubset {
            figure: figure.to_string(),
        });
    }
    Ok(())
}

fn log_price_points<F>(listings: &[Listing], x: F) -> Vec<(f64, f64)>
where
    F: Fn(&Listing) -> f64,
{
    listings
        .iter()
        .filter_map(|l| l.log_price().map(|y| (x(l), y)))
        .collect()
}

/// Smallest and largest value, `(0, 0)` for no values
fn data_bounds<I: Iterator<Item = f64>>(values: I) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if lo.is_finite() && hi.is_finite() {
        (lo, hi)
    } else {
        (0.0, 0.0)
    }
}

/// Data range widened by 5% on each side, never zero-width
fn padded_range<I: Iterator<Item = f64>>(values: I) -> Range<f64> {
    let (lo, hi) = data_bounds(values);
    let span = hi - lo;
    let pad = if span > 0.0 { span * 0.05 } else { 1.0 };
    (lo - pad)..(hi + pad)
}

/// Tick label for a bar height axis.
///
/// Count axes only label integral ticks; fractional ticks on a count axis
/// get no label at all.
fn value_label(value: f64, whole_numbers: bool) -> String {
    let rounded = value.round();
    if (value - rounded).abs() < 1e-6 {
        format!("{:.0}", rounded)
    } else if whole_numbers {
        String::new()
    } else {
        format!("{:.1}", value)
    }
}

/// Linear map of a price onto the marker area range
fn marker_area(price: f64, min_price: f64, max_price: f64) -> f64 {
    if max_price > min_price {
        MARKER_AREA_MIN + (price - min_price) / (max_price - min_price) * (MARKER_AREA_MAX - MARKER_AREA_MIN)
    } else {
        (MARKER_AREA_MIN + MARKER_AREA_MAX) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_marker_area_scaling() {
        assert_eq!(marker_area(100.0, 100.0, 300.0), MARKER_AREA_MIN);
        assert_eq!(marker_area(300.0, 100.0, 300.0), MARKER_AREA_MAX);
        assert_eq!(marker_area(200.0, 100.0, 300.0), 210.0);
        assert_eq!(marker_area(150.0, 150.0, 150.0), 210.0);
    }

    #[test]
    fn test_padded_range() {
        let range = padded_range([10.0, 30.0, 20.0].into_iter());
        assert!((range.start - 9.0).abs() < 1e-12);
        assert!((range.end - 31.0).abs() < 1e-12);

        let flat = padded_range([5.0, 5.0].into_iter());
        assert_eq!(flat, 4.0..6.0);
    }

    #[test]
    fn test_count_axis_labels_only_whole_ticks() {
        let ticks = [0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0];
        let labels: Vec<String> = ticks.iter().map(|&t| value_label(t, true)).collect();

        assert_eq!(labels, vec!["0", "", "1", "", "2", "", "3", "", "4"]);
    }

    #[test]
    fn test_price_axis_keeps_fractional_ticks() {
        assert_eq!(value_label(150.0, false), "150");
        assert_eq!(value_label(12.5, false), "12.5");
    }

    #[test]
    fn test_renders_bar_charts_to_png() {
        let dir = TempDir::new().unwrap();
        let writer = ChartWriter::new(dir.path());

        let counts = vec![
            CategoryCount {
                category: "Manhattan".to_string(),
                count: 4,
            },
            CategoryCount {
                category: "Brooklyn".to_string(),
                count: 3,
            },
            CategoryCount {
                category: "Queens".to_string(),
                count: 1,
            },
        ];
        let path = writer.write_group_distribution(&counts).unwrap();
        assert_eq!(path, writer.output_path(Figure::NeighbourhoodGroupDistribution));
        assert!(std::fs::metadata(&path).unwrap().len() > 0);

        let means = vec![
            RoomTypePrice {
                room_type: "Entire home/apt".to_string(),
                mean_price: 210.5,
            },
            RoomTypePrice {
                room_type: "Private room".to_string(),
                mean_price: 95.0,
            },
        ];
        let path = writer.write_mean_price_by_room_type(&means).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_empty_inputs_rejected_without_writing() {
        let dir = TempDir::new().unwrap();
        let writer = ChartWriter::new(dir.path());

        let results = [
            writer.write_group_distribution(&[]),
            writer.write_log_price_vs_reviews(&[], &[]),
            writer.write_mean_price_by_room_type(&[]),
            writer.write_neighbourhood_prices(&[]),
            writer.write_minimum_nights_vs_price(&[]),
        ];

        for (result, figure) in results.into_iter().zip(Figure::ALL) {
            match result {
                Err(ProcessingError::EmptySubset { figure: name }) => {
                    assert_eq!(name, figure.file_name())
                }
                other => panic!("expected EmptySubset for {}, got {:?}", figure, other),
            }
            assert!(!writer.output_path(figure).exists());
        }
    }
}
