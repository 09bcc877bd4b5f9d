//! Chart Rendering
//!
//! Draws the dashboard charts into SVG strings with plotters. Components inject
//! the markup with `inner_html`.

use plotters::coord::ranged1d::SegmentValue;
use plotters::element::Pie;
use plotters::prelude::*;

use crate::charts::{BarGroup, StatusSlice};

pub type PlotResult = Result<String, Box<dyn std::error::Error>>;

/// Grey used when a fill string cannot be parsed
const FALLBACK_FILL: RGBAColor = RGBAColor(156, 163, 175, 1.0);

/// Fraction of each x slot covered by bars
const GROUP_WIDTH: f64 = 0.8;

fn parse_hex(hex: &str) -> Option<RGBAColor> {
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some(RGBAColor(channel(0)?, channel(2)?, channel(4)?, 1.0))
}

fn parse_hsl(args: &str) -> Option<RGBAColor> {
    let mut parts = args
        .split(',')
        .map(|part| part.trim().trim_end_matches('%').parse::<f64>().ok());
    let hue = parts.next()??;
    let saturation = parts.next()??;
    let lightness = parts.next()??;
    Some(HSLColor((hue % 360.0) / 360.0, saturation / 100.0, lightness / 100.0).to_rgba())
}

/// CSS fill (`#rrggbb` or `hsl(h, s%, l%)`) to a plotters color
pub fn parse_fill(fill: &str) -> RGBAColor {
    let fill = fill.trim();
    let parsed = match fill.strip_prefix('#') {
        Some(hex) => parse_hex(hex),
        None => fill
            .strip_prefix("hsl(")
            .and_then(|rest| rest.strip_suffix(')'))
            .and_then(parse_hsl),
    };
    parsed.unwrap_or(FALLBACK_FILL)
}

/// Status pie, clockwise from twelve o'clock. Zero-valued slices are skipped.
pub fn render_pie(slices: &[StatusSlice], size: u32) -> PlotResult {
    let drawn: Vec<&StatusSlice> = slices.iter().filter(|s| s.value > 0).collect();

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (size, size)).into_drawing_area();
        root.fill(&WHITE)?;

        if !drawn.is_empty() {
            let center = (size as i32 / 2, size as i32 / 2);
            let radius = size as f64 * 0.32;
            let sizes: Vec<f64> = drawn.iter().map(|s| s.value as f64).collect();
            let colors: Vec<RGBColor> = drawn
                .iter()
                .map(|s| {
                    let (r, g, b) = parse_fill(s.fill).rgb();
                    RGBColor(r, g, b)
                })
                .collect();
            let labels: Vec<String> = drawn.iter().map(|s| s.label()).collect();

            let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
            pie.start_angle(-90.0);
            pie.label_style(("sans-serif", 12).into_font().color(&BLACK));
            root.draw(&pie)?;
        }
        root.present()?;
    }
    Ok(svg)
}

fn segment_label(groups: &[BarGroup], value: &SegmentValue<i32>) -> String {
    match value {
        SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => usize::try_from(*i)
            .ok()
            .and_then(|i| groups.get(i))
            .map(|group| group.label.clone())
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    }
}

/// Top of the value axis: the tallest bar plus headroom, at least 1.
fn axis_top(groups: &[BarGroup]) -> f64 {
    let tallest = groups
        .iter()
        .flat_map(|g| g.bars.iter().map(|b| b.value))
        .fold(0.0, f64::max);
    (tallest * 1.1).max(1.0)
}

/// Grouped vertical bars, one x slot per group.
pub fn render_bars(
    groups: &[BarGroup],
    (width, height): (u32, u32),
    unit: &str,
) -> PlotResult {
    let slots = groups.len().max(1) as i32;
    let top = axis_top(groups);

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;

        // Labels sit on the segmented axis; bars are placed on a continuous
        // secondary axis spanning the same slots.
        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(44)
            .build_cartesian_2d((0..slots - 1).into_segmented(), 0f64..top)?
            .set_secondary_coord(0f64..slots as f64, 0f64..top);

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(slots as usize)
            .x_label_formatter(&|value: &SegmentValue<i32>| segment_label(groups, value))
            .y_label_formatter(&|value: &f64| format!("{:.0}{}", value, unit))
            .label_style(("sans-serif", 12))
            .draw()?;

        chart.draw_secondary_series(groups.iter().enumerate().flat_map(|(i, group)| {
            let bar_width = GROUP_WIDTH / group.bars.len().max(1) as f64;
            let left = i as f64 + (1.0 - GROUP_WIDTH) / 2.0;
            group.bars.iter().enumerate().map(move |(j, bar)| {
                let x0 = left + j as f64 * bar_width;
                Rectangle::new(
                    [(x0, 0.0), (x0 + bar_width, bar.value.max(0.0))],
                    parse_fill(&bar.fill).filled(),
                )
            })
        }))?;

        root.present()?;
    }
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{BarValue, COMPLETED_FILL, PENDING_FILL};

    fn slice(name: &str, value: u64, percent: u32, fill: &'static str) -> StatusSlice {
        StatusSlice {
            name: name.to_string(),
            value,
            percent,
            fill,
        }
    }

    fn team() -> Vec<BarGroup> {
        let bar = |value: f64, fill: &str| BarValue {
            value,
            fill: fill.to_string(),
        };
        vec![
            BarGroup {
                label: "Ana".into(),
                bars: vec![bar(3.0, COMPLETED_FILL), bar(1.0, PENDING_FILL)],
            },
            BarGroup {
                label: "Ben".into(),
                bars: vec![bar(2.0, COMPLETED_FILL), bar(4.0, PENDING_FILL)],
            },
        ]
    }

    #[test]
    fn test_parse_hex_fill() {
        assert_eq!(parse_fill("#10b981").rgb(), (16, 185, 129));
        assert_eq!(parse_fill("#0088FE").rgb(), (0, 136, 254));
    }

    #[test]
    fn test_parse_hsl_fill() {
        let (r, g, b) = parse_fill("hsl(0, 70%, 50%)").rgb();
        assert!(r > 200);
        assert_eq!(g, b);

        let (r, g, b) = parse_fill("hsl(120, 70%, 50%)").rgb();
        assert!(g > 200);
        assert_eq!(r, b);
    }

    #[test]
    fn test_unparsable_fill_falls_back() {
        assert_eq!(parse_fill("tomato").rgb(), FALLBACK_FILL.rgb());
        assert_eq!(parse_fill("#12").rgb(), FALLBACK_FILL.rgb());
        assert_eq!(parse_fill("hsl(a, b, c)").rgb(), FALLBACK_FILL.rgb());
    }

    #[test]
    fn test_render_pie_svg() {
        let slices = vec![
            slice("Completed", 6, 60, "#0088FE"),
            slice("Todo", 4, 40, "#00C49F"),
        ];
        let svg = render_pie(&slices, 300).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Completed (60%)"));
        assert!(svg.to_lowercase().contains("#0088fe"));
    }

    #[test]
    fn test_render_empty_pie() {
        let svg = render_pie(&[slice("Todo", 0, 0, "#0088FE")], 200).unwrap();
        assert!(svg.contains("<svg"));
        assert!(!svg.contains("Todo"));
    }

    #[test]
    fn test_render_grouped_bars() {
        let svg = render_bars(&team(), (480, 260), "%").unwrap();
        let lower = svg.to_lowercase();
        assert!(lower.contains("#10b981"));
        assert!(lower.contains("#f59e0b"));
        assert!(svg.contains("Ana"));
        assert!(svg.contains("Ben"));
    }

    #[test]
    fn test_render_bars_without_groups() {
        let svg = render_bars(&[], (480, 260), "").unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_axis_top() {
        assert_eq!(axis_top(&[]), 1.0);
        assert!((axis_top(&team()) - 4.4).abs() < 1e-9);
    }
}
