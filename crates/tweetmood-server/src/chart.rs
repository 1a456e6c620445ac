//! SVG pie chart of a [`Tally`].

use std::f64::consts::{FRAC_PI_2, TAU};

use tweetmood_analyzer::Tally;

const WIDTH: u32 = 360;
const HEIGHT: u32 = 240;
const CX: f64 = 120.0;
const CY: f64 = 120.0;
const RADIUS: f64 = 100.0;

const POSITIVE_COLOR: &str = "#4caf50";
const NEGATIVE_COLOR: &str = "#f44336";
const NEUTRAL_COLOR: &str = "#ffeb3b";
const EMPTY_COLOR: &str = "#e0e0e0";

/// Renders a standalone SVG pie chart with a legend.
///
/// Zero-count classes get no slice. An empty tally renders a grey disc
/// labelled "no tweets".
#[must_use]
pub fn render_pie(tally: &Tally) -> String {
    let slices = [
        ("positive", tally.positive, POSITIVE_COLOR),
        ("negative", tally.negative, NEGATIVE_COLOR),
        ("neutral", tally.neutral, NEUTRAL_COLOR),
    ];

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" role="img" aria-label="sentiment chart">"#
    );

    let total = tally.total();
    if total == 0 {
        svg.push_str(&format!(
            r#"<circle cx="{CX}" cy="{CY}" r="{RADIUS}" fill="{EMPTY_COLOR}"/><text x="{CX}" y="{CY}" text-anchor="middle" dominant-baseline="middle">no tweets</text>"#
        ));
    } else {
        let total = f64::from(total);
        let mut start = -FRAC_PI_2;
        for &(_, count, color) in &slices {
            if count == 0 {
                continue;
            }
            let fraction = f64::from(count) / total;
            if (fraction - 1.0).abs() < f64::EPSILON {
                svg.push_str(&format!(
                    r#"<circle cx="{CX}" cy="{CY}" r="{RADIUS}" fill="{color}"/>"#
                ));
                break;
            }
            let end = start + fraction * TAU;
            let (x1, y1) = point_at(start);
            let (x2, y2) = point_at(end);
            let large_arc = u8::from(fraction > 0.5);
            svg.push_str(&format!(
                r#"<path d="M {CX} {CY} L {x1:.2} {y1:.2} A {RADIUS} {RADIUS} 0 {large_arc} 1 {x2:.2} {y2:.2} Z" fill="{color}"/>"#
            ));
            start = end;
        }
    }

    for (row, &(label, count, color)) in (0_u32..).zip(&slices) {
        let y = 60 + row * 30;
        svg.push_str(&format!(
            r#"<rect x="250" y="{y}" width="14" height="14" fill="{color}"/><text x="270" y="{}">{label}: {count}</text>"#,
            y + 12
        ));
    }

    svg.push_str("</svg>");
    svg
}

fn point_at(angle: f64) -> (f64, f64) {
    (CX + RADIUS * angle.cos(), CY + RADIUS * angle.sin())
}
