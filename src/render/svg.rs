//! Inline SVG images for the HTML report

use std::fmt::Write;

use super::{BarChart, WordCloud};

const CHART_WIDTH: f64 = 500.0;
const CHART_HEIGHT: f64 = 400.0;
const CHART_MARGIN: f64 = 40.0;

const CLOUD_WIDTH: f64 = 600.0;
const CLOUD_HEIGHT: f64 = 400.0;
const MIN_FONT: f64 = 12.0;
const MAX_FONT: f64 = 48.0;

/// Escape text for HTML/SVG content and attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Vertical bar chart
pub fn bar_chart(chart: &BarChart) -> String {
    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = CHART_WIDTH,
        h = CHART_HEIGHT
    );
    let _ = write!(
        svg,
        r#"<text x="{}" y="20" text-anchor="middle" font-size="16">{}</text>"#,
        CHART_WIDTH / 2.0,
        escape(&chart.title)
    );

    let max = chart.max_value();
    let plot_height = CHART_HEIGHT - 2.0 * CHART_MARGIN;
    let slot = if chart.bars.is_empty() {
        0.0
    } else {
        (CHART_WIDTH - 2.0 * CHART_MARGIN) / chart.bars.len() as f64
    };
    let baseline = CHART_HEIGHT - CHART_MARGIN;

    let _ = write!(
        svg,
        r#"<line x1="{m}" y1="{b}" x2="{r}" y2="{b}" stroke="black"/>"#,
        m = CHART_MARGIN,
        b = baseline,
        r = CHART_WIDTH - CHART_MARGIN
    );

    for (i, bar) in chart.bars.iter().enumerate() {
        let height = if max == 0 {
            0.0
        } else {
            plot_height * bar.value as f64 / max as f64
        };
        let x = CHART_MARGIN + slot * i as f64 + slot * 0.15;
        let width = slot * 0.7;
        let _ = write!(
            svg,
            r#"<rect x="{x:.1}" y="{y:.1}" width="{width:.1}" height="{height:.1}" fill="{fill}" stroke="black"/>"#,
            y = baseline - height,
            fill = escape(&bar.color)
        );
        let _ = write!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="12">{}</text>"#,
            x + width / 2.0,
            baseline - height - 4.0,
            bar.value
        );
        let _ = write!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="12">{}</text>"#,
            x + width / 2.0,
            baseline + 16.0,
            escape(&bar.label)
        );
    }

    svg.push_str("</svg>");
    svg
}

/// Word cloud laid out in left-to-right rows, heaviest terms first
///
/// Widths are estimated from character count; terms that no longer fit
/// vertically are dropped.
pub fn word_cloud(cloud: &WordCloud) -> String {
    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><rect width="100%" height="100%" fill="white"/>"#,
        w = CLOUD_WIDTH,
        h = CLOUD_HEIGHT
    );

    let mut x = 0.0;
    let mut y = 0.0;
    let mut row_height: f64 = 0.0;

    for term in &cloud.terms {
        let font = MIN_FONT + (MAX_FONT - MIN_FONT) * term.weight.clamp(0.0, 1.0);
        let width = font * 0.6 * term.word.chars().count() as f64 + font * 0.4;

        if x + width > CLOUD_WIDTH && x > 0.0 {
            x = 0.0;
            y += row_height;
            row_height = 0.0;
        }
        row_height = row_height.max(font * 1.2);
        if y + row_height > CLOUD_HEIGHT {
            break;
        }

        let _ = write!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" font-size="{:.1}" fill="{}">{}</text>"#,
            x,
            y + font,
            font,
            cloud.palette.color(term.weight),
            escape(&term.word)
        );
        x += width;
    }

    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::CloudTerm;
    use crate::render::{Bar, Palette};

    #[test]
    fn test_escape() {
        assert_eq!(
            escape("<a href=\"x\">l'été & co</a>"),
            "&lt;a href=&quot;x&quot;&gt;l&#39;été &amp; co&lt;/a&gt;"
        );
    }

    #[test]
    fn test_bar_chart_contains_bars() {
        let chart = BarChart {
            title: "Répartition".to_string(),
            bars: vec![
                Bar {
                    label: "positif".to_string(),
                    value: 4,
                    color: "green".to_string(),
                },
                Bar {
                    label: "negatif".to_string(),
                    value: 0,
                    color: "red".to_string(),
                },
            ],
        };
        let svg = bar_chart(&chart);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<rect").count(), 2);
        assert!(svg.contains("positif"));
        assert!(svg.contains("Répartition"));
    }

    #[test]
    fn test_empty_bar_chart() {
        let chart = BarChart {
            title: "vide".to_string(),
            bars: vec![],
        };
        let svg = bar_chart(&chart);
        assert!(!svg.contains("<rect"));
    }

    #[test]
    fn test_word_cloud_sizes() {
        let cloud = WordCloud {
            title: "négatifs".to_string(),
            terms: vec![
                CloudTerm {
                    word: "bug".to_string(),
                    count: 4,
                    weight: 1.0,
                },
                CloudTerm {
                    word: "frais".to_string(),
                    count: 1,
                    weight: 0.25,
                },
            ],
            palette: Palette::Reds,
        };
        let svg = word_cloud(&cloud);
        assert!(svg.contains(r##"font-size="48.0" fill="#a50f15">bug<"##));
        assert!(svg.contains(">frais<"));
    }

    #[test]
    fn test_word_cloud_drops_overflow() {
        let terms = (0..500)
            .map(|i| CloudTerm {
                word: format!("mot{}", i),
                count: 1,
                weight: 1.0,
            })
            .collect();
        let cloud = WordCloud {
            title: "plein".to_string(),
            terms,
            palette: Palette::Greens,
        };
        let svg = word_cloud(&cloud);
        assert!(svg.matches("<text").count() < 500);
    }
}
