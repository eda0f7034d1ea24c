// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pie chart of spending per category, rendered as a standalone ECharts page.

use charming::{
    Chart,
    component::{Legend, Title},
    element::{Orient, Tooltip, Trigger},
    series::Pie,
};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::CategoryTotal;

const ECHARTS_CDN: &str = "https://cdn.jsdelivr.net/npm/echarts@5.5.1/dist/echarts.min.js";

/// Builds the pie chart from an expense report, one slice per category.
pub fn expense_pie(totals: &[CategoryTotal]) -> Chart {
    let data: Vec<(f64, &str)> = totals
        .iter()
        .map(|t| (t.total, t.category.as_str()))
        .collect();

    Chart::new()
        .title(Title::new().text("Expenses").left("center"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .formatter("{b}: {c} ({d}%)"),
        )
        .legend(Legend::new().orient(Orient::Vertical).left("left"))
        .series(
            Pie::new()
                .name("Expenses")
                .radius("60%")
                .data(data),
        )
}

pub fn render_html(chart: &Chart) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Expenses</title>
  <script src="{cdn}"></script>
</head>
<body>
  <div id="chart" style="width: 800px; height: 600px; margin: auto;"></div>
  <script>
    const chart = echarts.init(document.getElementById("chart"));
    chart.setOption({options});
    window.addEventListener('resize', chart.resize);
  </script>
</body>
</html>
"#,
        cdn = ECHARTS_CDN,
        options = chart,
    )
}

/// Writes the expense chart page to `path`.
pub fn write_html(path: &Path, totals: &[CategoryTotal]) -> Result<()> {
    if totals.is_empty() {
        return Err(Error::Chart("refusing to draw an empty chart".into()));
    }
    let html = render_html(&expense_pie(totals));
    fs::write(path, html)?;
    tracing::info!(path = %path.display(), slices = totals.len(), "wrote expense chart");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_embeds_every_category() {
        let totals = vec![
            CategoryTotal {
                category: "food".into(),
                total: 15.0,
            },
            CategoryTotal {
                category: "transport".into(),
                total: 20.0,
            },
        ];
        let html = render_html(&expense_pie(&totals));
        assert!(html.contains("echarts.init"));
        assert!(html.contains("\"food\""));
        assert!(html.contains("\"transport\""));
        assert!(html.contains("\"pie\""));
    }

    #[test]
    fn empty_report_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("empty.html");
        assert!(matches!(write_html(&out, &[]), Err(Error::Chart(_))));
        assert!(!out.exists());
    }
}
