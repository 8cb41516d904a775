//! HTML page rendering.
//!
//! Renders the whole dashboard as one server-side HTML document: filter
//! dropdowns, summary cards and the two charts as inline SVG. The page
//! reloads itself every refresh interval, keeping its query string and
//! therefore its selection.

use tracing::warn;

use crate::config::DisplayConfig;
use crate::dashboard::DashboardView;
use crate::source::SourceState;

use super::cards::SummaryCard;
use super::charts::ChartSpec;
use super::escape_html;
use super::svg::render_svg;

fn generate_styles() -> &'static str {
    r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Tahoma, sans-serif;
            margin: 0;
            background-color: #f4f6f9;
            color: #2c3e50;
        }
        .container {
            max-width: 1280px;
            margin: 0 auto;
            padding: 24px;
        }
        h1 {
            text-align: center;
            color: #2c3e50;
            margin-bottom: 24px;
        }
        .filters, .cards, .charts {
            display: grid;
            gap: 16px;
            margin-bottom: 24px;
        }
        .filters, .cards {
            grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
        }
        .charts {
            grid-template-columns: repeat(auto-fit, minmax(480px, 1fr));
        }
        label {
            font-weight: bold;
            display: block;
            margin-bottom: 6px;
        }
        select {
            width: 100%;
            padding: 8px;
            border: 1px solid #ced4da;
            border-radius: 4px;
            font-size: 1em;
        }
        .card {
            background: white;
            border-radius: 6px;
            box-shadow: 0 1px 3px rgba(0,0,0,0.12);
            overflow: hidden;
            text-align: center;
        }
        .card-header {
            color: white;
            padding: 10px;
            font-weight: bold;
        }
        .card-body {
            padding: 16px;
            font-size: 1.8em;
            font-weight: bold;
        }
        .card-danger .card-header { background-color: #e74c3c; }
        .card-danger .card-body { color: #e74c3c; }
        .card-primary .card-header { background-color: #2c3e50; }
        .card-primary .card-body { color: #2c3e50; }
        figure {
            background: white;
            margin: 0;
            padding: 8px;
            border-radius: 6px;
            box-shadow: 0 1px 3px rgba(0,0,0,0.12);
        }
        figure svg {
            width: 100%;
            height: auto;
        }
        .chart-error {
            text-align: center;
            color: #e74c3c;
        }
        .source-status {
            text-align: center;
            font-size: 0.85em;
            color: #888;
        }
        "#
}

fn render_select(name: &str, label: &str, choices: &[String], selected: Option<&str>) -> String {
    let mut html = String::new();
    html.push_str("        <div>\n");
    html.push_str(&format!(
        "            <label for=\"{name}\">{}</label>\n",
        escape_html(label)
    ));
    html.push_str(&format!(
        "            <select id=\"{name}\" name=\"{name}\" onchange=\"this.form.submit()\">\n"
    ));
    for choice in choices {
        let marker = if Some(choice.as_str()) == selected {
            " selected"
        } else {
            ""
        };
        html.push_str(&format!(
            "                <option value=\"{value}\"{marker}>{value}</option>\n",
            value = escape_html(choice)
        ));
    }
    html.push_str("            </select>\n");
    html.push_str("        </div>\n");
    html
}

fn render_figure(chart: &ChartSpec) -> String {
    let body = match render_svg(chart) {
        Ok(svg) => svg,
        Err(err) => {
            warn!(error = %err, "Chart rendering failed");
            format!("<p class=\"chart-error\">{}</p>", escape_html(&chart.title))
        }
    };
    format!("        <figure>{}</figure>\n", body)
}

fn render_card(card: &SummaryCard) -> String {
    format!(
        "        <div class=\"card card-{}\"><div class=\"card-header\">{}</div><div class=\"card-body\">{}</div></div>\n",
        card.tone.css_class(),
        escape_html(&card.title),
        escape_html(&card.value)
    )
}

/// Renders the dashboard page.
///
/// `refresh_secs` sets the automatic reload interval of the page.
pub fn render_page(view: &DashboardView, display: &DisplayConfig, refresh_secs: u64) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n");
    html.push_str(&format!(
        "<html dir=\"{}\">\n",
        display.direction.as_attr()
    ));

    html.push_str("<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str(&format!(
        "    <meta http-equiv=\"refresh\" content=\"{}\">\n",
        refresh_secs
    ));
    html.push_str(&format!(
        "    <title>{}</title>\n",
        escape_html(&display.title)
    ));
    html.push_str("    <style>");
    html.push_str(generate_styles());
    html.push_str("</style>\n");
    html.push_str("</head>\n");

    html.push_str("<body>\n");
    html.push_str("<main class=\"container\">\n");
    html.push_str(&format!("    <h1>{}</h1>\n", escape_html(&display.title)));

    html.push_str("    <form class=\"filters\" method=\"get\" action=\"/\">\n");
    html.push_str(&render_select(
        "grade",
        &display.grade_label,
        &view.options.grades,
        view.options.grade.as_deref(),
    ));
    html.push_str(&render_select(
        "class",
        &display.class_label,
        &view.options.classes,
        view.options.class.as_deref(),
    ));
    html.push_str("        <noscript><button type=\"submit\">OK</button></noscript>\n");
    html.push_str("    </form>\n");

    html.push_str("    <section class=\"cards\">\n");
    for card in &view.cards {
        html.push_str(&render_card(card));
    }
    html.push_str("    </section>\n");

    html.push_str("    <section class=\"charts\">\n");
    html.push_str(&render_figure(&view.charts.by_date));
    html.push_str(&render_figure(&view.charts.by_student));
    html.push_str("    </section>\n");

    if view.source.state != SourceState::Loaded {
        html.push_str(&format!(
            "    <p class=\"source-status\">{}</p>\n",
            escape_html(view.source.detail.as_deref().unwrap_or_default())
        ));
    }

    html.push_str("</main>\n");
    html.push_str("</body>\n");
    html.push_str("</html>\n");

    html
}
