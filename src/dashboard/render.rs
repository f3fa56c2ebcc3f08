use super::state::DashboardView;
use crate::models::StatusSnapshot;

pub const TITLE: &str = "50hertz Demo EMS Status Dashboard";
pub const FOOTER: &str = "Demo für 50hertz";
pub const LOADING_MESSAGE: &str = "Lade Status...";

pub const LABEL_PRICE: &str = "Aktueller Strompreis";
pub const LABEL_CHARGING: &str = "Status";
pub const LABEL_CAPACITY_KWH: &str = "Batteriekapazität";
pub const LABEL_CAPACITY_PERCENT: &str = "Batteriekapazität (%)";
pub const LABEL_CONSUMPTION_RATE: &str = "Verbrauchsrate der Anlage";
pub const LABEL_TOTAL_CONSUMPTION: &str = "Gesamter Verbrauch";

/// Label/value pairs of the status card, in display order.
///
/// Consumption rows are left out when the API did not report them.
pub fn status_rows(snapshot: &StatusSnapshot) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        (LABEL_PRICE, format!("{} ct (€)", snapshot.current_price)),
        (LABEL_CHARGING, sanitize(&snapshot.charging)),
        (LABEL_CAPACITY_KWH, format!("{} kWh", snapshot.battery_capacity_kwh)),
        (
            LABEL_CAPACITY_PERCENT,
            format!("{} %", snapshot.battery_capacity_percent),
        ),
    ];

    if let Some(rate) = snapshot.facility_consumption_rate {
        rows.push((LABEL_CONSUMPTION_RATE, format!("{} kWh/s", rate)));
    }
    if let Some(total) = snapshot.total_consumption_kwh {
        rows.push((LABEL_TOTAL_CONSUMPTION, format!("{} kWh", total)));
    }

    rows
}

/// Replace control characters so API text cannot steer the terminal or break the card
fn sanitize(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_control() { '\u{FFFD}' } else { c })
        .collect()
}

/// Render the current view as plain text
pub fn render(view: &DashboardView) -> String {
    match view {
        DashboardView::Error(message) => format!("{}\n", sanitize(message)),
        DashboardView::Loading => format!("{}\n", LOADING_MESSAGE),
        DashboardView::Ready(snapshot) => render_card(snapshot),
    }
}

fn render_card(snapshot: &StatusSnapshot) -> String {
    let lines: Vec<String> = status_rows(snapshot)
        .into_iter()
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect();

    // Width in chars, the labels contain umlauts
    let width = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let border = format!("+{}+", "-".repeat(width + 2));

    let mut out = String::new();
    out.push_str(TITLE);
    out.push_str("\n\n");
    out.push_str(&border);
    out.push('\n');
    for line in &lines {
        let padding = width - line.chars().count();
        out.push_str(&format!("| {}{} |\n", line, " ".repeat(padding)));
    }
    out.push_str(&border);
    out.push_str("\n\n");
    out.push_str(FOOTER);
    out.push('\n');
    out
}
