//! Terminal rendering of a dashboard view.

use salesboard_core::{DashboardView, DisplayMode};

use crate::colors;

const BAR_WIDTH: usize = 30;

/// Render the whole view as text.
pub fn render_view(view: &DashboardView) -> String {
    let mut out = String::new();
    let range = &view.filter.date_range;

    out.push_str(&format!(
        "{}Sales Dashboard{} {}{} → {}{}\n",
        colors::BOLD,
        colors::RESET,
        colors::CYAN,
        range.start,
        range.end,
        colors::RESET
    ));
    out.push_str(&format!(
        "Category: {}   Region: {}\n",
        constraint_label(view.filter.category.as_deref()),
        constraint_label(view.filter.region.as_deref())
    ));
    out.push_str(&"─".repeat(50));
    out.push('\n');

    if view.is_empty() {
        out.push_str(&format!(
            "\n{}No records match the current filters.{}\n",
            colors::YELLOW,
            colors::RESET
        ));
        return out;
    }

    let summary = &view.summary;
    out.push_str(&format!(
        "Orders: {}   Sales: ${:.2}   Profit: ${:.2}   Units: {}   Avg order: ${:.2}\n",
        summary.orders,
        summary.total_sales,
        summary.total_profit,
        summary.total_quantity,
        summary.average_order_value
    ));

    out.push_str(&section("Daily Sales"));
    let max_sales = view.daily.iter().map(|p| p.sales).fold(0.0_f64, f64::max);
    for point in &view.daily {
        out.push_str(&format!(
            "  {:<10}  {} ${:>10.2}  {}profit ${:.2}  revenue ${:.2}{}\n",
            view.mode.date_label(point.date),
            bar(point.sales, max_sales),
            point.sales,
            colors::DIM,
            point.profit,
            point.revenue,
            colors::RESET
        ));
    }

    out.push_str(&section("Top Products by Quantity"));
    let max_quantity = view.top_products.iter().map(|p| p.quantity).max().unwrap_or(0);
    for (i, product) in view.top_products.iter().enumerate() {
        let rank = match view.mode {
            DisplayMode::Full => i + 1,
            DisplayMode::Compact => view.top_products.len() - i,
        };
        out.push_str(&format!(
            "  {:>2}. {:<20} {} {:>5} units  ${:.2}\n",
            rank,
            product.name,
            bar(product.quantity as f64, max_quantity as f64),
            product.quantity,
            product.sales
        ));
    }

    out.push_str(&section("Sales by Region"));
    for region in &view.regions {
        out.push_str(&format!(
            "  {:<12} {} ${:>10.2}  {:>5.1}%\n",
            region.name,
            bar(region.share, 1.0),
            region.value,
            region.share * 100.0
        ));
    }

    out
}

fn section(title: &str) -> String {
    format!("\n{}{}{}\n", colors::BOLD, title, colors::RESET)
}

fn constraint_label(value: Option<&str>) -> &str {
    match value {
        None | Some("") => "all",
        Some(value) => value,
    }
}

fn bar(value: f64, max: f64) -> String {
    let filled = if max > 0.0 {
        ((value / max) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    let filled = filled.min(BAR_WIDTH);
    format!(
        "{}{}{}{}",
        colors::GREEN,
        "█".repeat(filled),
        colors::RESET,
        " ".repeat(BAR_WIDTH - filled)
    )
}
