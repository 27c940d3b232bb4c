use crate::core::search::SearchResult;
use crate::domain::model::Announcement;
use crate::utils::error::{DashError, Result};
use crate::utils::formatter::format_currency;

const HEADERS: [&str; 8] = [
    "ID",
    "Título",
    "Sku",
    "Status",
    "Loja",
    "Quantidade",
    "Preço",
    "Link",
];

fn row(a: &Announcement) -> [String; 8] {
    [
        a.id.clone(),
        a.title.clone(),
        a.sku.clone(),
        a.status.label().to_string(),
        a.account.name.clone(),
        a.quantity.to_string(),
        format_currency(a.price),
        a.link.clone(),
    ]
}

/// Plain-text table with the footer summary.
pub fn render_table(result: &SearchResult) -> String {
    if result.is_empty() {
        return format!("{}\n", result.summary());
    }

    let rows: Vec<[String; 8]> = result.announcements.iter().map(row).collect();
    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for r in &rows {
        for (i, cell) in r.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    let mut out = String::new();
    out.push_str(&line(&header[..]));
    out.push('\n');
    for r in &rows {
        out.push_str(&line(&r[..]));
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&result.summary());
    out.push('\n');
    out
}

pub fn render_csv(result: &SearchResult) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADERS)?;
    for a in &result.announcements {
        writer.write_record(row(a))?;
    }

    let bytes = writer.into_inner().map_err(|e| DashError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| DashError::IoError(std::io::Error::other(e)))
}

pub fn render_json(result: &SearchResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(&result.announcements)?)
}
