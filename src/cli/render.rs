//! Terminal rendering for artwork records.

use console::style;

use crate::models::ArtworkRecord;

const SEPARATOR_WIDTH: usize = 70;

/// Render a gallery of artwork cards.
pub fn render_cards(records: &[ArtworkRecord]) {
    let separator = "─".repeat(SEPARATOR_WIDTH);

    println!();
    for record in records {
        println!("{}", separator);
        println!(
            "{} {}",
            style(&record.title).bold(),
            style(format!("[{}]", record.id)).dim()
        );
        println!("  {:<12} {}", "Artist", record.artist);
        println!("  {:<12} {}", "Department", record.department);
        if let Some(date) = &record.date {
            println!("  {:<12} {}", "Date", date);
        }
        println!(
            "  {:<12} {}",
            "Image",
            style(&record.image_url).underlined()
        );
    }
    println!("{}", separator);
    println!(
        "{} artwork{}",
        records.len(),
        if records.len() == 1 { "" } else { "s" }
    );
}

/// Render the detail view for one artwork.
pub fn render_detail(record: &ArtworkRecord) {
    let separator = "─".repeat(SEPARATOR_WIDTH);

    println!();
    println!("{}", separator);
    println!(
        "{} {}",
        style(&record.title).bold(),
        style(format!("[{}]", record.id)).dim()
    );
    println!("{}", separator);
    println!("  {:<12} {}", "Artist", record.artist);
    println!("  {:<12} {}", "Department", record.department);
    if let Some(culture) = &record.culture {
        println!("  {:<12} {}", "Culture", culture);
    }
    if let Some(date) = &record.date {
        println!("  {:<12} {}", "Date", date);
    }
    if let Some(medium) = &record.medium {
        println!("  {:<12} {}", "Medium", medium);
    }
    println!(
        "  {:<12} {}",
        "Image",
        style(&record.image_url).underlined()
    );
    if let Some(url) = &record.object_url {
        println!("  {:<12} {}", "Page", style(url).underlined());
    }
    println!("{}", separator);
}
