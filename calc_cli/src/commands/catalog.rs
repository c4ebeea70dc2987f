//! `calcdeck list` and `calcdeck show`

use anyhow::{bail, Result};
use calc_core::catalog::{self, Category};
use calc_core::form::FieldKind;
use calc_core::settings::Settings;

pub fn cmd_list(category: Option<&str>, json: bool) -> Result<()> {
    let filter = match category {
        Some(text) => match Category::parse(text) {
            Some(c) => Some(c),
            None => {
                let valid: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
                bail!("Unknown category '{}' (expected one of: {})", text, valid.join(", "));
            }
        },
        None => None,
    };

    let categories: Vec<Category> = match filter {
        Some(c) => vec![c],
        None => Category::ALL.to_vec(),
    };

    if json {
        let entries: Vec<_> = categories
            .iter()
            .flat_map(|c| catalog::by_category(*c))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let slug_width = catalog::all().map(|c| c.slug.len()).max().unwrap_or(0);
    for (i, category) in categories.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", category.display_name());
        for entry in catalog::by_category(*category) {
            println!("  {:<width$}  {}", entry.slug, entry.name, width = slug_width);
            println!("  {:<width$}  {}", "", entry.description, width = slug_width);
        }
    }
    Ok(())
}

fn kind_label(kind: &FieldKind) -> String {
    match kind {
        FieldKind::Number => "number".to_string(),
        FieldKind::Integer => "integer".to_string(),
        FieldKind::Date => "date (YYYY-MM-DD)".to_string(),
        FieldKind::Time => "time (HH:MM)".to_string(),
        FieldKind::Text => "text".to_string(),
        FieldKind::Choice(options) => format!("one of {}", options.join("|")),
    }
}

pub fn cmd_show(slug: &str, settings: &Settings) -> Result<()> {
    let screen = catalog::open(slug, settings)?;
    let info = screen.info();

    println!("{} ({})", info.name, info.slug);
    println!("Category: {}", info.category);
    println!("{}", info.description);
    println!();

    let fields = screen.fields();
    let key_width = fields.iter().map(|f| f.key.len()).max().unwrap_or(0);
    let value_width = fields.iter().map(|f| f.value.chars().count()).max().unwrap_or(0).max(7);

    println!("  {:<kw$}  {:<vw$}  Description", "Field", "Default", kw = key_width, vw = value_width);
    for field in &fields {
        let mut description = format!("{}, {}", field.label, kind_label(&field.kind));
        if let Some(hint) = field.hint {
            description.push_str(&format!(" ({})", hint));
        }
        let value = if field.value.is_empty() { "-" } else { field.value.as_str() };
        println!("  {:<kw$}  {:<vw$}  {}", field.key, value, description, kw = key_width, vw = value_width);
    }
    println!();
    println!("Run with: calcdeck run {} -s {}=<value>", info.slug, fields.first().map(|f| f.key).unwrap_or("key"));
    Ok(())
}
