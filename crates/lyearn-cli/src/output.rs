use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a titled section of `name: description` pairs with aligned names.
pub fn print_section(title: &str, entries: &[(String, String)]) {
    println!("{title}:");
    let width = entries.iter().map(|(n, _)| n.len()).max().unwrap_or(0);
    for (name, description) in entries {
        println!("  {name:width$}  {description}");
    }
}
