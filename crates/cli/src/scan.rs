use capstan_core::survey::survey_tree;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let listings = survey_tree(root)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&listings)?);
        return Ok(());
    }

    if listings.is_empty() {
        println!("no provider manifests under {}", root.display());
        return Ok(());
    }

    for listing in &listings {
        println!(
            "{} ({} providers) - {}",
            listing.capability,
            listing.providers.len(),
            listing.manifest.display()
        );
        for name in &listing.providers {
            println!("  {name}");
        }
    }

    Ok(())
}
