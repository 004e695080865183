use capstan_api::Capability;
use capstan_core::discover::ProviderNames;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct Listing<'a> {
    capability: &'a str,
    providers: &'a [String],
}

pub fn run(
    capability: &str,
    paths: &[PathBuf],
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let capability = Capability::new(capability);
    let context = crate::context_for(paths);

    let mut names = ProviderNames::new(&capability, &context);
    let mut providers = Vec::new();
    while names.has_next()? {
        providers.push(names.next_name()?);
    }

    if json {
        let listing = Listing {
            capability: capability.qualified_name(),
            providers: &providers,
        };
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        for name in &providers {
            println!("{name}");
        }
    }

    Ok(())
}
