use capstan_api::Capability;
use capstan_core::discover::ProviderNames;
use std::path::PathBuf;
use tracing::info;

pub fn run(capability: &str, paths: &[PathBuf]) -> Result<(), Box<dyn std::error::Error>> {
    let capability = Capability::new(capability);
    let context = crate::context_for(paths);

    let mut names = ProviderNames::new(&capability, &context);
    let mut count = 0usize;
    while names.has_next()? {
        names.next_name()?;
        count += 1;
    }

    info!("checked manifests for {capability}: {count} providers");
    println!("ok: {count} providers declared for {capability}");
    Ok(())
}
