use classpath_core::DefaultClassPathRegistry;
use std::io::Write;

pub fn run(registry: &DefaultClassPathRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if registry.is_empty() {
        writeln!(out, "No providers configured.")?;
        return Ok(());
    }

    for (i, name) in registry.provider_names().iter().enumerate() {
        writeln!(out, "{:>2}. {}", i + 1, name)?;
    }
    Ok(())
}
