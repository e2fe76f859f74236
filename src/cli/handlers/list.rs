use base_n::CodecRegistry;

const PREVIEW: usize = 24;

pub fn handle(registry: &CodecRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let default = registry.settings.default_codec.as_deref();

    println!("Available codecs:\n");
    for name in registry.names() {
        let Some(config) = registry.get(&name) else {
            continue;
        };
        let radix = config.symbols.chars().count();
        let preview: String = config.symbols.chars().take(PREVIEW).collect();
        let suffix = if radix > PREVIEW { "..." } else { "" };
        let marker = if default == Some(name.as_str()) { "*" } else { " " };
        println!(
            "{} {:<15} {:<10} base-{:<3}  {}{}",
            marker, name, config.profile, radix, preview, suffix
        );
        if let Some(description) = &config.description {
            println!("  {:<15} {}", "", description);
        }
    }
    Ok(())
}
