use anyhow::{Context, Result};
use safemark::{Config, SafeMarkdownRenderer};
use std::fs;
use std::io::Read;

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;

    let markdown = match &config.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read markdown from stdin")?;
            buffer
        }
    };

    let renderer = SafeMarkdownRenderer::new();
    let html = renderer.render(&markdown);

    match &config.output {
        Some(path) => fs::write(path, &html)
            .with_context(|| format!("Failed to write output file: {}", path.display()))?,
        None => print!("{html}"),
    }

    Ok(())
}
