//! One-shot generation: read a brief JSON file, validate it, and print the
//! plan response to stdout. Field errors go to stderr via the error return.

use std::io::Read;

use anyhow::{Context, Result, bail};

use herald_core::brief::validate;
use herald_core::generator::Generator;

/// Run `herald generate <file>`. Pass `-` to read the brief from stdin.
pub async fn run_generate(generator: &Generator, file: &str, pretty: bool) -> Result<()> {
    let raw = if file == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read brief from stdin")?;
        buf
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("failed to read brief file {file:?}"))?
    };

    let body: serde_json::Value =
        serde_json::from_str(&raw).context("brief file is not valid JSON")?;

    let brief = match validate(&body) {
        Ok(brief) => brief,
        Err(errors) => {
            let lines: Vec<String> = errors
                .field_errors
                .iter()
                .map(|(field, message)| format!("{field}: {message}"))
                .collect();
            bail!("invalid campaign brief:\n  {}", lines.join("\n  "));
        }
    };

    let response = generator.generate(&brief).await;
    let output = if pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{output}");

    Ok(())
}
