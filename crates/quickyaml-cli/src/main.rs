use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "quickyaml-cli", about = "CLI for YAML ↔ JSON conversion", version)]
struct Args {
    /// Encode JSON to YAML (default decodes YAML to JSON)
    #[arg(short, long)]
    encode: bool,

    /// Reject entries indented deeper than their siblings
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Maximum nesting depth
    #[arg(long, default_value_t = quickyaml::options::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Spaces per level when encoding
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Pretty-print JSON on output (when decoding)
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut buf = Vec::new();
    match &args.input {
        Some(path) => {
            let mut f =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            f.read_to_end(&mut buf)?;
        }
        None => {
            stdin().read_to_end(&mut buf)?;
        }
    }
    log::debug!("read {} bytes", buf.len());

    let options = quickyaml::Options {
        strict: args.strict,
        max_depth: args.max_depth,
        indent: args.indent,
    };

    if args.encode {
        let json: serde_json::Value = serde_json::from_slice(&buf)?;
        let value = quickyaml::Value::from(json);
        let out = quickyaml::encode::encode_value_to_string(&value, &options);
        print!("{}", out);
    } else {
        let value = quickyaml::parse_with_options(&buf, &options)?;
        let json = serde_json::Value::from(value);
        if args.pretty {
            println!("{}", serde_json::to_string_pretty(&json)?);
        } else {
            println!("{}", serde_json::to_string(&json)?);
        }
    }

    Ok(())
}
