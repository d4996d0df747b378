use std::io::Read;

use quick_oxisheets::{normalize, APIResult};
use serde_json::Value;

/// Normalizes a saved report: `quick-oxisheets [FILE]`, reading stdin without a file
fn main() {
    env_logger::init();

    if let Err(e) = run(std::env::args().nth(1)) {
        log::error!("{e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(path: Option<String>) -> APIResult<()> {
    let input = match path {
        Some(path) => {
            log::debug!("Reading report from {path}");
            std::fs::read_to_string(path)?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let raw: Value = serde_json::from_str(&input)?;
    let report = normalize(Some(&raw));
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
