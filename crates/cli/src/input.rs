//! Instance loaders.
//!
//! - Text: whitespace-separated `N K` followed by N triples `x y cost`.
//! - CSV: columns `x`, `y`, `cost` (header required); K comes from the caller.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use rectpick::Instance;
use std::fs;
use std::path::Path;

/// Load by extension: `.csv` via polars, anything else as text.
///
/// `k_override` replaces the K read from a text file and is mandatory for CSV.
pub fn load(path: &Path, k_override: Option<usize>) -> Result<Instance> {
    let is_csv = path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if is_csv {
        let k = k_override.context("CSV input needs --k")?;
        load_csv(path, k)
    } else {
        let text =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let mut inst = parse_text(&text).with_context(|| format!("parsing {}", path.display()))?;
        if let Some(k) = k_override {
            inst.min_k = k;
        }
        Ok(inst)
    }
}

/// Parse the text format. Tokens after the N-th triple are ignored.
pub fn parse_text(text: &str) -> Result<Instance> {
    let mut tokens = text.split_whitespace();
    let n: usize = next_token(&mut tokens, "N")?;
    let k: usize = next_token(&mut tokens, "K")?;
    // N comes from the file; grow as rows actually parse.
    let mut triples = Vec::with_capacity(n.min(4096));
    for i in 0..n {
        let x: f64 = next_token(&mut tokens, &format!("x of building {i}"))?;
        let y: f64 = next_token(&mut tokens, &format!("y of building {i}"))?;
        let cost: f64 = next_token(&mut tokens, &format!("cost of building {i}"))?;
        triples.push((x, y, cost));
    }
    Ok(Instance::from_triples(triples, k))
}

fn next_token<'a, T>(tokens: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let Some(tok) = tokens.next() else {
        bail!("unexpected end of input, expected {what}");
    };
    tok.parse::<T>()
        .with_context(|| format!("invalid {what}: {tok:?}"))
}

/// Read `x`, `y`, `cost` columns from a CSV file.
pub fn load_csv(path: &Path, k: usize) -> Result<Instance> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
            col("cost").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading columns x, y, cost from {}", path.display()))?;
    tracing::debug!(rows = df.height(), cols = df.width(), "input_csv_shape");

    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let costs = df.column("cost")?.f64()?;
    let mut triples = Vec::with_capacity(df.height());
    for (row, ((x, y), cost)) in xs.into_iter().zip(ys).zip(costs).enumerate() {
        match (x, y, cost) {
            (Some(x), Some(y), Some(cost)) => triples.push((x, y, cost)),
            _ => bail!("row {row}: missing x, y, or cost"),
        }
    }
    Ok(Instance::from_triples(triples, k))
}
