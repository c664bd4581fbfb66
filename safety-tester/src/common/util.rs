use anyhow::{Context, Result};

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Parse a comma-separated list of seeds.
pub fn parse_seeds(raw: &str) -> Result<Vec<u64>> {
    let seeds = split_csv(raw)
        .iter()
        .map(|token| {
            token
                .parse::<u64>()
                .with_context(|| format!("invalid seed '{token}'"))
        })
        .collect::<Result<Vec<_>>>()?;
    anyhow::ensure!(!seeds.is_empty(), "at least one seed is required");
    Ok(seeds)
}
