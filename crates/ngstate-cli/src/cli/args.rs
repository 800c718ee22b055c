//! Value parsers for flags that clap cannot derive on its own.

/// `NAME=SOURCE` pair from `--image` / `--segmentation`.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedSource {
    pub name: String,
    pub source: String,
}

pub fn parse_named_source(s: &str) -> Result<NamedSource, String> {
    let (name, source) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=SOURCE, got {s:?}"))?;
    if name.is_empty() {
        return Err("layer name must not be empty".to_string());
    }
    if source.is_empty() {
        return Err(format!("layer {name:?} has an empty source"));
    }
    Ok(NamedSource {
        name: name.to_string(),
        source: source.to_string(),
    })
}

/// `X,Y,Z` triple of finite numbers.
pub fn parse_triple(s: &str) -> Result<[f64; 3], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected X,Y,Z, got {s:?}"));
    }
    let mut out = [0.0; 3];
    for (slot, part) in out.iter_mut().zip(&parts) {
        let v: f64 = part
            .parse()
            .map_err(|_| format!("{part:?} is not a number"))?;
        if !v.is_finite() {
            return Err(format!("{part:?} is not finite"));
        }
        *slot = v;
    }
    Ok(out)
}

/// Finite number greater than zero, for scales and zoom factors.
pub fn parse_positive(s: &str) -> Result<f64, String> {
    let v: f64 = s.trim().parse().map_err(|_| format!("{s:?} is not a number"))?;
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(format!("{s:?} must be a finite number greater than 0"))
    }
}

/// `X,Y,Z` triple where every component is greater than zero.
pub fn parse_positive_triple(s: &str) -> Result<[f64; 3], String> {
    let out = parse_triple(s)?;
    if let Some(v) = out.iter().find(|v| **v <= 0.0) {
        return Err(format!("{v} must be greater than 0"));
    }
    Ok(out)
}

/// Opacity in [0, 1].
pub fn parse_unit_interval(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("{s:?} is not a number"))?;
    if (0.0..=1.0).contains(&v) {
        Ok(v)
    } else {
        Err(format!("{v} is outside [0, 1]"))
    }
}
