//! Turning command-line and file input into layout items.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use vidwall_common::{Result, VidwallError};
use vidwall_layout::LayoutItem;

/// One entry of an items file.
#[derive(Debug, Deserialize)]
struct ItemSpec {
    id: String,
    #[serde(default)]
    aspect_ratio: Option<f64>,
}

/// Parse `16/9` or `1.7778` into a positive finite ratio.
pub fn parse_ratio(text: &str) -> Result<f64> {
    let text = text.trim();
    let ratio = match text.split_once('/') {
        Some((w, h)) => {
            let w: f64 = w.trim().parse().map_err(|_| bad_ratio(text))?;
            let h: f64 = h.trim().parse().map_err(|_| bad_ratio(text))?;
            w / h
        }
        None => text.parse().map_err(|_| bad_ratio(text))?,
    };
    if ratio.is_finite() && ratio > 0.0 {
        Ok(ratio)
    } else {
        Err(bad_ratio(text))
    }
}

fn bad_ratio(text: &str) -> VidwallError {
    VidwallError::Input(format!("'{text}' is not a positive aspect ratio"))
}

/// Parse `ID` or `ID:RATIO`.
pub fn parse_item(spec: &str, default_ratio: f64) -> Result<LayoutItem> {
    let (id, ratio) = match spec.rsplit_once(':') {
        Some((id, ratio)) => (id, parse_ratio(ratio)?),
        None => (spec, default_ratio),
    };
    let id = id.trim();
    if id.is_empty() {
        return Err(VidwallError::Input(format!("'{spec}' has an empty stream id")));
    }
    Ok(LayoutItem::new(id, ratio))
}

/// Read a JSON array of items; entries without a ratio get `default_ratio`.
pub fn load_items_file(path: &Path, default_ratio: f64) -> Result<Vec<LayoutItem>> {
    let content = std::fs::read_to_string(path)?;
    let specs: Vec<ItemSpec> = serde_json::from_str(&content)?;
    specs
        .into_iter()
        .map(|spec| {
            let ratio = match spec.aspect_ratio {
                Some(r) if r.is_finite() && r > 0.0 => r,
                Some(r) => {
                    return Err(VidwallError::Input(format!(
                        "stream '{}' has invalid aspect ratio {r}",
                        spec.id
                    )))
                }
                None => default_ratio,
            };
            Ok(LayoutItem::new(spec.id, ratio))
        })
        .collect()
}

/// The engine does not deduplicate, so reject repeated ids up front.
pub fn ensure_unique(items: &[LayoutItem]) -> Result<()> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(&item.id) {
            return Err(VidwallError::Input(format!("stream '{}' listed twice", item.id)));
        }
    }
    Ok(())
}
