//! Forgiving number decoding for project files.
//!
//! Project files come from a browser state dump, so numbers may arrive as
//! floats, strings or `null`. Anything unusable decodes to zero instead of
//! failing the whole load.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

#[derive(Deserialize)]
#[serde(untagged)]
enum Number {
    Int(i64),
    Float(f64),
    Text(String),
    Flag(bool),
    Null(()),
}

impl Number {
    fn as_f64(&self) -> f64 {
        match self {
            Number::Int(i) => *i as f64,
            Number::Float(f) if f.is_finite() => *f,
            Number::Text(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()).unwrap_or(0.0),
            Number::Flag(b) => f64::from(u8::from(*b)),
            Number::Float(_) | Number::Null(()) => 0.0,
        }
    }

    fn as_u32(&self) -> u32 {
        let value = self.as_f64().trunc();
        if value <= 0.0 {
            0
        } else if value >= f64::from(u32::MAX) {
            u32::MAX
        } else {
            value as u32
        }
    }
}

pub fn uint<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(Number::deserialize(deserializer)?.as_u32())
}

pub fn float<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Number::deserialize(deserializer)?.as_f64())
}

/// Decodes `{"2": 4, "3": "4"}` into a floor map, dropping keys that are not floor numbers.
pub fn floor_map<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<u32, u32>, D::Error> {
    let raw: Option<BTreeMap<String, Number>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(floor, count)| {
            let floor = floor.trim().parse::<u32>().ok().filter(|f| *f >= 1)?;
            Some((floor, count.as_u32()))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "uint")]
        count: u32,
        #[serde(default, deserialize_with = "float")]
        length: f64,
        #[serde(default, deserialize_with = "floor_map")]
        apts: BTreeMap<u32, u32>,
    }

    #[test]
    fn decodes_mixed_number_shapes() {
        let sample: Sample = serde_json::from_str(
            r#"{"count": "7", "length": 12.5, "apts": {"2": 4.0, "3": "5", "x": 1, "0": 9}}"#,
        )
        .unwrap();
        assert_eq!(sample.count, 7);
        assert_eq!(sample.length, 12.5);
        assert_eq!(sample.apts, BTreeMap::from([(2, 4), (3, 5)]));
    }

    #[test]
    fn unusable_values_become_zero() {
        let sample: Sample =
            serde_json::from_str(r#"{"count": -3, "length": null, "apts": null}"#).unwrap();
        assert_eq!(sample.count, 0);
        assert_eq!(sample.length, 0.0);
        assert!(sample.apts.is_empty());
    }
}
