//! Palette entries and cached palette snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::color::{hex_to_rgb, rgb_to_cmyk, Cmyk, Rgb};
use crate::error::ColorError;

/// One traditional color.
///
/// Field names follow the upstream JSON (`RGB`, `CMYK`) so scraped and
/// pre-structured palettes share one shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRecord {
    #[serde(rename = "RGB")]
    pub rgb: Rgb,
    pub hex: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinyin: Option<String>,
    /// Only ever derived from `rgb`, never scraped.
    #[serde(rename = "CMYK", default, skip_serializing_if = "Option::is_none")]
    pub cmyk: Option<Cmyk>,
}

impl ColorRecord {
    /// Builds a record from a scraped hex value; the hex must be `#RRGGBB`.
    pub fn from_hex(
        hex: impl Into<String>,
        name: impl Into<String>,
        pinyin: Option<String>,
    ) -> Result<Self, ColorError> {
        let hex = hex.into();
        let rgb = hex_to_rgb(&hex)?;
        Ok(Self {
            rgb,
            hex,
            name: name.into(),
            pinyin,
            cmyk: None,
        })
    }

    /// Attaches the CMYK quadruplet derived from the RGB channels.
    pub fn with_derived_cmyk(mut self) -> Self {
        self.cmyk = Some(rgb_to_cmyk(self.rgb));
        self
    }
}

/// Palette for one locale as served by `/cn/` and `/jp/`.
///
/// `colors` is the parsed bucket payload, passed through without shape
/// checks. `last_update_at` is the bucket write time on a hit and the fetch
/// completion time on a miss.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteSnapshot {
    pub colors: serde_json::Value,
    pub last_update_at: DateTime<Utc>,
}

impl PaletteSnapshot {
    /// Number of entries when `colors` is an array.
    pub fn len(&self) -> usize {
        self.colors.as_array().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_from_hex() {
        let record =
            ColorRecord::from_hex("#DC9FB4", "撫子", Some("NADESHIKO".to_string())).unwrap();
        assert_eq!(record.rgb, [220, 159, 180]);
        assert_eq!(record.hex, "#DC9FB4");
        assert!(record.cmyk.is_none());
    }

    #[test]
    fn test_record_rejects_bad_hex() {
        assert!(ColorRecord::from_hex("#DC9F", "x", None).is_err());
    }

    #[test]
    fn test_record_serializes_upstream_shape() {
        let record = ColorRecord::from_hex("#DC9FB4", "撫子", Some("NADESHIKO".to_string()))
            .unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({ "RGB": [220, 159, 180], "hex": "#DC9FB4", "name": "撫子", "pinyin": "NADESHIKO" })
        );
    }

    #[test]
    fn test_record_with_cmyk() {
        let record = ColorRecord::from_hex("#000000", "墨", None)
            .unwrap()
            .with_derived_cmyk();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["CMYK"], json!([0, 0, 0, 100]));
        assert!(value.get("pinyin").is_none());
    }

    #[test]
    fn test_record_reads_cn_upstream_entry() {
        let raw = r##"{"CMYK":[0,56,27,1],"RGB":[241,147,156],"hex":"#f1939c","name":"春梅红","pinyin":"chunmeihong"}"##;
        let record: ColorRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.cmyk, Some([0, 56, 27, 1]));
        assert_eq!(record.pinyin.as_deref(), Some("chunmeihong"));
    }

    #[test]
    fn test_snapshot_shape() {
        let snapshot = PaletteSnapshot {
            colors: json!([{ "hex": "#ffffff" }, { "hex": "#000000" }]),
            last_update_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        };
        assert_eq!(snapshot.len(), 2);
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["lastUpdateAt"], "2023-11-14T22:13:20Z");
        assert_eq!(value["colors"].as_array().unwrap().len(), 2);
    }
}
