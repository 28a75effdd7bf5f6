use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use brewery_core::BeerId;

/// Fixed catalogue of beer styles.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeerStyle {
    Lager,
    Pilsner,
    Stout,
    Gose,
    Porter,
    Ale,
    Wheat,
    Ipa,
    PaleAle,
    Saison,
}

impl BeerStyle {
    pub const ALL: [BeerStyle; 10] = [
        BeerStyle::Lager,
        BeerStyle::Pilsner,
        BeerStyle::Stout,
        BeerStyle::Gose,
        BeerStyle::Porter,
        BeerStyle::Ale,
        BeerStyle::Wheat,
        BeerStyle::Ipa,
        BeerStyle::PaleAle,
        BeerStyle::Saison,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BeerStyle::Lager => "LAGER",
            BeerStyle::Pilsner => "PILSNER",
            BeerStyle::Stout => "STOUT",
            BeerStyle::Gose => "GOSE",
            BeerStyle::Porter => "PORTER",
            BeerStyle::Ale => "ALE",
            BeerStyle::Wheat => "WHEAT",
            BeerStyle::Ipa => "IPA",
            BeerStyle::PaleAle => "PALE_ALE",
            BeerStyle::Saison => "SAISON",
        }
    }
}

impl core::fmt::Display for BeerStyle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted beer record.
///
/// `id`, `version`, `created_date` and `last_modified_date` are owned by the
/// repository; everything else is client data except `min_on_hand` and
/// `quantity_to_brew`, which only exist on the record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Beer {
    pub id: Option<BeerId>,
    pub version: Option<i64>,
    pub created_date: Option<DateTime<FixedOffset>>,
    pub last_modified_date: Option<DateTime<FixedOffset>>,
    pub beer_name: Option<String>,
    pub beer_style: Option<BeerStyle>,
    pub upc: Option<i64>,
    pub price: Option<Decimal>,
    pub quantity_on_hand: Option<i32>,
    pub min_on_hand: Option<i32>,
    pub quantity_to_brew: Option<i32>,
}

impl Beer {
    /// Copy of `self` with the client-settable fields taken from `changes`.
    ///
    /// Storage-owned and record-only fields are kept from `self`.
    pub fn with_changes_from(&self, changes: &Beer) -> Beer {
        Beer {
            beer_name: changes.beer_name.clone(),
            beer_style: changes.beer_style,
            upc: changes.upc,
            price: changes.price,
            quantity_on_hand: changes.quantity_on_hand,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_serialize_in_screaming_snake_case() {
        for style in BeerStyle::ALL {
            let json = serde_json::to_string(&style).unwrap();
            assert_eq!(json, format!("\"{style}\""));
            let back: BeerStyle = serde_json::from_str(&json).unwrap();
            assert_eq!(back, style);
        }
        assert_eq!(serde_json::to_string(&BeerStyle::PaleAle).unwrap(), "\"PALE_ALE\"");
    }

    #[test]
    fn unknown_style_is_rejected() {
        assert!(serde_json::from_str::<BeerStyle>("\"LAMBIC\"").is_err());
    }

    #[test]
    fn changes_keep_storage_fields() {
        let stored = Beer {
            id: Some(BeerId::new()),
            version: Some(3),
            beer_name: Some("Old".into()),
            beer_style: Some(BeerStyle::Stout),
            upc: Some(1),
            price: Some(Decimal::new(100, 2)),
            min_on_hand: Some(12),
            ..Beer::default()
        };
        let changes = Beer {
            beer_name: Some("New".into()),
            beer_style: Some(BeerStyle::Ipa),
            upc: Some(2),
            price: Some(Decimal::new(250, 2)),
            quantity_on_hand: Some(5),
            ..Beer::default()
        };

        let updated = stored.with_changes_from(&changes);
        assert_eq!(updated.id, stored.id);
        assert_eq!(updated.version, Some(3));
        assert_eq!(updated.min_on_hand, Some(12));
        assert_eq!(updated.beer_name.as_deref(), Some("New"));
        assert_eq!(updated.beer_style, Some(BeerStyle::Ipa));
        assert_eq!(updated.quantity_on_hand, Some(5));
        // source record untouched
        assert_eq!(stored.beer_name.as_deref(), Some("Old"));
    }
}
