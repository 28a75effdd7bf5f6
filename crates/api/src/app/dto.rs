use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use brewery_beers::BeerStyle;
use brewery_core::{BeerId, ConstraintKind, FieldRule, FieldValue, Validate};

// -------------------------
// Request/response DTOs
// -------------------------

/// External representation of a beer.
///
/// The storage-assigned fields (`id`, `version`, `createdDate`,
/// `lastModifiedDate`) must be null on input; they are filled in on output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerDto {
    pub id: Option<BeerId>,
    pub version: Option<i64>,
    pub created_date: Option<DateTime<FixedOffset>>,
    pub last_modified_date: Option<DateTime<FixedOffset>>,
    pub beer_name: Option<String>,
    pub beer_style: Option<BeerStyle>,
    pub upc: Option<i64>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub quantity_on_hand: Option<i32>,
}

pub const BEER_NAME_MIN_LEN: usize = 3;
pub const BEER_NAME_MAX_LEN: usize = 100;

const BEER_DTO_RULES: &[FieldRule] = &[
    FieldRule {
        field: "id",
        constraints: &[ConstraintKind::Null],
    },
    FieldRule {
        field: "version",
        constraints: &[ConstraintKind::Null],
    },
    FieldRule {
        field: "createdDate",
        constraints: &[ConstraintKind::Null],
    },
    FieldRule {
        field: "lastModifiedDate",
        constraints: &[ConstraintKind::Null],
    },
    FieldRule {
        field: "beerName",
        constraints: &[
            ConstraintKind::NotBlank,
            ConstraintKind::Size {
                min: BEER_NAME_MIN_LEN,
                max: BEER_NAME_MAX_LEN,
            },
        ],
    },
    FieldRule {
        field: "beerStyle",
        constraints: &[ConstraintKind::NotNull],
    },
    FieldRule {
        field: "upc",
        constraints: &[ConstraintKind::Positive, ConstraintKind::NotNull],
    },
    FieldRule {
        field: "price",
        constraints: &[ConstraintKind::NotNull, ConstraintKind::Positive],
    },
    FieldRule {
        field: "quantityOnHand",
        constraints: &[ConstraintKind::Positive],
    },
];

impl Validate for BeerDto {
    fn rules() -> &'static [FieldRule] {
        BEER_DTO_RULES
    }

    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "id" => present(self.id.as_ref()),
            "version" => self.version.into(),
            "createdDate" => present(self.created_date.map(|d| d.to_rfc3339()).as_ref()),
            "lastModifiedDate" => present(self.last_modified_date.map(|d| d.to_rfc3339()).as_ref()),
            "beerName" => self.beer_name.as_deref().into(),
            "beerStyle" => present(self.beer_style.as_ref()),
            "upc" => self.upc.into(),
            "price" => self.price.into(),
            "quantityOnHand" => self.quantity_on_hand.into(),
            _ => FieldValue::Absent,
        }
    }
}

fn present<'a, T: ToString>(value: Option<&T>) -> FieldValue<'a> {
    value.map_or(FieldValue::Absent, |v| FieldValue::Present(v.to_string()))
}

/// Query string accepted by `GET /api/v1/beer/{beerId}`.
#[derive(Debug, Default, Deserialize)]
pub struct GetBeerParams {
    /// Accepted for compatibility; has no effect on the response.
    #[serde(rename = "isCold")]
    pub is_cold: Option<String>,
}
