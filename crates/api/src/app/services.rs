use std::sync::Arc;

use brewery_beers::{BeerRepository, InMemoryBeerRepository};
use brewery_core::{BeerId, Validate};

use crate::app::dto::BeerDto;
use crate::app::errors::{ApiError, ValidationFailure};
use crate::app::mapper;

/// Shared request-handling services (cheap to clone behind `Arc`).
#[derive(Clone)]
pub struct AppServices {
    beers: Arc<dyn BeerRepository>,
}

/// Default wiring: in-memory storage.
pub fn build_services() -> AppServices {
    AppServices::new(Arc::new(InMemoryBeerRepository::new()))
}

impl AppServices {
    pub fn new(beers: Arc<dyn BeerRepository>) -> Self {
        Self { beers }
    }

    pub fn get_beer(&self, id: &BeerId) -> Result<BeerDto, ApiError> {
        match self.beers.find_by_id(id)? {
            Some(beer) => Ok(mapper::beer_to_beer_dto(&beer)),
            None => Err(ApiError::NotFound(*id)),
        }
    }

    /// Validate, store, and return the stored representation.
    pub fn create_beer(&self, dto: BeerDto) -> Result<BeerDto, ApiError> {
        dto.validate().map_err(ValidationFailure::from)?;

        let saved = self.beers.save(mapper::beer_dto_to_beer(&dto))?;
        tracing::info!(beer_id = ?saved.id, "beer created");
        Ok(mapper::beer_to_beer_dto(&saved))
    }

    /// Validate and apply `dto` to the stored beer.
    ///
    /// An unknown `id` is not an error: nothing is stored.
    pub fn update_beer(&self, id: &BeerId, dto: BeerDto) -> Result<(), ApiError> {
        dto.validate().map_err(ValidationFailure::from)?;

        let Some(existing) = self.beers.find_by_id(id)? else {
            tracing::info!(beer_id = %id, "update for unknown beer ignored");
            return Ok(());
        };

        let saved = self
            .beers
            .save(existing.with_changes_from(&mapper::beer_dto_to_beer(&dto)))?;
        tracing::info!(beer_id = %id, version = ?saved.version, "beer updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewery_beers::{Beer, BeerStyle, StoreError};
    use rust_decimal::Decimal;

    fn valid_dto() -> BeerDto {
        BeerDto {
            beer_name: Some("My Beer".into()),
            beer_style: Some(BeerStyle::Ale),
            upc: Some(123_123_123),
            price: Some(Decimal::new(299, 2)),
            ..BeerDto::default()
        }
    }

    #[test]
    fn create_then_get() {
        let services = build_services();
        let created = services.create_beer(valid_dto()).unwrap();

        let id = created.id.expect("id assigned");
        assert_eq!(created.version, Some(0));
        assert!(created.created_date.is_some());
        assert!(created.last_modified_date.is_some());
        assert_eq!(created.beer_name.as_deref(), Some("My Beer"));

        assert_eq!(services.get_beer(&id).unwrap(), created);
    }

    #[test]
    fn get_unknown_is_not_found() {
        let services = build_services();
        let id = BeerId::new();
        assert!(matches!(services.get_beer(&id), Err(ApiError::NotFound(x)) if x == id));
    }

    #[test]
    fn invalid_create_stores_nothing() {
        let repo = Arc::new(InMemoryBeerRepository::new());
        let services = AppServices::new(repo.clone());
        let err = services
            .create_beer(BeerDto {
                upc: Some(0),
                ..valid_dto()
            })
            .unwrap_err();

        match err {
            ApiError::Validation(f) => assert_eq!(f.messages(), vec!["upc: must be greater than 0"]),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(repo.is_empty());
    }

    #[test]
    fn update_changes_fields_and_bumps_version() {
        let services = build_services();
        let created = services.create_beer(valid_dto()).unwrap();
        let id = created.id.unwrap();

        let changes = BeerDto {
            beer_name: Some("Renamed".into()),
            beer_style: Some(BeerStyle::Porter),
            quantity_on_hand: Some(6),
            ..valid_dto()
        };
        services.update_beer(&id, changes).unwrap();

        let after = services.get_beer(&id).unwrap();
        assert_eq!(after.beer_name.as_deref(), Some("Renamed"));
        assert_eq!(after.beer_style, Some(BeerStyle::Porter));
        assert_eq!(after.quantity_on_hand, Some(6));
        assert_eq!(after.version, Some(1));
        assert_eq!(after.created_date, created.created_date);
    }

    #[test]
    fn update_keeps_record_only_fields() {
        let repo = Arc::new(InMemoryBeerRepository::new());
        let services = AppServices::new(repo.clone());
        let stored = repo
            .save(Beer {
                min_on_hand: Some(12),
                quantity_to_brew: Some(200),
                ..mapper::beer_dto_to_beer(&valid_dto())
            })
            .unwrap();
        let id = stored.id.unwrap();

        services.update_beer(&id, valid_dto()).unwrap();

        let after = repo.find_by_id(&id).unwrap().unwrap();
        assert_eq!(after.min_on_hand, Some(12));
        assert_eq!(after.quantity_to_brew, Some(200));
    }

    #[test]
    fn update_unknown_id_is_a_no_op() {
        let repo = Arc::new(InMemoryBeerRepository::new());
        let services = AppServices::new(repo.clone());
        services.update_beer(&BeerId::new(), valid_dto()).unwrap();
        assert!(repo.is_empty());
    }

    #[test]
    fn update_validates_before_lookup() {
        let services = build_services();
        let err = services
            .update_beer(
                &BeerId::new(),
                BeerDto {
                    beer_name: None,
                    ..valid_dto()
                },
            )
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    struct BrokenStore;

    impl BeerRepository for BrokenStore {
        fn find_by_id(&self, _id: &BeerId) -> Result<Option<Beer>, StoreError> {
            Err(StoreError::Unavailable("down".into()))
        }

        fn save(&self, _beer: Beer) -> Result<Beer, StoreError> {
            Err(StoreError::Unavailable("down".into()))
        }
    }

    #[test]
    fn store_failures_propagate() {
        let services = AppServices::new(Arc::new(BrokenStore));
        assert!(matches!(services.create_beer(valid_dto()), Err(ApiError::Store(_))));
        assert!(matches!(services.get_beer(&BeerId::new()), Err(ApiError::Store(_))));
    }
}
