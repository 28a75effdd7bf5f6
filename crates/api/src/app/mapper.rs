//! Beer record <-> DTO mapping.
//!
//! Both directions are pure and build a fresh value; neither can fail.

use brewery_beers::Beer;

use crate::app::dto::BeerDto;

/// Record-only fields (`min_on_hand`, `quantity_to_brew`) are left unset.
pub fn beer_dto_to_beer(dto: &BeerDto) -> Beer {
    Beer {
        id: dto.id,
        version: dto.version,
        created_date: dto.created_date,
        last_modified_date: dto.last_modified_date,
        beer_name: dto.beer_name.clone(),
        beer_style: dto.beer_style,
        upc: dto.upc,
        price: dto.price,
        quantity_on_hand: dto.quantity_on_hand,
        min_on_hand: None,
        quantity_to_brew: None,
    }
}

pub fn beer_to_beer_dto(beer: &Beer) -> BeerDto {
    BeerDto {
        id: beer.id,
        version: beer.version,
        created_date: beer.created_date,
        last_modified_date: beer.last_modified_date,
        beer_name: beer.beer_name.clone(),
        beer_style: beer.beer_style,
        upc: beer.upc,
        price: beer.price,
        quantity_on_hand: beer.quantity_on_hand,
    }
}
