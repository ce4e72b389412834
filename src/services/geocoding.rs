use crate::{GenericError, MapBotError};

use async_trait::async_trait;
use google_maps::GoogleMapsClient;
use log::*;
use map_measure::Coordinate;
use rust_decimal::prelude::ToPrimitive;

#[async_trait]
pub trait GeocodingService {
    fn new() -> Result<Self, GenericError>
    where
        Self: Sized;
    async fn geocode(&self, place: &str) -> Result<Coordinate, GenericError>;
}

pub struct GoogleMapsService {
    client: GoogleMapsClient,
}

#[async_trait]
impl GeocodingService for GoogleMapsService {
    fn new() -> Result<Self, GenericError> {
        Ok(GoogleMapsService {
            client: GoogleMapsClient::new(&dotenv::var("GOOGLE_MAPS_TOKEN")?),
        })
    }

    async fn geocode(&self, place: &str) -> Result<Coordinate, GenericError> {
        let response = self.client.geocoding().with_address(place).execute().await?;
        let location = &response
            .results
            .first()
            .ok_or(MapBotError::LocationNotFound)?
            .geometry
            .location;
        trace!("Received coordinates from Google Maps geocoding API.");

        let lat = location.lat.to_f64().ok_or(MapBotError::LocationNotFound)?;
        let lng = location.lng.to_f64().ok_or(MapBotError::LocationNotFound)?;
        Ok(Coordinate::new(lat, lng)?)
    }
}
