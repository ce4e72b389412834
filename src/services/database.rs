use async_trait::async_trait;
use log::*;
use postgrest::Postgrest;

use crate::GenericError;

use super::StoredMeasurement;

const TABLE: &str = "measurement";

#[async_trait]
pub trait MeasurementStorageService {
    fn new() -> Result<Self, GenericError>
    where
        Self: Sized;
    async fn get_measurements(&self, user_id: &str) -> Result<Vec<StoredMeasurement>, GenericError>;
    async fn save_measurement(&self, measurement: &StoredMeasurement) -> Result<(), GenericError>;
    async fn delete_measurements(&self, user_id: &str) -> Result<(), GenericError>;
}

pub struct SupabaseService {
    client: Postgrest,
    supabase_token: String,
}

#[async_trait]
impl MeasurementStorageService for SupabaseService {
    fn new() -> Result<Self, GenericError> {
        let supabase_token = dotenv::var("SUPABASE_TOKEN")?;
        let client = Postgrest::new(dotenv::var("SUPABASE_ENDPOINT")?)
            .insert_header("apikey", supabase_token.as_str());
        Ok(SupabaseService {
            client,
            supabase_token,
        })
    }

    async fn get_measurements(&self, user_id: &str) -> Result<Vec<StoredMeasurement>, GenericError> {
        let raw_resp = self
            .client
            .from(TABLE)
            .auth(&self.supabase_token)
            .eq("user_id", user_id)
            .select("*")
            .execute()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let measurements: Vec<StoredMeasurement> = serde_json::from_str(&raw_resp)?;
        debug!(
            "Loaded {} saved measurements for user {}.",
            measurements.len(),
            user_id
        );
        Ok(measurements)
    }

    async fn save_measurement(&self, measurement: &StoredMeasurement) -> Result<(), GenericError> {
        let json = serde_json::to_string(measurement)?;
        self.client
            .from(TABLE)
            .auth(&self.supabase_token)
            .insert(json)
            .execute()
            .await?
            .error_for_status()?;
        trace!("Saved measurement for user {}.", measurement.user_id);

        Ok(())
    }

    async fn delete_measurements(&self, user_id: &str) -> Result<(), GenericError> {
        self.client
            .from(TABLE)
            .auth(&self.supabase_token)
            .eq("user_id", user_id)
            .delete()
            .execute()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
