use anyhow::anyhow;
use rentwise_core::{AppError, PaginationParams};
use rentwise_db::PropertyStore;
use rentwise_models::{PropertiesResponse, Property, PropertyDetails, PropertyWithOwner};
use tracing::{info, instrument};
use uuid::Uuid;

pub const PROPERTY_NOT_FOUND: &str = "Property not found";

pub struct PropertyService;

impl PropertyService {
    #[instrument(skip(properties))]
    pub async fn list(
        properties: &dyn PropertyStore,
        params: PaginationParams,
    ) -> Result<PropertiesResponse, AppError> {
        let (items, total) = properties
            .list_properties(params.limit(), params.offset())
            .await?;

        Ok(PropertiesResponse {
            properties: items,
            pagination: params.meta(total),
        })
    }

    /// Looks a listing up by its path segment. Anything that is not a
    /// UUID cannot name a listing and is reported as not found.
    #[instrument(skip(properties))]
    pub async fn get(
        properties: &dyn PropertyStore,
        id: &str,
    ) -> Result<PropertyWithOwner, AppError> {
        let not_found = || AppError::not_found(anyhow!(PROPERTY_NOT_FOUND));

        let id = Uuid::parse_str(id).map_err(|_| not_found())?;
        properties.find_property(id).await?.ok_or_else(not_found)
    }

    #[instrument(skip(properties, details), fields(title = %details.title))]
    pub async fn create(
        properties: &dyn PropertyStore,
        owner: Uuid,
        details: PropertyDetails,
    ) -> Result<Property, AppError> {
        let property = properties.create_property(owner, details).await?;
        info!(property_id = %property.id, %owner, "Property created");
        Ok(property)
    }

    #[instrument(skip(properties))]
    pub async fn listings_of(
        properties: &dyn PropertyStore,
        owner: Uuid,
    ) -> Result<Vec<Property>, AppError> {
        Ok(properties.list_properties_by_owner(owner).await?)
    }
}
