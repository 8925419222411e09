//! Delivery-address endpoints under `/user/addresses`.

use counterline_core::{AddressId, DistrictId, ProvinceId};
use tracing::instrument;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{
    AddressCreate, AddressUpdate, ApiMessage, CustomerAddress, District, Province, Ward,
};

impl ApiClient {
    /// All provinces, the root of the address cascade.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(request_id))]
    pub async fn provinces(&self) -> Result<Vec<Province>, ApiError> {
        self.get("/user/addresses/provinces", "province list").await
    }

    /// Districts of one province.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(province_id = %id, request_id))]
    pub async fn districts(&self, id: ProvinceId) -> Result<Vec<District>, ApiError> {
        self.get(&format!("/user/addresses/districts/{id}"), "district list")
            .await
    }

    /// Wards of one district.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(district_id = %id, request_id))]
    pub async fn wards(&self, id: DistrictId) -> Result<Vec<Ward>, ApiError> {
        self.get(&format!("/user/addresses/wards/{id}"), "ward list")
            .await
    }

    /// The signed-in customer's saved addresses.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    #[instrument(skip(self), fields(request_id))]
    pub async fn my_addresses(&self) -> Result<Vec<CustomerAddress>, ApiError> {
        self.get("/user/addresses", "address list").await
    }

    /// One of the signed-in customer's addresses.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the address is not theirs.
    #[instrument(skip(self), fields(address_id = %id, request_id))]
    pub async fn my_address(&self, id: AddressId) -> Result<CustomerAddress, ApiError> {
        self.get(&format!("/user/addresses/{id}"), "address").await
    }

    /// Save a new delivery address.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    #[instrument(skip(self, body), fields(request_id))]
    pub async fn create_address(&self, body: &AddressCreate) -> Result<CustomerAddress, ApiError> {
        self.post("/user/addresses", body, "address").await
    }

    /// Update a saved address.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the address is gone.
    #[instrument(skip(self, body), fields(address_id = %id, request_id))]
    pub async fn update_address(
        &self,
        id: AddressId,
        body: &AddressUpdate,
    ) -> Result<CustomerAddress, ApiError> {
        self.put(&format!("/user/addresses/{id}"), body, "address")
            .await
    }

    /// Delete a saved address.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the address is gone.
    #[instrument(skip(self), fields(address_id = %id, request_id))]
    pub async fn delete_address(&self, id: AddressId) -> Result<(), ApiError> {
        self.delete(&format!("/user/addresses/{id}")).await
    }

    /// Make one saved address the default, clearing the flag on the rest.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the address is gone.
    #[instrument(skip(self), fields(address_id = %id, request_id))]
    pub async fn set_default_address(&self, id: AddressId) -> Result<ApiMessage, ApiError> {
        self.post_empty(&format!("/user/addresses/{id}/set-default"), "message")
            .await
    }
}
