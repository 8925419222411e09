//! The customer's address book with the province/district/ward cascade.
//!
//! The cascade is strict: picking a province resets district and ward and
//! loads the province's districts; picking a district resets the ward and
//! loads the district's wards. An address can only be saved once all
//! three levels plus a street line are present.

use counterline_client::ApiClient;
use counterline_client::models::{
    AddressCreate, AddressUpdate, CustomerAddress, District, Province, Ward,
};
use counterline_core::{AddressId, DistrictId, ProvinceId, WardId};
use tracing::{debug, instrument};

use crate::error::StorefrontError;

/// Address-book view model.
#[derive(Debug, Clone)]
pub struct AddressBook {
    client: ApiClient,
    addresses: Vec<CustomerAddress>,
    provinces: Vec<Province>,
    districts: Vec<District>,
    wards: Vec<Ward>,
    selected_province: Option<ProvinceId>,
    selected_district: Option<DistrictId>,
    selected_ward: Option<WardId>,
}

impl AddressBook {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self {
            client,
            addresses: Vec::new(),
            provinces: Vec::new(),
            districts: Vec::new(),
            wards: Vec::new(),
            selected_province: None,
            selected_district: None,
            selected_ward: None,
        }
    }

    /// Load the saved addresses and the province list.
    ///
    /// # Errors
    ///
    /// Returns an error if either request fails.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> Result<(), StorefrontError> {
        self.addresses = self.client.my_addresses().await?;
        self.provinces = self.client.provinces().await?;
        Ok(())
    }

    #[must_use]
    pub fn addresses(&self) -> &[CustomerAddress] {
        &self.addresses
    }

    #[must_use]
    pub fn provinces(&self) -> &[Province] {
        &self.provinces
    }

    #[must_use]
    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    #[must_use]
    pub fn wards(&self) -> &[Ward] {
        &self.wards
    }

    /// The customer's default delivery address, if one is flagged.
    #[must_use]
    pub fn default_address(&self) -> Option<&CustomerAddress> {
        self.addresses.iter().find(|a| a.is_default())
    }

    /// Pick a province: clears district and ward and loads the districts.
    ///
    /// # Errors
    ///
    /// Returns an error if the district request fails; the selection is
    /// still applied.
    #[instrument(skip(self), fields(province_id = %id))]
    pub async fn select_province(&mut self, id: ProvinceId) -> Result<(), StorefrontError> {
        self.selected_province = Some(id);
        self.selected_district = None;
        self.selected_ward = None;
        self.wards.clear();
        self.districts = self.client.districts(id).await?;
        debug!(districts = self.districts.len(), "district list loaded");
        Ok(())
    }

    /// Pick a district: clears the ward and loads the wards.
    ///
    /// # Errors
    ///
    /// Returns a validation error if no province is selected, or the ward
    /// request error.
    #[instrument(skip(self), fields(district_id = %id))]
    pub async fn select_district(&mut self, id: DistrictId) -> Result<(), StorefrontError> {
        if self.selected_province.is_none() {
            return Err(StorefrontError::Validation(
                "Please select a province first.".to_owned(),
            ));
        }
        self.selected_district = Some(id);
        self.selected_ward = None;
        self.wards = self.client.wards(id).await?;
        Ok(())
    }

    pub fn select_ward(&mut self, id: WardId) {
        self.selected_ward = Some(id);
    }

    /// Save a new address from the current cascade selection.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any cascade level or the street line
    /// is missing, or the API error.
    #[instrument(skip(self, street_address))]
    pub async fn create(
        &mut self,
        street_address: &str,
        make_default: bool,
    ) -> Result<CustomerAddress, StorefrontError> {
        let (province_id, district_id, ward_id) = self.require_cascade()?;
        let street_address = street_address.trim();
        if street_address.is_empty() {
            return Err(StorefrontError::Validation(
                "Street address is required.".to_owned(),
            ));
        }

        let body = AddressCreate {
            province_id,
            district_id,
            ward_id,
            street_address: street_address.to_owned(),
            is_default: make_default.then_some(1),
        };
        let created = self.client.create_address(&body).await?;
        self.addresses = self.client.my_addresses().await?;
        Ok(created)
    }

    /// Update a saved address.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the address is gone.
    #[instrument(skip(self, body), fields(address_id = %id))]
    pub async fn update(
        &mut self,
        id: AddressId,
        body: &AddressUpdate,
    ) -> Result<CustomerAddress, StorefrontError> {
        let updated = self.client.update_address(id, body).await?;
        self.addresses = self.client.my_addresses().await?;
        Ok(updated)
    }

    /// Delete a saved address.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; the local list is unchanged.
    #[instrument(skip(self), fields(address_id = %id))]
    pub async fn delete(&mut self, id: AddressId) -> Result<(), StorefrontError> {
        self.client.delete_address(id).await?;
        self.addresses.retain(|a| a.id != id);
        Ok(())
    }

    /// Flag one address as the default. The backend clears the flag on
    /// the rest, so the list is re-fetched.
    ///
    /// # Errors
    ///
    /// Returns an error if either request fails.
    #[instrument(skip(self), fields(address_id = %id))]
    pub async fn set_default(&mut self, id: AddressId) -> Result<(), StorefrontError> {
        self.client.set_default_address(id).await?;
        self.addresses = self.client.my_addresses().await?;
        Ok(())
    }

    fn require_cascade(&self) -> Result<(ProvinceId, DistrictId, WardId), StorefrontError> {
        match (
            self.selected_province,
            self.selected_district,
            self.selected_ward,
        ) {
            (Some(p), Some(d), Some(w)) => Ok((p, d, w)),
            (None, _, _) => Err(StorefrontError::Validation(
                "Please select a province.".to_owned(),
            )),
            (_, None, _) => Err(StorefrontError::Validation(
                "Please select a district.".to_owned(),
            )),
            (_, _, None) => Err(StorefrontError::Validation(
                "Please select a ward.".to_owned(),
            )),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use counterline_client::{ClientConfig, SessionStore};

    fn book() -> AddressBook {
        let config = ClientConfig::default();
        AddressBook::new(ApiClient::new(&config, SessionStore::new()))
    }

    fn address(id: i32, is_default: i32) -> CustomerAddress {
        serde_json::from_value(serde_json::json!({
            "PK_Address": id,
            "CustomerID": 4,
            "ProvinceID": 1,
            "DistrictID": 10,
            "WardID": 100,
            "StreetAddress": "12 Elm St",
            "IsDefault": is_default,
        }))
        .unwrap()
    }

    #[test]
    fn default_address_follows_integer_flag() {
        let mut book = book();
        book.addresses = vec![address(1, 0), address(2, 1)];
        assert_eq!(book.default_address().unwrap().id, AddressId::new(2));
    }

    #[tokio::test]
    async fn district_before_province_is_rejected() {
        let mut book = book();
        let err = book.select_district(DistrictId::new(10)).await.unwrap_err();
        assert!(matches!(err, StorefrontError::Validation(_)));
    }

    #[tokio::test]
    async fn create_requires_full_cascade() {
        let mut book = book();
        book.selected_province = Some(ProvinceId::new(1));
        let err = book.create("12 Elm St", false).await.unwrap_err();
        assert!(matches!(err, StorefrontError::Validation(msg)
            if msg == "Please select a district."));
    }
}
