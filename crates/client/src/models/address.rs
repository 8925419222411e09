//! Delivery addresses and the province/district/ward hierarchy.

use chrono::NaiveDateTime;
use counterline_core::{AddressId, CustomerId, DistrictId, ProvinceId, WardId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct Province {
    #[serde(rename = "PK_Province")]
    pub id: ProvinceId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Code")]
    pub code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct District {
    #[serde(rename = "PK_District")]
    pub id: DistrictId,
    #[serde(rename = "ProvinceID")]
    pub province_id: ProvinceId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Code")]
    pub code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ward {
    #[serde(rename = "PK_Ward")]
    pub id: WardId,
    #[serde(rename = "DistrictID")]
    pub district_id: DistrictId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Code")]
    pub code: String,
}

/// A saved delivery address. `IsDefault` is an integer flag on the wire
/// (0/1), not a boolean.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerAddress {
    #[serde(rename = "PK_Address")]
    pub id: AddressId,
    #[serde(rename = "CustomerID")]
    pub customer_id: CustomerId,
    #[serde(rename = "ProvinceID")]
    pub province_id: ProvinceId,
    #[serde(rename = "DistrictID")]
    pub district_id: DistrictId,
    #[serde(rename = "WardID")]
    pub ward_id: WardId,
    #[serde(rename = "StreetAddress")]
    pub street_address: String,
    #[serde(rename = "IsDefault", default)]
    pub is_default: i32,
    #[serde(rename = "ProvinceName", default)]
    pub province_name: Option<String>,
    #[serde(rename = "DistrictName", default)]
    pub district_name: Option<String>,
    #[serde(rename = "WardName", default)]
    pub ward_name: Option<String>,
    #[serde(rename = "Creation_date", default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(rename = "Edit_date", default)]
    pub edited_at: Option<NaiveDateTime>,
}

impl CustomerAddress {
    /// Whether this is the customer's default delivery address.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.is_default == 1
    }
}

/// `POST /user/addresses` body.
#[derive(Debug, Clone, Serialize)]
pub struct AddressCreate {
    #[serde(rename = "ProvinceID")]
    pub province_id: ProvinceId,
    #[serde(rename = "DistrictID")]
    pub district_id: DistrictId,
    #[serde(rename = "WardID")]
    pub ward_id: WardId,
    #[serde(rename = "StreetAddress")]
    pub street_address: String,
    #[serde(rename = "IsDefault", skip_serializing_if = "Option::is_none")]
    pub is_default: Option<i32>,
}

/// `PUT /user/addresses/{id}` body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddressUpdate {
    #[serde(rename = "ProvinceID", skip_serializing_if = "Option::is_none")]
    pub province_id: Option<ProvinceId>,
    #[serde(rename = "DistrictID", skip_serializing_if = "Option::is_none")]
    pub district_id: Option<DistrictId>,
    #[serde(rename = "WardID", skip_serializing_if = "Option::is_none")]
    pub ward_id: Option<WardId>,
    #[serde(rename = "StreetAddress", skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(rename = "IsDefault", skip_serializing_if = "Option::is_none")]
    pub is_default: Option<i32>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn address_default_flag_is_integer() {
        let json = r#"{
            "PK_Address": 2,
            "CustomerID": 4,
            "ProvinceID": 1,
            "DistrictID": 10,
            "WardID": 100,
            "StreetAddress": "12 Elm St",
            "IsDefault": 1,
            "ProvinceName": "Hanoi",
            "DistrictName": "Ba Dinh",
            "WardName": "Cong Vi"
        }"#;
        let address: CustomerAddress = serde_json::from_str(json).unwrap();
        assert!(address.is_default());
    }
}
