//! Catalog and people management forms.
//!
//! Each form holds raw field state as the page would and validates it
//! into the request body. Validation runs entirely client-side and a
//! failing form never produces a request; the backend re-checks
//! everything anyway.

use counterline_client::models::{
    BrandCreate, CategoryCreate, CustomerCreate, EmployeeCreate, ProductCreate, VariationCreate,
};
use counterline_core::{AccountId, BrandId, CategoryId, Money, ProductId};

use crate::error::AdminError;

/// Product create/edit form.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub name: String,
    pub images: Option<String>,
    pub category_id: Option<CategoryId>,
    pub brand_id: Option<BrandId>,
}

impl ProductForm {
    /// Run the client-side checks and produce the request body. The name
    /// is checked first so a blank submission fails immediately.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Validation`] naming the first failing field.
    pub fn validate(&self) -> Result<ProductCreate, AdminError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AdminError::validation("Product name is required."));
        }
        let Some(category_id) = self.category_id else {
            return Err(AdminError::validation("Please select a category."));
        };
        let Some(brand_id) = self.brand_id else {
            return Err(AdminError::validation("Please select a brand."));
        };

        Ok(ProductCreate {
            name: name.to_owned(),
            images: self.images.clone(),
            category_id,
            brand_id,
        })
    }
}

/// Category create/edit form.
#[derive(Debug, Clone, Default)]
pub struct CategoryForm {
    pub name: String,
    pub status: Option<String>,
}

impl CategoryForm {
    /// # Errors
    ///
    /// Returns [`AdminError::Validation`] for a blank name.
    pub fn validate(&self) -> Result<CategoryCreate, AdminError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AdminError::validation("Category name is required."));
        }
        Ok(CategoryCreate {
            name: name.to_owned(),
            status: self.status.clone(),
        })
    }
}

/// Brand create/edit form.
#[derive(Debug, Clone, Default)]
pub struct BrandForm {
    pub name: String,
    pub note: Option<String>,
    pub status: Option<String>,
}

impl BrandForm {
    /// # Errors
    ///
    /// Returns [`AdminError::Validation`] for a blank name.
    pub fn validate(&self) -> Result<BrandCreate, AdminError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AdminError::validation("Brand name is required."));
        }
        Ok(BrandCreate {
            name: name.to_owned(),
            note: self.note.clone(),
            status: self.status.clone(),
        })
    }
}

/// Variation create form. SKU and name are required; price and quantity
/// must be non-negative.
#[derive(Debug, Clone, Default)]
pub struct VariationForm {
    pub product_id: Option<ProductId>,
    pub sku: String,
    pub name: String,
    pub price: Option<Money>,
    pub quantity: Option<i32>,
    pub color: Option<String>,
    pub material: Option<String>,
    pub size: Option<String>,
    pub description: Option<String>,
}

impl VariationForm {
    /// # Errors
    ///
    /// Returns [`AdminError::Validation`] naming the first failing field.
    pub fn validate(&self) -> Result<VariationCreate, AdminError> {
        let Some(product_id) = self.product_id else {
            return Err(AdminError::validation("Please select a product."));
        };
        let sku = self.sku.trim();
        if sku.is_empty() {
            return Err(AdminError::validation("SKU is required."));
        }
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AdminError::validation("Variation name is required."));
        }
        if self.price.is_some_and(|p| p.is_sign_negative()) {
            return Err(AdminError::validation("Price cannot be negative."));
        }
        if self.quantity.is_some_and(|q| q < 0) {
            return Err(AdminError::validation("Quantity cannot be negative."));
        }

        Ok(VariationCreate {
            product_id,
            sku: sku.to_owned(),
            name: Some(name.to_owned()),
            price: self.price,
            quantity: self.quantity,
            color: self.color.clone(),
            material: self.material.clone(),
            size: self.size.clone(),
            description: self.description.clone(),
            status: None,
        })
    }
}

/// Customer create form.
#[derive(Debug, Clone, Default)]
pub struct CustomerForm {
    pub name: String,
    pub phone: String,
    pub address: Option<String>,
    pub note: Option<String>,
}

impl CustomerForm {
    /// # Errors
    ///
    /// Returns [`AdminError::Validation`] for a blank name or a phone
    /// number shorter than nine digits.
    pub fn validate(&self) -> Result<CustomerCreate, AdminError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AdminError::validation("Customer name is required."));
        }
        let phone = self.phone.trim();
        if !phone.is_empty() && phone.chars().filter(char::is_ascii_digit).count() < 9 {
            return Err(AdminError::validation(
                "Phone number must be at least 9 digits.",
            ));
        }

        Ok(CustomerCreate {
            account_id: None,
            name: name.to_owned(),
            address: self.address.clone(),
            phone: (!phone.is_empty()).then(|| phone.to_owned()),
            note: self.note.clone(),
            status: None,
        })
    }
}

/// Employee create form. Employees always link to a login account.
#[derive(Debug, Clone, Default)]
pub struct EmployeeForm {
    pub account_id: Option<AccountId>,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl EmployeeForm {
    /// # Errors
    ///
    /// Returns [`AdminError::Validation`] naming the first failing field.
    pub fn validate(&self) -> Result<EmployeeCreate, AdminError> {
        let Some(account_id) = self.account_id else {
            return Err(AdminError::validation("Please select a login account."));
        };
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AdminError::validation("Employee name is required."));
        }
        let phone = self.phone.trim();
        if !phone.is_empty() && phone.chars().filter(char::is_ascii_digit).count() < 9 {
            return Err(AdminError::validation(
                "Phone number must be at least 9 digits.",
            ));
        }
        let email = self.email.trim();
        if !email.is_empty() && !email.contains('@') {
            return Err(AdminError::validation("Email address is not valid."));
        }

        Ok(EmployeeCreate {
            account_id,
            name: name.to_owned(),
            phone: (!phone.is_empty()).then(|| phone.to_owned()),
            email: (!email.is_empty()).then(|| email.to_owned()),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn blank_product_name_fails_before_the_cascade() {
        let form = ProductForm {
            name: "   ".to_string(),
            ..ProductForm::default()
        };
        let err = form.validate().unwrap_err();
        assert!(matches!(err, AdminError::Validation(msg)
            if msg == "Product name is required."));
    }

    #[test]
    fn complete_product_form_validates() {
        let form = ProductForm {
            name: " Classic Tee ".to_string(),
            images: None,
            category_id: Some(CategoryId::new(2)),
            brand_id: Some(BrandId::new(3)),
        };
        let body = form.validate().unwrap();
        assert_eq!(body.name, "Classic Tee");
    }

    #[test]
    fn variation_rejects_negative_price() {
        let form = VariationForm {
            product_id: Some(ProductId::new(7)),
            sku: "TS-BLK-M".to_string(),
            name: "Black Tee (M)".to_string(),
            price: Some(Money::from_str("-1").unwrap()),
            ..VariationForm::default()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn variation_requires_sku_and_name() {
        let form = VariationForm {
            product_id: Some(ProductId::new(7)),
            sku: String::new(),
            name: "Black Tee (M)".to_string(),
            ..VariationForm::default()
        };
        let err = form.validate().unwrap_err();
        assert!(matches!(err, AdminError::Validation(msg) if msg == "SKU is required."));
    }

    #[test]
    fn customer_phone_needs_nine_digits() {
        let form = CustomerForm {
            name: "Jane Doe".to_string(),
            phone: "090123".to_string(),
            ..CustomerForm::default()
        };
        assert!(form.validate().is_err());

        let form = CustomerForm {
            name: "Jane Doe".to_string(),
            phone: "0901234567".to_string(),
            ..CustomerForm::default()
        };
        assert_eq!(form.validate().unwrap().phone.as_deref(), Some("0901234567"));
    }

    #[test]
    fn customer_phone_is_optional() {
        let form = CustomerForm {
            name: "Walk In".to_string(),
            ..CustomerForm::default()
        };
        assert!(form.validate().unwrap().phone.is_none());
    }
}
