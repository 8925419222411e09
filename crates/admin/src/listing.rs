//! Listing filters for the admin tables.
//!
//! The panel's tables share one pagination shape and per-table filter
//! state; each filter builds the query parameters its listing endpoint
//! takes. Blank text filters are dropped rather than sent as empty
//! strings.

use counterline_client::services::{
    CustomerListParams, EmployeeListParams, OrderListParams, ProductListParams,
};
use counterline_core::{BrandId, CategoryId, OrderStatus};

/// Page window shared by every admin table.
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: 20,
        }
    }
}

impl Pagination {
    #[must_use]
    pub const fn skip(&self) -> u32 {
        self.page * self.page_size
    }

    /// The next page window.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self {
            page: self.page + 1,
            page_size: self.page_size,
        }
    }

    /// The previous page window, saturating at the first page.
    #[must_use]
    pub const fn previous(&self) -> Self {
        Self {
            page: self.page.saturating_sub(1),
            page_size: self.page_size,
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Product table filter state.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub name: String,
    pub category_id: Option<CategoryId>,
    pub brand_id: Option<BrandId>,
}

impl ProductFilter {
    #[must_use]
    pub fn params(&self, page: Pagination) -> ProductListParams {
        ProductListParams {
            skip: Some(page.skip()),
            limit: Some(page.page_size),
            name: non_blank(&self.name),
            category_id: self.category_id,
            brand_id: self.brand_id,
        }
    }
}

/// Customer table filter state.
#[derive(Debug, Clone, Default)]
pub struct CustomerFilter {
    pub name: String,
    pub phone: String,
    pub status: Option<String>,
}

impl CustomerFilter {
    #[must_use]
    pub fn params(&self, page: Pagination) -> CustomerListParams {
        CustomerListParams {
            skip: Some(page.skip()),
            limit: Some(page.page_size),
            name: non_blank(&self.name),
            phone: non_blank(&self.phone),
            status: self.status.clone(),
        }
    }
}

/// Employee table filter state.
#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub status: Option<String>,
}

impl EmployeeFilter {
    #[must_use]
    pub fn params(&self, page: Pagination) -> EmployeeListParams {
        EmployeeListParams {
            skip: Some(page.skip()),
            limit: Some(page.page_size),
            name: non_blank(&self.name),
            phone: non_blank(&self.phone),
            email: non_blank(&self.email),
            status: self.status.clone(),
        }
    }
}

/// Order table filter state. The status is held as the parsed lifecycle
/// value and serialized in the backend's uppercase wire form.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
}

impl OrderFilter {
    #[must_use]
    pub fn params(&self, page: Pagination) -> OrderListParams {
        OrderListParams {
            skip: Some(page.skip()),
            limit: Some(page.page_size),
            status: self.status.map(|s| s.as_wire().to_owned()),
        }
    }
}
