//! Account roles and the back-office access rule.
//!
//! The backend models roles as plain integer ids. Two of them carry special
//! meaning for the client: role 1 (admin) and role 18 (employee) are the only
//! roles admitted to the back office, and conversely the only roles rejected
//! from the customer storefront login.

use crate::define_id;

define_id!(RoleId);

impl RoleId {
    /// Full administrative access.
    pub const ADMIN: Self = Self::new(1);
    /// Store employee, admitted to the back office alongside admins.
    pub const EMPLOYEE: Self = Self::new(18);

    /// Whether this role may enter the back office (admin panel, POS).
    #[must_use]
    pub fn has_back_office_access(self) -> bool {
        self == Self::ADMIN || self == Self::EMPLOYEE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_and_employee_have_back_office_access() {
        assert!(RoleId::ADMIN.has_back_office_access());
        assert!(RoleId::EMPLOYEE.has_back_office_access());
    }

    #[test]
    fn customer_roles_do_not() {
        assert!(!RoleId::new(2).has_back_office_access());
        assert!(!RoleId::new(0).has_back_office_access());
        assert!(!RoleId::new(17).has_back_office_access());
    }
}
