use crate::domain::common::AggregateRoot;
use crate::enums::{UserRole, UserStatus};
use crate::shared::list::{FieldValue, ListRecord};
use crate::shared::metadata::ColumnMetadata;
use serde::{Deserialize, Serialize};

/// Раздел приложения, на который выдаётся доступ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    Dashboard,
    PurchaseOrders,
    SalesOrders,
    Inventory,
    Reports,
    Settings,
}

impl Permission {
    pub fn all() -> Vec<Permission> {
        vec![
            Permission::Dashboard,
            Permission::PurchaseOrders,
            Permission::SalesOrders,
            Permission::Inventory,
            Permission::Reports,
            Permission::Settings,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Permission::Dashboard => "Dashboard",
            Permission::PurchaseOrders => "Purchase Orders",
            Permission::SalesOrders => "Sales Orders",
            Permission::Inventory => "Inventory",
            Permission::Reports => "Reports",
            Permission::Settings => "Settings",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    pub dashboard: bool,
    pub purchase_orders: bool,
    pub sales_orders: bool,
    pub inventory: bool,
    pub reports: bool,
    pub settings: bool,
}

impl Permissions {
    pub fn full() -> Self {
        Self {
            dashboard: true,
            purchase_orders: true,
            sales_orders: true,
            inventory: true,
            reports: true,
            settings: true,
        }
    }

    pub fn get(&self, permission: Permission) -> bool {
        *self.slot(permission)
    }

    pub fn set(&mut self, permission: Permission, granted: bool) {
        *self.slot_mut(permission) = granted;
    }

    pub fn granted_count(&self) -> usize {
        Permission::all().into_iter().filter(|p| self.get(*p)).count()
    }

    fn slot(&self, permission: Permission) -> &bool {
        match permission {
            Permission::Dashboard => &self.dashboard,
            Permission::PurchaseOrders => &self.purchase_orders,
            Permission::SalesOrders => &self.sales_orders,
            Permission::Inventory => &self.inventory,
            Permission::Reports => &self.reports,
            Permission::Settings => &self.settings,
        }
    }

    fn slot_mut(&mut self, permission: Permission) -> &mut bool {
        match permission {
            Permission::Dashboard => &mut self.dashboard,
            Permission::PurchaseOrders => &mut self.purchase_orders,
            Permission::SalesOrders => &mut self.sales_orders,
            Permission::Inventory => &mut self.inventory,
            Permission::Reports => &mut self.reports,
            Permission::Settings => &mut self.settings,
        }
    }
}

/// Учётная запись в распределении доступа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccess {
    pub id: String,
    pub username: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub department: String,
    pub status: UserStatus,
    pub permissions: Permissions,
    pub last_login: String,
}

impl UserAccess {
    pub fn toggle_status(&mut self) {
        self.status = self.status.toggled();
    }

    pub fn set_permission(&mut self, permission: Permission, granted: bool) {
        self.permissions.set(permission, granted);
    }
}

pub const USER_ACCESS_COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::text("name", "Name").searchable(),
    ColumnMetadata::text("username", "Username").searchable(),
    ColumnMetadata::text("email", "Email").searchable(),
    ColumnMetadata::text("role", "Role"),
    ColumnMetadata::text("department", "Department"),
    ColumnMetadata::status("status", "Status"),
    ColumnMetadata::date("lastLogin", "Last Login"),
];

impl ListRecord for UserAccess {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "id" => Some(FieldValue::from(&self.id)),
            "name" => Some(FieldValue::from(&self.name)),
            "username" => Some(FieldValue::from(&self.username)),
            "email" => Some(FieldValue::from(&self.email)),
            "role" => Some(FieldValue::from(self.role.as_str())),
            "department" => Some(FieldValue::from(&self.department)),
            "status" => Some(FieldValue::from(self.status.as_str())),
            "lastLogin" => Some(FieldValue::from(&self.last_login)),
            _ => None,
        }
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn columns() -> &'static [ColumnMetadata] {
        USER_ACCESS_COLUMNS
    }
}

impl AggregateRoot for UserAccess {
    fn aggregate_index() -> &'static str {
        "a012"
    }

    fn collection_name() -> &'static str {
        "user_access"
    }

    fn element_name() -> &'static str {
        "User"
    }

    fn list_name() -> &'static str {
        "Access Distribution"
    }
}
