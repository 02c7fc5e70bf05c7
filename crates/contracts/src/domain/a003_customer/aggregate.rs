use crate::domain::common::AggregateRoot;
use crate::enums::ActivityStatus;
use crate::shared::list::{FieldValue, ListRecord};
use crate::shared::metadata::ColumnMetadata;
use serde::{Deserialize, Serialize};

/// Клиент
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub customer_code: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub status: ActivityStatus,
    pub total_orders: f64,
    pub last_order_date: String,
}

pub const CUSTOMER_COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::text("customerCode", "Customer Code").searchable(),
    ColumnMetadata::text("name", "Name").searchable(),
    ColumnMetadata::text("email", "Email").searchable(),
    ColumnMetadata::text("phone", "Phone"),
    ColumnMetadata::text("city", "City").searchable(),
    ColumnMetadata::status("status", "Status"),
    ColumnMetadata::numeric("totalOrders", "Total Orders"),
    ColumnMetadata::date("lastOrderDate", "Last Order"),
];

impl ListRecord for Customer {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "id" => Some(FieldValue::from(&self.id)),
            "customerCode" => Some(FieldValue::from(&self.customer_code)),
            "name" => Some(FieldValue::from(&self.name)),
            "email" => Some(FieldValue::from(&self.email)),
            "phone" => Some(FieldValue::from(&self.phone)),
            "address" => Some(FieldValue::from(&self.address)),
            "city" => Some(FieldValue::from(&self.city)),
            "status" => Some(FieldValue::from(self.status.as_str())),
            "totalOrders" => Some(FieldValue::from(self.total_orders)),
            "lastOrderDate" => Some(FieldValue::from(&self.last_order_date)),
            _ => None,
        }
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn columns() -> &'static [ColumnMetadata] {
        CUSTOMER_COLUMNS
    }
}

impl AggregateRoot for Customer {
    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "customer"
    }

    fn element_name() -> &'static str {
        "Customer"
    }

    fn list_name() -> &'static str {
        "Customers"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::{filter_view, FilterOperator, FilterSet};

    fn customer(id: &str, name: &str, city: &str, orders: f64) -> Customer {
        Customer {
            id: id.to_string(),
            customer_code: id.replace("CUST-", "C"),
            name: name.to_string(),
            email: format!("contact@{}.com", name.to_lowercase().replace(' ', "")),
            phone: "555-0101".to_string(),
            address: String::new(),
            city: city.to_string(),
            status: ActivityStatus::Active,
            total_orders: orders,
            last_order_date: "2024-01-15".to_string(),
        }
    }

    #[test]
    fn test_numeric_filter_on_orders() {
        let customers = vec![
            customer("CUST-001", "RetailCorp Inc", "New York", 45.0),
            customer("CUST-002", "Wholesale Hub LLC", "Los Angeles", 32.0),
        ];
        let mut filters = FilterSet::for_columns(Customer::columns());
        filters.set_operator("totalOrders", FilterOperator::GreaterThanOrEqual);
        filters.set_operand("totalOrders", "40");
        let ids: Vec<&str> = filter_view(&customers, &filters).iter().map(|c| c.row_id()).collect();
        assert_eq!(ids, vec!["CUST-001"]);

        // equals на числовом поле сравнивает текст
        filters.set_operator("totalOrders", FilterOperator::Equals);
        filters.set_operand("totalOrders", "32");
        let ids: Vec<&str> = filter_view(&customers, &filters).iter().map(|c| c.row_id()).collect();
        assert_eq!(ids, vec!["CUST-002"]);
    }

    #[test]
    fn test_status_filter_case_insensitive() {
        let mut inactive = customer("CUST-003", "Tech Solutions", "Austin", 0.0);
        inactive.status = ActivityStatus::Inactive;
        let customers = vec![customer("CUST-001", "RetailCorp Inc", "New York", 45.0), inactive];
        let mut filters = FilterSet::new();
        filters.set_status("INACTIVE");
        assert_eq!(filter_view(&customers, &filters).len(), 1);
        filters.set_status("all");
        assert_eq!(filter_view(&customers, &filters).len(), 2);
    }
}
