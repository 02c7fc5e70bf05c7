use crate::domain::common::AggregateRoot;
use crate::enums::{RouteStatus, RouteStopStatus};
use crate::shared::list::{FieldValue, ListRecord};
use crate::shared::metadata::ColumnMetadata;
use serde::{Deserialize, Serialize};

/// Маршрут доставки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: String,
    pub route_code: String,
    pub origin: String,
    pub destination: String,
    /// Расстояние, км
    pub distance: f64,
    /// Оценка времени в пути (например, "4h 30m")
    pub estimated_time: String,
    pub status: RouteStatus,
    pub shipments_count: f64,
    pub last_updated: String,
}

pub const ROUTE_COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::text("routeCode", "Route Code").searchable(),
    ColumnMetadata::text("origin", "Origin").searchable(),
    ColumnMetadata::text("destination", "Destination").searchable(),
    ColumnMetadata::numeric("distance", "Distance"),
    ColumnMetadata::text("estimatedTime", "Est. Time"),
    ColumnMetadata::status("status", "Status"),
    ColumnMetadata::numeric("shipmentsCount", "Shipments"),
    ColumnMetadata::date("lastUpdated", "Last Updated"),
];

impl ListRecord for Route {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "id" => Some(FieldValue::from(&self.id)),
            "routeCode" => Some(FieldValue::from(&self.route_code)),
            "origin" => Some(FieldValue::from(&self.origin)),
            "destination" => Some(FieldValue::from(&self.destination)),
            "distance" => Some(FieldValue::from(self.distance)),
            "estimatedTime" => Some(FieldValue::from(&self.estimated_time)),
            "status" => Some(FieldValue::from(self.status.as_str())),
            "shipmentsCount" => Some(FieldValue::from(self.shipments_count)),
            "lastUpdated" => Some(FieldValue::from(&self.last_updated)),
            _ => None,
        }
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn columns() -> &'static [ColumnMetadata] {
        ROUTE_COLUMNS
    }
}

impl AggregateRoot for Route {
    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "route"
    }

    fn element_name() -> &'static str {
        "Route"
    }

    fn list_name() -> &'static str {
        "Routes"
    }
}

/// Клиент в составе маршрута (точка доставки)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteCustomer {
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub address: String,
    pub city: String,
    pub order_count: f64,
    pub total_items: f64,
    pub status: RouteStopStatus,
}

impl RouteCustomer {
    /// Пустая точка маршрута для кнопки «Add Customer»
    pub fn blank(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            customer_id: String::new(),
            customer_name: String::new(),
            address: String::new(),
            city: String::new(),
            order_count: 0.0,
            total_items: 0.0,
            status: RouteStopStatus::Pending,
        }
    }
}

pub const ROUTE_CUSTOMER_COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::text("customerId", "Customer ID"),
    ColumnMetadata::text("customerName", "Customer Name").searchable(),
    ColumnMetadata::text("address", "Address"),
    ColumnMetadata::text("city", "City").searchable(),
    ColumnMetadata::numeric("orderCount", "Orders"),
    ColumnMetadata::numeric("totalItems", "Items"),
    ColumnMetadata::status("status", "Status"),
];

impl ListRecord for RouteCustomer {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "id" => Some(FieldValue::from(&self.id)),
            "customerId" => Some(FieldValue::from(&self.customer_id)),
            "customerName" => Some(FieldValue::from(&self.customer_name)),
            "address" => Some(FieldValue::from(&self.address)),
            "city" => Some(FieldValue::from(&self.city)),
            "orderCount" => Some(FieldValue::from(self.order_count)),
            "totalItems" => Some(FieldValue::from(self.total_items)),
            "status" => Some(FieldValue::from(self.status.as_str())),
            _ => None,
        }
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn columns() -> &'static [ColumnMetadata] {
        ROUTE_CUSTOMER_COLUMNS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::{filter_list, next_numeric_id, FilterOperator, FilterSet};

    fn route(id: &str, origin: &str, destination: &str, distance: f64, status: RouteStatus) -> Route {
        Route {
            id: id.to_string(),
            route_code: id.replace('-', ""),
            origin: origin.to_string(),
            destination: destination.to_string(),
            distance,
            estimated_time: "4h 30m".to_string(),
            status,
            shipments_count: 0.0,
            last_updated: "2024-01-15".to_string(),
        }
    }

    #[test]
    fn test_route_filters() {
        let routes = vec![
            route("RT-001", "New York", "Boston", 215.0, RouteStatus::Active),
            route("RT-002", "Los Angeles", "San Francisco", 380.0, RouteStatus::Active),
            route("RT-003", "Chicago", "Detroit", 280.0, RouteStatus::Paused),
        ];

        let mut filters = FilterSet::for_columns(Route::columns());
        filters.set_operator("distance", FilterOperator::LessThanOrEqual);
        filters.set_operand("distance", "280");
        filters.set_operator("origin", FilterOperator::StartsWith);
        filters.set_operand("origin", "new");
        let kept = filter_list(routes.clone(), &filters);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "RT-001");

        filters.clear();
        filters.set_status("Paused");
        let kept = filter_list(routes, &filters);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "RT-003");
    }

    fn stop(id: &str, name: &str, city: &str, status: RouteStopStatus) -> RouteCustomer {
        RouteCustomer {
            customer_id: format!("CUST-00{}", id),
            customer_name: name.to_string(),
            city: city.to_string(),
            status,
            ..RouteCustomer::blank(id)
        }
    }

    #[test]
    fn test_route_customer_operator_filter() {
        let stops = vec![
            stop("1", "ABC Corporation", "New York", RouteStopStatus::Delivered),
            stop("2", "XYZ Industries", "New York", RouteStopStatus::InTransit),
            stop("3", "Tech Solutions Ltd", "Brooklyn", RouteStopStatus::Pending),
        ];

        let mut filters = FilterSet::for_columns(RouteCustomer::columns());
        filters.set_operand("city", "york");
        filters.set_operator("customerName", FilterOperator::StartsWith);
        filters.set_operand("customerName", "xyz");
        let kept = filter_list(stops.clone(), &filters);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "2");

        filters.clear();
        filters.set_status("pending");
        let kept = filter_list(stops, &filters);
        assert_eq!(kept[0].customer_name, "Tech Solutions Ltd");

        assert_eq!(next_numeric_id(["1", "2", "3"]), "4");
    }
}
