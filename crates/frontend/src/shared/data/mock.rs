//! Демонстрационные данные вместо backend: строки списков и справочники подстановки

use contracts::domain::a001_item::{Item, ItemMasterEntry};
use contracts::domain::a002_supplier::{Supplier, VendorMasterEntry};
use contracts::domain::a003_customer::Customer;
use contracts::domain::a004_purchase_order::{PurchaseOrder, PurchaseOrderHeader, PurchaseOrderLine};
use contracts::domain::a005_sales_order::{SalesOrder, SalesOrderHeader, SalesOrderLine};
use contracts::domain::a006_route::{Route, RouteCustomer};
use contracts::domain::a007_price_book::{PriceBook, PriceBookData, PriceBookItem};
use contracts::domain::a008_item_category::ItemCategory;
use contracts::domain::a009_item_brand::ItemBrand;
use contracts::domain::a010_inventory::InventoryItem;
use contracts::domain::a011_pick_list::{PickList, PickListItem};
use contracts::domain::a012_user_access::{Permissions, UserAccess};
use contracts::enums::{
    ActivityStatus, PickListStatus, PurchaseOrderStatus, RouteStatus, RouteStopStatus,
    SalesOrderPriority, SalesOrderStatus, SalesOrderType, UserRole, UserStatus,
};
use contracts::shared::calc::OrderLineBase;
use contracts::shared::lookup::MasterData;
use once_cell::sync::Lazy;

/// Справочник номенклатуры для строк заказов (коды в верхнем регистре)
pub static ITEM_MASTER: Lazy<MasterData<ItemMasterEntry>> = Lazy::new(|| {
    [
        ItemMasterEntry::new("LAPTOP001", "Business Laptop Pro 15\"", 1200.0),
        ItemMasterEntry::new("MONITOR002", "27\" 4K Monitor", 350.0),
        ItemMasterEntry::new("MOUSE003", "Wireless Mouse with USB-C", 35.0),
        ItemMasterEntry::new("KEYBOARD004", "Mechanical Keyboard RGB", 89.0),
        ItemMasterEntry::new("CABLE005", "USB-C to HDMI Cable 2m", 25.0),
    ]
    .into_iter()
    .collect()
});

/// Справочник поставщиков для шапки заказа поставщику
pub static VENDOR_MASTER: Lazy<MasterData<VendorMasterEntry>> = Lazy::new(|| {
    [
        VendorMasterEntry::new(
            "VEND001",
            "TSI",
            "Tech Supplies Inc",
            "123 Technology Ave, Silicon Valley, CA 94000",
        ),
        VendorMasterEntry::new(
            "VEND002",
            "GEL",
            "Global Electronics",
            "456 Electronics Blvd, Tech City, NY 10001",
        ),
        VendorMasterEntry::new(
            "VEND003",
            "ODP",
            "Office Depot Pro",
            "789 Office Park, Business District, CA 90210",
        ),
        VendorMasterEntry::new(
            "VEND004",
            "IPC",
            "Industrial Parts Co",
            "321 Industrial Way, Manufacturing Zone, TX 75001",
        ),
    ]
    .into_iter()
    .collect()
});

fn s(value: &str) -> String {
    value.to_string()
}

pub fn items() -> Vec<Item> {
    let item = |id: &str, code: &str, name: &str, category: &str, unit_price: f64, stock: f64, status| Item {
        id: s(id),
        code: s(code),
        name: s(name),
        category: s(category),
        unit_price,
        stock,
        status,
    };
    vec![
        item("1", "ITEM001", "Business Laptop Pro 15\"", "Electronics", 1200.0, 25.0, ActivityStatus::Active),
        item("2", "ITEM002", "27\" 4K Monitor", "Electronics", 350.0, 45.0, ActivityStatus::Active),
        item("3", "ITEM003", "Wireless Mouse with USB-C", "Accessories", 35.0, 150.0, ActivityStatus::Active),
        item("4", "ITEM004", "Mechanical Keyboard RGB", "Accessories", 89.0, 80.0, ActivityStatus::Active),
        item("5", "ITEM005", "USB-C to HDMI Cable 2m", "Cables", 25.0, 200.0, ActivityStatus::Inactive),
    ]
}

pub fn suppliers() -> Vec<Supplier> {
    let supplier = |id: &str, code: &str, name: &str, email: &str, phone: &str, address: &str, city: &str, status, total: f64, last: &str| Supplier {
        id: s(id),
        supplier_code: s(code),
        name: s(name),
        email: s(email),
        phone: s(phone),
        address: s(address),
        city: s(city),
        status,
        total_purchases: total,
        last_purchase_date: s(last),
    };
    vec![
        supplier("SUPP-001", "S001", "Global Supplies Inc", "sales@globalsupplies.com", "555-0201", "789 Industrial Blvd", "Chicago", ActivityStatus::Active, 125.0, "2024-01-14"),
        supplier("SUPP-002", "S002", "Premium Materials Co", "orders@premiummaterials.com", "555-0202", "321 Commerce St", "Houston", ActivityStatus::Active, 87.0, "2024-01-13"),
        supplier("SUPP-003", "S003", "Quick Parts LLC", "contact@quickparts.com", "555-0203", "654 Market Ave", "Phoenix", ActivityStatus::Pending, 0.0, "-"),
        supplier("SUPP-004", "S004", "Wholesale Goods Corp", "info@wholesalegoods.com", "555-0204", "987 Distribution Way", "Dallas", ActivityStatus::Active, 156.0, "2024-01-11"),
    ]
}

pub fn customers() -> Vec<Customer> {
    let customer = |id: &str, code: &str, name: &str, email: &str, phone: &str, address: &str, city: &str, status, orders: f64, last: &str| Customer {
        id: s(id),
        customer_code: s(code),
        name: s(name),
        email: s(email),
        phone: s(phone),
        address: s(address),
        city: s(city),
        status,
        total_orders: orders,
        last_order_date: s(last),
    };
    vec![
        customer("CUST-001", "C001", "RetailCorp Inc", "contact@retailcorp.com", "555-0101", "123 Main St", "New York", ActivityStatus::Active, 45.0, "2024-01-15"),
        customer("CUST-002", "C002", "Wholesale Hub LLC", "info@wholesalehub.com", "555-0102", "456 Oak Ave", "Los Angeles", ActivityStatus::Active, 32.0, "2024-01-12"),
        customer("CUST-003", "C003", "MegaStore Chain", "purchasing@megastore.com", "555-0103", "789 Pine Rd", "Chicago", ActivityStatus::Inactive, 12.0, "2023-12-20"),
    ]
}

pub fn purchase_orders() -> Vec<PurchaseOrder> {
    let order = |id: &str, vendor: &str, vendor_name: &str, order_date: &str, expected_date: &str, status, total: f64, items: f64| PurchaseOrder {
        id: s(id),
        vendor: s(vendor),
        vendor_name: s(vendor_name),
        order_date: s(order_date),
        expected_date: s(expected_date),
        status,
        total,
        item_count: items,
    };
    vec![
        order("PO-001", "XXX0123", "Tech Supplies Inc", "2024-01-15", "2024-01-25", PurchaseOrderStatus::Pending, 15400.0, 12.0),
        order("PO-002", "XXX0456", "Global Electronics", "2024-01-12", "2024-01-22", PurchaseOrderStatus::Approved, 22100.0, 8.0),
        order("PO-003", "XXX0789", "Office Depot Pro", "2024-01-10", "2024-01-20", PurchaseOrderStatus::Received, 8750.0, 25.0),
        order("PO-004", "XXX0124", "Industrial Parts Co", "2024-01-08", "2024-01-18", PurchaseOrderStatus::Draft, 31200.0, 6.0),
    ]
}

/// Шапка заказа поставщику по номеру; `None` для неизвестного номера
pub fn purchase_order_header(id: &str) -> Option<PurchaseOrderHeader> {
    let header = |vendor_code: &str, order_date: &str, expected_date: &str, status, payment_terms: &str, delivery_terms: &str, notes: &str| {
        let vendor = VENDOR_MASTER.get(vendor_code).cloned();
        PurchaseOrderHeader {
            id: s(id),
            vendor_code: s(vendor_code),
            vendor: vendor.as_ref().map(|v| v.vendor.clone()).unwrap_or_default(),
            vendor_name: vendor.as_ref().map(|v| v.vendor_name.clone()).unwrap_or_default(),
            vendor_address: vendor.map(|v| v.vendor_address).unwrap_or_default(),
            order_date: s(order_date),
            expected_date: s(expected_date),
            status,
            currency: s("USD"),
            payment_terms: s(payment_terms),
            delivery_terms: s(delivery_terms),
            notes: s(notes),
        }
    };
    match id {
        "PO-001" => Some(header("VEND001", "2024-01-15", "2024-01-30", PurchaseOrderStatus::Approved, "Net 30", "FOB Destination", "Urgent delivery required for Q1 projects")),
        "PO-002" => Some(header("VEND002", "2024-01-12", "2024-01-22", PurchaseOrderStatus::Pending, "Net 60", "FOB Origin", "Standard delivery terms apply")),
        "PO-003" => Some(header("VEND003", "2024-01-10", "2024-01-20", PurchaseOrderStatus::Received, "Net 30", "CIF", "All items received and inspected")),
        "PO-004" => Some(header("VEND004", "2024-01-08", "2024-01-18", PurchaseOrderStatus::Draft, "Prepaid", "EXW", "Draft order - pending approval")),
        _ => None,
    }
}

pub fn purchase_order_lines() -> Vec<PurchaseOrderLine> {
    let line = |id: &str, code: &str, qty: f64, discount: f64| {
        let (description, price) = ITEM_MASTER
            .get(code)
            .map(|e| (e.description.clone(), e.unit_price))
            .unwrap_or_default();
        PurchaseOrderLine::new(OrderLineBase::from_values(id, code, description, qty, price, discount))
    };
    vec![
        line("1", "LAPTOP001", 10.0, 0.0),
        line("2", "MONITOR002", 15.0, 5.0),
        line("3", "MOUSE003", 25.0, 0.0),
        line("4", "KEYBOARD004", 20.0, 10.0),
        line("5", "CABLE005", 30.0, 0.0),
    ]
}

pub fn sales_orders() -> Vec<SalesOrder> {
    let order = |id: &str, customer: &str, order_date: &str, delivery_date: &str, status, order_type, total: f64, items: f64| SalesOrder {
        id: s(id),
        customer: s(customer),
        order_date: s(order_date),
        delivery_date: s(delivery_date),
        status,
        order_type,
        total,
        item_count: items,
    };
    vec![
        order("SO-001", "RetailCorp Inc", "2024-01-15", "2024-01-20", SalesOrderStatus::Shipped, SalesOrderType::Wholesale, 34500.0, 15.0),
        order("SO-002", "John Smith", "2024-01-14", "2024-01-18", SalesOrderStatus::Delivered, SalesOrderType::Retail, 890.0, 3.0),
        order("SO-003", "Wholesale Hub LLC", "2024-01-13", "2024-01-22", SalesOrderStatus::Confirmed, SalesOrderType::Wholesale, 67200.0, 28.0),
        order("SO-004", "Sarah Johnson", "2024-01-12", "2024-01-16", SalesOrderStatus::Draft, SalesOrderType::Retail, 450.0, 2.0),
        order("SO-005", "MegaStore Chain", "2024-01-11", "2024-01-25", SalesOrderStatus::Confirmed, SalesOrderType::Wholesale, 125000.0, 45.0),
        order("SO-006", "Mike Davis", "2024-01-10", "2024-01-15", SalesOrderStatus::Shipped, SalesOrderType::Retail, 1250.0, 5.0),
    ]
}

pub fn sales_order_header(id: &str) -> Option<SalesOrderHeader> {
    if id != "SO-001" {
        return None;
    }
    Some(SalesOrderHeader {
        id: s(id),
        customer: s("ABC Corporation"),
        customer_address: s("456 Business Blvd, Enterprise City, NY 10001"),
        order_date: s("2024-01-15"),
        delivery_date: s("2024-01-25"),
        status: SalesOrderStatus::Confirmed,
        order_type: SalesOrderType::Wholesale,
        currency: s("USD"),
        payment_terms: s("Net 15"),
        delivery_terms: s("FOB Origin"),
        sales_rep: s("John Smith"),
        priority: SalesOrderPriority::High,
        notes: s("Preferred customer - expedite shipping"),
        shipping_amount: 250.0,
    })
}

pub fn sales_order_lines() -> Vec<SalesOrderLine> {
    let line = |id: &str, code: &str, description: &str, qty: f64, price: f64, discount: f64| {
        SalesOrderLine::new(OrderLineBase::from_values(id, code, description, qty, price, discount))
    };
    vec![
        line("1", "LAPTOP001", "Business Laptop Pro 15\"", 20.0, 1200.0, 5.0),
        line("2", "MONITOR002", "27\" 4K Monitor", 25.0, 350.0, 10.0),
        line("3", "DOCK003", "USB-C Docking Station", 20.0, 150.0, 0.0),
        line("4", "HEADSET004", "Wireless Noise-Cancelling Headset", 30.0, 89.0, 15.0),
        line("5", "STAND005", "Adjustable Laptop Stand", 25.0, 45.0, 0.0),
    ]
}

pub fn routes() -> Vec<Route> {
    let route = |id: &str, code: &str, origin: &str, destination: &str, distance: f64, time: &str, status, shipments: f64, updated: &str| Route {
        id: s(id),
        route_code: s(code),
        origin: s(origin),
        destination: s(destination),
        distance,
        estimated_time: s(time),
        status,
        shipments_count: shipments,
        last_updated: s(updated),
    };
    vec![
        route("RT-001", "RT001", "New York", "Boston", 215.0, "4h 30m", RouteStatus::Active, 12.0, "2024-01-15"),
        route("RT-002", "RT002", "Los Angeles", "San Francisco", 380.0, "6h 15m", RouteStatus::Active, 8.0, "2024-01-12"),
        route("RT-003", "RT003", "Chicago", "Detroit", 280.0, "5h 00m", RouteStatus::Paused, 0.0, "2024-01-10"),
        route("RT-004", "RT004", "Houston", "Dallas", 240.0, "4h 45m", RouteStatus::Active, 15.0, "2024-01-08"),
    ]
}

pub fn price_books() -> Vec<PriceBook> {
    let book = |id: &str, name: &str, description: &str, items: f64, from: &str, to: &str, status| PriceBook {
        id: s(id),
        name: s(name),
        description: s(description),
        currency: s("USD"),
        item_count: items,
        valid_from: s(from),
        valid_to: s(to),
        status,
    };
    vec![
        book("1", "Standard Price Book 2024", "Default pricing for all customers", 45.0, "2024-01-01", "2024-12-31", ActivityStatus::Active),
        book("2", "VIP Customer Discount", "Special pricing for VIP customers", 45.0, "2024-01-01", "2024-12-31", ActivityStatus::Active),
        book("3", "Seasonal Promotion Q1", "Q1 2024 promotional pricing", 30.0, "2024-01-01", "2024-03-31", ActivityStatus::Active),
        book("4", "Wholesale Pricing", "Bulk order pricing", 50.0, "2024-01-01", "2024-12-31", ActivityStatus::Active),
        book("5", "Legacy Price Book 2023", "Previous year pricing", 40.0, "2023-01-01", "2023-12-31", ActivityStatus::Inactive),
    ]
}

/// Карточка прайс-листа с позициями; `None` для неизвестного ID
pub fn price_book_data(id: &str) -> Option<PriceBookData> {
    let book = price_books().into_iter().find(|b| b.id == id)?;
    let discount = |base: f64| if id == "2" { base } else { 0.0 };
    let items = vec![
        PriceBookItem::new("1", "ITEM001", "Business Laptop Pro 15\"", 1200.0, discount(10.0)),
        PriceBookItem::new("2", "ITEM002", "27\" 4K Monitor", 350.0, discount(10.0)),
        PriceBookItem::new("3", "ITEM003", "Wireless Mouse with USB-C", 35.0, discount(5.0)),
    ];
    Some(PriceBookData {
        id: book.id,
        name: book.name,
        description: book.description,
        currency: book.currency,
        valid_from: book.valid_from,
        valid_to: book.valid_to,
        status: book.status,
        items,
    })
}

/// Точки доставки маршрута; одинаковы для всех известных маршрутов
pub fn route_customers() -> Vec<RouteCustomer> {
    let stop = |id: &str, customer_id: &str, name: &str, address: &str, city: &str, orders: f64, items: f64, status| RouteCustomer {
        id: s(id),
        customer_id: s(customer_id),
        customer_name: s(name),
        address: s(address),
        city: s(city),
        order_count: orders,
        total_items: items,
        status,
    };
    vec![
        stop("1", "CUST-001", "RetailCorp Inc", "123 Main St", "New York", 5.0, 25.0, RouteStopStatus::Pending),
        stop("2", "CUST-002", "John Smith", "456 Oak Ave", "New York", 2.0, 8.0, RouteStopStatus::Pending),
        stop("3", "CUST-003", "Wholesale Hub LLC", "789 Pine Rd", "Boston", 3.0, 15.0, RouteStopStatus::InTransit),
        stop("4", "CUST-004", "Sarah Johnson", "321 Elm St", "Boston", 1.0, 4.0, RouteStopStatus::Pending),
    ]
}

pub fn item_categories() -> Vec<ItemCategory> {
    let category = |id: &str, code: &str, name: &str, description: &str, items: f64, status| ItemCategory {
        id: s(id),
        code: s(code),
        name: s(name),
        description: s(description),
        item_count: items,
        status,
    };
    vec![
        category("1", "CAT001", "Electronics", "Electronic devices and components", 125.0, ActivityStatus::Active),
        category("2", "CAT002", "Accessories", "Computer and electronic accessories", 89.0, ActivityStatus::Active),
        category("3", "CAT003", "Cables", "Various types of cables and connectors", 45.0, ActivityStatus::Active),
        category("4", "CAT004", "Office Supplies", "General office supplies and stationery", 67.0, ActivityStatus::Active),
        category("5", "CAT005", "Furniture", "Office and workstation furniture", 23.0, ActivityStatus::Inactive),
    ]
}

pub fn item_brands() -> Vec<ItemBrand> {
    let brand = |id: &str, code: &str, name: &str, manufacturer: &str, country: &str, items: f64, status| ItemBrand {
        id: s(id),
        code: s(code),
        name: s(name),
        manufacturer: s(manufacturer),
        country: s(country),
        item_count: items,
        status,
    };
    vec![
        brand("1", "BRD001", "Dell", "Dell Inc.", "USA", 45.0, ActivityStatus::Active),
        brand("2", "BRD002", "HP", "HP Inc.", "USA", 38.0, ActivityStatus::Active),
        brand("3", "BRD003", "Lenovo", "Lenovo Group Ltd.", "China", 52.0, ActivityStatus::Active),
        brand("4", "BRD004", "Logitech", "Logitech International S.A.", "Switzerland", 67.0, ActivityStatus::Active),
        brand("5", "BRD005", "Samsung", "Samsung Electronics", "South Korea", 29.0, ActivityStatus::Inactive),
    ]
}

pub fn inventory() -> Vec<InventoryItem> {
    let stock = |id: &str, sku: &str, name: &str, category: &str, on_hand: f64, reserved: f64, reorder: f64, cost: f64, location: &str, updated: &str| InventoryItem {
        id: s(id),
        sku: s(sku),
        name: s(name),
        category: s(category),
        on_hand,
        reserved,
        available: on_hand - reserved,
        reorder_point: reorder,
        unit_cost: cost,
        location: s(location),
        last_updated: s(updated),
    };
    vec![
        stock("1", "LAPTOP001", "Business Laptop Pro", "Electronics", 45.0, 8.0, 20.0, 1200.0, "A1-B2", "2024-01-15"),
        stock("2", "MOUSE002", "Wireless Mouse", "Accessories", 15.0, 3.0, 25.0, 35.0, "C3-D1", "2024-01-14"),
        stock("3", "DESK003", "Standing Desk", "Furniture", 8.0, 2.0, 5.0, 450.0, "F1-A3", "2024-01-13"),
        stock("4", "PHONE004", "Business Phone", "Electronics", 0.0, 0.0, 10.0, 299.0, "B2-C4", "2024-01-12"),
        stock("5", "MONITOR005", "27\" 4K Monitor", "Electronics", 22.0, 5.0, 15.0, 350.0, "A2-C1", "2024-01-14"),
        stock("6", "CHAIR006", "Ergonomic Office Chair", "Furniture", 12.0, 1.0, 8.0, 280.0, "F2-A1", "2024-01-13"),
        stock("7", "CABLE007", "USB-C Cable 2m", "Accessories", 85.0, 15.0, 50.0, 15.0, "C1-D3", "2024-01-15"),
    ]
}

pub fn pick_lists() -> Vec<PickList> {
    let item = |id: &str, code: &str, name: &str, quantity: f64, location: &str, picked: bool, weight: f64| PickListItem {
        id: s(id),
        item_code: s(code),
        item_name: s(name),
        quantity,
        location: s(location),
        picked,
        weight,
    };
    let list = |id: &str, route_id: &str, route_name: &str, status, created: &str, items: Vec<PickListItem>| PickList {
        id: s(id),
        route_id: s(route_id),
        route_name: s(route_name),
        status,
        created_date: s(created),
        items,
    };
    vec![
        list("PL-001", "RT-001", "New York to Boston", PickListStatus::InProgress, "2024-01-15", vec![
            item("PLI-001", "ITEM-001", "Widget A", 5.0, "A-01-01", true, 2.5),
            item("PLI-002", "ITEM-002", "Widget B", 10.0, "B-02-03", false, 3.2),
            item("PLI-003", "ITEM-003", "Gadget C", 3.0, "C-03-02", true, 1.8),
        ]),
        list("PL-002", "RT-002", "Los Angeles to San Francisco", PickListStatus::Pending, "2024-01-14", vec![
            item("PLI-004", "ITEM-004", "Widget D", 8.0, "A-01-02", false, 2.1),
            item("PLI-005", "ITEM-005", "Gadget E", 2.0, "D-04-01", false, 0.9),
        ]),
        list("PL-003", "RT-003", "Chicago to Detroit", PickListStatus::Completed, "2024-01-13", vec![
            item("PLI-006", "ITEM-006", "Widget F", 12.0, "A-01-03", true, 4.5),
            item("PLI-007", "ITEM-007", "Gadget G", 4.0, "E-05-01", true, 1.6),
        ]),
        list("PL-004", "RT-004", "Houston to Dallas", PickListStatus::InProgress, "2024-01-12", vec![
            item("PLI-008", "ITEM-008", "Widget H", 6.0, "B-02-01", true, 2.8),
            item("PLI-009", "ITEM-009", "Gadget I", 9.0, "F-06-02", true, 3.5),
            item("PLI-010", "ITEM-010", "Widget J", 3.0, "A-01-04", false, 1.2),
        ]),
    ]
}

pub fn users() -> Vec<UserAccess> {
    // порядок флагов: dashboard, purchase, sales, inventory, reports, settings
    let grants = |flags: [bool; 6]| Permissions {
        dashboard: flags[0],
        purchase_orders: flags[1],
        sales_orders: flags[2],
        inventory: flags[3],
        reports: flags[4],
        settings: flags[5],
    };
    let user = |id: &str, username: &str, name: &str, role, department: &str, status, permissions, login: &str| UserAccess {
        id: s(id),
        username: s(username),
        name: s(name),
        email: format!("{}@company.com", username),
        role,
        department: s(department),
        status,
        permissions,
        last_login: s(login),
    };
    vec![
        user("1", "admin", "System Administrator", UserRole::Admin, "IT", UserStatus::Active, Permissions::full(), "2024-01-15 09:30:00"),
        user("2", "john.doe", "John Doe", UserRole::Manager, "Procurement", UserStatus::Active, grants([true, true, false, true, true, false]), "2024-01-15 08:45:00"),
        user("3", "jane.smith", "Jane Smith", UserRole::Manager, "Sales", UserStatus::Active, grants([true, false, true, true, true, false]), "2024-01-15 10:15:00"),
        user("4", "mike.wilson", "Mike Wilson", UserRole::User, "Inventory", UserStatus::Active, grants([true, false, false, true, false, false]), "2024-01-14 16:20:00"),
        user("5", "sarah.johnson", "Sarah Johnson", UserRole::User, "Finance", UserStatus::Inactive, grants([true, true, true, false, true, false]), "2024-01-10 14:30:00"),
    ]
}
