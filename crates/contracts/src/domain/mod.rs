//! Записи списочных форм и документов ERP-клиента

pub mod a001_item;
pub mod a002_supplier;
pub mod a003_customer;
pub mod a004_purchase_order;
pub mod a005_sales_order;
pub mod a006_route;
pub mod a007_price_book;
pub mod a008_item_category;
pub mod a009_item_brand;
pub mod a010_inventory;
pub mod a011_pick_list;
pub mod a012_user_access;
pub mod common;
