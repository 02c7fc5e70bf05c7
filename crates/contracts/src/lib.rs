//! Общие контракты ERP-клиента: записи списочных форм и ядро обработки списков
//! (фильтрация, выбор строк, сортировка, пересчёт строк документов).

pub mod domain;
pub mod enums;
pub mod shared;
