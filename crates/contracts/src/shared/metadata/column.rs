use crate::shared::list::FilterOperator;

/// Вид колонки: определяет доступные операторы фильтра
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnKind {
    #[default]
    Text,
    Numeric,
    /// Перечислимый статус: фильтруется отдельным выпадающим списком
    Status,
    /// Дата в виде строки YYYY-MM-DD, фильтруется как текст
    Date,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Numeric => "numeric",
            Self::Status => "status",
            Self::Date => "date",
        }
    }
}

/// Описание одной колонки таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMetadata {
    /// Имя поля (ключ для `ListRecord::field_value`)
    pub name: &'static str,
    pub label: &'static str,
    pub kind: ColumnKind,
    /// Участвует в быстром поиске
    pub searchable: bool,
}

impl ColumnMetadata {
    pub const fn new(name: &'static str, label: &'static str, kind: ColumnKind) -> Self {
        Self {
            name,
            label,
            kind,
            searchable: false,
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, ColumnKind::Text)
    }

    pub const fn numeric(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, ColumnKind::Numeric)
    }

    pub const fn status(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, ColumnKind::Status)
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, ColumnKind::Date)
    }

    pub const fn searchable(self) -> Self {
        Self {
            searchable: true,
            ..self
        }
    }

    /// Оператор, выбранный в строке фильтров по умолчанию
    pub fn default_operator(&self) -> Option<FilterOperator> {
        self.kind.default_operator()
    }

    /// Операторы, доступные для колонки
    pub fn operators(&self) -> Vec<FilterOperator> {
        match self.kind {
            ColumnKind::Text | ColumnKind::Date => FilterOperator::text_operators().to_vec(),
            ColumnKind::Numeric => FilterOperator::numeric_operators().to_vec(),
            ColumnKind::Status => Vec::new(),
        }
    }
}

/// Найти колонку по имени
pub fn find_column<'a>(columns: &'a [ColumnMetadata], name: &str) -> Option<&'a ColumnMetadata> {
    columns.iter().find(|c| c.name == name)
}
