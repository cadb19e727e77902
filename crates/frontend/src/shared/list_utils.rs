//! Универсальные утилиты для работы со списками (поиск, сортировка)

use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Сортирует список по указанному полю (стабильно)
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Фильтрует список по поисковому запросу
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(filter.trim()))
        .cloned()
        .collect()
}

/// Case-insensitive substring match used by `Searchable` impls
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Стрелка направления сортировки для заголовка колонки
pub fn sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field != field {
        ""
    } else if ascending {
        " ▲"
    } else {
        " ▼"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: &'static str,
        qty: u32,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "qty" => self.qty.cmp(&other.qty),
                _ => self.name.cmp(other.name),
            }
        }
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci(self.name, filter)
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Paracetamol", qty: 5 },
            Row { name: "Aspirin", qty: 2 },
            Row { name: "Ibuprofen", qty: 5 },
        ]
    }

    #[test]
    fn test_sort_list_is_stable() {
        let mut items = rows();
        sort_list(&mut items, "qty", false);
        let names: Vec<&str> = items.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Paracetamol", "Ibuprofen", "Aspirin"]);
    }

    #[test]
    fn test_filter_list() {
        assert_eq!(filter_list(&rows(), "  ").len(), 3);
        let found = filter_list(&rows(), "ASP");
        assert_eq!(found, vec![Row { name: "Aspirin", qty: 2 }]);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(sort_indicator("qty", "name", true), "");
        assert_eq!(sort_indicator("qty", "qty", true), " ▲");
        assert_eq!(sort_indicator("qty", "qty", false), " ▼");
    }
}
