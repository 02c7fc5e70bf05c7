use crate::shared::data::mock;
use crate::shared::list_state::ListController;
use crate::shared::state::FilterStateStore;
use contracts::domain::a012_user_access::{Permission, UserAccess};
use contracts::shared::config::EngineConfig;
use contracts::shared::list::StatusFilter;

/// Форма распределения доступа
pub fn create_list_state(config: &EngineConfig, store: &FilterStateStore) -> ListController<UserAccess> {
    ListController::for_form(mock::users(), config, store)
}

/// Фильтр по роли: «all» снимает ограничение
pub fn set_role_filter(list: &ListController<UserAccess>, role: &str) {
    if role.is_empty() || role == StatusFilter::ALL {
        list.set_operand("role", "");
    } else {
        list.set_operator("role", "equals");
        list.set_operand("role", role);
    }
}

pub fn toggle_user_status(list: &ListController<UserAccess>, user_id: &str) -> bool {
    list.update_record(user_id, UserAccess::toggle_status)
}

pub fn set_permission(list: &ListController<UserAccess>, user_id: &str, permission: Permission, granted: bool) -> bool {
    list.update_record(user_id, |user| user.set_permission(permission, granted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::UserStatus;
    use leptos::prelude::Owner;

    fn names(list: &ListController<UserAccess>) -> Vec<String> {
        list.visible().into_iter().map(|u| u.name).collect()
    }

    #[test]
    fn test_role_and_status_filters() {
        let owner = Owner::new();
        owner.set();
        let list = create_list_state(&EngineConfig::default(), &FilterStateStore::new());

        set_role_filter(&list, "manager");
        assert_eq!(names(&list), vec!["John Doe", "Jane Smith"]);

        set_role_filter(&list, "all");
        list.set_status("inactive");
        assert_eq!(names(&list), vec!["Sarah Johnson"]);

        list.set_search("company.com");
        assert_eq!(list.visible().len(), 1);
    }

    #[test]
    fn test_toggle_status_moves_user_between_filters() {
        let owner = Owner::new();
        owner.set();
        let list = create_list_state(&EngineConfig::default(), &FilterStateStore::new());
        list.set_status("active");
        assert_eq!(list.visible().len(), 4);

        assert!(toggle_user_status(&list, "4"));
        assert_eq!(list.visible().len(), 3);
        assert!(!toggle_user_status(&list, "42"));

        let mike = list.records().into_iter().find(|u| u.id == "4").unwrap();
        assert_eq!(mike.status, UserStatus::Inactive);
    }

    #[test]
    fn test_permission_grant() {
        let owner = Owner::new();
        owner.set();
        let list = create_list_state(&EngineConfig::default(), &FilterStateStore::new());

        assert!(set_permission(&list, "4", Permission::Reports, true));
        let mike = list.records().into_iter().find(|u| u.id == "4").unwrap();
        assert!(mike.permissions.get(Permission::Reports));
        assert_eq!(mike.permissions.granted_count(), 3);
    }
}
