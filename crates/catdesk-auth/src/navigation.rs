//! Role-based navigation visibility.

use catdesk_core::models::user::UserRole;
use serde::Serialize;

/// Navigation destinations in the desk UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NavEntry {
    Customers,
    Products,
    Orders,
    Knowledge,
    Announcements,
    Financial,
    AfterSales,
    Analytics,
    Settings,
}

impl NavEntry {
    /// Stable identifier used by the UI router.
    pub fn id(self) -> &'static str {
        match self {
            NavEntry::Customers => "customers",
            NavEntry::Products => "products",
            NavEntry::Orders => "orders",
            NavEntry::Knowledge => "knowledge",
            NavEntry::Announcements => "announcements",
            NavEntry::Financial => "financial",
            NavEntry::AfterSales => "after-sales",
            NavEntry::Analytics => "analytics",
            NavEntry::Settings => "settings",
        }
    }
}

/// Master list of base entries and the roles allowed to see them.
/// Order here is the order entries render in.
const BASE_ENTRIES: &[(NavEntry, &[UserRole])] = &[
    (
        NavEntry::Customers,
        &[UserRole::Admin, UserRole::Sales, UserRole::AfterSales],
    ),
    (
        NavEntry::Products,
        &[UserRole::Admin, UserRole::Sales, UserRole::AfterSales],
    ),
    (NavEntry::Orders, &[UserRole::Admin, UserRole::Sales]),
    (
        NavEntry::Knowledge,
        &[UserRole::Admin, UserRole::Sales, UserRole::AfterSales],
    ),
    (
        NavEntry::Announcements,
        &[UserRole::Admin, UserRole::Sales, UserRole::AfterSales],
    ),
    (NavEntry::Financial, &[UserRole::Admin, UserRole::Sales]),
];

/// Derive the ordered navigation list for a role.
///
/// Base entries keep their master-list order. Conditional entries are
/// appended after them in a fixed order: after-sales (after-sales and
/// admin roles), then analytics and settings (admin only).
pub fn visible_entries(role: UserRole) -> Vec<NavEntry> {
    let mut entries: Vec<NavEntry> = BASE_ENTRIES
        .iter()
        .filter(|(_, allowed)| allowed.contains(&role))
        .map(|(entry, _)| *entry)
        .collect();

    if matches!(role, UserRole::AfterSales | UserRole::Admin) {
        entries.push(NavEntry::AfterSales);
    }
    if role == UserRole::Admin {
        entries.push(NavEntry::Analytics);
        entries.push(NavEntry::Settings);
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_sees_everything_in_order() {
        assert_eq!(
            visible_entries(UserRole::Admin),
            vec![
                NavEntry::Customers,
                NavEntry::Products,
                NavEntry::Orders,
                NavEntry::Knowledge,
                NavEntry::Announcements,
                NavEntry::Financial,
                NavEntry::AfterSales,
                NavEntry::Analytics,
                NavEntry::Settings,
            ]
        );
    }

    #[test]
    fn sales_sees_base_entries_only() {
        let entries = visible_entries(UserRole::Sales);
        assert_eq!(
            entries,
            vec![
                NavEntry::Customers,
                NavEntry::Products,
                NavEntry::Orders,
                NavEntry::Knowledge,
                NavEntry::Announcements,
                NavEntry::Financial,
            ]
        );
        assert!(!entries.contains(&NavEntry::Settings));
        assert!(!entries.contains(&NavEntry::Analytics));
    }

    #[test]
    fn after_sales_gets_the_after_sales_entry_appended() {
        let entries = visible_entries(UserRole::AfterSales);
        assert_eq!(entries.last(), Some(&NavEntry::AfterSales));
        assert!(!entries.contains(&NavEntry::Orders));
        assert!(!entries.contains(&NavEntry::Financial));
        assert!(!entries.contains(&NavEntry::Analytics));
        assert!(!entries.contains(&NavEntry::Settings));
    }

    #[test]
    fn conditional_entries_come_after_the_base_list() {
        let entries = visible_entries(UserRole::Admin);
        let after_sales = entries
            .iter()
            .position(|e| *e == NavEntry::AfterSales)
            .unwrap();
        let analytics = entries
            .iter()
            .position(|e| *e == NavEntry::Analytics)
            .unwrap();
        let settings = entries
            .iter()
            .position(|e| *e == NavEntry::Settings)
            .unwrap();
        assert!(after_sales < analytics);
        assert!(analytics < settings);
        assert_eq!(settings, entries.len() - 1);
    }

    #[test]
    fn entry_ids_are_stable() {
        assert_eq!(NavEntry::AfterSales.id(), "after-sales");
        assert_eq!(NavEntry::Customers.id(), "customers");
    }
}
