use std::sync::LazyLock;

use regex::Regex;

use crate::entities::{Capability, PermissionSet, Role, User, ViewAccess};

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]").expect("hardcoded regex should be valid"));

struct RolePredicates {
    is_admin: bool,
    is_accountant: bool,
    is_hr_manager: bool,
    is_employee: bool,
}

impl RolePredicates {
    fn of(role: Role) -> Self {
        Self {
            is_admin: role == Role::Admin,
            is_accountant: role == Role::Accountant,
            is_hr_manager: role == Role::HrManager,
            is_employee: role == Role::Employee,
        }
    }

    fn allows(&self, capability: Capability) -> bool {
        let RolePredicates {
            is_admin,
            is_accountant,
            is_hr_manager,
            is_employee,
        } = *self;
        match capability {
            // Views.
            Capability::ViewDashboard => true,
            Capability::ViewAnalytics => is_admin || is_accountant,
            Capability::ViewTransactions => true,
            Capability::ViewWallets => true,
            Capability::ViewBudgets => is_admin || is_accountant || is_employee,
            Capability::ViewContacts => is_admin || is_accountant || is_hr_manager,
            Capability::ViewSales => is_admin || is_accountant,
            Capability::ViewAccounting => is_admin || is_accountant,
            Capability::ViewInventory => is_admin || is_accountant,
            Capability::ViewHr => is_admin || is_accountant || is_hr_manager,
            Capability::ViewReports => is_admin || is_accountant,
            Capability::ViewSettings => is_admin,
            Capability::ViewFinancialWidgets => is_admin || is_accountant,

            // Edits.
            Capability::EditTransactions
            | Capability::EditBudgets
            | Capability::EditInvoices
            | Capability::EditAccounting => is_admin || is_accountant,
            Capability::EditWallets
            | Capability::EditContacts
            | Capability::EditInventory
            | Capability::EditSettings => is_admin,
            Capability::EditHr => is_admin || is_hr_manager,
            Capability::ApproveClaims => is_admin || is_accountant || is_hr_manager,
        }
    }
}

/// Derives the full capability table for the signed-in user. Without a user
/// every capability is denied.
pub fn resolve_permissions(user: Option<&User>) -> PermissionSet {
    match user {
        None => PermissionSet::none(),
        Some(user) => {
            let predicates = RolePredicates::of(user.role);
            PermissionSet::from_fn(|c| predicates.allows(c))
        }
    }
}

/// Capability key derived from a view label ("Net Worth" -> "canViewNetworth").
pub fn view_key(label: &str) -> String {
    let compact = NON_ALPHANUMERIC.replace_all(label, "");
    let mut chars = compact.chars();
    match chars.next() {
        Some(first) => format!(
            "canView{}{}",
            first.to_ascii_uppercase(),
            chars.as_str().to_ascii_lowercase()
        ),
        None => "canView".to_string(),
    }
}

/// Looks up access to a view by its label. Keys are compared
/// case-insensitively against the view capabilities; labels that match none
/// of them are granted (fail-open), so callers can inspect the decision.
pub fn can_access_view(permissions: &PermissionSet, label: &str) -> ViewAccess {
    let key = view_key(label);
    let capability = Capability::ALL
        .into_iter()
        .filter(Capability::is_view)
        .find(|c| c.key().eq_ignore_ascii_case(&key));
    match capability {
        Some(capability) => ViewAccess::Mapped {
            capability,
            granted: permissions.has(capability),
        },
        None => {
            tracing::debug!(view = label, key = %key, "no capability for view, granting access");
            ViewAccess::Unmapped { key }
        }
    }
}
