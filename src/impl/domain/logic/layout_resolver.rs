use crate::entities::{DashboardLayout, Role};

const ALL_WIDGETS: DashboardLayout = DashboardLayout {
    net_worth: true,
    income: true,
    expenses: true,
    transactions: true,
    category_chart: true,
    ai_assistant: true,
};

pub const VIEWER_LAYOUT: DashboardLayout = DashboardLayout {
    net_worth: false,
    income: false,
    expenses: false,
    transactions: true,
    category_chart: false,
    ai_assistant: false,
};

/// Roles without an entry here get `VIEWER_LAYOUT`.
const DEFAULT_LAYOUTS: &[(Role, DashboardLayout)] = &[
    (Role::Admin, ALL_WIDGETS),
    (Role::Accountant, ALL_WIDGETS),
    (
        Role::Employee,
        DashboardLayout {
            net_worth: false,
            income: false,
            expenses: true,
            transactions: true,
            category_chart: true,
            ai_assistant: false,
        },
    ),
    (Role::Viewer, VIEWER_LAYOUT),
];

pub fn default_layout(role: Role) -> DashboardLayout {
    DEFAULT_LAYOUTS
        .iter()
        .find(|(r, _)| *r == role)
        .map(|(_, layout)| *layout)
        .unwrap_or(VIEWER_LAYOUT)
}

