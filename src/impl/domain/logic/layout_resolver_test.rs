use crate::{
    domain::logic::layout_resolver::{default_layout, VIEWER_LAYOUT},
    entities::{DashboardLayout, DashboardLayoutPatch, Role, Widget},
};

#[test]
fn test_hr_manager_falls_back_to_viewer_layout() {
    let layout = default_layout(Role::HrManager);
    assert_eq!(layout, VIEWER_LAYOUT);
    assert_eq!(
        layout,
        DashboardLayout {
            net_worth: false,
            income: false,
            expenses: false,
            transactions: true,
            category_chart: false,
            ai_assistant: false,
        }
    );
    assert_eq!(layout.visible_widgets(), vec![Widget::Transactions]);
}

#[test]
fn test_admin_and_accountant_see_everything() {
    for role in [Role::Admin, Role::Accountant] {
        assert_eq!(default_layout(role).visible_widgets(), Widget::ALL.to_vec());
    }
}

#[test]
fn test_employee_layout() {
    assert_eq!(
        default_layout(Role::Employee).visible_widgets(),
        vec![Widget::Expenses, Widget::Transactions, Widget::CategoryChart]
    );
}

#[test]
fn test_merge_with_itself_is_identity() {
    for role in Role::ALL {
        let layout = default_layout(role);
        assert_eq!(layout.merge(&layout.into()), layout);
    }
}

#[test]
fn test_merge_is_idempotent() {
    let layout = default_layout(Role::Employee);
    let patch = DashboardLayoutPatch::default()
        .with(Widget::AiAssistant, true)
        .with(Widget::Expenses, false);
    let once = layout.merge(&patch);
    assert_eq!(once.merge(&patch), once);
}

#[test]
fn test_partial_merge_only_changes_named_keys() {
    let layout = default_layout(Role::Admin);
    let patch = DashboardLayoutPatch::default().with(Widget::NetWorth, false);
    let merged = layout.merge(&patch);
    for widget in Widget::ALL {
        let expected = widget != Widget::NetWorth;
        assert_eq!(merged.is_visible(widget), expected, "{}", widget.key());
    }
}

#[test]
fn test_empty_patch_changes_nothing() {
    let layout = default_layout(Role::Viewer);
    assert_eq!(layout.merge(&DashboardLayoutPatch::default()), layout);
}
