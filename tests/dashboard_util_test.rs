use chrono::NaiveDate;
use fractic_dashboard_core::{
    config::DashboardConfig,
    entities::{Capability, DashboardLayoutPatch, Role, Theme, ViewAccess, Widget},
    ext::demo::{DemoDashboardApi, DEMO_COMPANY_ID, DEMO_PASSWORD},
    usecases::SettingsUsecase as _,
    util::DashboardUtil,
};

fn util_in(dir: &std::path::Path) -> DashboardUtil<DemoDashboardApi> {
    DashboardUtil::new(
        DemoDashboardApi::new(),
        DashboardConfig::default().with_storage_dir(dir),
    )
}

async fn signed_in(
    dir: &std::path::Path,
    email: &str,
) -> DashboardUtil<DemoDashboardApi> {
    let mut util = util_in(dir);
    assert!(util.login(email, DEMO_PASSWORD).await);
    util.select_company(DEMO_COMPANY_ID).await.unwrap();
    util
}

#[tokio::test]
async fn test_login_with_wrong_password_fails_without_storing_token() {
    let dir = tempfile::tempdir().unwrap();
    let mut util = util_in(dir.path());

    assert!(!util.login("admin@demo.local", "wrong").await);
    assert!(!util.login("nobody@demo.local", DEMO_PASSWORD).await);

    assert!(util.user().is_none());
    assert!(!dir.path().join("token").exists());
    assert!(util.permissions().granted().is_empty());
}

#[tokio::test]
async fn test_login_resolves_role_permissions() {
    let dir = tempfile::tempdir().unwrap();
    let util = signed_in(dir.path(), "accountant@demo.local").await;

    assert_eq!(util.user().map(|u| u.role), Some(Role::Accountant));
    let perms = util.permissions();
    assert!(!perms.has(Capability::ViewSettings));
    assert!(perms.has(Capability::ViewReports));
    assert!(!perms.has(Capability::EditWallets));
    assert!(dir.path().join("token").exists());

    assert!(!util.can_access_view("Settings").is_granted());
    assert!(matches!(
        util.can_access_view("Net Worth"),
        ViewAccess::Unmapped { .. }
    ));
}

#[tokio::test]
async fn test_logout_clears_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut util = signed_in(dir.path(), "admin@demo.local").await;

    util.logout().await;

    assert!(util.user().is_none());
    assert!(!dir.path().join("token").exists());
    assert!(util.companies().await.is_err());
}

#[tokio::test]
async fn test_restore_reads_persisted_session_entries() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut util = signed_in(dir.path(), "admin@demo.local").await;
        util.set_language("de").await.unwrap();
    }

    let mut util = util_in(dir.path());
    assert!(util.restore().await.unwrap());
    assert_eq!(util.selected_company_id(), Some(DEMO_COMPANY_ID));
    assert_eq!(util.language(), Some("de"));
}

#[tokio::test]
async fn test_fresh_hr_manager_settings() {
    let dir = tempfile::tempdir().unwrap();
    let util = signed_in(dir.path(), "hr@demo.local").await;

    let settings = util.open_settings().await.unwrap();

    assert_eq!(
        settings.settings().dashboard_layout.visible_widgets(),
        vec![Widget::Transactions]
    );
    assert_eq!(settings.settings().theme, Theme::Dark);
    assert_eq!(
        settings.settings().company.id.as_deref(),
        Some(DEMO_COMPANY_ID)
    );
}

#[tokio::test]
async fn test_settings_survive_a_new_session() {
    let dir = tempfile::tempdir().unwrap();
    let expected = {
        let util = signed_in(dir.path(), "admin@demo.local").await;
        let mut settings = util.open_settings().await.unwrap();
        settings.toggle_theme().await;
        settings
            .update_dashboard_layout(
                DashboardLayoutPatch::default().with(Widget::AiAssistant, false),
            )
            .await;
        settings.settings().clone()
    };

    let util = signed_in(dir.path(), "admin@demo.local").await;
    let settings = util.open_settings().await.unwrap();

    assert_eq!(settings.settings(), &expected);
    assert_eq!(settings.settings().theme, Theme::Light);
    assert!(!settings.settings().dashboard_layout.ai_assistant);
}

#[tokio::test]
async fn test_corrupt_settings_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("app_settings_v2"), "{ definitely not json").unwrap();
    let util = signed_in(dir.path(), "employee@demo.local").await;

    let settings = util.open_settings().await.unwrap();

    assert_eq!(
        settings.settings().dashboard_layout.visible_widgets(),
        vec![Widget::Expenses, Widget::Transactions, Widget::CategoryChart]
    );
}

#[tokio::test]
async fn test_environment_theme_seeds_fresh_settings() {
    let dir = tempfile::tempdir().unwrap();
    let mut util = DashboardUtil::new(
        DemoDashboardApi::new(),
        DashboardConfig::default()
            .with_storage_dir(dir.path())
            .with_preferred_theme(Theme::Light),
    );
    assert!(util.login("viewer@demo.local", DEMO_PASSWORD).await);

    let settings = util.open_settings().await.unwrap();

    assert_eq!(settings.settings().theme, Theme::Light);
}

#[tokio::test]
async fn test_open_settings_requires_user() {
    let dir = tempfile::tempdir().unwrap();
    let util = util_in(dir.path());

    assert!(util.open_settings().await.is_err());
}

#[tokio::test]
async fn test_reports_for_accountant() {
    let dir = tempfile::tempdir().unwrap();
    let util = signed_in(dir.path(), "accountant@demo.local").await;

    let period = DashboardUtil::<DemoDashboardApi>::period("2024-01-01", "2024-01-31").unwrap();
    let pnl = util.profit_and_loss(period).await.unwrap();

    assert_eq!(pnl.income_by_category["Sales"], 4200.0);
    assert_eq!(pnl.expense_by_category["Rent"], 1500.0);
    assert_eq!(pnl.expense_by_category["Supplies"], 85.5);
    assert_eq!(pnl.expense_by_category["Travel"], 640.0);
    assert!((pnl.income_by_category["Consulting"] - 1000.0).abs() < 1e-9);
    assert!((pnl.net_profit - (pnl.income_total - pnl.expense_total)).abs() < 1e-9);
    assert!(!pnl.expense_by_category.contains_key("Salaries"));

    let sheet = util
        .balance_sheet(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        .await
        .unwrap();
    assert!(sheet.is_balanced());
    assert!(sheet.liabilities.iter().any(|l| l.wallet_id == "w-card"));

    let text = util.print_profit_and_loss(&pnl);
    assert!(text.contains("Net profit"));
    let csv = util.balance_sheet_csv(&sheet).unwrap();
    assert!(csv.starts_with("section,line,amount\n"));
}

#[tokio::test]
async fn test_reports_denied_without_capability() {
    let dir = tempfile::tempdir().unwrap();
    let util = signed_in(dir.path(), "viewer@demo.local").await;

    let period = DashboardUtil::<DemoDashboardApi>::period("2024-01-01", "2024-01-31").unwrap();
    assert!(util.profit_and_loss(period).await.is_err());
}

#[tokio::test]
async fn test_reports_in_configured_base_currency() {
    let dir = tempfile::tempdir().unwrap();
    let mut util = DashboardUtil::new(
        DemoDashboardApi::new(),
        DashboardConfig::default()
            .with_storage_dir(dir.path())
            .with_base_currency_code("gbp")
            .unwrap(),
    );
    assert!(util.login("admin@demo.local", DEMO_PASSWORD).await);
    util.select_company(DEMO_COMPANY_ID).await.unwrap();

    let period = DashboardUtil::<DemoDashboardApi>::period("2024-01-01", "2024-01-31").unwrap();
    let pnl = util.profit_and_loss(period).await.unwrap();

    assert_eq!(pnl.currency, iso_currency::Currency::GBP);
    // 4200 USD at 0.75 GBP per USD.
    assert!((pnl.income_by_category["Sales"] - 3150.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_assistant_and_forecast() {
    let dir = tempfile::tempdir().unwrap();
    let util = signed_in(dir.path(), "admin@demo.local").await;

    let answer = util.ask("How are we doing?").await.unwrap();
    assert!(answer.answer.contains("How are we doing?"));

    let forecast = util.cash_flow_forecast().await.unwrap();
    assert_eq!(forecast.len(), 30);
    assert!(forecast.windows(2).all(|w| w[0].date < w[1].date));
}

#[test]
fn test_period_parsing() {
    type Util = DashboardUtil<DemoDashboardApi>;
    assert!(Util::period("2024-01-01", "2024-12-31").is_ok());
    assert!(Util::period("2024-12-31", "2024-01-01").is_err());
    assert!(Util::period("01/01/2024", "2024-12-31").is_err());
}
