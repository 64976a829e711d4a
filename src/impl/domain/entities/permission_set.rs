/// A single named permission flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    // Views.
    ViewDashboard,
    ViewAnalytics,
    ViewTransactions,
    ViewWallets,
    ViewBudgets,
    ViewContacts,
    ViewSales,
    ViewAccounting,
    ViewInventory,
    ViewHr,
    ViewReports,
    ViewSettings,
    ViewFinancialWidgets,

    // Edits.
    EditTransactions,
    EditBudgets,
    EditInvoices,
    EditAccounting,
    EditWallets,
    EditContacts,
    EditInventory,
    EditSettings,
    EditHr,
    ApproveClaims,
}

impl Capability {
    pub const COUNT: usize = 23;

    pub const ALL: [Capability; Capability::COUNT] = [
        Capability::ViewDashboard,
        Capability::ViewAnalytics,
        Capability::ViewTransactions,
        Capability::ViewWallets,
        Capability::ViewBudgets,
        Capability::ViewContacts,
        Capability::ViewSales,
        Capability::ViewAccounting,
        Capability::ViewInventory,
        Capability::ViewHr,
        Capability::ViewReports,
        Capability::ViewSettings,
        Capability::ViewFinancialWidgets,
        Capability::EditTransactions,
        Capability::EditBudgets,
        Capability::EditInvoices,
        Capability::EditAccounting,
        Capability::EditWallets,
        Capability::EditContacts,
        Capability::EditInventory,
        Capability::EditSettings,
        Capability::EditHr,
        Capability::ApproveClaims,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Capability::ViewDashboard => "canViewDashboard",
            Capability::ViewAnalytics => "canViewAnalytics",
            Capability::ViewTransactions => "canViewTransactions",
            Capability::ViewWallets => "canViewWallets",
            Capability::ViewBudgets => "canViewBudgets",
            Capability::ViewContacts => "canViewContacts",
            Capability::ViewSales => "canViewSales",
            Capability::ViewAccounting => "canViewAccounting",
            Capability::ViewInventory => "canViewInventory",
            Capability::ViewHr => "canViewHR",
            Capability::ViewReports => "canViewReports",
            Capability::ViewSettings => "canViewSettings",
            Capability::ViewFinancialWidgets => "canViewFinancialWidgets",
            Capability::EditTransactions => "canEditTransactions",
            Capability::EditBudgets => "canEditBudgets",
            Capability::EditInvoices => "canEditInvoices",
            Capability::EditAccounting => "canEditAccounting",
            Capability::EditWallets => "canEditWallets",
            Capability::EditContacts => "canEditContacts",
            Capability::EditInventory => "canEditInventory",
            Capability::EditSettings => "canEditSettings",
            Capability::EditHr => "canEditHR",
            Capability::ApproveClaims => "canApproveClaims",
        }
    }

    pub fn from_key(key: &str) -> Option<Capability> {
        Capability::ALL.into_iter().find(|c| c.key() == key)
    }

    pub fn is_view(&self) -> bool {
        self.key().starts_with("canView")
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Complete capability table for one user. Every capability always has a
/// defined value; there is no missing-key state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionSet {
    flags: [bool; Capability::COUNT],
}

impl PermissionSet {
    pub fn none() -> Self {
        Self {
            flags: [false; Capability::COUNT],
        }
    }

    pub(crate) fn from_fn(f: impl Fn(Capability) -> bool) -> Self {
        let mut flags = [false; Capability::COUNT];
        for capability in Capability::ALL {
            flags[capability.index()] = f(capability);
        }
        Self { flags }
    }

    pub fn has(&self, capability: Capability) -> bool {
        self.flags[capability.index()]
    }

    pub fn get(&self, key: &str) -> Option<bool> {
        Capability::from_key(key).map(|c| self.has(c))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        Capability::ALL.into_iter().map(|c| (c.key(), self.has(c)))
    }

    pub fn granted(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|c| self.has(*c))
            .collect()
    }
}

/// Outcome of looking up a dashboard view by its human-readable label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAccess {
    /// The label maps to a known view capability.
    Mapped { capability: Capability, granted: bool },
    /// No view capability matches the label. Access is granted (fail-open).
    Unmapped { key: String },
}

impl ViewAccess {
    pub fn is_granted(&self) -> bool {
        match self {
            ViewAccess::Mapped { granted, .. } => *granted,
            ViewAccess::Unmapped { .. } => true,
        }
    }
}
