#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Widget {
    NetWorth,
    Income,
    Expenses,
    Transactions,
    CategoryChart,
    AiAssistant,
}

impl Widget {
    pub const ALL: [Widget; 6] = [
        Widget::NetWorth,
        Widget::Income,
        Widget::Expenses,
        Widget::Transactions,
        Widget::CategoryChart,
        Widget::AiAssistant,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Widget::NetWorth => "netWorth",
            Widget::Income => "income",
            Widget::Expenses => "expenses",
            Widget::Transactions => "transactions",
            Widget::CategoryChart => "categoryChart",
            Widget::AiAssistant => "aiAssistant",
        }
    }
}

/// Visibility of every dashboard widget. The struct shape guarantees that
/// exactly the fixed widget set is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardLayout {
    pub net_worth: bool,
    pub income: bool,
    pub expenses: bool,
    pub transactions: bool,
    pub category_chart: bool,
    pub ai_assistant: bool,
}

/// Partial layout update. `None` leaves the widget untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardLayoutPatch {
    pub net_worth: Option<bool>,
    pub income: Option<bool>,
    pub expenses: Option<bool>,
    pub transactions: Option<bool>,
    pub category_chart: Option<bool>,
    pub ai_assistant: Option<bool>,
}

impl DashboardLayout {
    pub fn is_visible(&self, widget: Widget) -> bool {
        match widget {
            Widget::NetWorth => self.net_worth,
            Widget::Income => self.income,
            Widget::Expenses => self.expenses,
            Widget::Transactions => self.transactions,
            Widget::CategoryChart => self.category_chart,
            Widget::AiAssistant => self.ai_assistant,
        }
    }

    pub fn visible_widgets(&self) -> Vec<Widget> {
        Widget::ALL
            .into_iter()
            .filter(|w| self.is_visible(*w))
            .collect()
    }

    pub fn merge(&self, patch: &DashboardLayoutPatch) -> DashboardLayout {
        DashboardLayout {
            net_worth: patch.net_worth.unwrap_or(self.net_worth),
            income: patch.income.unwrap_or(self.income),
            expenses: patch.expenses.unwrap_or(self.expenses),
            transactions: patch.transactions.unwrap_or(self.transactions),
            category_chart: patch.category_chart.unwrap_or(self.category_chart),
            ai_assistant: patch.ai_assistant.unwrap_or(self.ai_assistant),
        }
    }
}

impl DashboardLayoutPatch {
    pub fn with(mut self, widget: Widget, visible: bool) -> Self {
        let slot = match widget {
            Widget::NetWorth => &mut self.net_worth,
            Widget::Income => &mut self.income,
            Widget::Expenses => &mut self.expenses,
            Widget::Transactions => &mut self.transactions,
            Widget::CategoryChart => &mut self.category_chart,
            Widget::AiAssistant => &mut self.ai_assistant,
        };
        *slot = Some(visible);
        self
    }
}

impl From<DashboardLayout> for DashboardLayoutPatch {
    fn from(layout: DashboardLayout) -> Self {
        DashboardLayoutPatch {
            net_worth: Some(layout.net_worth),
            income: Some(layout.income),
            expenses: Some(layout.expenses),
            transactions: Some(layout.transactions),
            category_chart: Some(layout.category_chart),
            ai_assistant: Some(layout.ai_assistant),
        }
    }
}
