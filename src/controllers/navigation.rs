#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Scan,
    Rewards,
    Community,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Home, Tab::Scan, Tab::Rewards, Tab::Community, Tab::Profile];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Scan => "Scan",
            Tab::Rewards => "Rewards",
            Tab::Community => "Community",
            Tab::Profile => "Profile",
        }
    }

    pub fn index(&self) -> usize {
        Tab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn from_index(i: usize) -> Option<Tab> {
        Tab::ALL.get(i).copied()
    }

    pub fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn previous(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Tab(Tab),
    /// Pushed on top of the tabs, no tab bar
    Game,
}

/// Current screen plus the routes `back` returns to.
#[derive(Debug)]
pub struct Navigator {
    current: Route,
    history: Vec<Route>,
}

impl Navigator {
    pub fn new(tab: Tab) -> Self {
        Self {
            current: Route::Tab(tab),
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Tab highlighted in the tab bar, the nearest one under any pushed screens.
    pub fn active_tab(&self) -> Tab {
        std::iter::once(&self.current)
            .chain(self.history.iter().rev())
            .find_map(|route| match route {
                Route::Tab(tab) => Some(*tab),
                Route::Game => None,
            })
            .unwrap_or(Tab::Home)
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.history.clear();
        self.current = Route::Tab(tab);
    }

    pub fn push(&mut self, route: Route) {
        self.history.push(self.current);
        self.current = route;
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Returns false when there is nothing to go back to.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(route) => {
                self.current = route;
                true
            }
            None => false,
        }
    }
}
