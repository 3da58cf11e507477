//! # Navigation
//!
//! Two views, no state. The active one gets rendered inside the shell.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Order,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Home, Route::Order];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Order => "/order",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Order => "Order",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Route::ALL.into_iter().find(|route| route.path() == path)
    }
}
