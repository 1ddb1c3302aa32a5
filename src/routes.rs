//! Route table
//!
//! Maps the five views of the application to their paths. Routes take no
//! parameters and have no guards or redirects.

use std::fmt;

/// A routed view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Stats,
    History,
    ExportData,
    Settings,
}

/// A route table entry
#[derive(Debug, Clone, Copy)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub route: Route,
}

/// All routes, in navigation order
pub static ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: "/",
        name: "Home",
        route: Route::Home,
    },
    RouteEntry {
        path: "/stats",
        name: "Stats",
        route: Route::Stats,
    },
    RouteEntry {
        path: "/history",
        name: "History",
        route: Route::History,
    },
    RouteEntry {
        path: "/export",
        name: "ExportData",
        route: Route::ExportData,
    },
    RouteEntry {
        path: "/settings",
        name: "Settings",
        route: Route::Settings,
    },
];

impl Route {
    fn entry(&self) -> &'static RouteEntry {
        // Every variant has exactly one entry
        match self {
            Self::Home => &ROUTES[0],
            Self::Stats => &ROUTES[1],
            Self::History => &ROUTES[2],
            Self::ExportData => &ROUTES[3],
            Self::Settings => &ROUTES[4],
        }
    }

    pub fn path(&self) -> &'static str {
        self.entry().path
    }

    pub fn name(&self) -> &'static str {
        self.entry().name
    }

    /// Exact-match lookup by path
    pub fn from_path(path: &str) -> Option<Self> {
        ROUTES.iter().find(|e| e.path == path).map(|e| e.route)
    }

    /// Exact-match lookup by route name
    pub fn from_name(name: &str) -> Option<Self> {
        ROUTES.iter().find(|e| e.name == name).map(|e| e.route)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.path())
    }
}
