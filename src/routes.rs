//! Static route table: path → view mapping with nested routes.
//!
//! The table is immutable after startup. Resolution returns either the
//! matched descriptor chain (ancestors first), a redirect target for legacy
//! alias entries, or nothing. The `requires_auth` flag on an entry covers
//! the whole subtree beneath it.

/// Opaque handle naming the view a route renders.
///
/// Rendering is owned by the embedding application; the routing core only
/// carries the handle through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewId(pub &'static str);

#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub view: Option<ViewId>,
    pub requires_auth: bool,
    /// Redirect target for alias entries; such entries carry no view.
    pub redirect: Option<&'static str>,
    pub children: Vec<Route>,
}

impl Route {
    /// A route rendering a view.
    pub fn view(path: &'static str, name: &'static str, view: &'static str) -> Self {
        Self {
            path,
            name: Some(name),
            view: Some(ViewId(view)),
            requires_auth: false,
            redirect: None,
            children: Vec::new(),
        }
    }

    /// An unconditional redirect entry (legacy alias).
    pub fn redirect(path: &'static str, to: &'static str) -> Self {
        Self {
            path,
            name: None,
            view: None,
            requires_auth: false,
            redirect: Some(to),
            children: Vec::new(),
        }
    }

    /// Require authentication for this route and everything beneath it.
    pub fn protected(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    pub fn with_children(mut self, children: Vec<Route>) -> Self {
        self.children = children;
        self
    }
}

/// Outcome of looking up a path in the table.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    /// Alias entry: the caller should navigate to the target instead.
    Redirect(&'static str),
    /// Matched entry, as the descriptor chain from root ancestor to leaf.
    Match(Vec<&'a Route>),
    NotFound,
}

/// True if any descriptor in the matched chain requires authentication.
///
/// The flag is inherited: a protected ancestor protects every descendant.
pub fn requires_auth(chain: &[&Route]) -> bool {
    chain.iter().any(|r| r.requires_auth)
}

pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Look up a path, matching on exact path equality anywhere in the tree.
    ///
    /// Child paths are absolute, so a nested entry matches its own full
    /// path while still contributing its ancestors to the chain.
    pub fn resolve(&self, path: &str) -> Resolution<'_> {
        for route in &self.routes {
            if let Some(resolution) = Self::find(route, path) {
                return resolution;
            }
        }
        Resolution::NotFound
    }

    fn find<'a>(route: &'a Route, path: &str) -> Option<Resolution<'a>> {
        if route.path == path {
            return Some(match route.redirect {
                Some(to) => Resolution::Redirect(to),
                None => Resolution::Match(vec![route]),
            });
        }
        for child in &route.children {
            match Self::find(child, path) {
                Some(Resolution::Match(mut chain)) => {
                    chain.insert(0, route);
                    return Some(Resolution::Match(chain));
                }
                Some(other) => return Some(other),
                None => {}
            }
        }
        None
    }

    /// The route table of the messaging dashboard application.
    ///
    /// Public entry pages at the top level; everything under `/dashboard`
    /// requires a valid session. The redirect entries keep pre-rename URLs
    /// working.
    pub fn dashboard() -> Self {
        Self::new(vec![
            Route::view("/", "Login", "login"),
            Route::view("/signup", "Signup", "basic_signup"),
            Route::view("/terms-and-privacy", "TermsAndPrivacy", "terms_and_privacy"),
            Route::view("/terms-of-service", "TermsOfService", "terms_of_service"),
            Route::view("/privacy-policy", "PrivacyPolicy", "privacy_policy"),
            Route::view("/dashboard", "Dashboard", "dashboard")
                .protected()
                .with_children(vec![
                    Route::view("/agent", "AIagent", "ai_agent"),
                    Route::view("/analytics/cost", "CostAnalytics", "cost_analytics"),
                    Route::view("/analytics/conversations", "DataAnalytics", "analytics"),
                    Route::view("/broadcast/templates", "Templates", "broadcast_templates"),
                    Route::view("/broadcast/messages", "BroadcastMessages", "broadcast_messages"),
                    Route::view("/broadcast/scheduled", "ScheduledBroadcasts", "broadcast_scheduled"),
                    Route::view("/contacts/list", "ContactsList", "contacts_list"),
                    Route::view("/contacts/groups", "ContactsGroups", "contacts_groups"),
                    Route::view("/integration/woocommerce", "WooCommerceIntegration", "integration"),
                    Route::view("/chatbot", "Chatbot", "chatbot"),
                    Route::view("/profile", "Profile", "profile"),
                    Route::view("/settings", "Settings", "profile_settings"),
                    // Pre-rename URLs
                    Route::redirect("/broadcast/broadcast1", "/broadcast/templates"),
                    Route::redirect("/broadcast/broadcast2", "/broadcast/messages"),
                    Route::redirect("/broadcast/broadcast3", "/broadcast/scheduled"),
                    Route::redirect("/contacts/contacts1", "/contacts/list"),
                    Route::redirect("/contacts/contacts2", "/contacts/groups"),
                    Route::redirect("/integration/integration1", "/integration/woocommerce"),
                    Route::redirect("/chatbot/chatbotview", "/chatbot"),
                ]),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_top_level_route() {
        let table = RouteTable::dashboard();
        match table.resolve("/signup") {
            Resolution::Match(chain) => {
                assert_eq!(chain.len(), 1);
                assert_eq!(chain[0].name, Some("Signup"));
                assert!(!requires_auth(&chain));
            }
            other => panic!("expected match, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_nested_route_includes_ancestors() {
        let table = RouteTable::dashboard();
        match table.resolve("/profile") {
            Resolution::Match(chain) => {
                assert_eq!(chain.len(), 2);
                assert_eq!(chain[0].path, "/dashboard");
                assert_eq!(chain[1].path, "/profile");
                // Protection comes from the /dashboard ancestor
                assert!(!chain[1].requires_auth);
                assert!(requires_auth(&chain));
            }
            other => panic!("expected match, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_legacy_alias() {
        let table = RouteTable::dashboard();
        assert_eq!(
            table.resolve("/chatbot/chatbotview"),
            Resolution::Redirect("/chatbot")
        );
    }

    #[test]
    fn test_resolve_unknown_path() {
        let table = RouteTable::dashboard();
        assert_eq!(table.resolve("/no-such-page"), Resolution::NotFound);
    }

    #[test]
    fn test_public_pages_do_not_require_auth() {
        let table = RouteTable::dashboard();
        for path in ["/", "/signup", "/terms-and-privacy", "/terms-of-service", "/privacy-policy"] {
            match table.resolve(path) {
                Resolution::Match(chain) => assert!(!requires_auth(&chain), "{} should be public", path),
                other => panic!("expected match for {}, got {:?}", path, other),
            }
        }
    }

    #[test]
    fn test_all_dashboard_children_require_auth() {
        let table = RouteTable::dashboard();
        for path in [
            "/dashboard",
            "/agent",
            "/analytics/cost",
            "/analytics/conversations",
            "/broadcast/templates",
            "/broadcast/messages",
            "/broadcast/scheduled",
            "/contacts/list",
            "/contacts/groups",
            "/integration/woocommerce",
            "/chatbot",
            "/profile",
            "/settings",
        ] {
            match table.resolve(path) {
                Resolution::Match(chain) => {
                    assert!(requires_auth(&chain), "{} should be protected", path)
                }
                other => panic!("expected match for {}, got {:?}", path, other),
            }
        }
    }
}
