//! Frontend route-config shapes.
//!
//! These structs serialize into exactly the route configuration the
//! frontend consumes verbatim. `children` must be omitted — not an empty
//! list — when a node has no children.

use serde::{Deserialize, Serialize};

/// Route metadata consumed by the frontend router.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMeta {
    /// Menu title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Menu icon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Always show this entry even with a single child.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always_show: Option<bool>,
    /// Disable frontend view caching.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_cache: Option<bool>,
    /// Pin the route's tab.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affix: Option<bool>,
    /// Hide the entry from navigation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    /// Exclude the route from the tags view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_tags_view: Option<bool>,
    /// Whether the route can be navigated to directly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_to: Option<bool>,
    /// Permission tags granted by this route.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<Vec<String>>,
    /// Path of the menu to highlight when this route is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_menu: Option<String>,
}

/// A single frontend route entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteItem {
    /// Route path.
    pub path: String,
    /// Component reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Redirect path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    /// Route name.
    pub name: String,
    /// Route metadata.
    pub meta: RouteMeta,
    /// Child routes. Omitted entirely when empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RouteItem>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_omitted_when_none() {
        let item = RouteItem {
            path: "/dashboard".into(),
            component: None,
            redirect: None,
            name: "Dashboard".into(),
            meta: RouteMeta::default(),
            children: None,
        };
        let json = serde_json::to_value(&item).expect("serialize");
        assert!(json.get("children").is_none());
        assert!(json.get("component").is_none());
    }

    #[test]
    fn test_children_present_when_non_empty() {
        let child = RouteItem {
            path: "analysis".into(),
            component: Some("views/Analysis".into()),
            redirect: None,
            name: "Analysis".into(),
            meta: RouteMeta::default(),
            children: None,
        };
        let item = RouteItem {
            path: "/dashboard".into(),
            component: None,
            redirect: None,
            name: "Dashboard".into(),
            meta: RouteMeta::default(),
            children: Some(vec![child]),
        };
        let json = serde_json::to_value(&item).expect("serialize");
        assert_eq!(json["children"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_meta_uses_camel_case_keys() {
        let meta = RouteMeta {
            always_show: Some(true),
            no_cache: Some(false),
            active_menu: Some("/dashboard".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&meta).expect("serialize");
        assert!(json.get("alwaysShow").is_some());
        assert!(json.get("noCache").is_some());
        assert!(json.get("activeMenu").is_some());
        assert!(json.get("always_show").is_none());
    }
}
