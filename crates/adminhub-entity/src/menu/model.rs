//! Menu entity model.
//!
//! Menus are stored flat. `menu_id` is a business identifier allocated
//! from 1000 upward; `parent_id` is a logical self-reference to another
//! record's `menu_id` and is deliberately not enforced as a foreign key,
//! so a parent may be absent from any given snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single menu record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Menu {
    /// Primary key.
    pub id: Uuid,
    /// Business menu identifier, unique and monotonically allocated from 1000.
    pub menu_id: i32,
    /// Logical reference to the parent's `menu_id`.
    pub parent_id: Option<i32>,
    /// Frontend route path.
    pub path: String,
    /// Frontend component reference.
    pub component: Option<String>,
    /// Redirect path.
    pub redirect: Option<String>,
    /// Route name. Unique.
    pub name: String,
    /// Display title.
    pub title: Option<String>,
    /// Display icon.
    pub icon: Option<String>,
    /// Always show this entry even with a single child.
    pub always_show: bool,
    /// Disable frontend view caching for this route.
    pub no_cache: bool,
    /// Pin the route's tab.
    pub affix: bool,
    /// Visibility flag; hidden menus never appear in resolved route trees.
    pub hidden: bool,
    /// External link target, if the entry points outside the app.
    pub external_link: Option<String>,
    /// Permission tags, stored as a JSON array or comma-separated text.
    pub permission: Option<String>,
    /// Ordering key within a sibling group.
    pub menu_order: i32,
    /// When the menu was created.
    pub created_at: DateTime<Utc>,
    /// When the menu was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMenu {
    /// Business menu identifier.
    pub menu_id: i32,
    /// Parent `menu_id`, if any.
    pub parent_id: Option<i32>,
    /// Route path.
    pub path: String,
    /// Component reference.
    pub component: Option<String>,
    /// Redirect path.
    pub redirect: Option<String>,
    /// Route name.
    pub name: String,
    /// Display title.
    pub title: Option<String>,
    /// Display icon.
    pub icon: Option<String>,
    /// Always-show flag.
    #[serde(default)]
    pub always_show: bool,
    /// No-cache flag.
    #[serde(default)]
    pub no_cache: bool,
    /// Affix flag.
    #[serde(default)]
    pub affix: bool,
    /// Hidden flag.
    #[serde(default)]
    pub hidden: bool,
    /// External link.
    pub external_link: Option<String>,
    /// Permission tags.
    pub permission: Option<String>,
    /// Ordering key.
    #[serde(default)]
    pub menu_order: i32,
}

/// Typed patch for updating a menu.
///
/// Enumerates exactly the fields an update may touch; unknown input keys
/// are rejected at deserialization instead of silently applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuPatch {
    /// New parent `menu_id`. An explicit `null` detaches the menu to a root.
    #[serde(default, deserialize_with = "crate::serde_util::double_option")]
    pub parent_id: Option<Option<i32>>,
    /// New route path.
    pub path: Option<String>,
    /// New component reference.
    pub component: Option<String>,
    /// New redirect path.
    pub redirect: Option<String>,
    /// New route name.
    pub name: Option<String>,
    /// New display title.
    pub title: Option<String>,
    /// New display icon.
    pub icon: Option<String>,
    /// New always-show flag.
    pub always_show: Option<bool>,
    /// New no-cache flag.
    pub no_cache: Option<bool>,
    /// New affix flag.
    pub affix: Option<bool>,
    /// New hidden flag.
    pub hidden: Option<bool>,
    /// New external link.
    pub external_link: Option<String>,
    /// New permission tags.
    pub permission: Option<String>,
    /// New ordering key.
    pub menu_order: Option<i32>,
}

impl MenuPatch {
    /// Apply the patch to a menu record, field by field.
    pub fn apply(&self, menu: &mut Menu) {
        if let Some(parent_id) = self.parent_id {
            menu.parent_id = parent_id;
        }
        if let Some(path) = &self.path {
            menu.path = path.clone();
        }
        if let Some(component) = &self.component {
            menu.component = Some(component.clone());
        }
        if let Some(redirect) = &self.redirect {
            menu.redirect = Some(redirect.clone());
        }
        if let Some(name) = &self.name {
            menu.name = name.clone();
        }
        if let Some(title) = &self.title {
            menu.title = Some(title.clone());
        }
        if let Some(icon) = &self.icon {
            menu.icon = Some(icon.clone());
        }
        if let Some(always_show) = self.always_show {
            menu.always_show = always_show;
        }
        if let Some(no_cache) = self.no_cache {
            menu.no_cache = no_cache;
        }
        if let Some(affix) = self.affix {
            menu.affix = affix;
        }
        if let Some(hidden) = self.hidden {
            menu.hidden = hidden;
        }
        if let Some(external_link) = &self.external_link {
            menu.external_link = Some(external_link.clone());
        }
        if let Some(permission) = &self.permission {
            menu.permission = Some(permission.clone());
        }
        if let Some(menu_order) = self.menu_order {
            menu.menu_order = menu_order;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_menu() -> Menu {
        Menu {
            id: Uuid::new_v4(),
            menu_id: 1000,
            parent_id: None,
            path: "/dashboard".into(),
            component: Some("views/Dashboard".into()),
            redirect: None,
            name: "Dashboard".into(),
            title: Some("Dashboard".into()),
            icon: None,
            always_show: false,
            no_cache: false,
            affix: false,
            hidden: false,
            external_link: None,
            permission: None,
            menu_order: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_patch_reparents_to_root() {
        let mut menu = sample_menu();
        menu.parent_id = Some(1001);
        let patch = MenuPatch {
            parent_id: Some(None),
            ..Default::default()
        };
        patch.apply(&mut menu);
        assert_eq!(menu.parent_id, None);
    }

    #[test]
    fn test_patch_rejects_unknown_fields() {
        let raw = r#"{"path": "/x", "surprise": true}"#;
        assert!(serde_json::from_str::<MenuPatch>(raw).is_err());
    }

    #[test]
    fn test_patch_leaves_unset_fields() {
        let mut menu = sample_menu();
        let patch = MenuPatch {
            menu_order: Some(7),
            ..Default::default()
        };
        patch.apply(&mut menu);
        assert_eq!(menu.menu_order, 7);
        assert_eq!(menu.path, "/dashboard");
        assert_eq!(menu.name, "Dashboard");
    }
}
