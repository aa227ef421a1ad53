//! Flat-snapshot → menu-tree construction and route mapping.
//!
//! The builder is pure and synchronous: callers fetch the complete menu
//! snapshot first, then build without further queries. Construction is
//! arena-style — one pass to index records and build a parent→children
//! adjacency map keyed by `menu_id`, one sort per sibling group on the
//! records' own `(menu_order, menu_id)` attributes, then a guarded
//! traversal from the roots.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use adminhub_entity::menu::{Menu, MenuNode, MenuTree, RouteItem, RouteMeta};

/// Build a menu tree from a flat snapshot.
///
/// A record is a root when its `parent_id` is absent, or when the
/// declared parent does not resolve in the snapshot (orphan promotion —
/// `parent_id` carries no referential-integrity guarantee). Promoted
/// orphans are counted on the result so callers can surface the
/// data-integrity problem instead of hiding it.
///
/// The output is deterministic: given the same input, the tree is
/// identical across calls. Sibling groups are sorted by
/// `(menu_order, menu_id)` ascending.
pub fn build_tree(menus: &[Menu]) -> MenuTree {
    let known: HashSet<i32> = menus.iter().map(|m| m.menu_id).collect();

    let mut children_of: HashMap<i32, Vec<&Menu>> = HashMap::new();
    let mut roots: Vec<&Menu> = Vec::new();
    let mut orphans = 0usize;

    for menu in menus {
        match menu.parent_id {
            Some(parent_id) if known.contains(&parent_id) => {
                children_of.entry(parent_id).or_default().push(menu);
            }
            Some(_) => {
                orphans += 1;
                roots.push(menu);
            }
            None => roots.push(menu),
        }
    }

    roots.sort_by_key(|m| (m.menu_order, m.menu_id));
    for group in children_of.values_mut() {
        group.sort_by_key(|m| (m.menu_order, m.menu_id));
    }

    let mut path = HashSet::new();
    let roots = roots
        .into_iter()
        .map(|menu| build_node(menu, &children_of, &mut path))
        .collect();

    MenuTree { roots, orphans }
}

/// Attach a record's children recursively.
///
/// `path` holds the `menu_id`s on the current ancestor chain: a child
/// already on the chain would close a cycle, so it is skipped and the
/// entry node becomes a leaf instead of looping.
fn build_node<'a>(
    menu: &'a Menu,
    children_of: &HashMap<i32, Vec<&'a Menu>>,
    path: &mut HashSet<i32>,
) -> MenuNode {
    path.insert(menu.menu_id);

    let mut children = Vec::new();
    if let Some(group) = children_of.get(&menu.menu_id) {
        for child in group {
            if !path.contains(&child.menu_id) {
                children.push(build_node(child, children_of, path));
            }
        }
    }

    path.remove(&menu.menu_id);

    MenuNode {
        menu: menu.clone(),
        children,
    }
}

/// Map a menu tree node to the frontend route shape.
///
/// `children` is omitted — not an empty list — when a node has no
/// children, matching the frontend route-config contract.
pub fn route_from_node(node: MenuNode) -> RouteItem {
    let menu = node.menu;
    let children: Vec<RouteItem> = node.children.into_iter().map(route_from_node).collect();

    RouteItem {
        path: menu.path,
        component: menu.component,
        redirect: menu.redirect,
        name: menu.name,
        meta: RouteMeta {
            title: menu.title,
            icon: menu.icon,
            always_show: Some(menu.always_show),
            no_cache: Some(menu.no_cache),
            affix: Some(menu.affix),
            hidden: Some(menu.hidden),
            no_tags_view: None,
            can_to: None,
            permission: parse_permissions(menu.permission.as_deref()),
            active_menu: None,
        },
        children: if children.is_empty() {
            None
        } else {
            Some(children)
        },
    }
}

/// Decode the stored permission field.
///
/// The column holds either a JSON array of tags or a plain
/// comma-separated list. Malformed data on one menu must not break the
/// whole tree: a parse failure yields no permissions for that node only.
pub(crate) fn parse_permissions(raw: Option<&str>) -> Option<Vec<String>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    let tags = if raw.starts_with('[') {
        match serde_json::from_str::<Vec<String>>(raw) {
            Ok(tags) => tags,
            Err(e) => {
                warn!(error = %e, "Unparseable permission field, treating as empty");
                return None;
            }
        }
    } else {
        raw.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(String::from)
            .collect()
    };

    if tags.is_empty() { None } else { Some(tags) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn menu(menu_id: i32, parent_id: Option<i32>, menu_order: i32) -> Menu {
        Menu {
            id: Uuid::new_v4(),
            menu_id,
            parent_id,
            path: format!("/m{menu_id}"),
            component: Some(format!("views/M{menu_id}")),
            redirect: None,
            name: format!("Menu{menu_id}"),
            title: Some(format!("Menu {menu_id}")),
            icon: None,
            always_show: false,
            no_cache: false,
            affix: false,
            hidden: false,
            external_link: None,
            permission: None,
            menu_order,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn collect_ids(nodes: &[MenuNode], out: &mut Vec<i32>) {
        for node in nodes {
            out.push(node.menu.menu_id);
            collect_ids(&node.children, out);
        }
    }

    #[test]
    fn test_empty_input() {
        let tree = build_tree(&[]);
        assert!(tree.roots.is_empty());
        assert_eq!(tree.orphans, 0);
    }

    #[test]
    fn test_every_record_appears_exactly_once() {
        let menus = vec![
            menu(1000, None, 0),
            menu(1001, Some(1000), 1),
            menu(1002, Some(1000), 0),
            menu(1003, Some(1001), 0),
            menu(1004, None, 1),
        ];
        let tree = build_tree(&menus);

        let mut seen = Vec::new();
        collect_ids(&tree.roots, &mut seen);
        seen.sort();
        assert_eq!(seen, vec![1000, 1001, 1002, 1003, 1004]);
        assert_eq!(tree.orphans, 0);
    }

    #[test]
    fn test_siblings_sorted_by_order_then_menu_id() {
        let menus = vec![
            menu(1000, None, 0),
            // Same order: menu_id breaks the tie.
            menu(1003, Some(1000), 5),
            menu(1001, Some(1000), 5),
            menu(1002, Some(1000), 1),
        ];
        let tree = build_tree(&menus);

        let children: Vec<i32> = tree.roots[0]
            .children
            .iter()
            .map(|n| n.menu.menu_id)
            .collect();
        assert_eq!(children, vec![1002, 1001, 1003]);
    }

    #[test]
    fn test_orphan_promoted_to_root_and_counted() {
        let menus = vec![
            menu(1000, None, 0),
            // Parent 9999 does not exist in the snapshot.
            menu(1001, Some(9999), 0),
        ];
        let tree = build_tree(&menus);

        let root_ids: Vec<i32> = tree.roots.iter().map(|n| n.menu.menu_id).collect();
        assert_eq!(root_ids, vec![1000, 1001]);
        assert_eq!(tree.orphans, 1);
    }

    #[test]
    fn test_cycle_terminates_without_duplicates() {
        // A ↔ B: both parents resolve, so neither is a root; the pair is
        // unreachable and must simply be absent, never looped over.
        let menus = vec![
            menu(1000, None, 0),
            menu(1001, Some(1002), 0),
            menu(1002, Some(1001), 0),
        ];
        let tree = build_tree(&menus);

        let mut seen = Vec::new();
        collect_ids(&tree.roots, &mut seen);
        assert_eq!(seen, vec![1000]);
    }

    #[test]
    fn test_self_parent_terminates() {
        let menus = vec![menu(1000, None, 0), menu(1001, Some(1001), 0)];
        let tree = build_tree(&menus);

        let mut seen = Vec::new();
        collect_ids(&tree.roots, &mut seen);
        assert_eq!(seen, vec![1000]);
    }

    #[test]
    fn test_deterministic_across_calls() {
        let menus = vec![
            menu(1000, None, 2),
            menu(1001, Some(1000), 1),
            menu(1002, Some(1000), 0),
            menu(1003, Some(9999), 0),
        ];
        let first = build_tree(&menus);
        let second = build_tree(&menus);
        assert_eq!(first, second);

        let first_json = serde_json::to_string(&first).unwrap();
        let second_json = serde_json::to_string(&second).unwrap();
        assert_eq!(first_json, second_json);
    }

    #[test]
    fn test_parse_permissions_json_array() {
        assert_eq!(
            parse_permissions(Some(r#"["user:read", "user:write"]"#)),
            Some(vec!["user:read".to_string(), "user:write".to_string()])
        );
    }

    #[test]
    fn test_parse_permissions_comma_list() {
        assert_eq!(
            parse_permissions(Some("user:read, user:write")),
            Some(vec!["user:read".to_string(), "user:write".to_string()])
        );
    }

    #[test]
    fn test_parse_permissions_malformed_yields_none() {
        assert_eq!(parse_permissions(Some(r#"["unterminated"#)), None);
        assert_eq!(parse_permissions(Some("")), None);
        assert_eq!(parse_permissions(None), None);
    }

    #[test]
    fn test_leaf_route_has_no_children_key() {
        let tree = build_tree(&[menu(1000, None, 0)]);
        let route = route_from_node(tree.roots.into_iter().next().unwrap());

        assert!(route.children.is_none());
        let json = serde_json::to_value(&route).unwrap();
        assert!(json.get("children").is_none());
    }

    #[test]
    fn test_nested_route_carries_children_and_permissions() {
        let mut parent = menu(1000, None, 0);
        parent.permission = None;
        let mut child = menu(1001, Some(1000), 0);
        child.permission = Some(r#"["menu:view"]"#.to_string());

        let tree = build_tree(&[parent, child]);
        let route = route_from_node(tree.roots.into_iter().next().unwrap());

        let children = route.children.expect("children present");
        assert_eq!(children.len(), 1);
        assert_eq!(
            children[0].meta.permission,
            Some(vec!["menu:view".to_string()])
        );
        assert_eq!(route.meta.permission, None);
    }
}
