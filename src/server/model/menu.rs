use std::collections::{HashMap, HashSet};

use crate::model::menu::{
    MenuDto, MenuItemDto, MenuWithItemsDto, SaveMenuDto, SaveMenuItemDto,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub active: bool,
}

impl Menu {
    pub fn into_dto(self) -> MenuDto {
        MenuDto {
            id: self.id,
            name: self.name,
            location: self.location,
            active: self.active,
        }
    }

    pub fn from_entity(entity: entity::menu::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            location: entity.location,
            active: entity.active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: i32,
    pub menu_id: i32,
    pub parent_id: Option<i32>,
    pub title: String,
    pub url: String,
    pub position: i32,
}

impl MenuItem {
    pub fn from_entity(entity: entity::menu_item::Model) -> Self {
        Self {
            id: entity.id,
            menu_id: entity.menu_id,
            parent_id: entity.parent_id,
            title: entity.title,
            url: entity.url,
            position: entity.position,
        }
    }

    /// Converts without children, as used by the admin item endpoints.
    pub fn into_dto(self) -> MenuItemDto {
        MenuItemDto {
            id: self.id,
            parent_id: self.parent_id,
            title: self.title,
            url: self.url,
            position: self.position,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    pub item: MenuItem,
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    pub fn into_dto(self) -> MenuItemDto {
        let mut dto = self.item.into_dto();
        dto.children = self.children.into_iter().map(MenuNode::into_dto).collect();
        dto
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuWithItems {
    pub menu: Menu,
    pub items: Vec<MenuNode>,
}

impl MenuWithItems {
    /// Arranges a flat item list into a tree ordered by `position`.
    ///
    /// Items whose parent does not belong to the menu are shown at the top level.
    pub fn build(menu: Menu, items: Vec<MenuItem>) -> Self {
        let ids: HashSet<i32> = items.iter().map(|item| item.id).collect();
        let mut by_parent: HashMap<Option<i32>, Vec<MenuItem>> = HashMap::new();

        for item in items {
            let parent = item.parent_id.filter(|id| ids.contains(id) && *id != item.id);
            by_parent.entry(parent).or_default().push(item);
        }
        for siblings in by_parent.values_mut() {
            siblings.sort_by_key(|item| (item.position, item.id));
        }

        let items = take_children(&mut by_parent, None);

        Self { menu, items }
    }

    pub fn into_dto(self) -> MenuWithItemsDto {
        MenuWithItemsDto {
            menu: self.menu.into_dto(),
            items: self.items.into_iter().map(MenuNode::into_dto).collect(),
        }
    }
}

fn take_children(
    by_parent: &mut HashMap<Option<i32>, Vec<MenuItem>>,
    parent: Option<i32>,
) -> Vec<MenuNode> {
    let siblings = by_parent.remove(&parent).unwrap_or_default();

    siblings
        .into_iter()
        .map(|item| {
            let children = take_children(by_parent, Some(item.id));
            MenuNode { item, children }
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct SaveMenuParams {
    pub name: String,
    pub location: String,
    pub active: bool,
}

impl SaveMenuParams {
    pub fn from_dto(dto: SaveMenuDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            location: dto.location.trim().to_lowercase(),
            active: dto.active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveMenuItemParams {
    pub parent_id: Option<i32>,
    pub title: String,
    pub url: String,
    pub position: i32,
}

impl SaveMenuItemParams {
    pub fn from_dto(dto: SaveMenuItemDto) -> Self {
        Self {
            parent_id: dto.parent_id,
            title: dto.title.trim().to_string(),
            url: dto.url.trim().to_string(),
            position: dto.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> Menu {
        Menu {
            id: 1,
            name: "Header".to_string(),
            location: "header".to_string(),
            active: true,
        }
    }

    fn item(id: i32, parent_id: Option<i32>, position: i32) -> MenuItem {
        MenuItem {
            id,
            menu_id: 1,
            parent_id,
            title: format!("Item {}", id),
            url: format!("/item/{}", id),
            position,
        }
    }

    #[test]
    fn nests_children_under_parents() {
        let tree = MenuWithItems::build(
            menu(),
            vec![item(1, None, 0), item(2, Some(1), 1), item(3, Some(1), 0)],
        );

        assert_eq!(tree.items.len(), 1);
        let children: Vec<i32> = tree.items[0].children.iter().map(|c| c.item.id).collect();
        assert_eq!(children, vec![3, 2]);
    }

    #[test]
    fn orders_top_level_by_position() {
        let tree = MenuWithItems::build(menu(), vec![item(1, None, 5), item(2, None, 1)]);

        let ids: Vec<i32> = tree.items.iter().map(|node| node.item.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn orphans_are_promoted_to_top_level() {
        let tree = MenuWithItems::build(menu(), vec![item(1, Some(99), 0)]);

        assert_eq!(tree.items.len(), 1);
        assert!(tree.items[0].children.is_empty());
    }
}
