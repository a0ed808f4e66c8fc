//! Which menu items, images and specials each view shows, and in what order.

use crate::config::file_url;
use crate::models::gallery::GalleryImage;
use crate::models::menu_item::MenuItem;
use crate::models::special::Special;

/// Category button selected on the home grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CategorySelection {
    /// Highlights: every tagged item.
    #[default]
    All,
    Category(i64),
}

/// Items for the home grid: tagged items for "all", otherwise the chosen
/// category; featured items first, original order kept within each group.
pub fn home_grid(items: &[MenuItem], selection: CategorySelection) -> Vec<MenuItem> {
    let mut shown: Vec<MenuItem> = items
        .iter()
        .filter(|item| match selection {
            CategorySelection::All => item.tag().is_some(),
            CategorySelection::Category(id) => item.category_id == Some(id),
        })
        .cloned()
        .collect();
    shown.sort_by_key(|item| !item.is_featured);
    shown
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FeaturedFilter {
    #[default]
    All,
    Featured,
    NotFeatured,
}

/// KPI pill on top of the admin table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kpi {
    TotalItems,
    Categories,
    Featured,
    Voice,
}

/// Filters of the admin menu table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminFilter {
    pub search: String,
    pub featured: FeaturedFilter,
    pub category: Option<i64>,
    pub voice_only: bool,
}

impl AdminFilter {
    pub fn matches(&self, item: &MenuItem) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty()
            || item.name.to_lowercase().contains(&needle)
            || item
                .category_label()
                .is_some_and(|c| c.to_lowercase().contains(&needle));
        let matches_featured = match self.featured {
            FeaturedFilter::All => true,
            FeaturedFilter::Featured => item.is_featured,
            FeaturedFilter::NotFeatured => !item.is_featured,
        };
        let matches_category = self.category.map_or(true, |id| item.category_id == Some(id));
        let matches_voice = !self.voice_only || item.has_voice();
        matches_search && matches_featured && matches_category && matches_voice
    }

    pub fn apply(&self, items: &[MenuItem]) -> Vec<MenuItem> {
        items.iter().filter(|i| self.matches(i)).cloned().collect()
    }

    /// Clicking a KPI pill narrows (or resets) the table.
    pub fn select_kpi(&mut self, kpi: Kpi) {
        match kpi {
            Kpi::TotalItems => {
                self.featured = FeaturedFilter::All;
                self.voice_only = false;
            }
            Kpi::Categories => {}
            Kpi::Featured => self.featured = FeaturedFilter::Featured,
            Kpi::Voice => self.voice_only = true,
        }
    }

    pub fn active_kpi(&self) -> Option<Kpi> {
        if self.voice_only {
            Some(Kpi::Voice)
        } else if self.featured == FeaturedFilter::Featured {
            Some(Kpi::Featured)
        } else {
            None
        }
    }
}

pub fn items_in_category(items: &[MenuItem], category_id: i64) -> usize {
    items
        .iter()
        .filter(|item| item.category_id == Some(category_id))
        .count()
}

/// Specials worth showing on the home page.
pub fn active_specials(specials: &[Special]) -> Vec<Special> {
    specials.iter().filter(|s| s.is_active).cloned().collect()
}

/// A tile in the home gallery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryEntry {
    pub key: String,
    pub url: String,
    pub caption: String,
}

const STOCK_GALLERY: [(&str, &str); 6] = [
    ("https://images.unsplash.com/photo-1509440159596-0249088772ff?w=800&h=600&fit=crop", "Fresh Bread"),
    ("https://images.unsplash.com/photo-1558961363-fa8fdf82db35?w=800&h=600&fit=crop", "Pastries"),
    ("https://images.unsplash.com/photo-1486427944299-d1955d23e34d?w=800&h=600&fit=crop", "Cakes"),
    ("https://images.unsplash.com/photo-1517433670267-08bbd4be890f?w=800&h=600&fit=crop", "Cupcakes"),
    ("https://images.unsplash.com/photo-1464349095431-e9a21285b5f3?w=800&h=600&fit=crop", "Birthday Cake"),
    ("https://images.unsplash.com/photo-1495147466023-ac5c588e2e94?w=800&h=600&fit=crop", "Bakery"),
];

/// Gallery tiles: photos of menu items (at most `limit`), else the uploaded
/// gallery, else stock photos.
pub fn gallery_entries(
    menu: &[MenuItem],
    uploaded: &[GalleryImage],
    limit: usize,
) -> Vec<GalleryEntry> {
    let from_menu: Vec<GalleryEntry> = menu
        .iter()
        .flat_map(|item| {
            if !item.images.is_empty() {
                item.images
                    .iter()
                    .map(|img| GalleryEntry {
                        key: format!("img-{}", img.id),
                        url: img.resolved_url(),
                        caption: item.name.clone(),
                    })
                    .collect::<Vec<_>>()
            } else {
                file_url(item.image_url.as_deref())
                    .map(|url| GalleryEntry {
                        key: format!("item-{}", item.id),
                        url,
                        caption: item.name.clone(),
                    })
                    .into_iter()
                    .collect()
            }
        })
        .take(limit)
        .collect();
    if !from_menu.is_empty() {
        return from_menu;
    }

    if !uploaded.is_empty() {
        return uploaded
            .iter()
            .take(limit)
            .map(|img| GalleryEntry {
                key: format!("gallery-{}", img.id),
                url: img.resolved_url(),
                caption: img.caption().to_string(),
            })
            .collect();
    }

    STOCK_GALLERY
        .iter()
        .enumerate()
        .map(|(i, (url, caption))| GalleryEntry {
            key: format!("stock-{}", i),
            url: url.to_string(),
            caption: caption.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::menu_item::MenuImage;

    fn item(id: i64, category: i64, tag: Option<&str>, featured: bool) -> MenuItem {
        MenuItem {
            id,
            name: format!("Item {}", id),
            category_id: Some(category),
            category_name: Some(if category == 1 { "Roti".into() } else { "Kue Kering".into() }),
            price: 10_000 * id,
            tag: tag.map(Into::into),
            is_featured: featured,
            ..Default::default()
        }
    }

    fn ids(items: &[MenuItem]) -> Vec<i64> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_home_grid_all_shows_tagged_featured_first() {
        let items = vec![
            item(1, 1, Some("Baru"), false),
            item(2, 1, None, true),
            item(3, 2, Some("Best Seller"), true),
            item(4, 2, Some(""), true),
            item(5, 2, Some("Promo"), false),
        ];
        assert_eq!(ids(&home_grid(&items, CategorySelection::All)), vec![3, 1, 5]);
    }

    #[test]
    fn test_home_grid_category_is_stable() {
        let items = vec![
            item(1, 2, None, false),
            item(2, 2, None, true),
            item(3, 1, None, true),
            item(4, 2, None, false),
            item(5, 2, None, true),
        ];
        assert_eq!(
            ids(&home_grid(&items, CategorySelection::Category(2))),
            vec![2, 5, 1, 4]
        );
    }

    #[test]
    fn test_admin_filter_search_matches_name_or_category() {
        let items = vec![item(1, 1, None, false), item(2, 2, None, false)];
        let filter = AdminFilter {
            search: "kering".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&items)), vec![2]);

        let filter = AdminFilter {
            search: "ITEM 1".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&items)), vec![1]);
    }

    #[test]
    fn test_admin_filter_combines_conditions() {
        let mut voiced = item(3, 2, None, true);
        voiced.voice_description = Some("Kue kering renyah".into());
        let items = vec![item(1, 1, None, true), item(2, 2, None, false), voiced];

        let mut filter = AdminFilter {
            category: Some(2),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&items)), vec![2, 3]);

        filter.featured = FeaturedFilter::NotFeatured;
        assert_eq!(ids(&filter.apply(&items)), vec![2]);

        filter.featured = FeaturedFilter::All;
        filter.select_kpi(Kpi::Voice);
        assert_eq!(ids(&filter.apply(&items)), vec![3]);
        assert_eq!(filter.active_kpi(), Some(Kpi::Voice));

        filter.select_kpi(Kpi::TotalItems);
        assert_eq!(filter.active_kpi(), None);
        assert_eq!(ids(&filter.apply(&items)), vec![2, 3]);
    }

    #[test]
    fn test_items_in_category() {
        let items = vec![item(1, 1, None, false), item(2, 2, None, false), item(3, 2, None, false)];
        assert_eq!(items_in_category(&items, 2), 2);
        assert_eq!(items_in_category(&items, 9), 0);
    }

    #[test]
    fn test_gallery_prefers_menu_images_capped() {
        let mut items = Vec::new();
        for id in 0..5 {
            let mut it = item(id, 1, None, false);
            it.images = (0..3)
                .map(|n| MenuImage {
                    id: id * 10 + n,
                    image_url: format!("https://img/{}-{}.jpg", id, n),
                    is_main: n == 0,
                    sort_order: None,
                })
                .collect();
            items.push(it);
        }
        let entries = gallery_entries(&items, &[], 12);
        assert_eq!(entries.len(), 12);
        assert_eq!(entries[0].caption, "Item 0");
        assert_eq!(entries[0].url, "https://img/0-0.jpg");
    }

    #[test]
    fn test_gallery_falls_back_to_uploads_then_stock() {
        let uploaded = vec![GalleryImage {
            id: 1,
            image_url: "https://img/toko.jpg".into(),
            caption: Some("Toko kami".into()),
        }];
        let plain = vec![item(1, 1, None, false)];

        let entries = gallery_entries(&plain, &uploaded, 12);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].caption, "Toko kami");

        let entries = gallery_entries(&plain, &[], 12);
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0].caption, "Fresh Bread");
    }

    #[test]
    fn test_gallery_uses_legacy_image_url() {
        let mut legacy = item(8, 1, None, false);
        legacy.image_url = Some("https://img/legacy.jpg".into());
        let entries = gallery_entries(&[legacy], &[], 12);
        assert_eq!(entries[0].key, "item-8");
    }

    #[test]
    fn test_active_specials() {
        let specials = vec![
            Special {
                id: 1,
                title: "Lebaran".into(),
                is_active: true,
                ..Default::default()
            },
            Special {
                id: 2,
                title: "Natal".into(),
                is_active: false,
                ..Default::default()
            },
        ];
        assert_eq!(active_specials(&specials).len(), 1);
    }
}
