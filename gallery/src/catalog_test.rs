use super::*;

fn work(id: i64, category: &str) -> WorkItem {
    WorkItem {
        id: WorkId::Num(id),
        title: format!("Work {id}"),
        description: String::new(),
        category: Category::from(category),
        image: format!("images/{id}.png"),
        images: None,
        tags: Vec::new(),
        link: None,
    }
}

// =============================================================
// Built-in works
// =============================================================

#[test]
fn builtin_catalog_is_non_empty_with_unique_ids() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.len(), 9);
    assert_eq!(catalog.source(), CatalogSource::Builtin);
    let mut ids: Vec<String> = catalog.items().iter().map(|w| w.id.to_string()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 9);
}

#[test]
fn builtin_images_list_starts_with_primary_image() {
    for work in builtin_works() {
        if let Some(images) = &work.images {
            assert!(images.len() > 1, "{} has a one-element images list", work.title);
            assert_eq!(images[0], work.image);
        }
    }
}

#[test]
fn default_catalog_is_builtin() {
    assert_eq!(Catalog::default(), Catalog::builtin());
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_uses_remote_list_when_usable() {
    let (catalog, reason) = Catalog::resolve(Ok(vec![work(1, "design"), work(2, "reels")]));
    assert!(reason.is_none());
    assert_eq!(catalog.source(), CatalogSource::Remote);
    assert_eq!(catalog.len(), 2);
}

#[test]
fn resolve_falls_back_on_server_error() {
    let (catalog, reason) = Catalog::resolve(Err(LoadError::Status(500)));
    assert_eq!(reason, Some(LoadError::Status(500)));
    assert_eq!(catalog, Catalog::builtin());
}

#[test]
fn resolve_falls_back_on_transport_error() {
    let (catalog, reason) = Catalog::resolve(Err(LoadError::Transport("offline".to_owned())));
    assert!(matches!(reason, Some(LoadError::Transport(_))));
    assert_eq!(catalog.source(), CatalogSource::Builtin);
}

#[test]
fn resolve_falls_back_on_empty_list() {
    let (catalog, reason) = Catalog::resolve(Ok(Vec::new()));
    assert_eq!(reason, Some(LoadError::Empty));
    assert_eq!(catalog.source(), CatalogSource::Builtin);
}

#[test]
fn remote_duplicate_ids_keep_first_occurrence() {
    let mut dup = work(1, "reels");
    dup.title = "Duplicate".to_owned();
    let catalog = Catalog::from_remote(vec![work(1, "design"), work(2, "design"), dup]).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get(&WorkId::Num(1)).unwrap().title, "Work 1");
}

// =============================================================
// Queries
// =============================================================

#[test]
fn categories_in_first_seen_order() {
    let catalog = Catalog::from_remote(vec![work(1, "reels"), work(2, "design"), work(3, "reels")]).unwrap();
    assert_eq!(catalog.categories(), vec![Category::Reels, Category::Design]);
}

#[test]
fn get_unknown_id_is_none() {
    assert!(Catalog::builtin().get(&WorkId::Num(999)).is_none());
}
