use super::*;
use gallery::error::LoadError;
use gallery::work::{WorkId, WorkItem};

fn works(n: i64) -> Vec<WorkItem> {
    (1..=n)
        .map(|id| WorkItem {
            id: WorkId::Num(id),
            title: format!("Work {id}"),
            description: String::new(),
            category: Category::Design,
            image: format!("{id}.png"),
            images: None,
            tags: Vec::new(),
            link: None,
        })
        .collect()
}

#[test]
fn filter_options_start_with_all() {
    let options = filter_options();
    assert_eq!(options[0], (Filter::All, "All".to_owned()));
    assert_eq!(options.len(), Category::KNOWN.len() + 1);
    assert_eq!(options[1].0.as_str(), "design");
}

#[test]
fn grid_is_empty_while_loading() {
    assert!(grid_cards(&GalleryState::default()).is_empty());
}

#[test]
fn grid_cards_cover_visible_slice() {
    let mut state = GalleryState::default();
    state.apply_load(Ok(works(15)));
    let cards = grid_cards(&state);
    assert_eq!(cards.len(), 12);
    assert!(cards.iter().all(|(epoch, _, _)| *epoch == state.grid_epoch));
}

#[test]
fn load_more_batch_restarts_stagger_positions() {
    let mut state = GalleryState::default();
    state.apply_load(Ok(works(15)));
    state.load_more();
    let cards = grid_cards(&state);
    assert_eq!(cards.len(), 15);
    assert_eq!(cards[11].1, 11);
    assert_eq!(cards[12].1, 0);
    assert_eq!(cards[14].2.id, WorkId::Num(15));
}

#[test]
fn fallback_grid_renders_builtin_cards() {
    let mut state = GalleryState::default();
    state.apply_load(Err(LoadError::Transport("offline".to_owned())));
    assert_eq!(grid_cards(&state).len(), 9);
}

#[test]
fn numeric_and_text_ids_get_distinct_grid_keys() {
    let mut remote = works(2);
    remote[1].id = WorkId::Text("1".to_owned());
    let mut state = GalleryState::default();
    state.apply_load(Ok(remote));

    let keys: Vec<_> = grid_cards(&state).iter().map(grid_key).collect();
    assert_eq!(keys.len(), 2);
    assert_ne!(keys[0], keys[1]);
    assert_eq!(keys[1], (state.grid_epoch, WorkId::Text("1".to_owned())));
}
