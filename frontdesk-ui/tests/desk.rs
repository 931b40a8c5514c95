use frontdesk_lib::model::{Desk, Hotel};
use frontdesk_ui::desk::{DeskRegistry, CURRENT_DESK_KEY};
use frontdesk_ui::settings::{MemoryBackend, SettingsProvider};

fn hotel(desks: &[(&str, &str)]) -> Hotel {
    Hotel {
        id: "grand".to_string(),
        name: "Grand Hotel".to_string(),
        desks: desks
            .iter()
            .map(|(id, name)| Desk::new(*id, *name))
            .collect(),
    }
}

fn registry() -> DeskRegistry {
    DeskRegistry::new(SettingsProvider::new(MemoryBackend::new()))
}

#[tokio::test]
async fn test_first_desk_is_the_implicit_default() {
    let registry = registry();

    registry
        .apply_hotel(Some(&hotel(&[("a", "Desk A"), ("b", "Desk B")])))
        .await
        .unwrap();

    assert_eq!(registry.selected_desk().unwrap().id, "a");
}

#[tokio::test]
async fn test_persisted_selection_wins_when_still_present() {
    let registry = registry();
    registry.select_desk(&Desk::new("b", "Desk B")).await.unwrap();

    registry
        .apply_hotel(Some(&hotel(&[("a", "Desk A"), ("b", "Desk B renamed")])))
        .await
        .unwrap();

    // resolved from the live desk list, not the cached copy
    let selected = registry.selected_desk().unwrap();
    assert_eq!(selected.id, "b");
    assert_eq!(selected.name, "Desk B renamed");
}

#[tokio::test]
async fn test_stale_persisted_selection_falls_back_to_first_desk() {
    let registry = registry();
    registry.select_desk(&Desk::new("c", "Desk C")).await.unwrap();

    registry
        .apply_hotel(Some(&hotel(&[("a", "Desk A"), ("b", "Desk B")])))
        .await
        .unwrap();

    assert_eq!(registry.selected_desk().unwrap().id, "a");
}

#[tokio::test]
async fn test_no_desks_yields_empty_selection() {
    let registry = registry();
    registry.select_desk(&Desk::new("a", "Desk A")).await.unwrap();

    registry.apply_hotel(Some(&hotel(&[]))).await.unwrap();
    assert!(registry.selected_desk().is_none());

    registry.apply_hotel(None).await.unwrap();
    assert!(registry.selected_desk().is_none());
}

#[tokio::test]
async fn test_select_desk_emits_immediately_and_persists() {
    let registry = registry();
    let mut updates = registry.subscribe();

    registry.select_desk(&Desk::new("b", "Desk B")).await.unwrap();

    assert!(updates.has_changed().unwrap());
    assert_eq!(updates.borrow_and_update().as_ref().unwrap().id, "b");
    assert_eq!(registry.persisted_desk().await.unwrap().unwrap().id, "b");
}

#[tokio::test]
async fn test_rename_updates_the_persisted_name_in_place() {
    let registry = registry();
    registry.select_desk(&Desk::new("b", "Desk B")).await.unwrap();

    registry.rename_desk("b", "Front lobby").await.unwrap();

    let persisted = registry.persisted_desk().await.unwrap().unwrap();
    assert_eq!(persisted.id, "b");
    assert_eq!(persisted.name, "Front lobby");
}

#[tokio::test]
async fn test_rename_of_another_desk_is_ignored() {
    let registry = registry();
    registry.select_desk(&Desk::new("b", "Desk B")).await.unwrap();

    registry.rename_desk("a", "Elsewhere").await.unwrap();

    assert_eq!(
        registry.persisted_desk().await.unwrap().unwrap().name,
        "Desk B"
    );
}

#[tokio::test]
async fn test_clear_drops_the_register() {
    let registry = registry();
    registry.select_desk(&Desk::new("a", "Desk A")).await.unwrap();

    registry.clear().await.unwrap();

    assert!(registry.selected_desk().is_none());
    assert!(registry.persisted_desk().await.unwrap().is_none());
}

#[tokio::test]
async fn test_selection_is_stored_as_a_json_object() {
    let provider = SettingsProvider::new(MemoryBackend::new());
    let registry = DeskRegistry::new(provider.clone());

    registry.select_desk(&Desk::new("a", "Desk A")).await.unwrap();

    let raw: Option<serde_json::Value> = provider.get(CURRENT_DESK_KEY).await.unwrap();
    let raw = raw.unwrap();
    assert_eq!(raw["id"], "a");
    assert_eq!(raw["name"], "Desk A");
}
