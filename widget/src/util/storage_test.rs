use super::*;

// =============================================================
// WidgetStore::persist
// =============================================================

#[test]
fn persist_writes_both_keys() {
    let mut store = WidgetStore::new(MemoryStore::new());
    store.persist(&PersistedWidget {
        expanded: true,
        view: ActiveView::Conversation,
    });
    assert_eq!(store.backend().read(EXPANDED_KEY).as_deref(), Some("true"));
    assert_eq!(store.backend().read(VIEW_KEY).as_deref(), Some("conversation"));
    assert_eq!(store.backend().write_count(), 2);
}

#[test]
fn persist_overwrites_previous_values() {
    let mut store = WidgetStore::new(MemoryStore::new());
    store.persist(&PersistedWidget {
        expanded: true,
        view: ActiveView::Conversation,
    });
    store.persist(&PersistedWidget {
        expanded: false,
        view: ActiveView::Menu,
    });
    assert_eq!(store.backend().read(EXPANDED_KEY).as_deref(), Some("false"));
    assert_eq!(store.backend().read(VIEW_KEY).as_deref(), Some("menu"));
}

#[test]
fn rejected_write_degrades_to_memory_only() {
    let mut store = WidgetStore::new(MemoryStore::rejecting());
    store.persist(&PersistedWidget::default());
    assert!(store.is_degraded());
    let attempts = store.backend().write_count();

    store.persist(&PersistedWidget {
        expanded: true,
        view: ActiveView::Menu,
    });
    assert_eq!(store.backend().write_count(), attempts);
}

#[test]
fn failed_view_write_restores_previous_expanded_value() {
    let mut store = WidgetStore::new(
        MemoryStore::rejecting_key(VIEW_KEY)
            .with_entry(EXPANDED_KEY, "false")
            .with_entry(VIEW_KEY, "menu"),
    );
    store.persist(&PersistedWidget {
        expanded: true,
        view: ActiveView::Conversation,
    });

    assert!(store.is_degraded());
    assert_eq!(store.backend().read(EXPANDED_KEY).as_deref(), Some("false"));
    assert_eq!(store.backend().read(VIEW_KEY).as_deref(), Some("menu"));
    assert_eq!(store.load(), PersistedWidget::default());
}

#[test]
fn failed_view_write_removes_expanded_key_that_was_absent() {
    let mut store = WidgetStore::new(MemoryStore::rejecting_key(VIEW_KEY));
    store.persist(&PersistedWidget {
        expanded: true,
        view: ActiveView::Conversation,
    });

    assert!(store.is_degraded());
    assert_eq!(store.backend().read(EXPANDED_KEY), None);
    assert_eq!(store.backend().read(VIEW_KEY), None);
}

#[test]
fn failed_expanded_write_leaves_view_untouched() {
    let mut store = WidgetStore::new(MemoryStore::rejecting_key(EXPANDED_KEY).with_entry(VIEW_KEY, "menu"));
    store.persist(&PersistedWidget {
        expanded: true,
        view: ActiveView::Conversation,
    });

    assert!(store.is_degraded());
    assert_eq!(store.backend().read(VIEW_KEY).as_deref(), Some("menu"));
    assert_eq!(store.backend().write_count(), 1);
}

#[test]
fn memory_store_remove_drops_key() {
    let store = MemoryStore::new().with_entry(VIEW_KEY, "menu");
    assert_eq!(store.remove(VIEW_KEY), Ok(()));
    assert_eq!(store.remove(VIEW_KEY), Ok(()));
    assert_eq!(store.read(VIEW_KEY), None);
}

#[test]
fn browser_storage_without_csr_is_unavailable() {
    let mut store = WidgetStore::new(BrowserStorage);
    assert_eq!(BrowserStorage.write(EXPANDED_KEY, "true"), Err(StorageError::Unavailable));
    assert_eq!(BrowserStorage.remove(EXPANDED_KEY), Err(StorageError::Unavailable));
    store.persist(&PersistedWidget::default());
    assert!(store.is_degraded());
    assert_eq!(BrowserStorage.read(EXPANDED_KEY), None);
}

// =============================================================
// WidgetStore::load
// =============================================================

#[test]
fn load_defaults_when_empty() {
    let store = WidgetStore::new(MemoryStore::new());
    assert_eq!(store.load(), PersistedWidget::default());
    assert_eq!(
        store.load(),
        PersistedWidget {
            expanded: false,
            view: ActiveView::Menu
        }
    );
}

#[test]
fn load_reads_persisted_values() {
    let store = WidgetStore::new(
        MemoryStore::new()
            .with_entry(EXPANDED_KEY, "true")
            .with_entry(VIEW_KEY, "conversation"),
    );
    assert_eq!(
        store.load(),
        PersistedWidget {
            expanded: true,
            view: ActiveView::Conversation
        }
    );
}

#[test]
fn load_tolerates_garbage_per_key() {
    let store = WidgetStore::new(
        MemoryStore::new()
            .with_entry(EXPANDED_KEY, "yes please")
            .with_entry(VIEW_KEY, "conversation"),
    );
    assert_eq!(
        store.load(),
        PersistedWidget {
            expanded: false,
            view: ActiveView::Conversation
        }
    );

    let store = WidgetStore::new(
        MemoryStore::new()
            .with_entry(EXPANDED_KEY, "true")
            .with_entry(VIEW_KEY, "{\"v\":2}"),
    );
    assert_eq!(
        store.load(),
        PersistedWidget {
            expanded: true,
            view: ActiveView::Menu
        }
    );
}

#[test]
fn seeded_entries_are_not_counted_as_writes() {
    let store = MemoryStore::new().with_entry(VIEW_KEY, "menu");
    assert_eq!(store.write_count(), 0);
}
