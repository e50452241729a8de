//! Options Store Lifecycle Integration Tests

use anyhow::Result;
use styleconf::{ConfigError, FormatOptions, OptionsStore, QuoteStyle};

#[test]
fn test_get_before_load_fails() {
    let store = OptionsStore::new();

    let err = store.get().unwrap_err();
    assert!(matches!(err, ConfigError::Uninitialized));
    assert!(!store.is_loaded());
}

#[test]
fn test_load_then_get_returns_the_literal_field_for_field() -> Result<()> {
    let mut options = FormatOptions::default();
    options.indent_width = 4;
    options.quote_style = QuoteStyle::Double;
    options.enabled_plugins = vec!["import-sort-plugin".to_string()];

    let store = OptionsStore::new();
    store.load_with(options.clone())?;

    assert_eq!(*store.get()?, options);
    assert!(store.is_loaded());

    Ok(())
}

#[test]
fn test_load_uses_the_builtin_literal() -> Result<()> {
    let store = OptionsStore::new();
    store.load()?;

    assert_eq!(*store.get()?, FormatOptions::default());

    Ok(())
}

#[test]
fn test_double_load_is_idempotent() -> Result<()> {
    let store = OptionsStore::new();

    let first = store.load_with(FormatOptions::default())?.clone();
    let second = store.load_with(FormatOptions::default())?.clone();

    assert_eq!(first, second);
    assert_eq!(*store.get()?, first);

    Ok(())
}

#[test]
fn test_first_load_wins() -> Result<()> {
    let mut narrow = FormatOptions::default();
    narrow.max_line_width = 80;
    let mut wide = FormatOptions::default();
    wide.max_line_width = 200;

    let store = OptionsStore::new();
    store.load_with(narrow.clone())?;
    store.load_with(wide)?;

    assert_eq!(store.get()?.max_line_width, 80);
    assert_eq!(*store.get()?, narrow);

    Ok(())
}

#[test]
fn test_failed_load_leaves_store_unloaded() -> Result<()> {
    let mut invalid = FormatOptions::default();
    invalid.indent_width = 0;

    let store = OptionsStore::new();
    assert!(store.load_with(invalid).is_err());
    assert!(!store.is_loaded());
    assert!(matches!(store.get().unwrap_err(), ConfigError::Uninitialized));

    // A later valid load still transitions the store
    store.load()?;
    assert!(store.is_loaded());

    Ok(())
}

#[test]
fn test_sequence_order_is_preserved() -> Result<()> {
    let mut options = FormatOptions::default();
    options.import_group_patterns = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    options.enabled_plugins = vec![
        "utility-class-sort-plugin".to_string(),
        "import-sort-plugin".to_string(),
    ];

    let store = OptionsStore::new();
    store.load_with(options)?;

    let loaded = store.get()?;
    assert_eq!(loaded.import_group_patterns, vec!["a", "b", "c"]);
    assert_eq!(
        loaded.enabled_plugins,
        vec!["utility-class-sort-plugin", "import-sort-plugin"]
    );

    Ok(())
}

#[test]
fn test_concurrent_loads_converge_on_one_value() -> Result<()> {
    let store = OptionsStore::new();

    std::thread::scope(|scope| {
        for width in 1..=8 {
            let store = &store;
            scope.spawn(move || {
                let mut options = FormatOptions::default();
                options.indent_width = width;
                // Every racer loads successfully and observes the winner
                let loaded = store.load_with(options).unwrap();
                assert!(loaded.indent_width >= 1 && loaded.indent_width <= 8);
            });
        }
    });

    // All racers validated, exactly one literal won
    let winner = store.get()?.indent_width;
    assert!((1..=8).contains(&winner));

    Ok(())
}
