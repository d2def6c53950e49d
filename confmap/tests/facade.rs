//! Property facade, migration check, and settings manager behavior.

use std::sync::Arc;

use confmap::{
    BeanProperty, BooleanProperty, ConfigurationData, MigrationService, PlainMigrationService,
    Property, PropertyResource, SettingsManager, StringListProperty, StringProperty, TreeResource,
    record, tree,
};

record! {
    pub struct Titles {
        pub header: String = String::from("-- header --"),
        pub footer: String = String::from("-- footer --"),
    }
}

fn title_property() -> BeanProperty<Titles> {
    Property::new("titles".parse().unwrap(), Titles::default())
}

#[test]
fn property_reads_value_or_falls_back_to_default() {
    confmap_testhelpers::setup();
    let resource = TreeResource::new(tree!({
        "name": "app",
        "titles": { "header": "hello" },
    }));

    let name = StringProperty::new("name".parse().unwrap(), String::from("unnamed"));
    let motd = StringProperty::new("motd".parse().unwrap(), String::from("welcome"));
    let titles = title_property();

    assert_eq!(name.get_value(&resource).unwrap(), "app");
    assert_eq!(motd.get_value(&resource).unwrap(), "welcome");
    let titles = titles.get_value(&resource).unwrap();
    assert_eq!(titles.header, "hello");
    assert_eq!(titles.footer, "-- footer --");
}

#[test]
fn property_presence_follows_the_tree() {
    confmap_testhelpers::setup();
    let resource = TreeResource::new(tree!({ "debug": true }));

    let debug = BooleanProperty::new("debug".parse().unwrap(), false);
    let verbose = BooleanProperty::new("verbose".parse().unwrap(), false);

    assert!(debug.is_present(&resource));
    assert!(!verbose.is_present(&resource));
}

#[test]
fn list_property_rejects_mixed_lists_wholesale() {
    confmap_testhelpers::setup();
    let resource = TreeResource::new(tree!({ "aliases": ["a", 2, "c"] }));

    let aliases = StringListProperty::new(
        "aliases".parse().unwrap(),
        vec![String::from("default")],
    );

    assert_eq!(
        aliases.get_value(&resource).unwrap(),
        vec![String::from("default")]
    );
}

#[test]
fn plain_migration_accepts_complete_resources() {
    confmap_testhelpers::setup();
    let resource = TreeResource::new(tree!({
        "name": "app",
        "titles": { "header": "h", "footer": "f" },
    }));
    let data = ConfigurationData::new(vec![
        Arc::new(StringProperty::new(
            "name".parse().unwrap(),
            String::from("unnamed"),
        )),
        Arc::new(title_property()),
    ]);

    assert!(!PlainMigrationService.needs_migration(&resource, &data));
}

#[test]
fn plain_migration_flags_missing_paths() {
    confmap_testhelpers::setup();
    let resource = TreeResource::new(tree!({ "name": "app" }));
    let data = ConfigurationData::new(vec![
        Arc::new(StringProperty::new(
            "name".parse().unwrap(),
            String::from("unnamed"),
        )),
        Arc::new(title_property()),
    ]);

    assert!(PlainMigrationService.needs_migration(&resource, &data));
}

#[test]
fn settings_manager_persists_defaults_for_missing_paths() {
    confmap_testhelpers::setup();
    let resource = TreeResource::new(tree!({ "name": "app" }));
    let name = StringProperty::new("name".parse().unwrap(), String::from("unnamed"));
    let titles = title_property();
    let data = ConfigurationData::new(vec![Arc::new(name.clone()), Arc::new(titles.clone())]);

    let settings = SettingsManager::new(resource, data, PlainMigrationService).unwrap();

    // Migration rewrote the tree: known values kept, missing ones filled in.
    assert_eq!(settings.get(&name).unwrap(), "app");
    assert!(titles.is_present(settings.resource()));
    assert_eq!(
        settings.resource().get_string(&"titles.header".parse().unwrap()),
        Some("-- header --")
    );
}

#[test]
fn reload_restores_paths_dropped_behind_the_managers_back() {
    confmap_testhelpers::setup();
    let resource = TreeResource::new(tree!({
        "name": "app",
        "titles": { "header": "h", "footer": "f" },
    }));
    let name = StringProperty::new("name".parse().unwrap(), String::from("unnamed"));
    let titles = title_property();
    let data = ConfigurationData::new(vec![Arc::new(name.clone()), Arc::new(titles.clone())]);

    let mut settings = SettingsManager::new(resource, data, PlainMigrationService).unwrap();
    // Clobber the tree underneath the manager, then reload.
    settings
        .resource_mut()
        .write_leaf_entries(&[confmap::LeafEntry::new(
            "name".parse().unwrap(),
            confmap::Node::text("app"),
        )]);
    assert!(!titles.is_present(settings.resource()));

    settings.reload().unwrap();

    assert!(titles.is_present(settings.resource()));
    assert_eq!(settings.get(&titles).unwrap().footer, "-- footer --");
}

#[test]
fn settings_manager_set_then_save_round_trips() {
    confmap_testhelpers::setup();
    let resource = TreeResource::new(tree!({
        "name": "app",
        "titles": { "header": "h", "footer": "f" },
    }));
    let name = StringProperty::new("name".parse().unwrap(), String::from("unnamed"));
    let titles = title_property();
    let data = ConfigurationData::new(vec![Arc::new(name.clone()), Arc::new(titles.clone())]);

    let mut settings = SettingsManager::new(resource, data, PlainMigrationService).unwrap();
    settings.set(&name, String::from("renamed"));
    settings.save().unwrap();

    assert_eq!(settings.get(&name).unwrap(), "renamed");
    let titles = settings.get(&titles).unwrap();
    assert_eq!(titles.header, "h");
}
