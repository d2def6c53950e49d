//! Export-then-import round trips through an in-memory resource.

use confmap::{
    BeanMapper, LeafPropertiesGenerator, Path, PropertyResource, TreeResource, mapped_enum,
    record,
};
use indexmap::IndexMap;

mapped_enum! {
    pub enum Executor {
        Console,
        User,
    }
}

record! {
    pub struct Execution {
        pub executor: Executor = Executor::Console,
        pub optional: bool = false,
        pub privileges: Vec<String> = Vec::new(),
    }
}

record! {
    pub struct Command {
        pub command: String = String::new(),
        pub arguments: Vec<String> = Vec::new(),
        pub execution: Execution = Execution::default(),
    }
}

record! {
    pub struct CommandConfig {
        pub commands: IndexMap<String, Command> = IndexMap::new(),
        pub duration: i64 = 0,
    }
}

fn sample_config() -> CommandConfig {
    let mut commands = IndexMap::new();
    commands.insert(
        String::from("save"),
        Command {
            command: String::from("save"),
            arguments: vec![String::from("f"), String::from("z")],
            execution: Execution {
                executor: Executor::Console,
                optional: false,
                privileges: vec![String::from("action.save")],
            },
        },
    );
    commands.insert(
        String::from("open"),
        Command {
            command: String::from("open"),
            arguments: Vec::new(),
            execution: Execution {
                executor: Executor::User,
                optional: true,
                privileges: vec![String::from("page.view"), String::from("action.open")],
            },
        },
    );
    CommandConfig {
        commands,
        duration: 13,
    }
}

fn round_trip(config: &CommandConfig, path: &Path) -> eyre::Result<CommandConfig> {
    let entries = LeafPropertiesGenerator::new().generate(config, path)?;
    let mut resource = TreeResource::empty();
    resource.write_leaf_entries(&entries);
    BeanMapper::new()
        .map(resource.read_tree(), path)?
        .ok_or_else(|| eyre::eyre!("re-imported tree did not match the record shape"))
}

#[test]
fn export_then_import_reproduces_the_value() -> eyre::Result<()> {
    confmap_testhelpers::setup();
    let config = sample_config();
    let path: Path = "commandconfig".parse()?;

    assert_eq!(round_trip(&config, &path)?, config);
    Ok(())
}

#[test]
fn round_trip_works_at_the_resource_root() -> eyre::Result<()> {
    confmap_testhelpers::setup();
    let config = sample_config();

    assert_eq!(round_trip(&config, &Path::root())?, config);
    Ok(())
}

#[test]
fn round_trip_preserves_defaults_and_empty_collections() -> eyre::Result<()> {
    confmap_testhelpers::setup();
    let config = CommandConfig::default();
    let path: Path = "cfg".parse()?;

    assert_eq!(round_trip(&config, &path)?, config);
    Ok(())
}
