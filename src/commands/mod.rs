//! CLI command implementations.
//!
//! Each subcommand parses its raw arguments, calls the matching pure function
//! from [`crate::sequences`] or [`crate::objects`], and returns an [`Outcome`]
//! for rendering. `init` is the only command with a side effect.

pub mod args;
pub mod init;
pub mod output;

use std::path::Path;

use rand::{rngs::StdRng, SeedableRng};

use crate::cli::Commands;
use crate::config::RunSettings;
use crate::errors::Result;
use crate::{objects, sequences};

pub use init::init_config;
pub use output::{render, Outcome};

pub fn execute(command: &Commands, settings: &RunSettings, cwd: &Path) -> Result<Outcome> {
    log::debug!("Executing {:?}", command);

    let outcome = match command {
        Commands::FilterOutOdds { numbers } => {
            Outcome::Numbers(sequences::filter_out_odds(numbers))
        }
        Commands::FindMin { numbers } => Outcome::Number(sequences::find_min(numbers)),
        Commands::DoubleAndReturnArgs { array, numbers } => {
            let base = args::parse_numbers("array", array)?;
            Outcome::Numbers(sequences::double_and_return_args(&base, numbers))
        }
        Commands::RemoveRandom { array } => {
            let items = args::parse_array("array", array)?;
            Outcome::Values(remove_random(&items, settings.seed))
        }
        Commands::Extend { first, second } => {
            let a = args::parse_array("first array", first)?;
            let b = args::parse_array("second array", second)?;
            Outcome::Values(sequences::extend(&a, &b))
        }
        Commands::MergeObjects { first, second } => {
            let (a, b) = parse_object_pair(first, second)?;
            Outcome::Object(objects::merge_objects(&a, &b))
        }
        Commands::Combine { first, second } => {
            let (a, b) = parse_object_pair(first, second)?;
            Outcome::Object(objects::combine(&a, &b))
        }
        Commands::AddKeyVal { object, key, value } => {
            let obj = args::parse_object("object", object)?;
            Outcome::Object(objects::add_key_val(&obj, key, args::parse_value(value)))
        }
        Commands::Update { object, key, value } => {
            let obj = args::parse_object("object", object)?;
            Outcome::Object(objects::update(&obj, key, args::parse_value(value)))
        }
        Commands::RemoveKey { object, key } => {
            let obj = args::parse_object("object", object)?;
            Outcome::Object(objects::remove_key(&obj, key))
        }
        Commands::Init { force } => {
            let path = init_config(cwd, *force)?;
            Outcome::Message(format!("Created {}", path.display()))
        }
    };

    Ok(outcome)
}

fn parse_object_pair(first: &str, second: &str) -> Result<(objects::Object, objects::Object)> {
    Ok((
        args::parse_object("first object", first)?,
        args::parse_object("second object", second)?,
    ))
}

fn remove_random<T: Clone>(items: &[T], seed: Option<u64>) -> Vec<T> {
    match seed {
        Some(seed) => sequences::remove_random_with(items, &mut StdRng::seed_from_u64(seed)),
        None => sequences::remove_random(items),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use serde_json::json;

    fn run(command: Commands) -> Result<Outcome> {
        execute(&command, &RunSettings::default(), Path::new("."))
    }

    #[test]
    fn test_execute_double_and_return_args() {
        let outcome = run(Commands::DoubleAndReturnArgs {
            array: "[1, 2, 3]".into(),
            numbers: vec![4.0, 4.0],
        })
        .unwrap();
        assert_eq!(outcome, Outcome::Numbers(vec![1.0, 2.0, 3.0, 8.0, 8.0]));
    }

    #[test]
    fn test_execute_update_parses_value() {
        let outcome = run(Commands::Update {
            object: r#"{"name": "Carol", "age": 29}"#.into(),
            key: "age".into(),
            value: "null".into(),
        })
        .unwrap();
        let expected = crate::testkit::object(json!({"name": "Carol", "age": null}));
        assert_eq!(outcome, Outcome::Object(expected));
    }

    #[test]
    fn test_execute_extend_rejects_object() {
        let err = run(Commands::Extend {
            first: "[1]".into(),
            second: "{}".into(),
        })
        .unwrap_err();
        assert!(matches!(err, Error::UnexpectedShape { .. }));
        assert!(err.to_string().contains("second array"));
    }

    #[test]
    fn test_execute_remove_random_seeded() {
        let settings = RunSettings {
            seed: Some(11),
            ..Default::default()
        };
        let command = Commands::RemoveRandom {
            array: "[1, 2, 3, 4, 5]".into(),
        };
        let first = execute(&command, &settings, Path::new(".")).unwrap();
        let second = execute(&command, &settings, Path::new(".")).unwrap();
        assert_eq!(first, second);
        assert!(matches!(first, Outcome::Values(ref v) if v.len() == 4));
    }
}
