//! Loading game configuration from TOML.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use maze_survival_core::GameConfig;

/// Reads a configuration file, or falls back to defaults when none is given.
///
/// Missing sections and keys keep their default values.
pub(crate) fn load(path: Option<&Path>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read game config at {}", path.display()))?;
    parse(&contents).with_context(|| format!("invalid game config at {}", path.display()))
}

fn parse(contents: &str) -> Result<GameConfig> {
    let config: GameConfig =
        toml::from_str(contents).context("failed to parse game config toml contents")?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_yields_defaults() {
        let config = load(None).expect("defaults load");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn sections_override_defaults() {
        let config = parse(
            r#"
seed = 99

[maze]
columns = 31

[enemy]
count = 4
"#,
        )
        .expect("valid toml");
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.maze.columns, 31);
        assert_eq!(config.maze.rows, 21);
        assert_eq!(config.enemy.count, 4);
    }

    #[test]
    fn invalid_values_are_reported() {
        let error = parse("[maze]\nrows = 8\n").expect_err("even rows are rejected");
        assert!(
            error.to_string().contains("rows"),
            "unexpected error message: {error}"
        );
    }

    #[test]
    fn unreadable_files_name_the_path() {
        let error = load(Some(Path::new("/definitely/not/here.toml")))
            .expect_err("missing file is an error");
        assert!(error.to_string().contains("/definitely/not/here.toml"));
    }
}
