use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use translit_engine::settings::{self, Settings, SettingsError};
use translit_engine::{transliterate, BuildError, LanguageDescriptor, TranslitConfig, TranslitError};

use super::load_config;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("{0:?} is not a number")]
    NotANumber(String),
    #[error("choice {choice} is out of range (1-{count})")]
    OutOfRange { choice: usize, count: usize },
    #[error("unknown language {0:?}")]
    UnknownLanguage(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Error reading {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("Error writing {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Translit(#[from] TranslitError),
}

#[derive(Debug, Default)]
pub struct RunOptions {
    pub language: Option<String>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub settings: Option<PathBuf>,
}

/// Numbered menu lines, one per configured language.
pub fn render_menu(config: &TranslitConfig) -> String {
    let mut menu = String::new();
    for (i, language) in config.languages().iter().enumerate() {
        menu.push_str(&format!("{}. {}\n", i + 1, language));
    }
    menu
}

/// Interpret a menu answer as a 1-based language choice.
pub fn select_language<'a>(
    config: &'a TranslitConfig,
    answer: &str,
) -> Result<&'a LanguageDescriptor, SelectionError> {
    let answer = answer.trim();
    let choice: usize = answer
        .parse()
        .map_err(|_| SelectionError::NotANumber(answer.to_string()))?;
    config
        .language_by_index(choice)
        .ok_or(SelectionError::OutOfRange {
            choice,
            count: config.languages().len(),
        })
}

pub fn language_by_id<'a>(
    config: &'a TranslitConfig,
    id: &str,
) -> Result<&'a LanguageDescriptor, SelectionError> {
    config
        .language(id)
        .ok_or_else(|| SelectionError::UnknownLanguage(id.to_string()))
}

/// Settings from `path`, or the embedded defaults.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, RunError> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|source| RunError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(settings::parse_settings_toml(&content)?)
        }
        None => Ok(Settings::defaults()?),
    }
}

/// Transliterate `input` into `output`, creating the output's parent
/// directory. Returns the number of characters written.
pub fn run_file(
    config: &TranslitConfig,
    language: &LanguageDescriptor,
    input: &Path,
    output: &Path,
) -> Result<usize, RunError> {
    let source = fs::read_to_string(input).map_err(|source| RunError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let result = transliterate(config, &source, language)?;

    let write_err = |source: io::Error| RunError::Write {
        path: output.to_path_buf(),
        source,
    };
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(output, &result).map_err(write_err)?;
    Ok(result.chars().count())
}

fn prompt(config: &TranslitConfig) -> io::Result<String> {
    print!("{}Choose a language: ", render_menu(config));
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer)
}

pub fn run_cmd(opts: RunOptions) {
    let s = die!(load_settings(opts.settings.as_deref()), "Error: {}");
    let data_dir = opts.data_dir.or(s.data.dir);
    let config = die!(load_config(data_dir.as_deref()), "Error loading tables: {}");

    let language = match opts.language.as_deref() {
        Some(id) => die!(language_by_id(&config, id), "Error: {}"),
        None => {
            let answer = die!(prompt(&config), "Error reading selection: {}");
            die!(select_language(&config, &answer), "Invalid selection: {}")
        }
    };

    let input = opts.input.unwrap_or(s.io.input);
    let output = opts.output.unwrap_or(s.io.output);
    let written = die!(run_file(&config, language, &input, &output), "{}");
    println!(
        "{} -> {} ({}, {written} chars)",
        input.display(),
        output.display(),
        language.id
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TranslitConfig {
        TranslitConfig::builtin().unwrap()
    }

    #[test]
    fn menu_is_numbered_from_one() {
        let menu = render_menu(&config());
        let first = menu.lines().next().unwrap();
        assert!(first.starts_with("1. "), "{first}");
        assert_eq!(menu.lines().count(), config().languages().len());
    }

    #[test]
    fn select_by_number() {
        let cfg = config();
        assert_eq!(select_language(&cfg, "1\n").unwrap().id, "russian");
        assert_eq!(select_language(&cfg, "  5 ").unwrap().id, "serbian");
    }

    #[test]
    fn select_rejects_non_integer() {
        let cfg = config();
        assert_eq!(
            select_language(&cfg, "serbian").unwrap_err(),
            SelectionError::NotANumber("serbian".to_string())
        );
        assert!(matches!(
            select_language(&cfg, "-1"),
            Err(SelectionError::NotANumber(_))
        ));
    }

    #[test]
    fn select_rejects_out_of_range() {
        let cfg = config();
        let count = cfg.languages().len();
        assert_eq!(
            select_language(&cfg, "0").unwrap_err(),
            SelectionError::OutOfRange { choice: 0, count }
        );
        assert!(matches!(
            select_language(&cfg, &(count + 1).to_string()),
            Err(SelectionError::OutOfRange { .. })
        ));
    }

    #[test]
    fn unknown_language_id() {
        assert_eq!(
            language_by_id(&config(), "klingon").unwrap_err(),
            SelectionError::UnknownLanguage("klingon".to_string())
        );
    }

    #[test]
    fn run_file_writes_output_and_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("out").join("output.txt");
        fs::write(&input, "Љубав\n").unwrap();

        let cfg = config();
        let serbian = language_by_id(&cfg, "serbian").unwrap();
        let written = run_file(&cfg, serbian, &input, &output).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "Ljubav\n");
        assert_eq!(written, 7);
    }

    #[test]
    fn missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("output.txt");
        let cfg = config();
        let russian = language_by_id(&cfg, "russian").unwrap();
        let err = run_file(&cfg, russian, &dir.path().join("nope.txt"), &output).unwrap_err();
        assert!(matches!(err, RunError::Read { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn settings_default_and_from_file() {
        let s = load_settings(None).unwrap();
        assert!(s.io.input.ends_with("input.txt"));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[io]\ninput = \"in.txt\"\noutput = \"out.txt\"\n").unwrap();
        let s = load_settings(Some(&path)).unwrap();
        assert_eq!(s.io.output, PathBuf::from("out.txt"));

        fs::write(&path, "[io]\ninput = \"x\"\noutput = \"x\"\n").unwrap();
        assert!(matches!(
            load_settings(Some(&path)),
            Err(RunError::Settings(_))
        ));
    }
}
