macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod data_ops;
pub mod run_ops;

use std::path::Path;

use translit_engine::{BuildError, DataSet, TranslitConfig};

/// Builtin tables, or the row files under `data_dir` when one is given.
pub fn load_config(data_dir: Option<&Path>) -> Result<TranslitConfig, BuildError> {
    match data_dir {
        Some(dir) => TranslitConfig::from_data_set(&DataSet::from_dir(dir)?),
        None => TranslitConfig::builtin(),
    }
}
