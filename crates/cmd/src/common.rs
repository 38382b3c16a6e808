use dashboard::{ApiConfig, Dashboard};
use records::json_file::DEFAULT_DATA_FILE;
use records::{ClockIds, JsonFileStore};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

/// Resolve the data file: explicit flag, then BILLBOOK_DATA, then the
/// default file in the current directory.
pub fn data_file_path(cli_path: Option<PathBuf>) -> PathBuf {
    cli_path
        .or_else(|| env::var_os("BILLBOOK_DATA").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}

pub fn open_dashboard(data: Option<PathBuf>) -> Dashboard {
    let path = data_file_path(data);
    log::debug!("using data file {}", path.display());
    Dashboard::new(
        Arc::new(JsonFileStore::new(path)),
        Arc::new(ClockIds),
        ApiConfig::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let path = data_file_path(Some(PathBuf::from("/tmp/x.json")));
        assert_eq!(path, PathBuf::from("/tmp/x.json"));
    }

    #[test]
    fn defaults_to_data_file_name() {
        // Only meaningful when the env var is unset in the test environment.
        if env::var_os("BILLBOOK_DATA").is_none() {
            assert_eq!(data_file_path(None), PathBuf::from(DEFAULT_DATA_FILE));
        }
    }
}
