use std::io::Write;
use tempfile::NamedTempFile;

/// YAML config written to a temp file that is removed once the handle drops.
pub(crate) fn config_file(yaml: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("passderive-")
        .suffix(".yml")
        .tempfile()
        .expect("Failed to create config file");

    file.write_all(yaml.as_bytes())
        .expect("Failed to write config file");

    file
}
