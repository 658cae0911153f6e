use std::path::PathBuf;

use tracing::{debug, trace};

fn locate_env_file(file_name: &str) -> Option<PathBuf> {
    let in_current_dir = PathBuf::from(file_name);
    let in_workspace_root = PathBuf::from("./../../").join(file_name);

    if in_current_dir.exists() {
        Some(in_current_dir)
    } else if in_workspace_root.exists() {
        Some(in_workspace_root)
    } else {
        trace!("No {file_name} found in current directory or workspace root");
        None
    }
}

fn load_env_file(file_name: &str) {
    match locate_env_file(file_name) {
        Some(path) => match dotenv::from_filename(&path) {
            Ok(_) => debug!("Loaded environment variables from: {}", path.display()),
            Err(e) => debug!("Failed to load {}: {e}", path.display()),
        },
        None => trace!("Skipping optional environment file: {file_name}"),
    }
}

pub fn load_optional_env_files() {
    load_env_file(".env");
    load_env_file(".env.secrets");
}

pub fn configure_env() -> Result<(), anyhow::Error> {
    load_optional_env_files();
    Ok(())
}
