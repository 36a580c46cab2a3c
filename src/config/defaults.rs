use std::path::PathBuf;

pub fn default_target() -> PathBuf {
    PathBuf::from(".")
}

pub fn default_remote() -> String {
    "origin".to_string()
}

pub fn default_branches() -> Vec<String> {
    vec!["master".to_string()]
}
