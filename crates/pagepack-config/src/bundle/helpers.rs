use std::path::PathBuf;

// Helper defaults
pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

pub(crate) fn default_output_filename() -> String {
    "[name].js".to_string()
}

pub(crate) fn default_asset_name() -> String {
    "[name]_[hash:8].[ext]".to_string()
}

pub(crate) fn default_css_processor() -> String {
    "cssnano".to_string()
}

pub(crate) fn default_css_asset_pattern() -> String {
    r"\.css$".to_string()
}

pub(crate) fn default_browserslist() -> Vec<String> {
    vec![
        "last 2 version".to_string(),
        "> 1%".to_string(),
        "ios 7".to_string(),
    ]
}

pub(crate) fn default_rem_unit() -> u32 {
    75
}

pub(crate) fn default_rem_precision() -> u32 {
    8
}
