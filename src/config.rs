use serde::Deserialize;

/// Top-level configuration file.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct BupConfig {
    /// Defaults for `bup create`.
    #[serde(default)]
    pub create: CreateToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateToml {
    #[serde(default = "default_comment")]
    pub comment: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_date")]
    pub date: String,
    #[serde(default)]
    pub save_id: u32,
    #[serde(default)]
    pub block_size: u16,
}

impl Default for CreateToml {
    fn default() -> Self {
        Self {
            comment: default_comment(),
            language: default_language(),
            date: default_date(),
            save_id: 0,
            block_size: 0,
        }
    }
}

fn default_comment() -> String {
    "SGC".to_string()
}
fn default_language() -> String {
    "English".to_string()
}
fn default_date() -> String {
    "1994-11-24".to_string()
}
