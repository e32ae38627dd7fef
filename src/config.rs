use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    // Ghana Post GPS endpoint the relay forwards to
    #[serde(default = "default_upstream_url")]
    pub upstream_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<Config>()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            upstream_url: default_upstream_url(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_upstream_url() -> String {
    "https://ghanapostgps.sperixlabs.org/get-location".to_string()
}
