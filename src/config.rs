use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Root directory for the static asset fallback (e.g. `./public/images/x.png`).
    pub asset_dir: String,
    /// Origin clients use to reach this server; product image URLs are built on it.
    pub public_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings from any key lookup; unset keys take the defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse()
            .context("PORT must be a valid number")?;
        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            asset_dir: lookup("ASSET_DIR").unwrap_or_else(|| "./public".to_string()),
            public_url: lookup("PUBLIC_URL")
                .unwrap_or_else(|| format!("http://localhost:{}", port)),
        })
    }

    /// Base URL of the `images/` folder under the asset root.
    pub fn image_base_url(&self) -> String {
        format!("{}/images", self.public_url.trim_end_matches('/'))
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
