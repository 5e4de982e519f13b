/// Settings the HTTP transport needs from whichever configuration source is
/// in play (env, TOML file, CLI flags).
pub trait ClientSettings: Send + Sync {
    fn base_url(&self) -> &str;
    fn auth_token(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> u64;
}
