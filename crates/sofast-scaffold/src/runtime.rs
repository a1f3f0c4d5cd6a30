//! Invoking package-manager detection
//!
//! Consulted only to phrase the post-success instructions; manifest and tree
//! contents never depend on it. The user-agent value is passed in explicitly
//! so callers (and tests) stay in control of environment reads.

/// Package manager that invoked the scaffolder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// Classify an `npm_config_user_agent` value
    /// (e.g. `pnpm/9.1.0 npm/? node/v22.1.0 linux x64`)
    pub fn from_user_agent(user_agent: Option<&str>) -> Self {
        let ua = user_agent.unwrap_or("");
        if ua.contains("pnpm") {
            PackageManager::Pnpm
        } else if ua.contains("yarn") {
            PackageManager::Yarn
        } else if ua.contains("bun") {
            PackageManager::Bun
        } else {
            PackageManager::Npm
        }
    }

    /// Read the ambient `npm_config_user_agent` variable
    pub fn detect() -> Self {
        Self::from_user_agent(std::env::var("npm_config_user_agent").ok().as_deref())
    }

    pub fn install_command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm install",
            PackageManager::Pnpm => "pnpm install",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun install",
        }
    }

    /// Prefix for running a package script (`<prefix> dev`)
    pub fn run_command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm run",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun run",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_classification() {
        assert_eq!(
            PackageManager::from_user_agent(Some("pnpm/9.1.0 npm/? node/v22.1.0")),
            PackageManager::Pnpm
        );
        assert_eq!(
            PackageManager::from_user_agent(Some("yarn/1.22.22 npm/? node/v20.0.0")),
            PackageManager::Yarn
        );
        assert_eq!(
            PackageManager::from_user_agent(Some("bun/1.1.0 npm/? node/v21.6.0")),
            PackageManager::Bun
        );
        assert_eq!(
            PackageManager::from_user_agent(Some("npm/10.5.0 node/v22.1.0")),
            PackageManager::Npm
        );
        assert_eq!(PackageManager::from_user_agent(None), PackageManager::Npm);
    }

    #[test]
    fn test_command_strings() {
        assert_eq!(PackageManager::Pnpm.run_command(), "pnpm");
        assert_eq!(PackageManager::Npm.run_command(), "npm run");
        assert_eq!(PackageManager::Yarn.install_command(), "yarn");
        assert_eq!(PackageManager::Bun.install_command(), "bun install");
    }
}
