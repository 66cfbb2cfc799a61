//! # Cargo Plugin Installer (`common::toolchain::install`)
//!
//! File: cli/src/common/toolchain/install.rs
//!
//! Installs the two cargo plugins the collectors depend on by delegating to
//! `cargo install`. The install itself (download, build, placement) is
//! entirely cargo's business.
//!
use crate::{
    common::process::CommandRunner,
    core::{config::ToolsConfig, error::Result},
};
use tracing::info;

/// Plugins needed by `size` and `tree`.
pub const REQUIRED_PLUGINS: [&str; 2] = ["cargo-bloat", "cargo-tree"];

/// Runs `cargo install cargo-bloat cargo-tree --debug` with the terminal attached.
///
/// `--debug` skips optimizations, which makes the install considerably faster
/// and has no effect on the reports the plugins produce.
pub async fn install_plugins<R: CommandRunner>(runner: &R, tools: &ToolsConfig) -> Result<()> {
    info!("Installing cargo plugins: {}", REQUIRED_PLUGINS.join(", "));
    let mut args = vec!["install"];
    args.extend(REQUIRED_PLUGINS);
    args.push("--debug");
    runner.run_streamed(&tools.cargo, &args).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{common::process::fake::FakeRunner, core::error::BloatError};

    const INSTALL: &str = "cargo install cargo-bloat cargo-tree --debug";

    #[tokio::test]
    async fn test_install_plugins_invocation() {
        let runner = FakeRunner::new().with_output(INSTALL, "");
        install_plugins(&runner, &ToolsConfig::default())
            .await
            .unwrap();
        assert_eq!(runner.calls(), vec![INSTALL]);
    }

    #[tokio::test]
    async fn test_install_plugins_uses_configured_cargo() {
        let tools = ToolsConfig {
            cargo: "/opt/cargo".into(),
            ..Default::default()
        };
        let runner =
            FakeRunner::new().with_output("/opt/cargo install cargo-bloat cargo-tree --debug", "");
        assert!(install_plugins(&runner, &tools).await.is_ok());
    }

    #[tokio::test]
    async fn test_install_plugins_failure() {
        let runner = FakeRunner::new().with_exit(INSTALL, 101);
        let err = install_plugins(&runner, &ToolsConfig::default())
            .await
            .unwrap_err();
        assert!(err
            .downcast_ref::<BloatError>()
            .is_some_and(BloatError::is_execution));
    }
}
