/// Launch the host application's main entry point.
///
/// A bare target is handed to the platform opener so non-executable targets
/// (app bundles, URLs) work too; anything with arguments is spawned directly.
pub fn launch_host_app(command: &str) -> anyhow::Result<()> {
    let mut parts = shlex::split(command).unwrap_or_default();
    if parts.is_empty() {
        anyhow::bail!("no host application command configured");
    }
    let program = parts.remove(0);
    if parts.is_empty() {
        open::that(&program)?;
        Ok(())
    } else {
        let mut cmd = std::process::Command::new(&program);
        cmd.args(&parts);
        cmd.spawn().map(|_| ()).map_err(|e| e.into())
    }
}
