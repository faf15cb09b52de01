use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result, anyhow, ensure};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

use caiso_queue::paths::{self, PathResolver, PathSet};

use crate::cli::{Cli, Command, PathsArgs};

pub fn run(cli: Cli) -> Result<()> {
    let resolver = build_resolver(cli.chdir.as_deref())?;
    debug!(working_dir = %resolver.working_dir(), "resolving project paths");

    match cli.command {
        Command::Root => {
            println!("{}", resolver.resolve_root());
            Ok(())
        }
        Command::Paths(args) => handle_paths(&resolver, &args, cli.dry_run),
    }
}

fn build_resolver(chdir: Option<&Path>) -> Result<PathResolver> {
    let cwd = paths::current_working_dir()?;
    let Some(dir) = chdir else {
        return Ok(PathResolver::new(cwd));
    };

    let dir = Utf8PathBuf::from_path_buf(dir.to_path_buf())
        .map_err(|p| anyhow!("--chdir path is not valid UTF-8: {}", p.display()))?;
    let dir = absolutize(&cwd, dir);
    ensure!(dir.is_dir(), "--chdir target {} is not an existing directory", dir);
    Ok(PathResolver::new(dir))
}

fn absolutize(cwd: &Utf8Path, dir: Utf8PathBuf) -> Utf8PathBuf {
    if dir.is_absolute() { dir } else { cwd.join(dir) }
}

fn handle_paths(resolver: &PathResolver, args: &PathsArgs, dry_run: bool) -> Result<()> {
    let paths = if dry_run {
        info!("dry-run: not creating directories");
        resolver.plan()
    } else {
        resolver.resolve_paths().with_context(|| {
            format!(
                "preparing project directories under {}",
                resolver.resolve_root()
            )
        })?
    };

    if args.json {
        println!("{}", render_json(&paths)?);
    } else {
        print!("{}", render_plain(&paths));
    }
    Ok(())
}

fn render_plain(paths: &PathSet) -> String {
    let mut out = String::new();
    for (name, path) in paths.entries() {
        let _ = writeln!(out, "{}\t{}", name, path);
    }
    out
}

fn render_json(paths: &PathSet) -> Result<String> {
    serde_json::to_string(paths).context("serializing paths")
}
