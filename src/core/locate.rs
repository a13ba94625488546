//! Executable resolution: a `which`-style lookup over `PATH` plus a plain
//! filesystem fallback.
use std::env;
use std::path::{Path, PathBuf};

/// Resolve `program` the way a shell would.
///
/// A program containing a path separator is checked directly; a bare name is
/// searched for in every `PATH` entry. Only files that can actually be run
/// are returned.
pub fn find_executable(program: &Path) -> Option<PathBuf> {
    if program.as_os_str().is_empty() {
        return None;
    }
    if program.components().count() > 1 {
        return runnable(program);
    }
    let path_var = env::var_os("PATH")?;
    env::split_paths(&path_var)
        .filter(|dir| !dir.as_os_str().is_empty())
        .find_map(|dir| runnable(&dir.join(program)))
}

/// True when `program` resolves on the search path or exists on disk.
pub fn executable_exists(program: &Path) -> bool {
    find_executable(program).is_some() || program.exists()
}

#[cfg(unix)]
fn runnable(candidate: &Path) -> Option<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let meta = candidate.metadata().ok()?;
    (meta.is_file() && meta.permissions().mode() & 0o111 != 0).then(|| candidate.to_path_buf())
}

#[cfg(windows)]
fn runnable(candidate: &Path) -> Option<PathBuf> {
    if candidate.is_file() {
        return Some(candidate.to_path_buf());
    }
    let pathext = env::var_os("PATHEXT").unwrap_or_else(|| ".COM;.EXE;.BAT;.CMD".into());
    pathext
        .to_string_lossy()
        .split(';')
        .filter(|ext| !ext.is_empty())
        .map(|ext| {
            let mut name = candidate.as_os_str().to_os_string();
            name.push(ext);
            PathBuf::from(name)
        })
        .find(|p| p.is_file())
}

#[cfg(not(any(unix, windows)))]
fn runnable(candidate: &Path) -> Option<PathBuf> {
    candidate.is_file().then(|| candidate.to_path_buf())
}
