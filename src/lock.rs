use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};

/// Single-instance guard: a lock file holding our PID, created with
/// `create_new` so two processes cannot both win. Removed on drop.
#[derive(Debug)]
pub struct InstanceLock {
    path: PathBuf,
}

impl InstanceLock {
    /// Acquire the lock, reclaiming a stale file left behind by a dead
    /// process. Fails if another live instance holds it.
    pub fn acquire(path: &Path) -> anyhow::Result<Self> {
        match Self::try_create(path)? {
            Some(lock) => Ok(lock),
            None => {
                let holder = fs::read_to_string(path).unwrap_or_default();
                let holder_pid: Option<u32> = holder.trim().parse().ok();

                if let Some(pid) = holder_pid {
                    if !pid_is_alive(pid) {
                        tracing::warn!("Reclaiming stale lock file (dead pid {pid})");
                        fs::remove_file(path)
                            .with_context(|| format!("removing stale lock {}", path.display()))?;
                        if let Some(lock) = Self::try_create(path)? {
                            return Ok(lock);
                        }
                    }
                }

                bail!(
                    "another instance is already running (lock {} held by pid {})",
                    path.display(),
                    holder.trim()
                );
            }
        }
    }

    fn try_create(path: &Path) -> anyhow::Result<Option<Self>> {
        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(mut file) => {
                writeln!(file, "{}", std::process::id())?;
                Ok(Some(Self {
                    path: path.to_path_buf(),
                }))
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(None),
            Err(e) => Err(e).with_context(|| format!("creating lock {}", path.display())),
        }
    }
}

impl Drop for InstanceLock {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            tracing::warn!("Failed to remove lock file {}: {e}", self.path.display());
        }
    }
}

#[cfg(target_os = "linux")]
fn pid_is_alive(pid: u32) -> bool {
    Path::new(&format!("/proc/{pid}")).exists()
}

#[cfg(not(target_os = "linux"))]
fn pid_is_alive(_pid: u32) -> bool {
    // No cheap liveness probe; assume the holder is alive.
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_lock_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("stylish_lock_test_{tag}_{}", std::process::id()))
    }

    #[test]
    fn acquire_writes_pid_and_drop_removes_the_file() {
        let path = temp_lock_path("basic");
        let _ = fs::remove_file(&path);

        let lock = InstanceLock::acquire(&path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.trim(), std::process::id().to_string());

        drop(lock);
        assert!(!path.exists());
    }

    #[test]
    fn second_acquire_fails_while_held() {
        let path = temp_lock_path("contended");
        let _ = fs::remove_file(&path);

        let _lock = InstanceLock::acquire(&path).unwrap();
        assert!(InstanceLock::acquire(&path).is_err());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn stale_lock_is_reclaimed() {
        let path = temp_lock_path("stale");
        let _ = fs::remove_file(&path);

        // A pid that cannot be alive: beyond the default pid_max.
        fs::write(&path, "4194305\n").unwrap();
        let lock = InstanceLock::acquire(&path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.trim(), std::process::id().to_string());
        drop(lock);
    }
}
