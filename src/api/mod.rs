//! High-level library API: bind a validated configuration to an interpolator,
//! build argument vectors, and run rife-ncnn-vulkan on a frame pair.
//! Prefer these entrypoints over the `core` building blocks when embedding.
use std::ffi::OsString;
use std::process::{Command, ExitStatus};

use tracing::{debug, info};

use crate::core::command::{InterpolationRequest, build_command, render_command};
use crate::core::config::RifeConfig;
use crate::core::params::RifeSettings;
use crate::error::{Error, Result};

/// How a finished child process is judged.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum ExitCheck {
    /// A non-zero exit status becomes `Error::ProcessFailed`
    #[default]
    Strict,
    /// Hand back whatever status the process exited with
    Ignore,
}

impl From<bool> for ExitCheck {
    fn from(check: bool) -> Self {
        if check {
            ExitCheck::Strict
        } else {
            ExitCheck::Ignore
        }
    }
}

/// Outcome of a process that ran to completion.
#[derive(Debug, Clone)]
pub struct Completed {
    pub command: Vec<OsString>,
    pub status: ExitStatus,
}

impl Completed {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Exit code; on Unix a signal-terminated child reports `-signal`.
    pub fn code(&self) -> i32 {
        exit_code(&self.status)
    }
}

/// Runs rife-ncnn-vulkan for image pairs with one fixed configuration.
///
/// The interpolator holds no mutable state; share it (or its config) freely
/// across threads, each call launches exactly one process.
#[derive(Debug, Clone)]
pub struct RifeInterpolator {
    config: RifeConfig,
}

impl RifeInterpolator {
    pub fn new(config: RifeConfig) -> Self {
        Self { config }
    }

    pub fn from_settings(settings: RifeSettings) -> Result<Self> {
        Ok(Self::new(RifeConfig::new(settings)?))
    }

    pub fn config(&self) -> &RifeConfig {
        &self.config
    }

    /// Argument vector for `request`, program first. Pure.
    pub fn build_command(&self, request: &InterpolationRequest) -> Result<Vec<OsString>> {
        build_command(&self.config, request)
    }

    /// Build the command and run it to completion.
    ///
    /// stdout/stderr are inherited from the calling process. Blocks until the
    /// child exits; there is no timeout and no retry.
    pub fn interpolate(
        &self,
        request: &InterpolationRequest,
        check: ExitCheck,
    ) -> Result<Completed> {
        let command = self.build_command(request)?;
        let program = self.config.binary().display().to_string();
        debug!("Running: {}", render_command(&command));

        let status = Command::new(&command[0])
            .args(&command[1..])
            .status()
            .map_err(|source| Error::LaunchFailed {
                program: program.clone(),
                source,
            })?;

        let completed = Completed { command, status };
        info!(
            "{} finished with code {} -> {:?}",
            program,
            completed.code(),
            request.output
        );

        if check == ExitCheck::Strict && !completed.success() {
            return Err(Error::ProcessFailed {
                program,
                code: completed.code(),
            });
        }
        Ok(completed)
    }
}

/// One-shot helper: validate `settings`, then interpolate a single pair strictly.
pub fn interpolate_pair(settings: RifeSettings, request: &InterpolationRequest) -> Result<Completed> {
    RifeInterpolator::from_settings(settings)?.interpolate(request, ExitCheck::Strict)
}

#[cfg(unix)]
fn exit_code(status: &ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|sig| -sig))
        .unwrap_or(-1)
}

#[cfg(not(unix))]
fn exit_code(status: &ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::thread;
    use tempfile::tempdir;

    fn request() -> InterpolationRequest {
        InterpolationRequest::new("a.png", "b.png", "c.png")
    }

    fn interpolator(binary: impl Into<std::path::PathBuf>) -> RifeInterpolator {
        RifeInterpolator::from_settings(RifeSettings::with_binary(binary)).unwrap()
    }

    #[test]
    fn successful_run() {
        let done = interpolator("true")
            .interpolate(&request(), ExitCheck::Strict)
            .unwrap();
        assert!(done.success());
        assert_eq!(done.code(), 0);
        assert_eq!(done.command[0], OsString::from("true"));
    }

    #[test]
    fn strict_check_reports_exit_code() {
        let err = interpolator("false")
            .interpolate(&request(), ExitCheck::Strict)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ProcessFailed);
        assert_eq!(err.exit_code(), Some(1));
        assert!(matches!(err, Error::ProcessFailed { code: 1, .. }));
    }

    #[test]
    fn ignored_check_returns_the_status() {
        let done = interpolator("false")
            .interpolate(&request(), ExitCheck::Ignore)
            .unwrap();
        assert!(!done.success());
        assert_eq!(done.code(), 1);
    }

    #[test]
    fn child_sees_the_built_arguments() {
        let dir = tempdir().unwrap();
        let script = dir.path().join("fake-rife");
        let log = dir.path().join("args.txt");
        fs::write(
            &script,
            format!("#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\nexit 7\n", log.display()),
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let rife = RifeInterpolator::from_settings(RifeSettings {
            uhd: true,
            ..RifeSettings::with_binary(&script)
        })
        .unwrap();
        let req = request().with_time(0.75).with_extra_args(["-f", "frame.png"]);

        let done = rife.interpolate(&req, ExitCheck::Ignore).unwrap();
        assert_eq!(done.code(), 7);

        let seen = fs::read_to_string(&log).unwrap();
        let seen: Vec<&str> = seen.lines().collect();
        assert_eq!(
            seen,
            ["-0", "a.png", "-1", "b.png", "-o", "c.png", "-t", "0.750000", "-u", "-f", "frame.png"]
        );
    }

    #[test]
    fn invalid_time_launches_nothing() {
        let dir = tempdir().unwrap();
        let marker = dir.path().join("ran");
        let script = dir.path().join("fake-rife");
        fs::write(&script, format!("#!/bin/sh\ntouch '{}'\n", marker.display())).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let err = interpolator(&script)
            .interpolate(&request().with_time(1.5), ExitCheck::Strict)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidTime { .. }));
        assert!(!marker.exists());
    }

    #[test]
    fn non_executable_file_fails_to_launch() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rife-ncnn-vulkan");
        fs::write(&path, b"plain data").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        let err = interpolator(&path)
            .interpolate(&request(), ExitCheck::Ignore)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LaunchFailed);
        assert_eq!(err.exit_code(), None);
    }

    #[test]
    fn removed_binary_fails_to_launch() {
        let dir = tempdir().unwrap();
        let script = dir.path().join("fake-rife");
        fs::write(&script, "#!/bin/sh\nexit 0\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let rife = interpolator(&script);
        fs::remove_file(&script).unwrap();

        let err = rife.interpolate(&request(), ExitCheck::Strict).unwrap_err();
        assert!(matches!(err, Error::LaunchFailed { .. }));
    }

    #[test]
    fn shared_across_threads() {
        let rife = interpolator("true");
        thread::scope(|s| {
            for i in 0..4 {
                let rife = &rife;
                s.spawn(move || {
                    let req = request().with_time(i as f64 / 4.0);
                    rife.interpolate(&req, ExitCheck::Strict).unwrap();
                });
            }
        });
    }

    #[test]
    fn one_shot_helper_is_strict() {
        let err = interpolate_pair(RifeSettings::with_binary("false"), &request()).unwrap_err();
        assert_eq!(err.exit_code(), Some(1));
        assert!(interpolate_pair(RifeSettings::with_binary("true"), &request()).is_ok());
    }

    #[test]
    fn bool_maps_to_exit_check() {
        assert_eq!(ExitCheck::from(true), ExitCheck::Strict);
        assert_eq!(ExitCheck::from(false), ExitCheck::Ignore);
        assert_eq!(ExitCheck::default(), ExitCheck::Strict);
    }
}
