//! Argument vector construction for rife-ncnn-vulkan.
//!
//! Token order is fixed: executable, `-0 -1 -o -t`, then the optional
//! `-m -s -x -u -g -j` flags, then pass-through arguments untouched.
use std::ffi::OsString;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::config::RifeConfig;
use crate::error::{Error, Result};

pub const DEFAULT_TIME: f64 = 0.5;

/// Per-call inputs: the frame pair, where to write, and at which time step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpolationRequest {
    pub first: PathBuf,
    pub second: PathBuf,
    pub output: PathBuf,
    /// Position between `first` (0.0) and `second` (1.0)
    #[serde(default = "default_time")]
    pub time: f64,
    /// Appended verbatim after every structured flag
    #[serde(default)]
    pub extra_args: Vec<String>,
}

fn default_time() -> f64 {
    DEFAULT_TIME
}

impl InterpolationRequest {
    pub fn new(
        first: impl Into<PathBuf>,
        second: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            output: output.into(),
            time: DEFAULT_TIME,
            extra_args: Vec::new(),
        }
    }

    pub fn with_time(mut self, time: f64) -> Self {
        self.time = time;
        self
    }

    pub fn with_extra_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_args = args.into_iter().map(Into::into).collect();
        self
    }
}

/// Build the full argument vector, program first. Launches nothing.
pub fn build_command(config: &RifeConfig, request: &InterpolationRequest) -> Result<Vec<OsString>> {
    if !(0.0..=1.0).contains(&request.time) {
        return Err(Error::InvalidTime { time: request.time });
    }

    let mut cmd: Vec<OsString> = Vec::with_capacity(20 + request.extra_args.len());
    cmd.push(config.binary().into());
    cmd.push("-0".into());
    cmd.push(request.first.clone().into());
    cmd.push("-1".into());
    cmd.push(request.second.clone().into());
    cmd.push("-o".into());
    cmd.push(request.output.clone().into());
    cmd.push("-t".into());
    cmd.push(format!("{:.6}", request.time).into());

    if let Some(model) = config.model() {
        cmd.push("-m".into());
        cmd.push(model.into());
    }
    // Exact comparison: any scale other than precisely 1.0 is forwarded.
    if config.scale() != 1.0 {
        cmd.push("-s".into());
        cmd.push(format!("{:.4}", config.scale()).into());
    }
    if config.tta() {
        cmd.push("-x".into());
    }
    if config.uhd() {
        cmd.push("-u".into());
    }
    if let Some(gpu) = config.gpu_id() {
        cmd.push("-g".into());
        cmd.push(gpu.to_string().into());
    }
    if let Some(threads) = config.threads() {
        cmd.push("-j".into());
        cmd.push(threads.to_string().into());
    }

    cmd.extend(request.extra_args.iter().map(OsString::from));
    Ok(cmd)
}

/// Space-joined rendering for logs and dry runs. Tokens containing
/// whitespace or quotes are single-quoted.
pub fn render_command(cmd: &[OsString]) -> String {
    cmd.iter()
        .map(|token| {
            let token = token.to_string_lossy();
            if token.is_empty() || token.contains(|c: char| c.is_whitespace() || c == '\'' || c == '"') {
                format!("'{}'", token.replace('\'', r"'\''"))
            } else {
                token.into_owned()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
