#![doc = r#"
rifeinterp — a validated configuration and invocation layer for the
`rife-ncnn-vulkan` frame interpolation executable.

The crate does no image processing of its own. It holds a checked set of
options, turns them into a deterministic argument vector, and runs the external
binary as a blocking child process. It powers the `rifeinterp` CLI and can be
embedded in your own Rust applications.

Quick start: interpolate a middle frame
---------------------------------------
```rust,no_run
use rifeinterp::{ExitCheck, InterpolationRequest, RifeInterpolator, RifeSettings};

fn main() -> rifeinterp::Result<()> {
    let settings = RifeSettings {
        model: Some("rife-v4.6".to_string()),
        uhd: true,
        ..RifeSettings::with_binary("/opt/rife/rife-ncnn-vulkan")
    };
    let rife = RifeInterpolator::from_settings(settings)?;

    let request = InterpolationRequest::new("frame_0001.png", "frame_0002.png", "mid.png")
        .with_time(0.5);
    rife.interpolate(&request, ExitCheck::Strict)?;
    Ok(())
}
```

Inspect the command without running it
--------------------------------------
```rust,no_run
use rifeinterp::{InterpolationRequest, RifeInterpolator, RifeSettings};

fn main() -> rifeinterp::Result<()> {
    let rife = RifeInterpolator::from_settings(RifeSettings {
        scale: 2.0,
        ..RifeSettings::with_binary("rife-ncnn-vulkan")
    })?;
    let argv = rife.build_command(&InterpolationRequest::new("a.png", "b.png", "c.png"))?;
    // rife-ncnn-vulkan -0 a.png -1 b.png -o c.png -t 0.500000 -s 2.0000
    println!("{argv:?}");
    Ok(())
}
```

Error handling
--------------
All fallible functions return `rifeinterp::Result<T>`. Match on
`rifeinterp::Error` for a specific failure, or on `Error::kind()` for its
category:

```rust,no_run
use rifeinterp::{interpolate_pair, Error, InterpolationRequest, RifeSettings};

fn main() {
    let request = InterpolationRequest::new("a.png", "b.png", "c.png");
    match interpolate_pair(RifeSettings::with_binary("rife-ncnn-vulkan"), &request) {
        Ok(_) => {}
        Err(Error::ExecutableNotFound { path }) => eprintln!("install rife first: {}", path.display()),
        Err(Error::ProcessFailed { code, .. }) => eprintln!("rife exited with {code}"),
        Err(other) => eprintln!("{other}"),
    }
}
```

Useful modules
--------------
- [`api`] — the interpolator and one-shot helpers.
- [`core`] — settings, validated configuration, executable lookup, argument vectors.
- [`error`] — crate-level `Error`, `ErrorKind` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;

pub use crate::core::command::{DEFAULT_TIME, InterpolationRequest, build_command};
pub use crate::core::config::RifeConfig;
pub use crate::core::locate::{executable_exists, find_executable};
pub use crate::core::params::RifeSettings;
pub use error::{Error, ErrorKind, Result};

pub use api::{Completed, ExitCheck, RifeInterpolator, interpolate_pair};
