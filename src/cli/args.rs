use std::num::NonZeroU32;
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "rifeinterp",
    version,
    about = "Interpolate a middle frame between two input images using the rife-ncnn-vulkan executable"
)]
pub struct CliArgs {
    /// Path to the first input image
    pub first: PathBuf,

    /// Path to the second input image
    pub second: PathBuf,

    /// Where to write the interpolated frame
    pub output: PathBuf,

    /// Path to the rife-ncnn-vulkan executable
    #[arg(long)]
    pub binary: PathBuf,

    /// Optional model name to load (for example 'rife-v4.6'). Uses the binary default when omitted
    #[arg(long)]
    pub model: Option<String>,

    /// Interpolation time value between 0 and 1
    #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
    pub time: f64,

    /// Override the internal scale factor
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub scale: f64,

    /// Enable test-time augmentation for potentially higher quality
    #[arg(long, default_value_t = false)]
    pub tta: bool,

    /// Enable UHD mode, recommended for 4K and above
    #[arg(long, default_value_t = false)]
    pub uhd: bool,

    /// Optional GPU index to run on
    #[arg(long)]
    pub gpu_id: Option<u32>,

    /// Optional number of CPU threads
    #[arg(long)]
    pub threads: Option<NonZeroU32>,

    /// Print the command line instead of running it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// With --dry-run, print the command as a JSON array
    #[arg(long, default_value_t = false, requires = "dry_run")]
    pub json: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Additional arguments forwarded to the rife-ncnn-vulkan binary (after `--`)
    #[arg(last = true, value_name = "EXTRA_ARGS")]
    pub extra_args: Vec<String>,
}
