use stderrlog::{LogLevelNum, Timestamp};

/// Level used by commands whose main output is logging.
pub const INFO: u8 = 3;

/// Level used by commands whose main output is written data.
pub const WARN: u8 = 2;

/// Logging flags shared by every subcommand.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[arg(short, long)]
    pub quiet: bool,

    /// Raise log verbosity (-v errors, -vv warnings, -vvv info, -vvvv debug, more for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Prefix log lines with timestamps.
    #[clap(short, long)]
    pub ts: bool,
}

impl LogArgs {
    /// The level to log at; `-v` flags override the command default.
    fn level(
        &self,
        default: u8,
    ) -> u8 {
        if self.verbose > 0 {
            self.verbose
        } else {
            default
        }
    }

    /// Install the stderr logger.
    pub fn init(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let verbosity = match self.level(default) {
            0 => LogLevelNum::Off,
            1 => LogLevelNum::Error,
            2 => LogLevelNum::Warn,
            3 => LogLevelNum::Info,
            4 => LogLevelNum::Debug,
            _ => LogLevelNum::Trace,
        };

        let timestamp = if self.ts {
            Timestamp::Second
        } else {
            Timestamp::Off
        };

        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(verbosity)
            .timestamp(timestamp)
            .init()?;

        Ok(())
    }
}
