// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CLI options and coloring policy of the reporter.

use std::str::FromStr;

use smart_default::SmartDefault;

/// CLI options of an [`Oneline`] reporter.
///
/// [`Oneline`]: crate::Oneline
#[derive(Clone, Copy, Debug, SmartDefault, clap::Args)]
#[group(skip)]
pub struct Cli {
    /// Don't output a line when each test starts.
    #[arg(long, global = true)]
    pub hide_starts: bool,

    /// Don't output lines for skipped and todo tests.
    #[arg(long, global = true)]
    pub hide_skips: bool,

    /// Report a failure's message only, instead of its full stack trace.
    #[arg(long, global = true)]
    pub hide_err_stack: bool,

    /// Don't report context data captured by tests once the run ends.
    #[arg(long, global = true)]
    pub hide_context_data: bool,

    /// Coloring policy for a console output.
    #[arg(
        long,
        value_name = "auto|always|never",
        default_value = "auto",
        global = true
    )]
    #[default(Coloring::Auto)]
    pub color: Coloring,
}

impl Colored for Cli {
    fn coloring(&self) -> Coloring {
        self.color
    }
}

/// Possible policies of a [`console`] output coloring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Coloring {
    /// Letting [`console::colors_enabled()`] to decide, whether output should
    /// be colored.
    Auto,

    /// Forcing of a colored output.
    Always,

    /// Forcing of a non-colored output.
    Never,
}

impl FromStr for Coloring {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err("possible options: auto, always, never"),
        }
    }
}

/// Indication whether a [`Reporter`] using CLI options supports colored
/// output.
///
/// [`Reporter`]: crate::Reporter
pub trait Colored {
    /// Returns [`Coloring`] indicating whether a [`Reporter`] using CLI
    /// options supports colored output or not.
    #[must_use]
    fn coloring(&self) -> Coloring {
        Coloring::Never
    }
}
