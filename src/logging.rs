use log::Level::Trace;
use log::{log_enabled, trace};

use crate::cursor::{Cursor, Input};
use crate::error::ParseError;
use crate::{util, LABEL, LOG_TARGET};
use std::fmt::{Debug, Display};

/// Trace lines look like
/// `|remaining input|   rule-label : operation(args) -> outcome`
pub(crate) trait Loggable {
    const LABEL_WIDTH: usize = 15;
    const INPUT_WIDTH: usize = 35;
    fn log_inputs<Args: Debug>(&self, msg: &str, args: Args);
    fn log_success<Args: Debug>(&self, msg: &str, args: Args);
    fn log_failure<Args: Debug>(&self, msg: &str, args: Args, error: &ParseError);
}

impl<'i, I> Cursor<'i, I>
where
    I: Input + ?Sized,
{
    fn trace_line(&self, msg: &str, args: &dyn Debug, outcome: Option<&dyn Display>) {
        let operation = format!("{msg}({args:?})");
        let line = format!(
            "{inp} {label:<lw$} : {operation:<lw$}",
            lw = Self::LABEL_WIDTH,
            label = LABEL.with(|f| f.get()),
            inp = util::formatter_str(&self.preview(Self::INPUT_WIDTH)),
        );
        match outcome {
            Some(outcome) => trace!(target: LOG_TARGET, "{line} -> {outcome}"),
            None => trace!(target: LOG_TARGET, "{line}"),
        }
    }
}

impl<'i, I> Loggable for Cursor<'i, I>
where
    I: Input + ?Sized,
{
    fn log_inputs<Args: Debug>(&self, msg: &str, args: Args) {
        if log_enabled!(target: LOG_TARGET, Trace) {
            self.trace_line(msg, &args, None);
        }
    }

    fn log_success<Args: Debug>(&self, msg: &str, args: Args) {
        if log_enabled!(target: LOG_TARGET, Trace) {
            self.trace_line(msg, &args, Some(&format_args!("ok @{}", self.index())));
        }
    }

    fn log_failure<Args: Debug>(&self, msg: &str, args: Args, error: &ParseError) {
        if log_enabled!(target: LOG_TARGET, Trace) {
            self.trace_line(msg, &args, Some(error));
        }
    }
}
