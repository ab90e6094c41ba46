//! The startup option vector handed to VM creation.

use crate::abi::{ENABLE_PREVIEW_FLAG, FIXED_OPTION_COUNT, SHOW_CODE_DETAILS_FLAG};
use crate::config::Configuration;

/// One startup option slot.
///
/// Ownership follows the slot's origin: the classpath is owned by the vector
/// and released with it, the fixed flags are static, and caller options are
/// borrowed from the [`Configuration`] and never released here.
#[derive(Debug)]
pub enum LaunchOption<'cfg> {
    /// Slot 0, the assembled classpath property.
    Classpath(String),
    /// One of the mandatory launcher flags.
    Flag(&'static str),
    /// A caller-supplied option.
    Caller(&'cfg str),
}

impl LaunchOption<'_> {
    pub fn as_str(&self) -> &str {
        match self {
            LaunchOption::Classpath(text) => text,
            LaunchOption::Flag(text) => text,
            LaunchOption::Caller(text) => text,
        }
    }
}

/// Ordered options for one VM creation: the classpath in slot 0, the two
/// fixed flags, then the caller's options in configuration order.
///
/// Dropping the vector releases the classpath exactly once and nothing else,
/// on every exit path of the launch.
#[derive(Debug)]
pub struct OptionVector<'cfg> {
    slots: Vec<LaunchOption<'cfg>>,
}

impl<'cfg> OptionVector<'cfg> {
    /// Builds the full vector; the length is always
    /// `config.options.len() + FIXED_OPTION_COUNT`.
    pub fn assemble(classpath: String, config: &'cfg Configuration) -> Self {
        let mut slots = Vec::with_capacity(config.options.len() + FIXED_OPTION_COUNT);
        slots.push(LaunchOption::Classpath(classpath));
        slots.push(LaunchOption::Flag(ENABLE_PREVIEW_FLAG));
        slots.push(LaunchOption::Flag(SHOW_CODE_DETAILS_FLAG));
        for option in &config.options {
            slots.push(LaunchOption::Caller(option));
        }
        OptionVector { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The assembled classpath property in slot 0.
    pub fn classpath(&self) -> &str {
        self.slots[0].as_str()
    }

    /// Slot view in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &LaunchOption<'cfg>> {
        self.slots.iter()
    }
}
