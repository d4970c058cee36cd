//! Drives the registry: select, evaluate, render, repeat

use crate::constants::DEFAULT_IFS;
use crate::label::LabelBuilder;
use crate::list::list_contains;
use crate::registry::{ModuleContext, ModuleDescriptor, Registry};
use crate::render::render;
use log::debug;
use std::io::Write;

/// Which modules a run prints
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Modules flagged `display_by_default`
    #[default]
    Default,
    /// Exactly the modules named in a delimiter-joined list
    Only { list: String, ifs: String },
}

impl Selection {
    /// Build a selection from an optional allow-list
    pub fn from_list(list: Option<String>, ifs: Option<String>) -> Self {
        match list {
            Some(list) => Selection::Only {
                list,
                ifs: ifs.unwrap_or_else(|| DEFAULT_IFS.to_string()),
            },
            None => Selection::Default,
        }
    }

    pub fn includes<C>(&self, module: &ModuleDescriptor<C>) -> bool {
        match self {
            Selection::Default => module.display_by_default,
            Selection::Only { list, ifs } => list_contains(list, module.name, ifs),
        }
    }
}

/// Counts of what happened during [`ModuleRunner::run`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Modules that printed a line
    pub printed: usize,
    /// Selected modules that had nothing to report
    pub empty: usize,
    /// Selected modules whose provider or formatter failed
    pub failed: usize,
}

/// Evaluates modules in registry order and streams each line as it is ready
#[derive(Debug)]
pub struct ModuleRunner {
    selection: Selection,
    labels: LabelBuilder,
    color: bool,
}

impl ModuleRunner {
    pub fn new(selection: Selection, labels: LabelBuilder, color: bool) -> Self {
        Self {
            selection,
            labels,
            color,
        }
    }

    /// Run every selected module against `facts`, writing to `out`.
    ///
    /// A module that fails or reports nothing is skipped; only a failure to
    /// write to `out` stops the run. `out` is flushed after every printed
    /// line so earlier lines are visible even if a later module misbehaves.
    pub fn run<C, W: Write>(
        &mut self,
        registry: &Registry<C>,
        facts: &C,
        out: &mut W,
    ) -> std::io::Result<RunSummary> {
        let mut summary = RunSummary::default();

        for module in registry.iter() {
            if !self.selection.includes(module) {
                continue;
            }

            let mut ctx = ModuleContext::new(facts, module, &mut self.labels);
            match (module.provider)(&mut ctx) {
                Ok(output) => {
                    let rendered = render(output, self.color, out)?;
                    if rendered.printed() {
                        out.flush()?;
                        summary.printed += 1;
                    } else {
                        debug!("{}: nothing to report", module.name);
                        summary.empty += 1;
                    }
                }
                Err(e) => {
                    debug!("Skipping module {}: {}", module.name, e);
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::LabelMode;
    use crate::registry::ModuleResult;
    use crate::ModuleError;
    use fo_types::StyledSegment;

    struct Facts {
        host: String,
    }

    fn host<'a>(ctx: &mut ModuleContext<'_, 'a, Facts>) -> ModuleResult<'a> {
        let facts = ctx.facts;
        ctx.line(Some(facts.host.as_str()))
    }

    fn absent<'a>(ctx: &mut ModuleContext<'_, 'a, Facts>) -> ModuleResult<'a> {
        ctx.line(None::<&str>)
    }

    fn broken<'a>(ctx: &mut ModuleContext<'_, 'a, Facts>) -> ModuleResult<'a> {
        Err(ctx.unavailable(anyhow::anyhow!("no such file")))
    }

    fn banner<'a>(_: &mut ModuleContext<'_, 'a, Facts>) -> ModuleResult<'a> {
        Ok(Some(std::iter::once(StyledSegment::borrowed("==")).collect()))
    }

    fn registry() -> Registry<Facts> {
        let mut registry = Registry::new();
        registry.register("banner", None, false, banner);
        registry.register("de", None, true, absent);
        registry.register("host", None, true, host);
        registry.register("broken", None, true, broken);
        registry.register("kernel", None, true, host);
        registry
    }

    fn run(selection: Selection) -> (String, RunSummary) {
        let facts = Facts {
            host: "box".to_string(),
        };
        let mut runner = ModuleRunner::new(selection, LabelBuilder::new(LabelMode::Name), false);
        let mut out = Vec::new();
        let summary = runner.run(&registry(), &facts, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_default_selection_skips_absent_and_failed() {
        let (text, summary) = run(Selection::Default);
        assert_eq!(text, "host     box\nkernel   box\n");
        assert_eq!(
            summary,
            RunSummary {
                printed: 2,
                empty: 1,
                failed: 1
            }
        );
    }

    #[test]
    fn test_allow_list_overrides_defaults() {
        let (text, _) = run(Selection::from_list(Some("kernel,banner".into()), Some(",".into())));
        // registry order, not list order
        assert_eq!(text, "==\nkernel   box\n");
    }

    #[test]
    fn test_allow_list_is_exact() {
        let (text, summary) = run(Selection::from_list(Some("hos kern".into()), None));
        assert_eq!(text, "");
        assert_eq!(summary, RunSummary::default());
    }

    #[test]
    fn test_colors_rotate_only_for_printed_labels() {
        let facts = Facts {
            host: "box".to_string(),
        };
        let mut runner = ModuleRunner::new(Selection::Default, LabelBuilder::new(LabelMode::Name), true);
        let mut out = Vec::new();
        runner.run(&registry(), &facts, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\x1b[1m\x1b[38;5;1mhost"));
        assert!(text.contains("\x1b[1m\x1b[38;5;3mkernel"));
    }

    #[test]
    fn test_provider_error_message() {
        let err = ModuleError::unavailable("os", anyhow::anyhow!("missing /etc/os-release"));
        assert_eq!(err.to_string(), "os: provider unavailable: missing /etc/os-release");
    }
}
