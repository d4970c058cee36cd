//! Built-in module providers

use crate::desktop::detect_desktop;
use crate::host::HostFacts;
use fo_core::{format_bytes, format_duration, ByteMode, ModuleContext, ModuleResult};
use fo_types::StyledSegment;

type Ctx<'r, 'a> = ModuleContext<'r, 'a, HostFacts>;

/// Byte display mode for memory and swap
const BYTES_MODE: ByteMode = ByteMode::BinaryI;

/// Colors of the `user@host` header
const HEADER_NAME_COLOR: u8 = 5;
const HEADER_AT_COLOR: u8 = 2;

pub fn username<'a>(ctx: &mut Ctx<'_, 'a>) -> ModuleResult<'a> {
    let facts = ctx.facts;
    ctx.line(facts.account().map(|a| a.name.as_str()))
}

pub fn hostname<'a>(ctx: &mut Ctx<'_, 'a>) -> ModuleResult<'a> {
    let facts = ctx.facts;
    ctx.line(facts.identity().map(|i| i.hostname.as_str()))
}

pub fn header<'a>(ctx: &mut Ctx<'_, 'a>) -> ModuleResult<'a> {
    let facts = ctx.facts;
    let (Some(account), Some(identity)) = (facts.account(), facts.identity()) else {
        return Ok(None);
    };

    let output = [
        StyledSegment::borrowed(&account.name).bold().fg(HEADER_NAME_COLOR),
        StyledSegment::borrowed("@").bold().fg(HEADER_AT_COLOR),
        StyledSegment::borrowed(&identity.hostname).bold().fg(HEADER_NAME_COLOR),
    ]
    .into_iter()
    .collect();
    Ok(Some(output))
}

/// A rule as wide as the `user@host` header
pub fn line<'a>(ctx: &mut Ctx<'_, 'a>) -> ModuleResult<'a> {
    let facts = ctx.facts;
    let (Some(account), Some(identity)) = (facts.account(), facts.identity()) else {
        return Ok(None);
    };

    let width = account.name.chars().count() + identity.hostname.chars().count() + 1;
    let unit = facts.line_text();
    let mut rule = String::new();
    rule.try_reserve_exact(unit.len() * width)?;
    for _ in 0..width {
        rule.push_str(unit);
    }

    Ok(Some(std::iter::once(StyledSegment::owned(rule).bold()).collect()))
}

pub fn os<'a>(ctx: &mut Ctx<'_, 'a>) -> ModuleResult<'a> {
    match ctx.facts.os_name() {
        Ok(name) => ctx.line(Some(name)),
        Err(e) => Err(ctx.unavailable(e)),
    }
}

pub fn kernel<'a>(ctx: &mut Ctx<'_, 'a>) -> ModuleResult<'a> {
    let facts = ctx.facts;
    let kernel = facts
        .identity()
        .map(|i| format!("{} {}", i.os_type, i.kernel_release));
    ctx.line(kernel)
}

pub fn uptime<'a>(ctx: &mut Ctx<'_, 'a>) -> ModuleResult<'a> {
    let uptime = ctx.facts.uptime().map(format_duration).transpose()?;
    ctx.line(uptime)
}

pub fn shell<'a>(ctx: &mut Ctx<'_, 'a>) -> ModuleResult<'a> {
    let facts = ctx.facts;
    ctx.line(facts.account().map(|a| basename(&a.shell)))
}

pub fn ram<'a>(ctx: &mut Ctx<'_, 'a>) -> ModuleResult<'a> {
    let value = match ctx.facts.memory() {
        Some(m) => Some(usage(m.used_memory, m.total_memory)?),
        None => None,
    };
    ctx.line(value)
}

pub fn swap<'a>(ctx: &mut Ctx<'_, 'a>) -> ModuleResult<'a> {
    let value = match ctx.facts.memory() {
        Some(m) => Some(usage(m.used_swap, m.total_swap)?),
        None => None,
    };
    ctx.line(value)
}

pub fn de<'a>(ctx: &mut Ctx<'_, 'a>) -> ModuleResult<'a> {
    let facts = ctx.facts;
    ctx.line(detect_desktop(facts.env()))
}

pub fn editor<'a>(ctx: &mut Ctx<'_, 'a>) -> ModuleResult<'a> {
    let facts = ctx.facts;
    let editor = facts.env().get("EDITOR").map(|path| match basename(path) {
        "nvim" => "neovim",
        name => name,
    });
    ctx.line(editor)
}

pub fn host<'a>(ctx: &mut Ctx<'_, 'a>) -> ModuleResult<'a> {
    match ctx.facts.host_model() {
        Ok(model) => ctx.line(Some(model)),
        Err(e) => Err(ctx.unavailable(e)),
    }
}

pub fn arch<'a>(ctx: &mut Ctx<'_, 'a>) -> ModuleResult<'a> {
    let facts = ctx.facts;
    ctx.line(facts.identity().map(|i| i.arch.as_str()))
}

/// `"<used> / <total>"` in [`BYTES_MODE`]
fn usage(used: u64, total: u64) -> Result<String, fo_core::FormatError> {
    let used = format_bytes(used, BYTES_MODE)?;
    let total = format_bytes(total, BYTES_MODE)?;
    Ok(format!("{used} / {total}"))
}

fn basename(path: &str) -> &str {
    path.rsplit_once('/').map_or(path, |(_, name)| name)
}
