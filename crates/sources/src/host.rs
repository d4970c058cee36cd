//! Memoized facts about the running host

use crate::env::Environment;
use crate::os_release::{os_name, read_os_release};
use crate::passwd::{find_account, PASSWD_PATH};
use anyhow::{anyhow, Context, Result};
use once_cell::unsync::OnceCell;
use std::os::unix::fs::MetadataExt;
use sysinfo::System;

const OSTYPE_PATH: &str = "/proc/sys/kernel/ostype";
const PRODUCT_NAME_PATH: &str = "/sys/devices/virtual/dmi/id/product_name";
const PRODUCT_VERSION_PATH: &str = "/sys/devices/virtual/dmi/id/product_version";

/// Default repeat unit for the separator line
pub const DEFAULT_LINE_TEXT: &str = "\u{2500}";

/// uname-style identity of the machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub hostname: String,
    /// Kernel name, e.g. `Linux`
    pub os_type: String,
    /// Kernel release, e.g. `6.9.3-arch1-1`
    pub kernel_release: String,
    pub arch: String,
}

/// The current user's passwd entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub name: String,
    pub shell: String,
}

/// Memory and swap usage in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoryStats {
    pub total_memory: u64,
    pub used_memory: u64,
    pub total_swap: u64,
    pub used_swap: u64,
}

/// Facts gathered on first use and kept for the rest of the run.
///
/// Each lookup runs at most once; a failed lookup is remembered as missing
/// so every module asking for it gets the same answer.
#[derive(Debug)]
pub struct HostFacts {
    env: Environment,
    line_text: String,
    identity: OnceCell<Option<Identity>>,
    account: OnceCell<Option<Account>>,
    memory: OnceCell<Option<MemoryStats>>,
    uptime: OnceCell<Option<u64>>,
}

impl HostFacts {
    pub fn new(env: Environment) -> Self {
        Self {
            env,
            line_text: DEFAULT_LINE_TEXT.to_string(),
            identity: OnceCell::new(),
            account: OnceCell::new(),
            memory: OnceCell::new(),
            uptime: OnceCell::new(),
        }
    }

    /// Set the repeat unit used by the separator line
    pub fn with_line_text(mut self, text: impl Into<String>) -> Self {
        self.line_text = text.into();
        self
    }

    /// Use `identity` instead of querying the system
    pub fn with_identity(mut self, identity: impl Into<Option<Identity>>) -> Self {
        self.identity = OnceCell::with_value(identity.into());
        self
    }

    pub fn with_account(mut self, account: impl Into<Option<Account>>) -> Self {
        self.account = OnceCell::with_value(account.into());
        self
    }

    pub fn with_memory(mut self, memory: impl Into<Option<MemoryStats>>) -> Self {
        self.memory = OnceCell::with_value(memory.into());
        self
    }

    pub fn with_uptime(mut self, seconds: u64) -> Self {
        self.uptime = OnceCell::with_value(Some(seconds));
        self
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn line_text(&self) -> &str {
        &self.line_text
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity
            .get_or_init(|| remember("host identity", load_identity()))
            .as_ref()
    }

    pub fn account(&self) -> Option<&Account> {
        self.account
            .get_or_init(|| remember("user account", load_account()))
            .as_ref()
    }

    pub fn memory(&self) -> Option<&MemoryStats> {
        self.memory
            .get_or_init(|| remember("memory stats", load_memory()))
            .as_ref()
    }

    /// Seconds since boot
    pub fn uptime(&self) -> Option<u64> {
        *self.uptime.get_or_init(|| {
            let seconds = System::uptime();
            // sysinfo reports 0 when it cannot read the uptime
            (seconds > 0).then_some(seconds)
        })
    }

    /// Name of the operating system from os-release
    pub fn os_name(&self) -> Result<String> {
        let data = read_os_release()?;
        os_name(&data).ok_or_else(|| anyhow!("os-release has no PRETTY_NAME, NAME or ID"))
    }

    /// Hardware model as `"<product name> <product version>"`
    pub fn host_model(&self) -> Result<String> {
        let name = read_first_line(PRODUCT_NAME_PATH)?;
        let version = read_first_line(PRODUCT_VERSION_PATH)?;
        Ok(format!("{name} {version}"))
    }
}

fn remember<T>(what: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("No {}: {:#}", what, e);
            None
        }
    }
}

fn load_identity() -> Result<Identity> {
    let hostname = System::host_name().context("host name unavailable")?;
    let kernel_release = System::kernel_version().context("kernel version unavailable")?;
    let os_type = read_first_line(OSTYPE_PATH).unwrap_or_else(|e| {
        log::debug!("{:#}, assuming Linux", e);
        "Linux".to_string()
    });

    Ok(Identity {
        hostname,
        os_type,
        kernel_release,
        arch: machine_arch(System::cpu_arch()),
    })
}

/// Machine hardware name as `uname` reports it, or the build target when the
/// kernel does not say
fn machine_arch(reported: Option<String>) -> String {
    match reported.filter(|arch| !arch.is_empty()) {
        Some(arch) => arch,
        None => {
            log::debug!("Machine architecture unavailable, using build target");
            std::env::consts::ARCH.to_string()
        }
    }
}

fn load_account() -> Result<Account> {
    let uid = std::fs::metadata("/proc/self")
        .context("failed to stat /proc/self")?
        .uid();
    let passwd = std::fs::read_to_string(PASSWD_PATH)
        .with_context(|| format!("failed to read {}", PASSWD_PATH))?;
    find_account(&passwd, uid).ok_or_else(|| anyhow!("uid {} not in {}", uid, PASSWD_PATH))
}

fn load_memory() -> Result<MemoryStats> {
    let mut system = System::new();
    system.refresh_memory();

    let stats = MemoryStats {
        total_memory: system.total_memory(),
        used_memory: system.used_memory(),
        total_swap: system.total_swap(),
        used_swap: system.used_swap(),
    };
    if stats.total_memory == 0 {
        return Err(anyhow!("memory information unavailable"));
    }
    Ok(stats)
}

/// First line of a small text file, without the newline
fn read_first_line(path: &str) -> Result<String> {
    let data = std::fs::read(path).with_context(|| format!("failed to read {}", path))?;
    let end = data.iter().position(|&b| b == b'\n').unwrap_or(data.len());
    Ok(String::from_utf8_lossy(&data[..end]).into_owned())
}
