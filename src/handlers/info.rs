//! Read-only informational queries
//!
//! Nothing here changes system state; a failed resource sample is
//! reported, never fatal.

use crate::core::error::HandlerError;
use crate::handlers::HandlerResult;
use chrono::Local;
use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, RefreshKind, System};

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Answer one canonical info query (the classifier normalizes the names).
pub fn info_query(kind: &str) -> HandlerResult {
    match kind {
        "time" => Ok(format!("It is {}", Local::now().format("%-I:%M %p"))),
        "date" => Ok(format!("Today is {}", Local::now().format("%A, %B %-d, %Y"))),
        "cpu" => cpu_usage(),
        "memory" => memory_usage(),
        "disk" => disk_usage(),
        "system" => system_info(),
        "help" => Ok(help_text()),
        "version" => Ok(format!("aide {}", env!("CARGO_PKG_VERSION"))),
        other => Err(HandlerError::InvalidArgument(format!(
            "unsupported query '{other}'"
        ))),
    }
}

fn cpu_usage() -> HandlerResult {
    let mut sys = System::new_with_specifics(
        RefreshKind::new().with_cpu(CpuRefreshKind::everything()),
    );
    // Two samples some interval apart, or the reading is meaningless
    std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
    sys.refresh_cpu_all();

    Ok(format!(
        "CPU usage: {:.0}% across {} cores",
        sys.global_cpu_usage(),
        sys.cpus().len()
    ))
}

fn memory_usage() -> HandlerResult {
    let sys = System::new_with_specifics(
        RefreshKind::new().with_memory(MemoryRefreshKind::everything()),
    );
    let total = sys.total_memory();
    if total == 0 {
        return Err(HandlerError::ExternalFailure(
            "memory statistics are unavailable".to_string(),
        ));
    }
    let used = sys.used_memory();

    Ok(format!(
        "Memory usage: {:.1} GiB / {:.1} GiB ({:.0}%)",
        used as f64 / GIB,
        total as f64 / GIB,
        used as f64 / total as f64 * 100.0
    ))
}

fn disk_usage() -> HandlerResult {
    let disks = Disks::new_with_refreshed_list();
    let (used, total) = disks.iter().fold((0u64, 0u64), |(used, total), disk| {
        (
            used + (disk.total_space() - disk.available_space()),
            total + disk.total_space(),
        )
    });

    if total == 0 {
        return Err(HandlerError::ExternalFailure(
            "no disks are visible".to_string(),
        ));
    }

    Ok(format!(
        "Disk usage: {:.1} GiB / {:.1} GiB ({:.0}%)",
        used as f64 / GIB,
        total as f64 / GIB,
        used as f64 / total as f64 * 100.0
    ))
}

fn system_info() -> HandlerResult {
    let sys = System::new_with_specifics(
        RefreshKind::new()
            .with_cpu(CpuRefreshKind::everything())
            .with_memory(MemoryRefreshKind::everything()),
    );

    let os = System::name().unwrap_or_else(|| "unknown".to_string());
    let version = System::os_version().unwrap_or_else(|| "unknown".to_string());
    let host = System::host_name().unwrap_or_else(|| "unknown".to_string());

    Ok(format!(
        "System: {} {} on {}\nCPU cores: {}\nMemory: {:.1} GiB",
        os,
        version,
        host,
        sys.cpus().len(),
        sys.total_memory() as f64 / GIB
    ))
}

fn help_text() -> String {
    [
        "Available commands:",
        "  open <app>             - launch an application (firefox, terminal, ...)",
        "  close <app>            - close a running application",
        "  shutdown / restart     - power actions (asks for confirmation)",
        "  lock                   - lock the screen",
        "  volume up/down/mute    - adjust the master volume",
        "  open file <path>       - open a file with its default application",
        "  create file <name>     - create a new empty file",
        "  delete file <path>     - delete a file (asks for confirmation)",
        "  search files <pattern> - find files by name",
        "  search <query>         - search the web",
        "  open website <url>     - open a website",
        "  time / date            - current time and date",
        "  cpu/memory/disk usage  - resource statistics",
        "  system info            - OS and hardware summary",
        "  version                - assistant version",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_and_date_answer() {
        assert!(info_query("time").unwrap().starts_with("It is "));
        assert!(info_query("date").unwrap().starts_with("Today is "));
    }

    #[test]
    fn test_help_lists_the_dangerous_commands() {
        let help = info_query("help").unwrap();
        assert!(help.contains("delete file"));
        assert!(help.contains("shutdown"));
        assert!(help.contains("confirmation"));
    }

    #[test]
    fn test_version_carries_crate_version() {
        let version = info_query("version").unwrap();
        assert!(version.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_memory_query_reports_a_percentage() {
        let report = info_query("memory").unwrap();
        assert!(report.contains("GiB"));
        assert!(report.contains('%'));
    }

    #[test]
    fn test_unsupported_kind_is_invalid_argument() {
        assert!(matches!(
            info_query("weather"),
            Err(HandlerError::InvalidArgument(_))
        ));
    }
}
