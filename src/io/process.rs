//! Operating system process table access, backed by `sysinfo`.
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

/// A running process matched by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunningProcess {
    pub pid: u32,
    pub name: String,
}

/// Lookup and forced termination of processes.
pub trait ProcessTable {
    /// Processes whose executable name equals `name`, ignoring ASCII case.
    fn find(&mut self, name: &str) -> Vec<RunningProcess>;

    /// Forcefully terminate `pid`. Returns false if the kill could not be delivered.
    fn kill(&mut self, pid: u32) -> bool;
}

/// Process table of the local machine.
pub struct SystemProcessTable {
    system: System,
}

impl SystemProcessTable {
    pub fn new() -> Self {
        Self {
            system: System::new(),
        }
    }

    fn refresh(&mut self) {
        self.system.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing(),
        );
    }
}

impl Default for SystemProcessTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessTable for SystemProcessTable {
    fn find(&mut self, name: &str) -> Vec<RunningProcess> {
        self.refresh();
        let mut found: Vec<RunningProcess> = self
            .system
            .processes()
            .iter()
            // Linux lists each thread as a task carrying the parent's name.
            .filter(|(_, process)| process.thread_kind().is_none())
            .filter_map(|(pid, process)| {
                let process_name = process.name().to_string_lossy();
                names_match(&process_name, name).then(|| RunningProcess {
                    pid: pid.as_u32(),
                    name: process_name.into_owned(),
                })
            })
            .collect();
        found.sort_by_key(|p| p.pid);
        found
    }

    fn kill(&mut self, pid: u32) -> bool {
        match self.system.process(Pid::from_u32(pid)) {
            Some(process) => process.kill(),
            None => false,
        }
    }
}

/// Exact, case-insensitive comparison of executable names.
pub fn names_match(candidate: &str, wanted: &str) -> bool {
    candidate.eq_ignore_ascii_case(wanted)
}
