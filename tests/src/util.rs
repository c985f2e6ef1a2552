use std::fs;
use std::path::PathBuf;

use netlog_common::source::{self, LogSource};
use tempfile::TempDir;

/// A scratch directory of log files plus the list that names them.
pub struct LogDir {
    dir: TempDir,
    listed: Vec<PathBuf>,
}

impl LogDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
            listed: Vec::new(),
        }
    }

    /// Writes a log named after its destination and lists it.
    pub fn log(mut self, dest: &str, content: &str) -> Self {
        let path: PathBuf = self.dir.path().join(dest);
        fs::write(&path, content).unwrap();
        self.listed.push(path);
        self
    }

    /// Lists a path that does not exist on disk.
    pub fn missing(mut self, dest: &str) -> Self {
        self.listed.push(self.dir.path().join("gone").join(dest));
        self
    }

    /// Writes the log list and reads it back.
    pub fn sources(&self) -> Vec<LogSource> {
        let list: PathBuf = self.dir.path().join("logs.txt");
        let content: String = self
            .listed
            .iter()
            .map(|p| format!("{}\n", p.display()))
            .collect();
        fs::write(&list, content).unwrap();
        source::read_log_list(&list).unwrap()
    }
}

pub fn ping_log(dest: &str, lines: &[&str]) -> String {
    let mut log: String = format!("PING {dest} ({dest}) 56(84) bytes of data.\n");
    for line in lines {
        log.push_str(line);
        log.push('\n');
    }
    log.push_str(&format!("\n--- {dest} ping statistics ---\n"));
    log.push_str("5 packets transmitted, 4 received, 20% packet loss, time 4005ms\n");
    log
}

pub fn reply(dest: &str, seq: u64, rtt: f64) -> String {
    format!("64 bytes from {dest}: icmp_seq={seq} ttl=57 time={rtt} ms")
}
