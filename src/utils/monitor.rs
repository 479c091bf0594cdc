#[cfg(feature = "cli")]
use std::sync::{Arc, Mutex};
#[cfg(feature = "cli")]
use std::time::{Duration, Instant};
#[cfg(feature = "cli")]
use sysinfo::{Pid, RefreshKind, System};

#[cfg(feature = "cli")]
#[derive(Debug, Clone)]
pub struct SystemStats {
    pub cpu_usage: f32,
    pub memory_usage_mb: u64,
    pub peak_memory_mb: u64,
    pub elapsed_time: Duration,
}

#[cfg(feature = "cli")]
pub struct SystemMonitor {
    system: Arc<Mutex<System>>,
    pid: Pid,
    start_time: Instant,
    peak_memory: Arc<Mutex<u64>>,
}

#[cfg(feature = "cli")]
impl SystemMonitor {
    pub fn new() -> Self {
        let mut system = System::new_with_specifics(RefreshKind::everything());
        let pid = sysinfo::get_current_pid().expect("Failed to get current PID");

        // 初始刷新
        system.refresh_all();

        Self {
            system: Arc::new(Mutex::new(system)),
            pid,
            start_time: Instant::now(),
            peak_memory: Arc::new(Mutex::new(0)),
        }
    }

    /// 取樣一次目前的資源使用量並更新峰值
    pub fn sample(&self) {
        let mut system = self.system.lock().expect("monitor lock poisoned");
        system.refresh_all();

        if let Some(process) = system.process(self.pid) {
            let memory_mb = process.memory() / 1024 / 1024;
            let mut peak = self.peak_memory.lock().expect("monitor lock poisoned");
            if memory_mb > *peak {
                *peak = memory_mb;
            }
        }
    }

    pub fn stats(&self) -> SystemStats {
        let mut system = self.system.lock().expect("monitor lock poisoned");
        system.refresh_all();

        let (cpu_usage, memory_usage_mb) = system
            .process(self.pid)
            .map(|p| (p.cpu_usage(), p.memory() / 1024 / 1024))
            .unwrap_or((0.0, 0));

        let peak_memory_mb = {
            let peak = self.peak_memory.lock().expect("monitor lock poisoned");
            (*peak).max(memory_usage_mb)
        };

        SystemStats {
            cpu_usage,
            memory_usage_mb,
            peak_memory_mb,
            elapsed_time: self.start_time.elapsed(),
        }
    }

    pub fn log_summary(&self) {
        let stats = self.stats();
        tracing::info!(
            "📊 Resource usage: cpu {:.1}%, memory {} MB (peak {} MB), elapsed {:.2?}",
            stats.cpu_usage,
            stats.memory_usage_mb,
            stats.peak_memory_mb,
            stats.elapsed_time
        );
    }
}

#[cfg(feature = "cli")]
impl Default for SystemMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_monitor_tracks_peak_memory() {
        let monitor = SystemMonitor::new();
        monitor.sample();
        let stats = monitor.stats();
        assert!(stats.peak_memory_mb >= stats.memory_usage_mb || stats.memory_usage_mb == 0);
    }
}
