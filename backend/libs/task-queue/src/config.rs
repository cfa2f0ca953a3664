//! Task queue configuration

/// Queue and task execution settings
#[derive(Debug, Clone)]
pub struct QueueConfig {
    /// Maximum number of jobs buffered in the channel
    pub capacity: usize,
    /// Hard limit: a task running longer than this is abandoned
    pub task_time_limit_secs: u64,
    /// Soft limit: a warning is logged when a task runs longer than this
    pub task_soft_time_limit_secs: u64,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            capacity: 100,
            task_time_limit_secs: 300,
            task_soft_time_limit_secs: 240,
        }
    }
}

impl QueueConfig {
    /// Create a new QueueConfig from environment variables
    pub fn from_env() -> Self {
        Self {
            capacity: std::env::var("TASK_QUEUE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            task_time_limit_secs: std::env::var("TASK_TIME_LIMIT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            task_soft_time_limit_secs: std::env::var("TASK_SOFT_TIME_LIMIT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(240),
        }
    }
}
