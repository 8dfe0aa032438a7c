use crate::logger::interface::Logger;
use std::sync::Arc;

/// Forwards to `tracing`, carrying the namespace path as a field.
#[derive(Debug, Clone, Default)]
pub struct LoggerConsole {
    namespace: Option<String>,
}

impl LoggerConsole {
    pub fn new() -> Self {
        Self { namespace: None }
    }

    fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or("app")
    }
}

fn join_namespace(current: Option<&str>, namespace: &str) -> String {
    match current {
        Some(current) => format!("{}:{}", current, namespace),
        None => namespace.to_string(),
    }
}

impl Logger for LoggerConsole {
    fn info(&self, message: &str) {
        tracing::info!(namespace = self.namespace(), "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(namespace = self.namespace(), "{}", message);
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        Arc::new(LoggerConsole {
            namespace: Some(join_namespace(self.namespace.as_deref(), namespace)),
        })
    }
}
