use super::Controller;

/// Controller that accepts and discards every command
///
/// Useful when the device is absent; every execution succeeds.
#[derive(Debug, Clone)]
pub struct NullController<T> {
    executions: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T> NullController<T> {
    pub fn new() -> Self {
        Self {
            executions: 0,
            _marker: std::marker::PhantomData,
        }
    }

    /// Number of `execute_command` calls so far
    pub fn executions(&self) -> usize {
        self.executions
    }
}

impl<T> Default for NullController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Controller for NullController<T> {
    type Command = T;

    fn add_commands(&mut self, commands: Vec<T>) {
        tracing::debug!(count = commands.len() as u64, "Discarding commands");
    }

    fn execute_command(&mut self) -> bool {
        self.executions += 1;
        true
    }
}
