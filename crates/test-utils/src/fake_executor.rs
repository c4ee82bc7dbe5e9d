use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use ddcci_bridge::errors::Result;
use ddcci_bridge::exec::{CommandOutput, ExecutionRequest, Executor};

/// A fake executor that:
/// - records every request it receives
/// - replies immediately with scripted outputs (default: exit 0, empty
///   streams), without spawning any process.
///
/// Clones share state, so a test can keep one handle for inspection and
/// hand another to the bridge.
#[derive(Debug, Clone, Default)]
pub struct FakeExecutor {
    outputs: Arc<Mutex<VecDeque<CommandOutput>>>,
    executed: Arc<Mutex<Vec<ExecutionRequest>>>,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the output returned by the next `exec` call.
    pub fn push_output(&self, output: CommandOutput) {
        self.outputs.lock().unwrap().push_back(output);
    }

    /// Every request received so far, in arrival order.
    pub fn executed(&self) -> Vec<ExecutionRequest> {
        self.executed.lock().unwrap().clone()
    }
}

impl Executor for FakeExecutor {
    fn exec(
        &self,
        request: ExecutionRequest,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutput>> + Send + '_>> {
        let outputs = Arc::clone(&self.outputs);
        let executed = Arc::clone(&self.executed);

        Box::pin(async move {
            executed.lock().unwrap().push(request);

            let output = outputs.lock().unwrap().pop_front().unwrap_or(CommandOutput {
                exit_code: 0,
                stdout: String::new(),
                stderr: String::new(),
            });
            Ok(output)
        })
    }
}
