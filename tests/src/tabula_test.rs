use crate::Setup;

/// Wrapper that owns the Tokio runtime for one test and makes sure the
/// test's tables are cleaned up before the process moves on.
///
/// Tests are plain `#[test]` functions so cleanup can block in `Drop`.
pub struct TabulaTest<S: Setup> {
    runtime: tokio::runtime::Runtime,
    setup: Option<S>,
}

impl<S: Setup> TabulaTest<S> {
    /// Create a new TabulaTest with a current-thread runtime.
    pub fn new(setup: S) -> Self {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to create Tokio runtime");

        Self {
            runtime,
            setup: Some(setup),
        }
    }

    /// Run a test function against a borrowed setup, then clean up.
    pub fn run_test<F>(&mut self, test_fn: F)
    where
        F: for<'a> FnOnce(&'a S) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + 'a>>,
    {
        let setup = self.setup.as_ref().expect("Setup already consumed");
        self.runtime.block_on(test_fn(setup));
    }
}

impl<S: Setup> Drop for TabulaTest<S> {
    fn drop(&mut self) {
        if let Some(setup) = self.setup.take() {
            self.runtime.block_on(async {
                let _ = setup.cleanup_my_tables().await;
            });
        }
    }
}
