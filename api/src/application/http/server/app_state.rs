use std::sync::Arc;

use spooltag_core::domain::spool::ports::SpoolAnalyzer;

use crate::args::Args;

pub struct AppState<A>
where
    A: SpoolAnalyzer,
{
    pub args: Arc<Args>,
    pub analyzer: Arc<A>,
}

impl<A> AppState<A>
where
    A: SpoolAnalyzer,
{
    pub fn new(args: Arc<Args>, analyzer: A) -> Self {
        Self {
            args,
            analyzer: Arc::new(analyzer),
        }
    }
}

impl<A> Clone for AppState<A>
where
    A: SpoolAnalyzer,
{
    fn clone(&self) -> Self {
        Self {
            args: Arc::clone(&self.args),
            analyzer: Arc::clone(&self.analyzer),
        }
    }
}
