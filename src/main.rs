// ============================================================================
// Edge Case Demo Binary
// Prints one line per stock case to stdout
// ============================================================================

use edge_case_demo::prelude::*;
use std::io;
use std::sync::Arc;

fn main() -> io::Result<()> {
    // Diagnostics go to stderr so stdout stays one line per case
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let demo = EdgeCaseDemo::standard(Arc::new(LoggingEventHandler));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo.run(&mut out)
}
