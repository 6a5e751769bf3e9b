//! Application bootstrap and shutdown
//!
//! # Startup
//!
//! ```text
//! 1. Configuration Loading
//!    ↓
//! 2. DI Container Creation (`root` scope)
//!    ↓
//! 3. `http` scope opened
//!    ↓
//! 4. Controllers injected, routes registered
//!    ↓
//! 5. Interceptor chain attached (request scope innermost)
//!    ↓
//! 6. Server Start
//!    ↓
//! [Running...]
//!    ↓
//! 7. Shutdown Signal (SIGTERM/SIGINT)
//! ```

mod application;
mod shutdown;

pub use application::{AppState, Application, ApplicationBuilder};
pub use shutdown::shutdown_signal;
