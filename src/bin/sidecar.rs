//! Signal-waiting sidecar.
//!
//! A standalone helper process with a deliberately tiny lifecycle: announce
//! startup, block until a termination signal arrives, announce the signal,
//! exit 0. There is no timeout and no other exit path - a signal is the
//! only expected terminal event.

use std::io;

#[tokio::main]
async fn main() -> io::Result<()> {
    println!("[sidecar] starting (pid={})", std::process::id());

    // Handlers must be installed before the waiting announcement: anyone
    // watching our output may send a signal as soon as they read it.
    let mut termination = Termination::install()?;

    println!("[sidecar] waiting for signals...");

    let signal = termination.recv().await?;

    println!("[sidecar] received signal: {signal}");
    println!("[sidecar] shutting down cleanly");
    Ok(())
}

/// A blocking wait on the fixed set of termination signals. One waiter, no
/// polling.
#[cfg(unix)]
struct Termination {
    interrupt: tokio::signal::unix::Signal,
    terminate: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl Termination {
    fn install() -> io::Result<Self> {
        use tokio::signal::unix::{SignalKind, signal};
        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
        })
    }

    async fn recv(&mut self) -> io::Result<&'static str> {
        let name = tokio::select! {
            _ = self.interrupt.recv() => "SIGINT",
            _ = self.terminate.recv() => "SIGTERM",
        };
        Ok(name)
    }
}

#[cfg(not(unix))]
struct Termination;

#[cfg(not(unix))]
impl Termination {
    fn install() -> io::Result<Self> {
        Ok(Self)
    }

    async fn recv(&mut self) -> io::Result<&'static str> {
        tokio::signal::ctrl_c().await?;
        Ok("ctrl-c")
    }
}
