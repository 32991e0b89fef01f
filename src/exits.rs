//! Exit handling: signal handlers and terminal restoration.

/// Restore canonical mode and echo using termios directly
fn restore_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit - runs on any exit, including signal exits
extern "C" fn cleanup_on_exit() {
    restore_termios();
    // Only print escape codes if stdout is a TTY (not when piping)
    unsafe {
        if libc::isatty(1) == 1 {
            let reset = b"\x1b[0m\x1b[?25h";
            libc::write(1, reset.as_ptr() as *const libc::c_void, reset.len());
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP - exit cleanly, atexit handles the terminal
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers, register atexit cleanup, and keep the process
/// out of core dumps. Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}
